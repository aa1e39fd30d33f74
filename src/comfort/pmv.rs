//! Fanger PMV/PPD 계산 (ISO 7730 / ASHRAE 55 고전식).
//!
//! 입력: 공기온도/평균복사온도(°C), 상대습도(%), 기류속도(m/s), 대사량(met), 착의량(clo)
//! 출력: PMV(예상 평균 온열감), PPD(예상 불만족률, %)

use tracing::{debug, warn};

/// 의복 표면온도 반복 계산의 수렴 허용오차 (TCL/100 기준).
pub const SOLVER_TOLERANCE: f64 = 0.00015;

/// 반복 횟수 상한 기본값.
pub const DEFAULT_MAX_ITERATIONS: usize = 200;

/// 1 met 에 해당하는 대사량 [W/m²].
pub const MET_TO_W_PER_M2: f64 = 58.15;

/// 1 clo 에 해당하는 열저항 [m²·K/W] (원 식의 상수 그대로).
pub const CLO_TO_M2K_PER_W: f64 = 0.156;

/// PMV 계산 오류를 표현한다.
#[derive(Debug, Clone, PartialEq)]
pub enum ComfortError {
    /// 허용 범위를 벗어난 입력값 (엄격 검증 시에만 발생)
    InvalidInput {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// 의복 표면온도 반복 계산이 상한 안에 수렴하지 않음
    NonConvergence { iterations: usize, residual: f64 },
    /// 중간값 또는 결과가 유한하지 않음 (NaN/Inf)
    NumericDegeneracy(&'static str),
}

impl std::fmt::Display for ComfortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComfortError::InvalidInput {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "입력 오류: {field} 값 {value} 이(가) 허용 범위 [{min}, {max}] 밖입니다."
            ),
            ComfortError::NonConvergence {
                iterations,
                residual,
            } => write!(
                f,
                "수렴 실패: {iterations}회 반복 후에도 잔차 {residual:.6} 이(가) 허용오차보다 큽니다."
            ),
            ComfortError::NumericDegeneracy(what) => {
                write!(f, "수치 계산 불가: {what} 값이 유한하지 않습니다.")
            }
        }
    }
}

impl std::error::Error for ComfortError {}

/// PMV 계산 입력값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComfortInput {
    /// 착의량 [clo]
    pub clo: f64,
    /// 공기 건구온도 [°C]
    pub air_temp_c: f64,
    /// 평균 복사온도 [°C]
    pub radiant_temp_c: f64,
    /// 대사량 [met]
    pub met: f64,
    /// 기류속도 [m/s]
    pub air_velocity_m_per_s: f64,
    /// 상대습도 [%]
    pub relative_humidity_pct: f64,
}

impl ComfortInput {
    /// 원 함수와 같은 인자 순서(clo, ta, tr, met, vel, rh)로 입력을 만든다.
    pub fn new(clo: f64, ta: f64, tr: f64, met: f64, vel: f64, rh: f64) -> Self {
        Self {
            clo,
            air_temp_c: ta,
            radiant_temp_c: tr,
            met,
            air_velocity_m_per_s: vel,
            relative_humidity_pct: rh,
        }
    }
}

impl Default for ComfortInput {
    /// 일반 사무실 조건.
    fn default() -> Self {
        Self::new(0.5, 22.0, 22.0, 1.2, 0.1, 60.0)
    }
}

/// 반복 계산 옵션.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    pub max_iterations: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// 인체 열손실 항목 [W/m²].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatLosses {
    /// 피부 확산 증발 손실
    pub skin_diffusion: f64,
    /// 발한 증발 손실 (1 met 초과 시에만)
    pub sweating: f64,
    /// 호흡 잠열 손실
    pub latent_respiration: f64,
    /// 호흡 현열 손실
    pub dry_respiration: f64,
    /// 복사 손실
    pub radiation: f64,
    /// 대류 손실
    pub convection: f64,
}

impl HeatLosses {
    pub fn total(&self) -> f64 {
        self.skin_diffusion
            + self.sweating
            + self.latent_respiration
            + self.dry_respiration
            + self.radiation
            + self.convection
    }
}

/// PMV 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComfortResult {
    /// 예상 평균 온열감
    pub pmv: f64,
    /// 예상 불만족률 [%]
    pub ppd: f64,
    /// 의복 표면온도 [°C]
    pub clothing_surface_temp_c: f64,
    /// 수렴 시점의 대류 열전달계수 [W/m²K]
    pub convective_coeff: f64,
    /// 의복 면적계수 fcl
    pub clothing_area_factor: f64,
    /// 반복 횟수
    pub iterations: usize,
    /// 마지막 반복의 |XN - XF|
    pub residual: f64,
    pub heat_losses: HeatLosses,
}

/// 소수점 자릿수는 형식 정밀도(`{:.3}`)를 따르며, 없으면 두 자리다.
impl std::fmt::Display for ComfortResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prec = f.precision().unwrap_or(2);
        write!(
            f,
            "predicted mean vote: {:.*}, predicted percentage dissatisfied: {:.*}",
            prec, self.pmv, prec, self.ppd
        )
    }
}

/// 원 함수 형태 그대로 (PMV, PPD)만 반환한다.
pub fn pmv_ppd(
    clo: f64,
    ta: f64,
    tr: f64,
    met: f64,
    vel: f64,
    rh: f64,
) -> Result<(f64, f64), ComfortError> {
    let res = compute(&ComfortInput::new(clo, ta, tr, met, vel, rh))?;
    Ok((res.pmv, res.ppd))
}

/// 기본 옵션(반복 상한 200회)으로 PMV/PPD를 계산한다.
pub fn compute(input: &ComfortInput) -> Result<ComfortResult, ComfortError> {
    compute_with(input, &SolverOptions::default())
}

/// PMV/PPD를 계산한다. 입력 범위는 검사하지 않는다.
///
/// 의복 표면온도는 감쇠 중점 갱신(XF = (XF + XN)/2)을 쓰는 고정점 반복으로 구한다.
/// 갱신 순서(XF 감쇠 → HCF/HCN → HC → XN)는 원 식과 같아야 한다.
pub fn compute_with(
    input: &ComfortInput,
    options: &SolverOptions,
) -> Result<ComfortResult, ComfortError> {
    let ta = input.air_temp_c;
    let tr = input.radiant_temp_c;
    let vel = input.air_velocity_m_per_s;
    let rh = input.relative_humidity_pct;

    // 수증기 분압 (ta = -235 에서 지수항이 발산)
    let exponent = 16.6536 - 4030.183 / (ta + 235.0);
    let pa = rh * 10.0 * exponent.exp();
    ensure_finite(exponent, "saturated vapor pressure exponent")?;
    ensure_finite(pa, "water vapour partial pressure")?;

    let icl = CLO_TO_M2K_PER_W * input.clo;
    let m = input.met * MET_TO_W_PER_M2;

    let fcl = if icl < 0.078 {
        1.0 + 1.29 * icl
    } else {
        1.05 + 0.645 * icl
    };

    let mut hcf = 12.1 * vel.sqrt();
    ensure_finite(hcf, "forced convection coefficient")?;

    let taa = ta + 273.0;
    let tra = tr + 273.0;
    let tcla = taa + (35.5 - ta) / (3.5 * (6.45 * icl + 0.1));
    ensure_finite(tcla, "initial clothing surface temperature")?;

    let p1 = icl * fcl;
    let p2 = p1 * 3.96;
    let p3 = p1 * 100.0;
    let p4 = p1 * taa;
    let p5 = 308.7 - 0.028 * m + p2 * (tra / 100.0).powi(4);

    let mut xn = tcla / 100.0;
    let mut xf = tcla / 50.0;
    let mut hc = 0.0;
    let mut iterations = 0;
    while (xn - xf).abs() > SOLVER_TOLERANCE {
        if iterations >= options.max_iterations {
            let residual = (xn - xf).abs();
            warn!(iterations, residual, "clothing surface temperature did not converge");
            return Err(ComfortError::NonConvergence {
                iterations,
                residual,
            });
        }
        xf = (xf + xn) / 2.0;
        hcf = 12.1 * vel.sqrt();
        let hcn = 2.38 * (100.0 * xf - taa).abs().powf(0.25);
        hc = if hcf > hcn { hcf } else { hcn };
        xn = (p5 + p4 * hc - p2 * xf.powi(4)) / (100.0 + p3 * hc);
        iterations += 1;
    }
    // NaN 이 섞이면 루프 조건이 거짓이 되어 바로 빠져나온다
    ensure_finite(xn, "clothing surface temperature")?;
    let residual = (xn - xf).abs();
    debug!(iterations, residual, "clothing surface temperature converged");

    let tcl = 100.0 * xn - 273.0;

    let sweating = if m > MET_TO_W_PER_M2 {
        0.42 * (m - MET_TO_W_PER_M2)
    } else {
        0.0
    };
    let heat_losses = HeatLosses {
        skin_diffusion: 0.00305 * (5733.0 - 6.99 * m - pa),
        sweating,
        latent_respiration: 0.000017 * m * (5867.0 - pa),
        dry_respiration: 0.0014 * m * (34.0 - ta),
        radiation: 3.96 * fcl * (xn.powi(4) - (tra / 100.0).powi(4)),
        convection: fcl * hc * (tcl - ta),
    };

    let ts = 0.303 * (-0.036 * m).exp() + 0.028;
    let pmv = ts
        * (m - heat_losses.skin_diffusion
            - heat_losses.sweating
            - heat_losses.latent_respiration
            - heat_losses.dry_respiration
            - heat_losses.radiation
            - heat_losses.convection);
    ensure_finite(pmv, "predicted mean vote")?;
    let ppd = ppd_from_pmv(pmv);

    Ok(ComfortResult {
        pmv,
        ppd,
        clothing_surface_temp_c: tcl,
        convective_coeff: hc,
        clothing_area_factor: fcl,
        iterations,
        residual,
        heat_losses,
    })
}

/// PMV로부터 PPD를 구한다. 유한한 PMV에 대해 항상 [5, 100] 범위다.
pub fn ppd_from_pmv(pmv: f64) -> f64 {
    100.0 - 95.0 * (-0.03353 * pmv.powi(4) - 0.2179 * pmv.powi(2)).exp()
}

fn ensure_finite(value: f64, what: &'static str) -> Result<(), ComfortError> {
    if value.is_finite() {
        Ok(())
    } else {
        warn!(quantity = what, value, "non-finite intermediate value");
        Err(ComfortError::NumericDegeneracy(what))
    }
}
