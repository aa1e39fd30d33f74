use std::io::{self, Write};

use crate::app::{self, AppError};
use crate::comfort::{
    ComfortCategory, ComfortError, ComfortInput, ComfortResult, InputField, ThermalSensation,
};
use crate::config::Config;
use crate::units::{TemperatureUnit, VelocityUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Thermal Comfort Toolbox ===");
    println!("1) PMV/PPD 계산");
    println!("2) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 여섯 개 입력값을 받아 PMV/PPD를 계산해 출력한다.
///
/// 계산 오류는 메시지로 보여주고 메뉴로 돌아간다.
pub fn handle_calculation(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- PMV/PPD 계산 --");
    let t_unit = cfg.display_units.temperature.symbol();
    let v_unit = cfg.display_units.velocity.symbol();
    let ta = read_f64(&format!("공기 온도 [{t_unit}]: "))?;
    let tr = read_f64(&format!("평균 복사 온도 [{t_unit}]: "))?;
    let rh = read_f64("상대 습도 [%]: ")?;
    let vel = read_f64(&format!("기류 속도 [{v_unit}]: "))?;
    let met = read_f64("대사량 [met]: ")?;
    let clo = read_f64("착의량 [clo]: ")?;
    let form = ComfortInput::new(clo, ta, tr, met, vel, rh);
    match app::evaluate(cfg, form) {
        Ok(result) => print_result(&result, cfg.decimals),
        Err(err) => print_comfort_error(&err),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 값이 바뀌었으면 true를 돌려준다.
pub fn handle_settings(cfg: &mut Config) -> Result<bool, AppError> {
    println!("\n-- 설정 --");
    println!(
        "현재: 온도 {}, 속도 {}, 범위 검사 {}, 소수점 {}자리, 반복 상한 {}회",
        cfg.display_units.temperature.symbol(),
        cfg.display_units.velocity.symbol(),
        if cfg.strict_validation { "켬" } else { "끔" },
        cfg.decimals,
        cfg.solver.max_iterations
    );
    println!("1) 온도 단위  2) 속도 단위  3) 범위 검사 전환  4) 소수점 자릿수  5) 반복 상한");
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    match sel.trim() {
        "" => return Ok(false),
        "1" => cfg.display_units.temperature = read_temperature_unit()?,
        "2" => cfg.display_units.velocity = read_velocity_unit()?,
        "3" => cfg.strict_validation = !cfg.strict_validation,
        "4" => cfg.decimals = read_usize("소수점 자릿수(0~6): ")?.min(6),
        "5" => cfg.solver.max_iterations = read_usize("반복 상한(1 이상): ")?.max(1),
        _ => {
            println!("잘못된 입력이므로 변경하지 않습니다.");
            return Ok(false);
        }
    }
    Ok(true)
}

/// 계산 결과를 출력한다.
pub fn print_result(result: &ComfortResult, decimals: usize) {
    let sensation = ThermalSensation::from_pmv(result.pmv);
    let category = ComfortCategory::from_pmv(result.pmv);
    println!(
        "예상 평균 온열감(PMV): {:.*} ({})",
        decimals,
        result.pmv,
        sensation.label()
    );
    println!("예상 불만족률(PPD): {:.*} %", decimals, result.ppd);
    println!("ISO 7730 등급: {}", category.label());
    println!(
        "의복 표면온도: {:.2} °C, 대류 열전달계수: {:.3} W/m²K, fcl={:.4}, 반복 {}회",
        result.clothing_surface_temp_c,
        result.convective_coeff,
        result.clothing_area_factor,
        result.iterations
    );
    let hl = &result.heat_losses;
    println!(
        "열손실 [W/m²]: 피부확산 {:.2}, 발한 {:.2}, 호흡잠열 {:.2}, 호흡현열 {:.2}, 복사 {:.2}, 대류 {:.2}",
        hl.skin_diffusion,
        hl.sweating,
        hl.latent_respiration,
        hl.dry_respiration,
        hl.radiation,
        hl.convection
    );
}

/// 오류 종류별 안내 문구를 덧붙여 출력한다.
pub fn print_comfort_error(err: &ComfortError) {
    println!("{err}");
    let hint = match err {
        ComfortError::InvalidInput { .. } => {
            let ranges: Vec<String> = InputField::ALL
                .iter()
                .map(|f| {
                    let r = f.range();
                    format!("{} [{}, {}] {}", f.name(), r.min, r.max, f.unit())
                })
                .collect();
            format!("허용 범위: {}", ranges.join("; "))
        }
        ComfortError::NonConvergence { .. } => {
            "입력 조건에서 의복 표면온도가 진동합니다. 착의량이나 온도 조건을 확인하세요.".into()
        }
        ComfortError::NumericDegeneracy(_) => {
            "물리적으로 불가능한 입력입니다(예: 공기 온도 -235 °C 이하).".into()
        }
    };
    println!("{hint}");
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_usize(prompt: &str) -> Result<usize, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<usize>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("0 이상의 정수를 입력하세요."),
        }
    }
}

fn read_temperature_unit() -> Result<TemperatureUnit, AppError> {
    println!("온도 단위: 1=°C 2=°F 3=K");
    let sel = read_line("선택: ")?;
    let unit = match sel.trim() {
        "2" => TemperatureUnit::Fahrenheit,
        "3" => TemperatureUnit::Kelvin,
        _ => TemperatureUnit::Celsius,
    };
    Ok(unit)
}

fn read_velocity_unit() -> Result<VelocityUnit, AppError> {
    println!("속도 단위: 1=m/s 2=fpm 3=ft/s 4=km/h");
    let sel = read_line("선택: ")?;
    let unit = match sel.trim() {
        "2" => VelocityUnit::FootPerMinute,
        "3" => VelocityUnit::FootPerSecond,
        "4" => VelocityUnit::KilometerPerHour,
        _ => VelocityUnit::MeterPerSecond,
    };
    Ok(unit)
}
