use super::pmv::{compute_with, ComfortError, ComfortInput, ComfortResult, SolverOptions};

/// 입력 항목별 허용 범위(닫힌 구간).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
}

impl InputRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// NaN 은 포함되지 않는다.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// PMV 입력 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    AirTemperature,
    RadiantTemperature,
    RelativeHumidity,
    AirVelocity,
    MetabolicRate,
    ClothingInsulation,
}

impl InputField {
    /// 폼 표시 순서.
    pub const ALL: [InputField; 6] = [
        InputField::AirTemperature,
        InputField::RadiantTemperature,
        InputField::RelativeHumidity,
        InputField::AirVelocity,
        InputField::MetabolicRate,
        InputField::ClothingInsulation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            InputField::AirTemperature => "air temperature",
            InputField::RadiantTemperature => "mean radiant temperature",
            InputField::RelativeHumidity => "relative humidity",
            InputField::AirVelocity => "air velocity",
            InputField::MetabolicRate => "metabolic rate",
            InputField::ClothingInsulation => "clothing insulation",
        }
    }

    /// 내부 기준 단위.
    pub fn unit(&self) -> &'static str {
        match self {
            InputField::AirTemperature | InputField::RadiantTemperature => "°C",
            InputField::RelativeHumidity => "%",
            InputField::AirVelocity => "m/s",
            InputField::MetabolicRate => "met",
            InputField::ClothingInsulation => "clo",
        }
    }

    pub fn range(&self) -> InputRange {
        match self {
            InputField::AirTemperature | InputField::RadiantTemperature => {
                InputRange::new(-100.0, 100.0)
            }
            InputField::RelativeHumidity => InputRange::new(0.0, 100.0),
            InputField::AirVelocity => InputRange::new(0.0, 100.0),
            InputField::MetabolicRate => InputRange::new(0.0, 100.0),
            InputField::ClothingInsulation => InputRange::new(0.0, 99.99),
        }
    }

    pub fn value_of(&self, input: &ComfortInput) -> f64 {
        match self {
            InputField::AirTemperature => input.air_temp_c,
            InputField::RadiantTemperature => input.radiant_temp_c,
            InputField::RelativeHumidity => input.relative_humidity_pct,
            InputField::AirVelocity => input.air_velocity_m_per_s,
            InputField::MetabolicRate => input.met,
            InputField::ClothingInsulation => input.clo,
        }
    }

    /// 단일 값을 검사한다.
    pub fn check(&self, value: f64) -> Result<(), ComfortError> {
        let range = self.range();
        if range.contains(value) {
            Ok(())
        } else {
            Err(ComfortError::InvalidInput {
                field: self.name(),
                value,
                min: range.min,
                max: range.max,
            })
        }
    }
}

/// 모든 입력을 폼 순서대로 검사하고 첫 번째 위반을 반환한다.
pub fn validate(input: &ComfortInput) -> Result<(), ComfortError> {
    for field in InputField::ALL {
        field.check(field.value_of(input))?;
    }
    Ok(())
}

/// 범위 검사 후 계산한다. 범위를 벗어나면 계산하지 않고 바로 실패한다.
pub fn compute_strict(
    input: &ComfortInput,
    options: &SolverOptions,
) -> Result<ComfortResult, ComfortError> {
    validate(input)?;
    compute_with(input, options)
}
