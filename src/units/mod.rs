//! 입력 단위 정의와 환산. 계산 코어는 항상 °C, m/s 기준 값을 받는다.

pub mod temperature;
pub mod velocity;

pub use temperature::{from_celsius, to_celsius, TemperatureUnit};
pub use velocity::{from_mps, to_mps, VelocityUnit};

/// 단위 문자열 해석 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 온도 단위 문자열(`C`, `F`, `K` 등)을 해석한다.
pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

/// 속도 단위 문자열(`m/s`, `fpm`, `ft/s`, `km/h` 등)을 해석한다.
pub fn parse_velocity_unit(s: &str) -> Result<VelocityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m/s" | "mps" => Ok(VelocityUnit::MeterPerSecond),
        "fpm" | "ft/min" => Ok(VelocityUnit::FootPerMinute),
        "ft/s" | "fps" => Ok(VelocityUnit::FootPerSecond),
        "km/h" | "kph" => Ok(VelocityUnit::KilometerPerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
