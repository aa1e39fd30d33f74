use serde::{Deserialize, Serialize};

/// 기류속도 입력 단위. 계산 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    /// ASHRAE 자료에서 흔히 쓰는 ft/min
    FootPerMinute,
    FootPerSecond,
    KilometerPerHour,
}

impl VelocityUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            VelocityUnit::MeterPerSecond => "m/s",
            VelocityUnit::FootPerMinute => "fpm",
            VelocityUnit::FootPerSecond => "ft/s",
            VelocityUnit::KilometerPerHour => "km/h",
        }
    }
}

pub fn to_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::FootPerMinute => value * 0.00508,
        VelocityUnit::FootPerSecond => value * 0.3048,
        VelocityUnit::KilometerPerHour => value / 3.6,
    }
}

pub fn from_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::FootPerMinute => value / 0.00508,
        VelocityUnit::FootPerSecond => value / 0.3048,
        VelocityUnit::KilometerPerHour => value * 3.6,
    }
}
