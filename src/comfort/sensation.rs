/// ASHRAE 7단계 온열감 척도.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermalSensation {
    Cold,
    Cool,
    SlightlyCool,
    Neutral,
    SlightlyWarm,
    Warm,
    Hot,
}

impl ThermalSensation {
    /// PMV를 가장 가까운 정수 투표값으로 반올림해 척도에 대응시킨다. ±3 밖은 양 끝으로 묶는다.
    pub fn from_pmv(pmv: f64) -> Self {
        let vote = pmv.round().clamp(-3.0, 3.0) as i32;
        match vote {
            -3 => ThermalSensation::Cold,
            -2 => ThermalSensation::Cool,
            -1 => ThermalSensation::SlightlyCool,
            1 => ThermalSensation::SlightlyWarm,
            2 => ThermalSensation::Warm,
            3 => ThermalSensation::Hot,
            _ => ThermalSensation::Neutral,
        }
    }

    pub fn vote(&self) -> i32 {
        match self {
            ThermalSensation::Cold => -3,
            ThermalSensation::Cool => -2,
            ThermalSensation::SlightlyCool => -1,
            ThermalSensation::Neutral => 0,
            ThermalSensation::SlightlyWarm => 1,
            ThermalSensation::Warm => 2,
            ThermalSensation::Hot => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThermalSensation::Cold => "cold",
            ThermalSensation::Cool => "cool",
            ThermalSensation::SlightlyCool => "slightly cool",
            ThermalSensation::Neutral => "neutral",
            ThermalSensation::SlightlyWarm => "slightly warm",
            ThermalSensation::Warm => "warm",
            ThermalSensation::Hot => "hot",
        }
    }
}

/// ISO 7730 부록 A 의 실내 열환경 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComfortCategory {
    /// |PMV| < 0.2, PPD < 6 %
    A,
    /// |PMV| < 0.5, PPD < 10 %
    B,
    /// |PMV| < 0.7, PPD < 15 %
    C,
    OutOfRange,
}

impl ComfortCategory {
    /// PPD는 PMV의 단조 함수라서 PMV 구간만으로 판정한다.
    pub fn from_pmv(pmv: f64) -> Self {
        let abs = pmv.abs();
        if abs < 0.2 {
            ComfortCategory::A
        } else if abs < 0.5 {
            ComfortCategory::B
        } else if abs < 0.7 {
            ComfortCategory::C
        } else {
            ComfortCategory::OutOfRange
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComfortCategory::A => "A",
            ComfortCategory::B => "B",
            ComfortCategory::C => "C",
            ComfortCategory::OutOfRange => "-",
        }
    }
}
