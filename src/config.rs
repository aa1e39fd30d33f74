use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::comfort::{ComfortInput, SolverOptions, DEFAULT_MAX_ITERATIONS};
use crate::units::*;

/// 기본 설정 파일 이름 (작업 디렉터리 기준).
pub const CONFIG_FILE: &str = "config.toml";

/// 입력 화면에서 사용할 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayUnits {
    pub temperature: TemperatureUnit,
    pub velocity: VelocityUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            velocity: VelocityUnit::MeterPerSecond,
        }
    }
}

impl DisplayUnits {
    /// 화면 단위로 입력된 값을 계산 기준 단위(°C, m/s)로 바꾼다.
    pub fn to_base(&self, input: ComfortInput) -> ComfortInput {
        ComfortInput {
            air_temp_c: to_celsius(input.air_temp_c, self.temperature),
            radiant_temp_c: to_celsius(input.radiant_temp_c, self.temperature),
            air_velocity_m_per_s: to_mps(input.air_velocity_m_per_s, self.velocity),
            ..input
        }
    }

    /// 기준 단위 값을 화면 단위로 되돌린다.
    pub fn from_base(&self, input: ComfortInput) -> ComfortInput {
        ComfortInput {
            air_temp_c: from_celsius(input.air_temp_c, self.temperature),
            radiant_temp_c: from_celsius(input.radiant_temp_c, self.temperature),
            air_velocity_m_per_s: from_mps(input.air_velocity_m_per_s, self.velocity),
            ..input
        }
    }
}

/// 반복 계산 설정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 계산 전 입력 범위를 검사할지 여부
    pub strict_validation: bool,
    /// 결과 표시 소수점 자릿수
    pub decimals: usize,
    /// GUI 한글 표시용 폰트 경로(.ttf/.ttc)
    pub font_path: Option<String>,
    // 테이블 항목은 스칼라 항목 뒤에 둔다
    pub display_units: DisplayUnits,
    pub solver: SolverConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_validation: true,
            decimals: 2,
            font_path: None,
            display_units: DisplayUnits::default(),
            solver: SolverConfig::default(),
        }
    }
}

impl Config {
    pub fn solver_options(&self) -> SolverOptions {
        SolverOptions {
            max_iterations: self.solver.max_iterations,
        }
    }

    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(CONFIG_FILE)
    }

    /// 설정을 지정한 파일에 저장한다.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::File {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// 설정 파일 처리 오류. 어느 파일에서 났는지 경로를 함께 보관한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일을 읽거나 쓸 수 없음
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    /// TOML 형식이 잘못됨
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// 설정을 TOML로 바꿀 수 없음
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::File { path, source } => {
                write!(f, "{} 파일에 접근할 수 없습니다: {source}", path.display())
            }
            ConfigError::Parse { path, source } => {
                write!(f, "{} 파일 형식이 잘못되었습니다: {source}", path.display())
            }
            ConfigError::Serialize(e) => write!(f, "설정을 기록할 수 없습니다: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::File { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Serialize(e) => Some(e),
        }
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        load_from(path)
    } else {
        let cfg = Config::default();
        cfg.save()?;
        Ok(cfg)
    }
}

/// 지정한 경로의 설정 파일을 읽는다. 빠진 항목은 기본값으로 채운다.
pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::File {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let cfg: Config = toml::from_str("decimals = 3\n[solver]\nmax_iterations = 50\n").unwrap();
        assert_eq!(cfg.decimals, 3);
        assert_eq!(cfg.solver.max_iterations, 50);
        assert!(cfg.strict_validation);
        assert_eq!(cfg.display_units, DisplayUnits::default());
    }

    #[test]
    fn unit_names_match_enum_variants() {
        let cfg: Config = toml::from_str(
            "[display_units]\ntemperature = \"Fahrenheit\"\nvelocity = \"FootPerMinute\"\n",
        )
        .unwrap();
        assert_eq!(cfg.display_units.temperature, TemperatureUnit::Fahrenheit);
        assert_eq!(cfg.display_units.velocity, VelocityUnit::FootPerMinute);
    }

    #[test]
    fn pretty_output_parses_back() {
        let mut cfg = Config::default();
        cfg.font_path = Some("fonts/NanumGothic.ttf".into());
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn fahrenheit_form_values_become_celsius() {
        let units = DisplayUnits {
            temperature: TemperatureUnit::Fahrenheit,
            velocity: VelocityUnit::FootPerMinute,
        };
        let base = units.to_base(ComfortInput::new(0.5, 71.6, 71.6, 1.2, 20.0, 60.0));
        assert!((base.air_temp_c - 22.0).abs() < 1e-9);
        assert!((base.radiant_temp_c - 22.0).abs() < 1e-9);
        assert!((base.air_velocity_m_per_s - 0.1016).abs() < 1e-9);
        assert_eq!(base.clo, 0.5);
        assert_eq!(base.relative_humidity_pct, 60.0);
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tct-{}-{name}", std::process::id()))
    }

    #[test]
    fn save_to_writes_the_given_file() {
        let path = scratch_path("save_to.toml");
        let mut cfg = Config::default();
        cfg.decimals = 4;
        cfg.save_to(&path).unwrap();
        let back = load_from(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(back.decimals, 4);
    }

    #[test]
    fn broken_file_reports_its_path() {
        let path = scratch_path("broken.toml");
        fs::write(&path, "decimals = \"two\"\n").unwrap();
        let err = load_from(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        match &err {
            ConfigError::Parse { path: p, .. } => assert_eq!(p, &path),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn missing_file_is_a_file_error() {
        let path = scratch_path("does-not-exist.toml");
        assert!(matches!(load_from(&path), Err(ConfigError::File { .. })));
    }
}
