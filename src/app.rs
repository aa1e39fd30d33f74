use std::path::Path;

use crate::comfort::{self, ComfortError, ComfortInput, ComfortResult};
use crate::config::Config;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;
use crate::units::ConversionError;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 쾌적성 계산 오류
    Comfort(ComfortError),
    /// 단위 해석 오류
    Conversion(ConversionError),
    /// 명령행 입력값 일부만 주어짐
    IncompleteInput(Vec<&'static str>),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Comfort(e) => write!(f, "쾌적성 계산 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::IncompleteInput(missing) => {
                write!(f, "입력값이 부족합니다: {}", missing.join(", "))
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ComfortError> for AppError {
    fn from(value: ComfortError) -> Self {
        AppError::Comfort(value)
    }
}

impl From<ConversionError> for AppError {
    fn from(value: ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

/// 화면 단위로 받은 입력을 설정에 맞춰 계산한다.
///
/// 설정의 `strict_validation`이 켜져 있으면 범위 검사를 먼저 수행한다.
pub fn evaluate(config: &Config, form: ComfortInput) -> Result<ComfortResult, ComfortError> {
    let input = config.display_units.to_base(form);
    let options = config.solver_options();
    if config.strict_validation {
        comfort::compute_strict(&input, &options)
    } else {
        comfort::compute_with(&input, &options)
    }
}

/// 설정을 불러온 파일에 다시 저장하고, 성공했을 때만 알린다.
pub fn save_settings(config: &Config, path: &Path) -> Result<(), AppError> {
    config.save_to(path)?;
    println!("설정이 {}에 저장되었습니다.", path.display());
    Ok(())
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 설정 변경은 `path`에 저장된다.
pub fn run(config: &mut Config, path: &Path) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Calculate => ui_cli::handle_calculation(config)?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(config)? {
                    save_settings(config, path)?;
                }
            }
            MenuChoice::Exit => {
                println!("프로그램을 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
