use clap::Parser;
use std::path::PathBuf;
use thermal_comfort_toolbox::config::Config;
use thermal_comfort_toolbox::{app, comfort::ComfortInput, config, ui_cli, units};

/// PMV/PPD 계산기. 여섯 값을 모두 주면 한 번 계산하고, 없으면 대화형 메뉴를 연다.
#[derive(Debug, Parser)]
#[command(name = "thermal_comfort_toolbox_cli", version)]
struct Cli {
    /// 공기 온도
    #[arg(long, allow_negative_numbers = true)]
    ta: Option<f64>,
    /// 평균 복사 온도
    #[arg(long, allow_negative_numbers = true)]
    tr: Option<f64>,
    /// 상대 습도 [%]
    #[arg(long)]
    rh: Option<f64>,
    /// 기류 속도
    #[arg(long)]
    vel: Option<f64>,
    /// 대사량 [met]
    #[arg(long)]
    met: Option<f64>,
    /// 착의량 [clo]
    #[arg(long)]
    clo: Option<f64>,
    /// 온도 단위(C, F, K). 이번 계산에만 적용하고 설정 파일에는 저장하지 않는다.
    #[arg(long)]
    temp_unit: Option<String>,
    /// 속도 단위(m/s, fpm, ft/s, km/h). 이번 계산에만 적용한다.
    #[arg(long)]
    velocity_unit: Option<String>,
    /// 이번 계산에서 범위 검사를 끈다.
    #[arg(long)]
    no_validate: bool,
    /// 의복 표면온도와 열손실 항목까지 출력한다.
    #[arg(long)]
    detail: bool,
    /// 설정 파일 경로
    #[arg(long)]
    config: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 계산하거나 대화형 메뉴를 실행한다.
fn main() {
    tracing_subscriber::fmt::init();
    if let Err(err) = try_run(Cli::parse()) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (mut cfg, path) = match cli.config.as_deref() {
        Some(path) => (config::load_from(path)?, PathBuf::from(path)),
        None => (config::load_or_default()?, PathBuf::from(config::CONFIG_FILE)),
    };

    let fields = [
        ("--ta", cli.ta),
        ("--tr", cli.tr),
        ("--rh", cli.rh),
        ("--vel", cli.vel),
        ("--met", cli.met),
        ("--clo", cli.clo),
    ];
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, v)| v.is_none())
        .map(|(name, _)| *name)
        .collect();

    if missing.len() == fields.len() {
        app::run(&mut cfg, &path)?;
        return Ok(());
    }
    let (Some(ta), Some(tr), Some(rh), Some(vel), Some(met), Some(clo)) =
        (cli.ta, cli.tr, cli.rh, cli.vel, cli.met, cli.clo)
    else {
        return Err(app::AppError::IncompleteInput(missing).into());
    };
    let session = with_overrides(&cfg, &cli)?;
    let form = ComfortInput::new(clo, ta, tr, met, vel, rh);
    let result = app::evaluate(&session, form).map_err(app::AppError::from)?;
    if cli.detail {
        ui_cli::print_result(&result, session.decimals);
    } else {
        println!("{result:.prec$}", prec = session.decimals);
    }
    Ok(())
}

/// 명령행 단위/검사 옵션을 반영한 사본을 만든다. 원래 설정은 건드리지 않는다.
fn with_overrides(cfg: &Config, cli: &Cli) -> Result<Config, units::ConversionError> {
    let mut session = cfg.clone();
    if let Some(u) = cli.temp_unit.as_deref() {
        session.display_units.temperature = units::parse_temperature_unit(u)?;
    }
    if let Some(u) = cli.velocity_unit.as_deref() {
        session.display_units.velocity = units::parse_velocity_unit(u)?;
    }
    if cli.no_validate {
        session.strict_validation = false;
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermal_comfort_toolbox::units::{TemperatureUnit, VelocityUnit};

    #[test]
    fn overrides_leave_stored_config_untouched() {
        let cli = Cli::parse_from([
            "thermal_comfort_toolbox_cli",
            "--temp-unit",
            "F",
            "--velocity-unit",
            "fpm",
            "--no-validate",
        ]);
        let stored = Config::default();
        let session = with_overrides(&stored, &cli).unwrap();
        assert_eq!(session.display_units.temperature, TemperatureUnit::Fahrenheit);
        assert_eq!(session.display_units.velocity, VelocityUnit::FootPerMinute);
        assert!(!session.strict_validation);
        assert_eq!(stored, Config::default());
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let cli = Cli::parse_from(["thermal_comfort_toolbox_cli", "--temp-unit", "R"]);
        assert!(with_overrides(&Config::default(), &cli).is_err());
    }

    #[test]
    fn negative_temperatures_parse() {
        let cli = Cli::parse_from(["thermal_comfort_toolbox_cli", "--ta", "-5", "--tr", "-7.5"]);
        assert_eq!(cli.ta, Some(-5.0));
        assert_eq!(cli.tr, Some(-7.5));
    }
}
