#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 PMV/PPD 입력 폼.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::{fs, path::Path};
use thermal_comfort_toolbox::{
    app,
    comfort::{
        ComfortCategory, ComfortError, ComfortInput, ComfortResult, InputField, InputRange,
        ThermalSensation,
    },
    config,
    units::{from_celsius, from_mps},
};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt::init();

    let app_cfg = config::load_or_default().unwrap_or_default();
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([440.0, 300.0])
        .with_min_inner_size([400.0, 200.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "PMV Calculator",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx, app_cfg.font_path.as_deref()) {
                tracing::warn!("font setup failed: {e}");
            }
            Box::new(GuiApp::new(app_cfg))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 오류 메시지(한글)를 표시할 폰트를 적용한다.
/// 1) 설정의 font_path
/// 2) assets/fonts/ 아래 폰트
/// 3) Windows/Linux 시스템 폰트
/// 모두 실패하면 기본 폰트를 유지하고 Err를 반환한다.
fn setup_fonts(ctx: &egui::Context, custom: Option<&str>) -> Result<(), String> {
    if let Some(path) = custom {
        let bytes = fs::read(path).map_err(|e| format!("Failed to read font file ({path}): {e}"))?;
        apply_font_bytes(ctx, bytes, "user_font");
        return Ok(());
    }

    let mut candidates: Vec<std::path::PathBuf> = vec![
        "assets/fonts/malgun.ttf".into(),
        "assets/fonts/NanumGothic.ttf".into(),
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf".into(),
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".into(),
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc".into(),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for name in ["malgun.ttf", "gulim.ttc", "batang.ttc"] {
            candidates.push(fonts.join(name));
        }
    }
    for p in candidates {
        if p.exists() {
            let bytes =
                fs::read(&p).map_err(|e| format!("Failed to read font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("Font not found. Set font_path in config.toml.".into())
}

fn field_label(field: InputField) -> &'static str {
    match field {
        InputField::AirTemperature => "Air temperature:",
        InputField::RadiantTemperature => "Mean radiant temperature:",
        InputField::RelativeHumidity => "Relative humidity:",
        InputField::AirVelocity => "Air velocity:",
        InputField::MetabolicRate => "Metabolic rate:",
        InputField::ClothingInsulation => "Clothing insulation:",
    }
}

fn error_title(err: &ComfortError) -> &'static str {
    match err {
        ComfortError::InvalidInput { .. } => "Invalid input",
        ComfortError::NonConvergence { .. } => "Solver did not converge",
        ComfortError::NumericDegeneracy(_) => "Physically meaningless input",
    }
}

struct GuiApp {
    config: config::Config,
    /// 화면 단위 기준 입력값
    form: ComfortInput,
    outcome: Option<Result<ComfortResult, ComfortError>>,
    show_result: bool,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let form = config.display_units.from_base(ComfortInput::default());
        Self {
            config,
            form,
            outcome: None,
            show_result: false,
        }
    }

    /// 입력 범위와 접미사를 화면 단위로 돌려준다.
    fn display_range(&self, field: InputField) -> (InputRange, String) {
        let range = field.range();
        let units = &self.config.display_units;
        match field {
            InputField::AirTemperature | InputField::RadiantTemperature => (
                InputRange::new(
                    from_celsius(range.min, units.temperature),
                    from_celsius(range.max, units.temperature),
                ),
                format!(" {}", units.temperature.symbol()),
            ),
            InputField::AirVelocity => (
                InputRange::new(
                    from_mps(range.min, units.velocity),
                    from_mps(range.max, units.velocity),
                ),
                format!(" {}", units.velocity.symbol()),
            ),
            _ => (range, format!(" {}", field.unit())),
        }
    }

    fn field_mut(&mut self, field: InputField) -> &mut f64 {
        match field {
            InputField::AirTemperature => &mut self.form.air_temp_c,
            InputField::RadiantTemperature => &mut self.form.radiant_temp_c,
            InputField::RelativeHumidity => &mut self.form.relative_humidity_pct,
            InputField::AirVelocity => &mut self.form.air_velocity_m_per_s,
            InputField::MetabolicRate => &mut self.form.met,
            InputField::ClothingInsulation => &mut self.form.clo,
        }
    }

    fn submit(&mut self) {
        let outcome = app::evaluate(&self.config, self.form);
        if let Err(e) = &outcome {
            tracing::info!("calculation rejected: {e}");
        }
        self.outcome = Some(outcome);
        self.show_result = true;
    }

    fn form_ui(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pmv_form")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for field in InputField::ALL {
                    let (range, suffix) = self.display_range(field);
                    ui.label(field_label(field));
                    ui.add(
                        egui::DragValue::new(self.field_mut(field))
                            .clamp_range(range.min..=range.max)
                            .speed(0.05)
                            .fixed_decimals(2)
                            .suffix(suffix),
                    );
                    ui.end_row();
                }
            });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    self.submit();
                }
            });
        });
    }
}

fn result_ui(ui: &mut egui::Ui, outcome: &Result<ComfortResult, ComfortError>, decimals: usize) {
    match outcome {
        Ok(res) => {
            ui.label(format!("Predicted mean vote (PMV): {:.*}", decimals, res.pmv));
            ui.label(format!(
                "Predicted percentage dissatisfied (PPD): {:.*} %",
                decimals, res.ppd
            ));
            ui.separator();
            ui.small(format!(
                "Sensation: {}   ISO 7730 category: {}",
                ThermalSensation::from_pmv(res.pmv).label(),
                ComfortCategory::from_pmv(res.pmv).label()
            ));
            ui.small(format!(
                "Clothing surface {:.2} °C, hc {:.3} W/m²K, {} iterations",
                res.clothing_surface_temp_c, res.convective_coeff, res.iterations
            ));
        }
        Err(err) => {
            ui.colored_label(egui::Color32::RED, error_title(err));
            ui.label(err.to_string());
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("PMV / PPD");
            ui.add_space(6.0);
            self.form_ui(ui);
        });

        if self.show_result {
            let decimals = self.config.decimals;
            let outcome = &self.outcome;
            egui::Window::new("Result")
                .collapsible(false)
                .resizable(false)
                .open(&mut self.show_result)
                .show(ctx, |ui| {
                    if let Some(outcome) = outcome {
                        result_ui(ui, outcome, decimals);
                    }
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermal_comfort_toolbox::units::{TemperatureUnit, VelocityUnit};

    #[test]
    fn default_form_submits_office_conditions() {
        let mut app = GuiApp::new(config::Config::default());
        app.submit();
        assert!(app.show_result);
        let res = app.outcome.clone().unwrap().unwrap();
        assert!((res.pmv + 0.7437).abs() < 1e-3, "pmv={}", res.pmv);
    }

    #[test]
    fn fahrenheit_form_shows_converted_defaults_and_ranges() {
        let mut cfg = config::Config::default();
        cfg.display_units.temperature = TemperatureUnit::Fahrenheit;
        cfg.display_units.velocity = VelocityUnit::FootPerMinute;
        let app = GuiApp::new(cfg);
        assert!((app.form.air_temp_c - 71.6).abs() < 1e-9);
        let (range, suffix) = app.display_range(InputField::AirTemperature);
        assert!((range.min + 148.0).abs() < 1e-9);
        assert!((range.max - 212.0).abs() < 1e-9);
        assert_eq!(suffix, " °F");
        let (_, v_suffix) = app.display_range(InputField::AirVelocity);
        assert_eq!(v_suffix, " fpm");
    }

    #[test]
    fn out_of_range_value_is_reported_not_computed() {
        let mut app = GuiApp::new(config::Config::default());
        app.form.relative_humidity_pct = 120.0;
        app.submit();
        match app.outcome.clone().unwrap() {
            Err(ComfortError::InvalidInput { field, .. }) => assert_eq!(field, "relative humidity"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
