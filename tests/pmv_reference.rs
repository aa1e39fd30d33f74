//! PMV/PPD 기준 시나리오 회귀 테스트. 기대값은 원 계산식을 그대로 돌린 결과로 고정한다.
use thermal_comfort_toolbox::comfort::{
    compute, pmv_ppd, ComfortCategory, ComfortInput, ThermalSensation, SOLVER_TOLERANCE,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {rel_tol})"
    );
}

#[test]
fn office_reference_point() {
    // Ta=Tr=22 °C, RH 60 %, 0.1 m/s, 1.2 met, 0.5 clo
    let res = compute(&ComfortInput::new(0.5, 22.0, 22.0, 1.2, 0.1, 60.0)).expect("office");
    assert_close("pmv", res.pmv, -0.743_745_217_011_654_5, 1e-9);
    assert_close("ppd", res.ppd, 16.647_017_133_962_62, 1e-9);
    assert_close("tcl", res.clothing_surface_temp_c, 28.935_841_863_696_908, 1e-9);
    assert_close("hc", res.convective_coeff, 3.863_523_223_711_940_3, 1e-9);
    assert_close("fcl", res.clothing_area_factor, 1.100_31, 1e-12);
    assert!(res.residual <= SOLVER_TOLERANCE);
    assert!(res.iterations > 0 && res.iterations < 20, "iterations={}", res.iterations);
    assert_eq!(
        res.to_string(),
        "predicted mean vote: -0.74, predicted percentage dissatisfied: 16.65"
    );
    assert_eq!(
        format!("{res:.3}"),
        "predicted mean vote: -0.744, predicted percentage dissatisfied: 16.647"
    );
    assert_eq!(
        format!("{:.*}", 0, res),
        "predicted mean vote: -1, predicted percentage dissatisfied: 17"
    );
    assert_eq!(ThermalSensation::from_pmv(res.pmv), ThermalSensation::SlightlyCool);
    assert_eq!(ComfortCategory::from_pmv(res.pmv), ComfortCategory::OutOfRange);
}

#[test]
fn heavier_clothing_reaches_category_a() {
    let (pmv, ppd) = pmv_ppd(1.0, 22.0, 22.0, 1.2, 0.1, 60.0).expect("1 clo");
    assert_close("pmv", pmv, 0.164_235_625_345_936_33, 1e-9);
    assert_close("ppd", ppd, 5.559_027_892_392_18, 1e-9);
    assert_eq!(ComfortCategory::from_pmv(pmv), ComfortCategory::A);
    assert_eq!(ThermalSensation::from_pmv(pmv), ThermalSensation::Neutral);
}

#[test]
fn warm_resting_point_is_category_b() {
    let (pmv, ppd) = pmv_ppd(0.5, 25.0, 25.0, 1.0, 0.1, 50.0).expect("25 °C");
    assert_close("pmv", pmv, -0.393_128_598_460_167_46, 1e-9);
    assert_close("ppd", ppd, 8.219_529_317_862_595, 1e-9);
    assert_eq!(ComfortCategory::from_pmv(pmv), ComfortCategory::B);
}

#[test]
fn hot_humid_still_air() {
    let res = compute(&ComfortInput::new(0.5, 35.0, 35.0, 1.0, 0.0, 80.0)).expect("hot");
    assert_close("pmv", res.pmv, 3.836_603_361_009_697_5, 1e-9);
    assert!(res.ppd > 99.9, "ppd={}", res.ppd);
    assert_eq!(ThermalSensation::from_pmv(res.pmv), ThermalSensation::Hot);
    // 정지 공기에서는 자연대류 계수가 선택된다
    assert!(res.convective_coeff > 0.0);
}

#[test]
fn cold_room_with_light_draft() {
    let res = compute(&ComfortInput::new(1.0, 10.0, 10.0, 1.0, 0.2, 40.0)).expect("cold");
    assert_close("pmv", res.pmv, -3.911_538_522_624_506, 1e-9);
    assert!(res.ppd > 99.9, "ppd={}", res.ppd);
    assert_eq!(ThermalSensation::from_pmv(res.pmv), ThermalSensation::Cold);
    // 기류 0.2 m/s 에서는 강제대류 12.1*sqrt(0.2) 가 자연대류보다 크다
    assert_close("hc", res.convective_coeff, 12.1 * 0.2_f64.sqrt(), 1e-12);
}

#[test]
fn plain_and_structured_entry_points_agree() {
    let input = ComfortInput::default();
    let res = compute(&input).unwrap();
    let (pmv, ppd) = pmv_ppd(
        input.clo,
        input.air_temp_c,
        input.radiant_temp_c,
        input.met,
        input.air_velocity_m_per_s,
        input.relative_humidity_pct,
    )
    .unwrap();
    assert_eq!(pmv.to_bits(), res.pmv.to_bits());
    assert_eq!(ppd.to_bits(), res.ppd.to_bits());
}

#[test]
fn heat_losses_add_up_to_pmv() {
    let res = compute(&ComfortInput::default()).unwrap();
    let m: f64 = 1.2 * 58.15;
    let ts = 0.303 * (-0.036 * m).exp() + 0.028;
    assert_close("pmv", ts * (m - res.heat_losses.total()), res.pmv, 1e-12);
}
