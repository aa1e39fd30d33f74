//! 입력 단위 환산/해석 테스트.
use thermal_comfort_toolbox::units::{
    from_celsius, from_mps, parse_temperature_unit, parse_velocity_unit, to_celsius, to_mps,
    ConversionError, TemperatureUnit, VelocityUnit,
};

#[test]
fn temperature_reference_points() {
    assert!((to_celsius(212.0, TemperatureUnit::Fahrenheit) - 100.0).abs() < 1e-12);
    assert!((to_celsius(273.15, TemperatureUnit::Kelvin)).abs() < 1e-12);
    assert!((from_celsius(-40.0, TemperatureUnit::Fahrenheit) + 40.0).abs() < 1e-12);
    assert_eq!(to_celsius(22.0, TemperatureUnit::Celsius), 22.0);
}

#[test]
fn velocity_reference_points() {
    // 100 fpm ≈ 0.508 m/s, 3.6 km/h = 1 m/s
    assert!((to_mps(100.0, VelocityUnit::FootPerMinute) - 0.508).abs() < 1e-12);
    assert!((to_mps(3.6, VelocityUnit::KilometerPerHour) - 1.0).abs() < 1e-12);
    assert!((from_mps(0.3048, VelocityUnit::FootPerSecond) - 1.0).abs() < 1e-12);
}

#[test]
fn unit_strings_are_case_insensitive() {
    assert_eq!(parse_temperature_unit(" F ").unwrap(), TemperatureUnit::Fahrenheit);
    assert_eq!(parse_temperature_unit("°C").unwrap(), TemperatureUnit::Celsius);
    assert_eq!(parse_velocity_unit("FPM").unwrap(), VelocityUnit::FootPerMinute);
    assert_eq!(parse_velocity_unit("km/h").unwrap(), VelocityUnit::KilometerPerHour);
}

#[test]
fn unknown_unit_is_rejected() {
    match parse_velocity_unit("knots") {
        Err(ConversionError::UnknownUnit(u)) => assert_eq!(u, "knots"),
        other => panic!("unexpected: {other:?}"),
    }
    assert!(parse_temperature_unit("rankine").is_err());
}
