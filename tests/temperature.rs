//! 온도 변환 고정점/우회 경로 회귀 테스트.
use pro_unit_converter::conversion::convert_temperature;
use pro_unit_converter::registry::TemperatureScale::{Celsius, Fahrenheit, Kelvin};

#[test]
fn fixed_points() {
    assert_eq!(convert_temperature(Some(0.0), Celsius, Fahrenheit), 32.0);
    assert_eq!(convert_temperature(Some(32.0), Fahrenheit, Celsius), 0.0);
    assert_eq!(convert_temperature(Some(0.0), Celsius, Kelvin), 273.15);
    assert_eq!(convert_temperature(Some(100.0), Celsius, Fahrenheit), 212.0);
}

#[test]
fn identity_bypasses_the_pivot() {
    // 산술 경로가 아니라 우회 경로를 검증한다. 드리프트 없이 정확히 같아야 한다.
    for v in [-40.0, 0.0, 36.6, 273.15, 1e9] {
        assert_eq!(convert_temperature(Some(v), Kelvin, Kelvin), v);
        assert_eq!(convert_temperature(Some(v), Celsius, Celsius), v);
        assert_eq!(convert_temperature(Some(v), Fahrenheit, Fahrenheit), v);
    }
}

#[test]
fn absent_input_yields_zero() {
    assert_eq!(convert_temperature(None, Celsius, Fahrenheit), 0.0);
}

#[test]
fn genuine_zero_is_converted_not_shortcut() {
    // 0은 "입력 없음"이 아니다. 0 °C는 32 °F가 되어야 한다.
    assert_eq!(convert_temperature(Some(0.0), Celsius, Fahrenheit), 32.0);
    assert_eq!(convert_temperature(Some(0.0), Celsius, Kelvin), 273.15);
}

#[test]
fn fahrenheit_kelvin_via_celsius() {
    assert_eq!(convert_temperature(Some(32.0), Fahrenheit, Kelvin), 273.15);
    let f = convert_temperature(Some(300.0), Kelvin, Fahrenheit);
    // 300 K = 26.85 °C = 80.33 °F
    assert!((f - 80.33).abs() < 1e-9, "got {f}");
}

#[test]
fn minus_forty_is_the_crossing_point() {
    let f = convert_temperature(Some(-40.0), Celsius, Fahrenheit);
    assert!((f + 40.0).abs() < 1e-9, "got {f}");
}
