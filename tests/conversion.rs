//! 선형 변환 엔진 회귀 테스트.
use pro_unit_converter::conversion::{self, ConversionError};
use pro_unit_converter::registry::{self, Category, UnitValue};

fn category(name: &str) -> &'static Category {
    conversion::lookup_category(name).unwrap()
}

#[test]
fn identity_returns_value_unchanged() {
    // 같은 단위끼리는 배율을 거치지 않고 값이 그대로 돌아와야 한다.
    for cat in registry::CATEGORIES {
        for unit in cat.unit_names() {
            let result = conversion::convert_linear(Some(2.5), unit, unit, cat).unwrap();
            assert_eq!(result, 2.5, "{} / {unit}", cat.name);
        }
    }
}

#[test]
fn round_trip_is_stable() {
    for cat in ["Length", "Volume", "Area", "Speed", "Data Storage"] {
        let cat = category(cat);
        let units: Vec<_> = cat.unit_names().collect();
        for from in &units {
            for to in &units {
                let there = conversion::convert_linear(Some(3.7), from, to, cat).unwrap();
                let back = conversion::convert_linear(Some(there), to, from, cat).unwrap();
                assert!(
                    (back - 3.7).abs() < 1e-9,
                    "{} -> {} 왕복 오차: {back}",
                    from,
                    to
                );
            }
        }
    }
}

#[test]
fn five_miles_to_kilometers() {
    let length = category("Length");
    let km = conversion::convert_linear(Some(5.0), "Mile (mi)", "Kilometer (km)", length).unwrap();
    // 5 × 1609.34 / 1000
    assert!((km - 8.0467).abs() < 1e-9, "got {km}");
}

#[test]
fn knots_to_kilometers_per_hour() {
    let speed = category("Speed");
    let kmh = conversion::convert_linear(
        Some(1.0),
        "Knots (kn)",
        "Kilometers per hour (km/h)",
        speed,
    )
    .unwrap();
    assert!((kmh - 1.852).abs() < 1e-3, "got {kmh}");
}

#[test]
fn absent_input_yields_zero() {
    let length = category("Length");
    let result = conversion::convert_linear(None, "Mile (mi)", "Kilometer (km)", length).unwrap();
    assert_eq!(result, 0.0);
}

#[test]
fn unknown_unit_is_an_error_not_a_panic() {
    let length = category("Length");
    let err = conversion::convert_linear(Some(1.0), "Parsec", "Meter (m)", length).unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("Parsec".to_string()));

    let err = conversion::convert_linear(Some(1.0), "Meter (m)", "Parsec", length).unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("Parsec".to_string()));
}

#[test]
fn unknown_category_is_reported() {
    let err = conversion::lookup_category("Bananas").unwrap_err();
    assert_eq!(err, ConversionError::UnknownCategory("Bananas".to_string()));
}

#[test]
fn temperature_tag_has_no_linear_factor() {
    // 온도 눈금 태그가 선형 경로로 들어오면 미지 단위로 보고해야 한다.
    let temperature = category("Temperature");
    let err = conversion::convert_linear(Some(1.0), "Celsius (°C)", "Kelvin (K)", temperature)
        .unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("Celsius (°C)".to_string()));
}

#[test]
fn zero_factor_is_a_division_error() {
    // 정상 레지스트리에는 0 배율이 없지만 방어 동작은 정의돼 있어야 한다.
    static BROKEN_UNITS: &[(&str, UnitValue)] = &[
        ("Widget", UnitValue::Factor(1.0)),
        ("Nothing", UnitValue::Factor(0.0)),
    ];
    let broken = Category {
        name: "Broken",
        units: BROKEN_UNITS,
        base_unit: Some("Widget"),
        icon: "",
    };
    let err = conversion::convert_linear(Some(1.0), "Widget", "Nothing", &broken).unwrap_err();
    assert_eq!(err, ConversionError::DivisionByZero("Nothing".to_string()));
}

#[test]
fn dispatcher_routes_by_unit_value() {
    let temperature = category("Temperature");
    let f = conversion::convert(Some(100.0), "Celsius (°C)", "Fahrenheit (°F)", temperature)
        .unwrap();
    assert_eq!(f, 212.0);

    let length = category("Length");
    let m = conversion::convert(Some(2.0), "Kilometer (km)", "Meter (m)", length).unwrap();
    assert!((m - 2000.0).abs() < 1e-9);
}
