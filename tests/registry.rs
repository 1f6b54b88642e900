//! 단위 레지스트리 구성 검증.
use pro_unit_converter::registry::{self, UnitValue};

#[test]
fn seven_categories_with_expected_unit_counts() {
    let expected = [
        ("Length", 9),
        ("Weight/Mass", 7),
        ("Temperature", 3),
        ("Volume", 11),
        ("Area", 7),
        ("Speed", 5),
        ("Data Storage", 10),
    ];
    assert_eq!(registry::CATEGORIES.len(), expected.len());
    for (name, count) in expected {
        let cat = registry::find(name).unwrap();
        assert_eq!(cat.units.len(), count, "{name}");
    }
}

#[test]
fn base_units_have_factor_one() {
    for cat in registry::CATEGORIES {
        if let Some(base) = cat.base_unit {
            assert_eq!(
                cat.value_of(base),
                Some(UnitValue::Factor(1.0)),
                "{}",
                cat.name
            );
        }
    }
}

#[test]
fn linear_factors_are_positive_and_finite() {
    for cat in registry::CATEGORIES {
        for (label, value) in cat.units {
            if let UnitValue::Factor(factor) = value {
                assert!(factor.is_finite() && *factor > 0.0, "{} / {label}", cat.name);
            }
        }
    }
}

#[test]
fn only_temperature_is_symbolic() {
    for cat in registry::CATEGORIES {
        assert_eq!(cat.is_temperature(), cat.name == "Temperature", "{}", cat.name);
    }
}

#[test]
fn unit_order_is_presentation_order() {
    let length = registry::find("Length").unwrap();
    let names: Vec<_> = length.unit_names().collect();
    assert_eq!(names.first(), Some(&"Meter (m)"));
    assert_eq!(names.get(1), Some(&"Kilometer (km)"));
    assert_eq!(names.last(), Some(&"Nautical Mile (NM)"));
}

#[test]
fn lookup_is_by_exact_name() {
    assert!(registry::find("Length").is_some());
    assert!(registry::find("length").is_none());
    assert!(registry::find("Pressure").is_none());
}

#[test]
fn unit_labels_are_unique_within_category() {
    for cat in registry::CATEGORIES {
        let mut seen: Vec<&str> = Vec::new();
        for (label, _) in cat.units {
            assert!(!seen.contains(label), "{} / {label}", cat.name);
            seen.push(label);
        }
    }
}
