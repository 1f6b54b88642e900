use super::UnitValue;

/// 속도 단위 표. 기준은 m/s이다.
pub(super) const UNITS: &[(&str, UnitValue)] = &[
    ("Meters per second (m/s)", UnitValue::Factor(1.0)),
    // 1 m/s = 3.6 km/h
    ("Kilometers per hour (km/h)", UnitValue::Factor(1.0 / 3.6)),
    // 1 m/s = 2.23694 mph
    ("Miles per hour (mph)", UnitValue::Factor(1.0 / 2.23694)),
    // 1 m/s = 1.94384 knots
    ("Knots (kn)", UnitValue::Factor(1.0 / 1.94384)),
    // 1 m/s = 1/0.3048 ft/s
    ("Feet per second (ft/s)", UnitValue::Factor(0.3048)),
];
