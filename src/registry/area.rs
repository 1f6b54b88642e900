use super::UnitValue;

/// 면적 단위 표. 기준은 제곱미터이다.
pub(super) const UNITS: &[(&str, UnitValue)] = &[
    ("Square Meter (m²)", UnitValue::Factor(1.0)),
    ("Square Kilometer (km²)", UnitValue::Factor(1_000_000.0)),
    ("Hectare (ha)", UnitValue::Factor(10_000.0)),
    ("Acre (ac)", UnitValue::Factor(4046.86)),
    ("Square Mile (mi²)", UnitValue::Factor(2_589_988.11)),
    ("Square Foot (ft²)", UnitValue::Factor(0.092903)),
    ("Square Inch (in²)", UnitValue::Factor(0.00064516)),
];
