use super::UnitValue;

/// 질량 단위 표. 기준은 킬로그램이다.
pub(super) const UNITS: &[(&str, UnitValue)] = &[
    ("Kilogram (kg)", UnitValue::Factor(1.0)),
    ("Gram (g)", UnitValue::Factor(0.001)),
    ("Milligram (mg)", UnitValue::Factor(0.000001)),
    ("Metric Ton (t)", UnitValue::Factor(1000.0)),
    ("Pound (lb)", UnitValue::Factor(0.453592)),
    ("Ounce (oz)", UnitValue::Factor(0.0283495)),
    ("Stone (st)", UnitValue::Factor(6.35029)),
];
