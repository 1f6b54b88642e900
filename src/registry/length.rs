use super::UnitValue;

/// 길이 단위 표. 기준은 미터이다.
pub(super) const UNITS: &[(&str, UnitValue)] = &[
    ("Meter (m)", UnitValue::Factor(1.0)),
    ("Kilometer (km)", UnitValue::Factor(1000.0)),
    ("Centimeter (cm)", UnitValue::Factor(0.01)),
    ("Millimeter (mm)", UnitValue::Factor(0.001)),
    ("Mile (mi)", UnitValue::Factor(1609.34)),
    ("Yard (yd)", UnitValue::Factor(0.9144)),
    ("Foot (ft)", UnitValue::Factor(0.3048)),
    ("Inch (in)", UnitValue::Factor(0.0254)),
    ("Nautical Mile (NM)", UnitValue::Factor(1852.0)),
];
