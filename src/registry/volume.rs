use super::UnitValue;

/// 체적 단위 표. 기준은 리터이다.
pub(super) const UNITS: &[(&str, UnitValue)] = &[
    ("Liter (L)", UnitValue::Factor(1.0)),
    ("Milliliter (mL)", UnitValue::Factor(0.001)),
    ("Cubic Meter (m³)", UnitValue::Factor(1000.0)),
    ("Cubic Centimeter (cm³)", UnitValue::Factor(0.001)),
    ("US Gallon (gal)", UnitValue::Factor(3.78541)),
    ("US Quart (qt)", UnitValue::Factor(0.946353)),
    ("US Pint (pt)", UnitValue::Factor(0.473176)),
    ("US Cup (cup)", UnitValue::Factor(0.236588)),
    ("US Fluid Ounce (fl oz)", UnitValue::Factor(0.0295735)),
    ("Imperial Gallon (imp gal)", UnitValue::Factor(4.54609)),
    ("Imperial Pint (imp pt)", UnitValue::Factor(0.568261)),
];
