use serde::{Deserialize, Serialize};

use super::UnitValue;

/// 온도 눈금을 정의한다. 배율 환산이 불가능해 눈금 태그로 다룬다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// 온도 단위 표. 값은 배율이 아니라 눈금 태그이다.
pub(super) const UNITS: &[(&str, UnitValue)] = &[
    ("Celsius (°C)", UnitValue::Temperature(TemperatureScale::Celsius)),
    ("Fahrenheit (°F)", UnitValue::Temperature(TemperatureScale::Fahrenheit)),
    ("Kelvin (K)", UnitValue::Temperature(TemperatureScale::Kelvin)),
];

/// 주어진 값을 섭씨로 환산한다.
pub fn to_celsius(value: f64, scale: TemperatureScale) -> f64 {
    match scale {
        TemperatureScale::Celsius => value,
        TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureScale::Kelvin => value - 273.15,
    }
}

/// 섭씨 값을 원하는 눈금으로 환산한다.
pub fn from_celsius(value_c: f64, scale: TemperatureScale) -> f64 {
    match scale {
        TemperatureScale::Celsius => value_c,
        TemperatureScale::Fahrenheit => value_c * 9.0 / 5.0 + 32.0,
        TemperatureScale::Kelvin => value_c + 273.15,
    }
}
