//! 카테고리별 단위 정의 모음. 변환 배율은 기동 후 변하지 않는 정적 테이블이다.

pub mod area;
pub mod data_storage;
pub mod length;
pub mod mass;
pub mod speed;
pub mod temperature;
pub mod volume;

pub use temperature::{from_celsius, to_celsius, TemperatureScale};

/// 단위 하나가 갖는 변환 값.
///
/// 온도는 영점이 달라 배율로 표현할 수 없으므로 눈금 태그로 분리한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitValue {
    /// 기준 단위 1개에 해당하는 배율
    Factor(f64),
    /// 온도 눈금 태그
    Temperature(TemperatureScale),
}

/// 변환 카테고리 하나를 표현한다. 단위 목록의 순서가 화면 표시 순서이다.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub units: &'static [(&'static str, UnitValue)],
    /// 배율의 기준이 되는 단위 라벨. 온도는 해당 없음.
    pub base_unit: Option<&'static str>,
    pub icon: &'static str,
}

impl Category {
    /// 단위 라벨 목록을 정의 순서대로 반환한다.
    pub fn unit_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.units.iter().map(|(label, _)| *label)
    }

    /// 라벨에 해당하는 단위 값을 찾는다.
    pub fn value_of(&self, label: &str) -> Option<UnitValue> {
        self.units
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, value)| *value)
    }

    /// 온도 카테고리 여부.
    pub fn is_temperature(&self) -> bool {
        self.units
            .iter()
            .all(|(_, value)| matches!(value, UnitValue::Temperature(_)))
    }
}

/// 지원하는 전체 카테고리.
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "Length",
        units: length::UNITS,
        base_unit: Some("Meter (m)"),
        icon: "📏",
    },
    Category {
        name: "Weight/Mass",
        units: mass::UNITS,
        base_unit: Some("Kilogram (kg)"),
        icon: "⚖️",
    },
    Category {
        name: "Temperature",
        units: temperature::UNITS,
        base_unit: None,
        icon: "🌡️",
    },
    Category {
        name: "Volume",
        units: volume::UNITS,
        base_unit: Some("Liter (L)"),
        icon: "💧",
    },
    Category {
        name: "Area",
        units: area::UNITS,
        base_unit: Some("Square Meter (m²)"),
        icon: "🖼️",
    },
    Category {
        name: "Speed",
        units: speed::UNITS,
        base_unit: Some("Meters per second (m/s)"),
        icon: "💨",
    },
    Category {
        name: "Data Storage",
        units: data_storage::UNITS,
        base_unit: Some("Byte (B)"),
        icon: "💾",
    },
];

/// 이름으로 카테고리를 찾는다.
pub fn find(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.name == name)
}
