use crate::registry::{self, from_celsius, to_celsius, Category, TemperatureScale, UnitValue};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 등록되지 않은 카테고리 이름
    UnknownCategory(String),
    /// 카테고리에 없는 단위 라벨
    UnknownUnit(String),
    /// 변환 대상 단위의 배율이 0
    DivisionByZero(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownCategory(c) => write!(f, "알 수 없는 카테고리: {c}"),
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::DivisionByZero(u) => {
                write!(f, "배율이 0인 단위로는 변환할 수 없습니다: {u}")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// 이름으로 카테고리를 조회한다.
pub fn lookup_category(name: &str) -> Result<&'static Category, ConversionError> {
    registry::find(name).ok_or_else(|| ConversionError::UnknownCategory(name.to_string()))
}

/// 카테고리에서 선형 배율을 찾는다.
///
/// 온도 태그는 배율이 없으므로 선형 변환 입장에서는 미지 단위로 처리한다.
fn factor_of(category: &Category, label: &str) -> Result<f64, ConversionError> {
    match category.value_of(label) {
        Some(UnitValue::Factor(factor)) => Ok(factor),
        _ => Err(ConversionError::UnknownUnit(label.to_string())),
    }
}

/// 배율 기반 선형 변환. 기준 단위로 환산한 뒤 목표 단위 배율로 나눈다.
///
/// `value`가 `None`(빈 입력)이면 0.0을 돌려준다. 값이 0.0인 입력과는
/// 구분되는 상태이다. 같은 단위끼리는 배율 조회 없이 값을 그대로 반환해
/// 반올림 오차를 피한다.
pub fn convert_linear(
    value: Option<f64>,
    from_unit: &str,
    to_unit: &str,
    category: &Category,
) -> Result<f64, ConversionError> {
    let Some(value) = value else {
        return Ok(0.0);
    };
    if from_unit == to_unit {
        return Ok(value);
    }
    let from_factor = factor_of(category, from_unit)?;
    let to_factor = factor_of(category, to_unit)?;
    if to_factor == 0.0 {
        return Err(ConversionError::DivisionByZero(to_unit.to_string()));
    }
    let base_value = value * from_factor;
    Ok(base_value / to_factor)
}

/// 온도 변환. 섭씨를 피벗으로 두 단계 아핀 변환한다.
///
/// 세 눈금이 닫힌 집합이라 실패 경로가 없다. 같은 눈금끼리는 피벗을
/// 거치지 않고 값을 그대로 반환한다. 빈 입력은 0.0이다.
pub fn convert_temperature(
    value: Option<f64>,
    from: TemperatureScale,
    to: TemperatureScale,
) -> f64 {
    let Some(value) = value else {
        return 0.0;
    };
    if from == to {
        return value;
    }
    let celsius = to_celsius(value, from);
    from_celsius(celsius, to)
}

/// 라벨 문자열을 단위 값으로 해석한 뒤 알맞은 변환 경로로 보낸다.
///
/// 셸은 카테고리 이름으로 분기할 필요 없이 이 함수 하나만 호출하면 된다.
pub fn convert(
    value: Option<f64>,
    from_unit: &str,
    to_unit: &str,
    category: &Category,
) -> Result<f64, ConversionError> {
    let from_value = category
        .value_of(from_unit)
        .ok_or_else(|| ConversionError::UnknownUnit(from_unit.to_string()))?;
    let to_value = category
        .value_of(to_unit)
        .ok_or_else(|| ConversionError::UnknownUnit(to_unit.to_string()))?;
    match (from_value, to_value) {
        (UnitValue::Temperature(from), UnitValue::Temperature(to)) => {
            Ok(convert_temperature(value, from, to))
        }
        // 배율/온도가 섞인 조합은 정상 레지스트리에서 나올 수 없고,
        // 선형 경로가 미지 단위 오류로 보고한다.
        _ => convert_linear(value, from_unit, to_unit, category),
    }
}
