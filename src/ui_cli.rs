use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::registry::{self, Category};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    CategoryInfo,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CONVERT));
    println!("{}", tr.t(keys::MAIN_MENU_CATEGORY_INFO));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::CategoryInfo),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다. 선택 상태는 설정에 남겨 다음 실행에서 복원한다.
pub fn handle_convert(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONVERT_HEADING));
    let category = select_category(tr, cfg)?;
    let unit_names: Vec<&'static str> = category.unit_names().collect();

    for (i, name) in unit_names.iter().enumerate() {
        println!("{}) {name}", i + 1);
    }
    // 이전 선택이 현재 카테고리에 없으면 원본 앱처럼 1번/2번 단위로 되돌린다.
    let default_from = restore_unit(&unit_names, cfg.last_from_unit.as_deref(), 0);
    let default_to = restore_unit(&unit_names, cfg.last_to_unit.as_deref(), 1);
    let mut from_unit = select_unit(tr, keys::CONVERT_PROMPT_FROM_UNIT, &unit_names, default_from)?;
    let mut to_unit = select_unit(tr, keys::CONVERT_PROMPT_TO_UNIT, &unit_names, default_to)?;

    let mut value = read_value(tr)?;
    let mut last_result = None;
    'session: loop {
        match conversion::convert(value, from_unit, to_unit, category) {
            Ok(result) => {
                let input_text = match value {
                    Some(v) => format_sig(v, 4),
                    None => tr.t(keys::CONVERT_EMPTY_INPUT).to_string(),
                };
                println!(
                    "{} {input_text} {from_unit} → {} {to_unit}",
                    tr.t(keys::CONVERT_RESULT),
                    format_sig(result, 6),
                );
                if from_unit == to_unit {
                    println!("{}", tr.t(keys::CONVERT_SAME_UNIT));
                }
                last_result = Some(result);
            }
            // 선택지가 레지스트리에서 나오는 한 도달하지 않지만,
            // 변환 실패가 선택 상태를 잃게 해서는 안 된다.
            Err(err) => println!("{} {err}", tr.t(keys::ERROR_PREFIX)),
        }

        loop {
            println!("{}", tr.t(keys::CONVERT_MENU));
            let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
            match sel.trim() {
                "1" => {
                    value = read_value(tr)?;
                    continue 'session;
                }
                "2" => {
                    // 원본 앱의 ⇄ 버튼: 단위를 맞바꾸고 직전 결과를 입력으로 가져온다.
                    std::mem::swap(&mut from_unit, &mut to_unit);
                    if let Some(result) = last_result {
                        value = Some(result);
                    }
                    continue 'session;
                }
                "3" => {
                    value = None;
                    continue 'session;
                }
                "0" => break 'session,
                _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
            }
        }
    }

    cfg.last_category = category.name.to_string();
    cfg.last_from_unit = Some(from_unit.to_string());
    cfg.last_to_unit = Some(to_unit.to_string());
    Ok(())
}

/// 카테고리별 기준 단위와 단위 수를 보여준다.
pub fn handle_category_info(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::INFO_HEADING));
    for category in registry::CATEGORIES {
        println!("{} {}", category.icon, category.name);
        println!("   {} {}", tr.t(keys::INFO_UNIT_COUNT), category.units.len());
        if let Some(base) = category.base_unit {
            println!("   {} {base}", tr.t(keys::INFO_BASE_UNIT));
        }
    }
    println!();
    println!("{}", tr.t(keys::INFO_HOW_IT_WORKS));
    Ok(())
}

/// 언어 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language.as_deref().unwrap_or("auto")
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim() {
        "1" => cfg.language = None,
        "2" => cfg.language = Some("ko".to_string()),
        "3" => cfg.language = Some("en".to_string()),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 유효숫자 기준으로 값을 표시용 문자열로 만든다. (C의 %.Ng 서식과 같은 목적)
///
/// 엔진은 반올림하지 않으므로 표시 직전에만 사용한다.
pub fn format_sig(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = value.abs().log10().floor() as i32;
    if magnitude >= digits as i32 || magnitude < -4 {
        let s = format!("{:.*e}", digits.saturating_sub(1), value);
        let (mantissa, exponent) = s.split_once('e').unwrap_or((s.as_str(), "0"));
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        return format!("{mantissa}e{exponent}");
    }
    let decimals = digits as i32 - 1 - magnitude;
    if decimals <= 0 {
        format!("{value:.0}")
    } else {
        let s = format!("{value:.*}", decimals as usize);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn select_category(tr: &Translator, cfg: &Config) -> Result<&'static Category, AppError> {
    for (i, category) in registry::CATEGORIES.iter().enumerate() {
        println!("{}) {} {}", i + 1, category.icon, category.name);
    }
    let default = registry::find(&cfg.last_category).unwrap_or(&registry::CATEGORIES[0]);
    loop {
        let sel = read_line(tr.t(keys::CONVERT_PROMPT_CATEGORY))?;
        let trimmed = sel.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        if let Ok(n) = trimmed.parse::<usize>() {
            if (1..=registry::CATEGORIES.len()).contains(&n) {
                return Ok(&registry::CATEGORIES[n - 1]);
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn select_unit(
    tr: &Translator,
    prompt_key: &str,
    unit_names: &[&'static str],
    default_index: usize,
) -> Result<&'static str, AppError> {
    loop {
        let sel = read_line(tr.t(prompt_key))?;
        let trimmed = sel.trim();
        if trimmed.is_empty() {
            return Ok(unit_names[default_index]);
        }
        if let Ok(n) = trimmed.parse::<usize>() {
            if (1..=unit_names.len()).contains(&n) {
                return Ok(unit_names[n - 1]);
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

/// 저장된 단위 라벨을 현재 카테고리에서 찾고, 없으면 폴백 인덱스를 쓴다.
fn restore_unit(unit_names: &[&'static str], saved: Option<&str>, fallback: usize) -> usize {
    saved
        .and_then(|label| unit_names.iter().position(|name| *name == label))
        .unwrap_or_else(|| fallback.min(unit_names.len() - 1))
}

/// 값을 읽는다. 빈 줄은 "아직 입력 없음" 상태로 취급한다.
fn read_value(tr: &Translator) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(tr.t(keys::CONVERT_PROMPT_VALUE))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
