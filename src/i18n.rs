use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CONVERT: &str = "main_menu.convert";
    pub const MAIN_MENU_CATEGORY_INFO: &str = "main_menu.category_info";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const CONVERT_HEADING: &str = "convert.heading";
    pub const CONVERT_PROMPT_CATEGORY: &str = "convert.prompt_category";
    pub const CONVERT_PROMPT_FROM_UNIT: &str = "convert.prompt_from_unit";
    pub const CONVERT_PROMPT_TO_UNIT: &str = "convert.prompt_to_unit";
    pub const CONVERT_PROMPT_VALUE: &str = "convert.prompt_value";
    pub const CONVERT_RESULT: &str = "convert.result";
    pub const CONVERT_SAME_UNIT: &str = "convert.same_unit";
    pub const CONVERT_EMPTY_INPUT: &str = "convert.empty_input";
    pub const CONVERT_MENU: &str = "convert.menu";

    pub const INFO_HEADING: &str = "info.heading";
    pub const INFO_UNIT_COUNT: &str = "info.unit_count";
    pub const INFO_BASE_UNIT: &str = "info.base_unit";
    pub const INFO_HOW_IT_WORKS: &str = "info.how_it_works";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 인자/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" => Some("en".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류:",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Pro Unit Converter ===",
        MAIN_MENU_CONVERT => "1) 단위 변환",
        MAIN_MENU_CATEGORY_INFO => "2) 카테고리 정보",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        CONVERT_HEADING => "\n-- 단위 변환 --",
        CONVERT_PROMPT_CATEGORY => "카테고리 번호(엔터 = 이전 선택): ",
        CONVERT_PROMPT_FROM_UNIT => "입력 단위 번호(엔터 = 기본값): ",
        CONVERT_PROMPT_TO_UNIT => "변환 단위 번호(엔터 = 기본값): ",
        CONVERT_PROMPT_VALUE => "값 입력(엔터 = 빈 입력): ",
        CONVERT_RESULT => "변환 결과:",
        CONVERT_SAME_UNIT => "입력 단위와 변환 단위가 같습니다.",
        CONVERT_EMPTY_INPUT => "(빈 입력)",
        CONVERT_MENU => "1) 새 값  2) 단위 교환(⇄)  3) 지우기  0) 뒤로",
        INFO_HEADING => "\n-- 카테고리 정보 --",
        INFO_UNIT_COUNT => "단위 수:",
        INFO_BASE_UNIT => "기준 단위:",
        INFO_HOW_IT_WORKS => {
            "변환은 입력 값을 기준 단위로 환산한 뒤 목표 단위 배율로 나누는 2단계로 계산합니다.\n\
             온도는 섭씨를 피벗으로 하는 전용 공식을 사용합니다.\n\
             데이터 용량의 KB(10³)와 KiB(2¹⁰)는 서로 다른 단위입니다."
        }
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 자동  2) 한국어  3) English",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어 설정이 저장되었습니다. 다음 실행부터 적용됩니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error:",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Pro Unit Converter ===",
        MAIN_MENU_CONVERT => "1) Unit Conversion",
        MAIN_MENU_CATEGORY_INFO => "2) Category Info",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        CONVERT_HEADING => "\n-- Unit Conversion --",
        CONVERT_PROMPT_CATEGORY => "Category number (enter = previous): ",
        CONVERT_PROMPT_FROM_UNIT => "From-unit number (enter = default): ",
        CONVERT_PROMPT_TO_UNIT => "To-unit number (enter = default): ",
        CONVERT_PROMPT_VALUE => "Value (enter = empty input): ",
        CONVERT_RESULT => "Result:",
        CONVERT_SAME_UNIT => "Input and output units are the same.",
        CONVERT_EMPTY_INPUT => "(empty)",
        CONVERT_MENU => "1) New value  2) Swap units (⇄)  3) Clear  0) Back",
        INFO_HEADING => "\n-- Category Info --",
        INFO_UNIT_COUNT => "Units:",
        INFO_BASE_UNIT => "Base unit:",
        INFO_HOW_IT_WORKS => {
            "Conversions run in two steps: into the base unit, then divided by the target factor.\n\
             Temperature uses dedicated formulas pivoting through Celsius.\n\
             In Data Storage, KB (10³) and KiB (2¹⁰) are distinct units."
        }
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) Auto  2) 한국어  3) English",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language saved. Takes effect on next run.",
        _ => return None,
    })
}
