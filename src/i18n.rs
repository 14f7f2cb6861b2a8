use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_COMPOSITION: &str = "main_menu.composition";
    pub const MAIN_MENU_PRESET: &str = "main_menu.preset";
    pub const MAIN_MENU_RESULTS: &str = "main_menu.results";
    pub const MAIN_MENU_SUMMARY: &str = "main_menu.summary";
    pub const MAIN_MENU_LIMITS: &str = "main_menu.limits";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const COMPOSITION_HEADING: &str = "composition.heading";
    pub const COMPOSITION_HINT: &str = "composition.hint";
    pub const COMPOSITION_TOTAL_OK: &str = "composition.total_ok";
    pub const COMPOSITION_TOTAL_WARN: &str = "composition.total_warn";
    pub const COMPOSITION_CALCULATED: &str = "composition.calculated";
    pub const COMPOSITION_INVALID: &str = "composition.invalid";

    pub const PRESET_HEADING: &str = "preset.heading";
    pub const PRESET_LOADED: &str = "preset.loaded";

    pub const RESULTS_NEED_CALC: &str = "results.need_calc";
    pub const RESULTS_COMPOSITION_HEADING: &str = "results.composition_heading";
    pub const RESULTS_PROPERTIES_HEADING: &str = "results.properties_heading";
    pub const RESULTS_EXPORT_PROMPT: &str = "results.export_prompt";
    pub const RESULTS_EXPORTED: &str = "results.exported";
    pub const RESULTS_PROMPT_PROJECT: &str = "results.prompt_project";
    pub const RESULTS_PROMPT_SOURCE: &str = "results.prompt_source";
    pub const RESULTS_PROMPT_ANALYST: &str = "results.prompt_analyst";

    pub const SUMMARY_SUITABLE: &str = "summary.suitable";
    pub const SUMMARY_NOT_SUITABLE: &str = "summary.not_suitable";
    pub const SUMMARY_DETAIL_HEADING: &str = "summary.detail_heading";

    pub const LIMITS_HEADING: &str = "limits.heading";
    pub const LIMITS_OPTIONS: &str = "limits.options";
    pub const LIMITS_PROMPT_KEY: &str = "limits.prompt_key";
    pub const LIMITS_PROMPT_MIN: &str = "limits.prompt_min";
    pub const LIMITS_PROMPT_MAX: &str = "limits.prompt_max";
    pub const LIMITS_UNKNOWN_KEY: &str = "limits.unknown_key";
    pub const LIMITS_RESET_DONE: &str = "limits.reset_done";
    pub const LIMITS_SI_NOTE: &str = "limits.si_note";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_LANGUAGE_SAVED: &str = "settings.language_saved";

    pub const COL_PROPERTY: &str = "column.property";
    pub const COL_VALUE: &str = "column.value";
    pub const COL_UNIT: &str = "column.unit";
    pub const COL_COMPONENT: &str = "column.component";
    pub const COL_FORMULA: &str = "column.formula";
    pub const COL_MOL_PERCENT: &str = "column.mol_percent";
    pub const COL_RANGE: &str = "column.range";
    pub const COL_STATUS: &str = "column.status";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
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
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
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

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)).unwrap_or("[missing translation]"),
            Language::En => en(key).unwrap_or("[missing translation]"),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
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
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: 중첩 테이블 또는 `"a.b" = "value"` 형태.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
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

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        MAIN_MENU_TITLE => "\n=== 가스터빈 연료 분석기 ===",
        MAIN_MENU_COMPOSITION => "1) 조성 입력 및 계산",
        MAIN_MENU_PRESET => "2) 프리셋 불러오기",
        MAIN_MENU_RESULTS => "3) 계산 결과",
        MAIN_MENU_SUMMARY => "4) 적합성 요약",
        MAIN_MENU_LIMITS => "5) 허용 범위 설정",
        MAIN_MENU_UNIT_CONVERSION => "6) 단위 변환기",
        MAIN_MENU_SETTINGS => "7) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        COMPOSITION_HEADING => "\n-- 가스 조성 (mol%) --",
        COMPOSITION_HINT => "각 성분의 mol%를 입력하세요. 엔터는 현재 값을 유지합니다.",
        COMPOSITION_TOTAL_OK => "합계:",
        COMPOSITION_TOTAL_WARN => "합계가 100%가 아닙니다(정규화하여 계산):",
        COMPOSITION_CALCULATED => "계산 완료. 결과 메뉴에서 확인하세요.",
        COMPOSITION_INVALID => "유효한 조성이 없습니다.",
        PRESET_HEADING => "\n-- 프리셋 --",
        PRESET_LOADED => "프리셋을 불러와 계산했습니다:",
        RESULTS_NEED_CALC => "먼저 조성을 입력하고 계산하세요.",
        RESULTS_COMPOSITION_HEADING => "\n[가스 조성]",
        RESULTS_PROPERTIES_HEADING => "\n[계산 물성]",
        RESULTS_EXPORT_PROMPT => "보고서 저장 경로(.csv/.json, 엔터=건너뜀): ",
        RESULTS_EXPORTED => "보고서를 저장했습니다:",
        RESULTS_PROMPT_PROJECT => "프로젝트명: ",
        RESULTS_PROMPT_SOURCE => "시료 출처: ",
        RESULTS_PROMPT_ANALYST => "분석자: ",
        SUMMARY_SUITABLE => "가스터빈 사용 적합",
        SUMMARY_NOT_SUITABLE => "가스터빈 사용 부적합",
        SUMMARY_DETAIL_HEADING => "\n[상세 평가]",
        LIMITS_HEADING => "\n-- 허용 범위 --",
        LIMITS_OPTIONS => "1) 범위 변경  2) 항목 기본값 복원  3) 전체 기본값 복원  4) 항목 제거",
        LIMITS_PROMPT_KEY => "항목 키(wobbe_lower, lhv_vol, sg, mn, h2, co2_n2, h2s): ",
        LIMITS_PROMPT_MIN => "최소값(SI): ",
        LIMITS_PROMPT_MAX => "최대값(SI): ",
        LIMITS_UNKNOWN_KEY => "알 수 없는 항목 키입니다.",
        LIMITS_RESET_DONE => "기본값으로 복원했습니다.",
        LIMITS_SI_NOTE => "범위는 SI 기준으로 저장/판정됩니다.",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 온도  2) 밀도  3) 질량 발열량  4) 체적 발열량/Wobbe",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: MJ/kg, kg/m3, C): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: Btu/lb, lb/ft3, F): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 표시 단위계:",
        SETTINGS_OPTIONS => "1) SI  2) US  3) 한국어  4) English  5) 언어 자동(시스템)",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "표시 단위계가 변경되었습니다:",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어(설정값/사용 중):",
        SETTINGS_LANGUAGE_SAVED => "언어 설정을 저장했습니다(다음 실행부터 적용):",
        COL_PROPERTY => "물성",
        COL_VALUE => "값",
        COL_UNIT => "단위",
        COL_COMPONENT => "성분",
        COL_FORMULA => "분자식",
        COL_MOL_PERCENT => "mol%",
        COL_RANGE => "범위",
        COL_STATUS => "판정",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        MAIN_MENU_TITLE => "\n=== Gas Turbine Fuel Analyzer ===",
        MAIN_MENU_COMPOSITION => "1) Enter composition and calculate",
        MAIN_MENU_PRESET => "2) Load preset",
        MAIN_MENU_RESULTS => "3) Results",
        MAIN_MENU_SUMMARY => "4) Suitability summary",
        MAIN_MENU_LIMITS => "5) Acceptance limits",
        MAIN_MENU_UNIT_CONVERSION => "6) Unit converter",
        MAIN_MENU_SETTINGS => "7) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        COMPOSITION_HEADING => "\n-- Gas Composition (mol%) --",
        COMPOSITION_HINT => "Enter mol% for each component. Press enter to keep the current value.",
        COMPOSITION_TOTAL_OK => "Total:",
        COMPOSITION_TOTAL_WARN => "Total is not 100% (normalized for calculation):",
        COMPOSITION_CALCULATED => "Calculation complete. See the Results menu.",
        COMPOSITION_INVALID => "Invalid composition.",
        PRESET_HEADING => "\n-- Presets --",
        PRESET_LOADED => "Preset loaded and calculated:",
        RESULTS_NEED_CALC => "Enter composition and calculate first.",
        RESULTS_COMPOSITION_HEADING => "\n[Gas Composition]",
        RESULTS_PROPERTIES_HEADING => "\n[Calculated Properties]",
        RESULTS_EXPORT_PROMPT => "Report path (.csv/.json, enter to skip): ",
        RESULTS_EXPORTED => "Report written:",
        RESULTS_PROMPT_PROJECT => "Project: ",
        RESULTS_PROMPT_SOURCE => "Sample source: ",
        RESULTS_PROMPT_ANALYST => "Analyst: ",
        SUMMARY_SUITABLE => "SUITABLE FOR TURBINE USE",
        SUMMARY_NOT_SUITABLE => "NOT SUITABLE FOR TURBINE USE",
        SUMMARY_DETAIL_HEADING => "\n[Detailed Assessment]",
        LIMITS_HEADING => "\n-- Acceptance Limits --",
        LIMITS_OPTIONS => "1) Change range  2) Reset item  3) Reset all  4) Remove item",
        LIMITS_PROMPT_KEY => "Limit key (wobbe_lower, lhv_vol, sg, mn, h2, co2_n2, h2s): ",
        LIMITS_PROMPT_MIN => "Minimum (SI): ",
        LIMITS_PROMPT_MAX => "Maximum (SI): ",
        LIMITS_UNKNOWN_KEY => "Unknown limit key.",
        LIMITS_RESET_DONE => "Reset to defaults.",
        LIMITS_SI_NOTE => "Limits are stored and evaluated in SI units.",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Temperature  2) Density  3) Heating value (mass)  4) Heating value (volume)/Wobbe",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: MJ/kg, kg/m3, C): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: Btu/lb, lb/ft3, F): ",
        UNIT_CONVERSION_RESULT => "Result:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current display units:",
        SETTINGS_OPTIONS => "1) SI  2) US  3) Korean  4) English  5) Language auto (system)",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; unit system unchanged.",
        SETTINGS_SAVED => "Display units changed to:",
        SETTINGS_CURRENT_LANGUAGE => "Language (configured/active):",
        SETTINGS_LANGUAGE_SAVED => "Language saved (applies from next start):",
        COL_PROPERTY => "Property",
        COL_VALUE => "Value",
        COL_UNIT => "Unit",
        COL_COMPONENT => "Component",
        COL_FORMULA => "Formula",
        COL_MOL_PERCENT => "Mol%",
        COL_RANGE => "Range",
        COL_STATUS => "Status",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_and_korean_builtins() {
        let en = Translator::new("en-us");
        assert_eq!(en.t(keys::COL_PROPERTY), "Property");
        let ko = Translator::new("ko-KR");
        assert_eq!(ko.language(), Language::Ko);
        assert_eq!(ko.language().as_code(), "ko");
        assert_eq!(en.language().as_code(), "en");
        assert_eq!(ko.t(keys::COL_PROPERTY), "물성");
    }

    #[test]
    fn unknown_key_is_marked() {
        let en = Translator::new("en");
        assert_eq!(en.t("no.such.key"), "[missing translation]");
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language(Some("ko"), Some("en")), "ko");
        assert_eq!(resolve_language(Some("auto"), Some("en-US")), "en");
    }

    #[test]
    fn nested_pack_flattens_keys() {
        let map = parse_toml_to_map("[column]\nproperty = \"Eigenschaft\"\n").unwrap();
        assert_eq!(map.get("column.property").map(String::as_str), Some("Eigenschaft"));
    }
}
