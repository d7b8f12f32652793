use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_RECOMMEND: &str = "main_menu.recommend";
    pub const MAIN_MENU_ROI: &str = "main_menu.roi";
    pub const MAIN_MENU_LAMPS: &str = "main_menu.lamps";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const HINT_BLANK_DEFAULT: &str = "hint.blank_default";

    pub const RECOMMEND_HEADING: &str = "recommend.heading";
    pub const PROMPT_BULB_TYPE: &str = "prompt.bulb_type";
    pub const PROMPT_AGE_YEARS: &str = "prompt.age_years";
    pub const PROMPT_HOURS_PER_DAY: &str = "prompt.hours_per_day";
    pub const PROMPT_DAYS_PER_YEAR: &str = "prompt.days_per_year";
    pub const PROMPT_ENERGY_COST: &str = "prompt.energy_cost";
    pub const PROMPT_CURRENT_WATTAGE: &str = "prompt.current_wattage";
    pub const PROMPT_FIXTURE_CONDITION: &str = "prompt.fixture_condition";
    pub const PROMPT_DIMMING: &str = "prompt.dimming";
    pub const PROMPT_COLOR_QUALITY: &str = "prompt.color_quality";
    pub const PROMPT_BUDGET: &str = "prompt.budget";

    pub const RESULT_PRIORITY: &str = "result.priority";
    pub const RESULT_RECOMMENDED_TYPE: &str = "result.recommended_type";
    pub const RESULT_PAYBACK: &str = "result.payback";
    pub const RESULT_SAVINGS: &str = "result.savings";
    pub const RESULT_WHEN: &str = "result.when";
    pub const RESULT_REASONING: &str = "result.reasoning";

    pub const ROI_HEADING: &str = "roi.heading";
    pub const PROMPT_LAMP_CODE: &str = "prompt.lamp_code";
    pub const PROMPT_EXISTING_WATTAGE: &str = "prompt.existing_wattage";
    pub const PROMPT_REPLACEMENT_WATTAGE: &str = "prompt.replacement_wattage";
    pub const PROMPT_HOURS_PER_YEAR: &str = "prompt.hours_per_year";
    pub const PROMPT_REPLACEMENT_COST: &str = "prompt.replacement_cost";
    pub const PROMPT_INSTALLATION_COST: &str = "prompt.installation_cost";
    pub const RESULT_ANNUAL_KWH: &str = "result.annual_kwh";
    pub const RESULT_ANNUAL_SAVINGS: &str = "result.annual_savings";
    pub const RESULT_PAYBACK_YEARS: &str = "result.payback_years";
    pub const RESULT_TEN_YEAR: &str = "result.ten_year";
    pub const RESULT_ROI: &str = "result.roi";
    pub const WARN_NO_SAVINGS: &str = "warn.no_savings";

    pub const LAMPS_HEADING: &str = "lamps.heading";

    pub const BATCH_SUMMARY: &str = "batch.summary";
    pub const BATCH_TOTAL_FIXTURES: &str = "batch.total_fixtures";
    pub const BATCH_EST_KWH: &str = "batch.est_kwh";
    pub const BATCH_EST_COST: &str = "batch.est_cost";
    pub const BATCH_UNPRICED: &str = "batch.unpriced";

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
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
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
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        if overrides.is_some() {
            tracing::debug!(lang = lang_code, "언어팩 로드");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순, 영어에 없으면 한국어로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
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
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: [section] key = "value".
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

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Lighting Retrofit Toolbox ===",
        MAIN_MENU_RECOMMEND => "1) 교체 추천",
        MAIN_MENU_ROI => "2) 투자 회수(ROI) 계산",
        MAIN_MENU_LAMPS => "3) 램프 종류 목록",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        HINT_BLANK_DEFAULT => "(엔터 입력 시 기본값 사용)",
        RECOMMEND_HEADING => "\n-- 교체 추천 --",
        PROMPT_BULB_TYPE => "램프 종류 (예: T8 Fluorescent, Metal Halide): ",
        PROMPT_AGE_YEARS => "사용 연수 [년] (기본 5): ",
        PROMPT_HOURS_PER_DAY => "일 점등시간 [h] (기본 10): ",
        PROMPT_DAYS_PER_YEAR => "연간 사용일수 (기본 365): ",
        PROMPT_ENERGY_COST => "전력 단가 [$/kWh] (기본 0.12): ",
        PROMPT_CURRENT_WATTAGE => "현재 소비전력 [W] (모르면 엔터): ",
        PROMPT_FIXTURE_CONDITION => "등기구 상태 (good/fair/poor, 모르면 엔터): ",
        PROMPT_DIMMING => "디밍 필요 여부 (y/N): ",
        PROMPT_COLOR_QUALITY => "연색성 중요 여부 (y/N): ",
        PROMPT_BUDGET => "예산 수준 (low/medium/high, 모르면 엔터): ",
        RESULT_PRIORITY => "우선순위:",
        RESULT_RECOMMENDED_TYPE => "추천 품목:",
        RESULT_PAYBACK => "예상 회수기간:",
        RESULT_SAVINGS => "예상 절감률:",
        RESULT_WHEN => "교체 시기:",
        RESULT_REASONING => "판단 근거:",
        ROI_HEADING => "\n-- 투자 회수(ROI) 계산 --",
        PROMPT_LAMP_CODE => "램프 코드 (목록의 코드, 직접 입력하려면 엔터): ",
        PROMPT_EXISTING_WATTAGE => "기존 소비전력 [W]: ",
        PROMPT_REPLACEMENT_WATTAGE => "교체품 소비전력 [W]: ",
        PROMPT_HOURS_PER_YEAR => "연간 운전시간 [h]: ",
        PROMPT_REPLACEMENT_COST => "교체품 가격 [$]: ",
        PROMPT_INSTALLATION_COST => "설치비 [$] (없으면 0): ",
        RESULT_ANNUAL_KWH => "연간 절감 전력량:",
        RESULT_ANNUAL_SAVINGS => "연간 절감액:",
        RESULT_PAYBACK_YEARS => "단순 회수기간:",
        RESULT_TEN_YEAR => "10년 순절감액:",
        RESULT_ROI => "10년 ROI:",
        WARN_NO_SAVINGS => "교체품 소비전력이 기존 이상이라 절감이 없습니다. 회수기간을 계산할 수 없습니다.",
        LAMPS_HEADING => "\n-- 램프 종류 --",
        BATCH_SUMMARY => "\n== 재고 요약 ==",
        BATCH_TOTAL_FIXTURES => "총 수량:",
        BATCH_EST_KWH => "추정 연간 절감 전력량:",
        BATCH_EST_COST => "추정 연간 절감액:",
        BATCH_UNPRICED => "소비전력 미상으로 합산 제외:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) auto  2) 한국어  3) English",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어 설정이 변경되었습니다:",
        _ => "???",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Lighting Retrofit Toolbox ===",
        MAIN_MENU_RECOMMEND => "1) Replacement recommendation",
        MAIN_MENU_ROI => "2) Replacement ROI",
        MAIN_MENU_LAMPS => "3) Lamp types",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid selection, try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        HINT_BLANK_DEFAULT => "(press enter for the default)",
        RECOMMEND_HEADING => "\n-- Replacement recommendation --",
        PROMPT_BULB_TYPE => "Lamp type (e.g. T8 Fluorescent, Metal Halide): ",
        PROMPT_AGE_YEARS => "Age [years] (default 5): ",
        PROMPT_HOURS_PER_DAY => "Hours per day (default 10): ",
        PROMPT_DAYS_PER_YEAR => "Days per year (default 365): ",
        PROMPT_ENERGY_COST => "Energy cost [$/kWh] (default 0.12): ",
        PROMPT_CURRENT_WATTAGE => "Current wattage [W] (enter if unknown): ",
        PROMPT_FIXTURE_CONDITION => "Fixture condition (good/fair/poor, enter if unknown): ",
        PROMPT_DIMMING => "Dimming required? (y/N): ",
        PROMPT_COLOR_QUALITY => "Color quality important? (y/N): ",
        PROMPT_BUDGET => "Budget tier (low/medium/high, enter if unknown): ",
        RESULT_PRIORITY => "Priority:",
        RESULT_RECOMMENDED_TYPE => "Recommended:",
        RESULT_PAYBACK => "Payback:",
        RESULT_SAVINGS => "Energy savings:",
        RESULT_WHEN => "When to replace:",
        RESULT_REASONING => "Reasoning:",
        ROI_HEADING => "\n-- Replacement ROI --",
        PROMPT_LAMP_CODE => "Lamp code (from the list, enter to type wattages): ",
        PROMPT_EXISTING_WATTAGE => "Existing wattage [W]: ",
        PROMPT_REPLACEMENT_WATTAGE => "Replacement wattage [W]: ",
        PROMPT_HOURS_PER_YEAR => "Operating hours per year: ",
        PROMPT_REPLACEMENT_COST => "Replacement cost [$]: ",
        PROMPT_INSTALLATION_COST => "Installation cost [$] (0 if none): ",
        RESULT_ANNUAL_KWH => "Annual energy savings:",
        RESULT_ANNUAL_SAVINGS => "Annual savings:",
        RESULT_PAYBACK_YEARS => "Simple payback:",
        RESULT_TEN_YEAR => "10-year net savings:",
        RESULT_ROI => "10-year ROI:",
        WARN_NO_SAVINGS => "Replacement wattage is not lower than the current wattage; there is no payback.",
        LAMPS_HEADING => "\n-- Lamp types --",
        BATCH_SUMMARY => "\n== Inventory summary ==",
        BATCH_TOTAL_FIXTURES => "Total fixtures:",
        BATCH_EST_KWH => "Estimated annual energy savings:",
        BATCH_EST_COST => "Estimated annual cost savings:",
        BATCH_UNPRICED => "Excluded (unknown wattage):",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) auto  2) 한국어  3) English",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("ko-KR", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-us")), "en");
    }

    #[test]
    fn pack_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("en.toml"),
            "[result]\npriority = \"Urgency:\"\n",
        )
        .unwrap();
        let tr = Translator::new_with_pack("en", dir.path().to_str());
        assert_eq!(tr.t(keys::RESULT_PRIORITY), "Urgency:");
        assert_eq!(tr.t(keys::RESULT_PAYBACK), "Payback:");
    }

    #[test]
    fn unknown_key_uses_placeholder() {
        let tr = Translator::new("en");
        assert_eq!(tr.language(), Language::En);
        assert_eq!(tr.t("no.such.key"), "???");
    }
}
