use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::economics::portfolio::{AssessedItem, PortfolioSummary};
use crate::economics::{calculate_replacement_roi, RoiInput, RoiResult};
use crate::i18n::{keys, Translator};
use crate::lamp_db;
use crate::recommendation::{
    calculate_replacement, BudgetTier, EquipmentDescription, FixtureCondition, ReplacementDecision,
    DEFAULT_ENERGY_COST,
};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Recommend,
    Roi,
    Lamps,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_RECOMMEND));
    println!("{}", tr.t(keys::MAIN_MENU_ROI));
    println!("{}", tr.t(keys::MAIN_MENU_LAMPS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Recommend),
            "2" => return Ok(MenuChoice::Roi),
            "3" => return Ok(MenuChoice::Lamps),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 교체 추천 메뉴를 처리한다.
pub fn handle_recommend(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::RECOMMEND_HEADING));
    println!("{}", tr.t(keys::HINT_BLANK_DEFAULT));
    let bulb_type = loop {
        let s = read_line(tr.t(keys::PROMPT_BULB_TYPE))?;
        if !s.trim().is_empty() {
            break s.trim().to_string();
        }
    };
    let input = EquipmentDescription {
        bulb_type,
        age_years: read_optional_f64(tr, keys::PROMPT_AGE_YEARS)?,
        hours_per_day: read_optional_f64(tr, keys::PROMPT_HOURS_PER_DAY)?,
        days_per_year: read_optional_f64(tr, keys::PROMPT_DAYS_PER_YEAR)?,
        energy_cost: read_optional_f64(tr, keys::PROMPT_ENERGY_COST)?,
        current_wattage: read_optional_f64(tr, keys::PROMPT_CURRENT_WATTAGE)?,
        fixture_condition: read_optional_choice(
            tr,
            keys::PROMPT_FIXTURE_CONDITION,
            FixtureCondition::parse,
        )?,
        dimming_required: read_yes_no(tr.t(keys::PROMPT_DIMMING))?,
        color_quality_important: read_yes_no(tr.t(keys::PROMPT_COLOR_QUALITY))?,
        budget_tier: read_optional_choice(tr, keys::PROMPT_BUDGET, BudgetTier::parse)?,
    };
    input.validate()?;
    let decision = calculate_replacement(&input, &cfg.policy);
    print_decision(tr, &decision);
    Ok(())
}

/// ROI 메뉴를 처리한다.
pub fn handle_roi(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ROI_HEADING));
    let code = read_line(tr.t(keys::PROMPT_LAMP_CODE))?;
    let lamp = if code.trim().is_empty() {
        None
    } else {
        Some(lamp_db::find_lamp(&code).ok_or_else(|| AppError::UnknownLamp(code.trim().into()))?)
    };
    let (current, replacement, cost) = match lamp {
        Some(l) => {
            println!(
                "{} ({:.0} W → {:.0} W, {}{:.2})",
                l.name, l.typical_wattage, l.led_wattage, cfg.currency_symbol, l.led_unit_cost
            );
            (l.typical_wattage, l.led_wattage, l.led_unit_cost)
        }
        None => (
            read_f64(tr, keys::PROMPT_EXISTING_WATTAGE)?,
            read_f64(tr, keys::PROMPT_REPLACEMENT_WATTAGE)?,
            read_f64(tr, keys::PROMPT_REPLACEMENT_COST)?,
        ),
    };
    let hours = read_f64(tr, keys::PROMPT_HOURS_PER_YEAR)?;
    let energy_cost =
        read_optional_f64(tr, keys::PROMPT_ENERGY_COST)?.unwrap_or(DEFAULT_ENERGY_COST);
    let install = read_f64(tr, keys::PROMPT_INSTALLATION_COST)?;
    let input = RoiInput::new(current, replacement, hours, energy_cost, cost)
        .with_installation_cost(install);
    let result = calculate_replacement_roi(input);
    print_roi(tr, cfg, &result);
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let language = match sel.trim() {
        "1" => "auto",
        "2" => "ko",
        "3" => "en",
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    cfg.language = language.to_string();
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

pub fn print_decision(tr: &Translator, decision: &ReplacementDecision) {
    println!("{} {}", tr.t(keys::RESULT_PRIORITY), decision.priority);
    println!("{} {}", tr.t(keys::RESULT_RECOMMENDED_TYPE), decision.recommended_type);
    println!("{} {}", tr.t(keys::RESULT_PAYBACK), decision.payback_years());
    println!("{} {}", tr.t(keys::RESULT_SAVINGS), decision.energy_savings_percent());
    println!("{} {}", tr.t(keys::RESULT_WHEN), decision.when_to_replace);
    println!("{} {}", tr.t(keys::RESULT_REASONING), decision.reasoning);
}

pub fn print_roi(tr: &Translator, cfg: &Config, result: &RoiResult) {
    let cur = &cfg.currency_symbol;
    println!(
        "{} {:.1} kWh/yr",
        tr.t(keys::RESULT_ANNUAL_KWH),
        result.annual_energy_savings_kwh
    );
    println!("{} {cur}{:.2}/yr", tr.t(keys::RESULT_ANNUAL_SAVINGS), result.annual_savings);
    if !result.has_positive_savings() {
        println!("{}", tr.t(keys::WARN_NO_SAVINGS));
        return;
    }
    println!("{} {:.2} yr", tr.t(keys::RESULT_PAYBACK_YEARS), result.payback_years);
    println!("{} {cur}{:.2}", tr.t(keys::RESULT_TEN_YEAR), result.ten_year_savings);
    println!("{} {:.1}%", tr.t(keys::RESULT_ROI), result.roi_percent);
}

pub fn print_lamps(tr: &Translator, cfg: &Config) {
    println!("{}", tr.t(keys::LAMPS_HEADING));
    println!(
        "{:<12} {:<26} {:>8} {:>8} {:>9}  notes",
        "code", "name", "W", "LED W", "LED cost"
    );
    for lamp in lamp_db::lamps() {
        println!(
            "{:<12} {:<26} {:>8.0} {:>8.0} {:>8}{:.2}  {}",
            lamp.code,
            lamp.name,
            lamp.typical_wattage,
            lamp.led_wattage,
            cfg.currency_symbol,
            lamp.led_unit_cost,
            lamp.notes
        );
    }
}

pub fn print_batch(
    tr: &Translator,
    cfg: &Config,
    items: &[AssessedItem],
    summary: &PortfolioSummary,
) {
    for item in items {
        println!("\n[{}] x{} - {}", item.label, item.quantity, item.input.bulb_type);
        print_decision(tr, &item.decision);
    }
    println!("{}", tr.t(keys::BATCH_SUMMARY));
    println!("{} {}", tr.t(keys::BATCH_TOTAL_FIXTURES), summary.total_fixtures);
    for (priority, count) in &summary.fixtures_by_priority {
        if *count > 0 {
            println!("  {:<9} {count}", priority.as_str());
        }
    }
    println!("{} {:.0} kWh/yr", tr.t(keys::BATCH_EST_KWH), summary.estimated_kwh_savings);
    println!(
        "{} {}{:.2}/yr",
        tr.t(keys::BATCH_EST_COST),
        cfg.currency_symbol,
        summary.estimated_cost_savings
    );
    if !summary.unpriced_items.is_empty() {
        println!("{} {}", tr.t(keys::BATCH_UNPRICED), summary.unpriced_items.join(", "));
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::Io(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, key: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(tr.t(key))?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 None(기본값 사용).
fn read_optional_f64(tr: &Translator, key: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(tr.t(key))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 None, 알 수 없는 값이면 다시 묻는다.
fn read_optional_choice<T>(
    tr: &Translator,
    key: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, AppError> {
    loop {
        let s = read_line(tr.t(key))?;
        match parse_optional_choice(&s, parse) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// `Some(None)`은 빈 입력, `None`은 인식하지 못한 입력.
fn parse_optional_choice<T>(s: &str, parse: fn(&str) -> Option<T>) -> Option<Option<T>> {
    let s = s.trim();
    if s.is_empty() {
        return Some(None);
    }
    parse(s).map(Some)
}

fn read_yes_no(prompt: &str) -> Result<bool, AppError> {
    let s = read_line(prompt)?;
    Ok(matches!(s.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_choice_blank_unknown_and_valid() {
        assert_eq!(
            parse_optional_choice("\n", FixtureCondition::parse),
            Some(None)
        );
        assert_eq!(parse_optional_choice("poo\n", FixtureCondition::parse), None);
        assert_eq!(
            parse_optional_choice(" Poor\n", FixtureCondition::parse),
            Some(Some(FixtureCondition::Poor))
        );
        assert_eq!(parse_optional_choice("cheap", BudgetTier::parse), None);
        assert_eq!(
            parse_optional_choice("low", BudgetTier::parse),
            Some(Some(BudgetTier::Low))
        );
    }
}
