//! 교체 추천 엔진 시나리오 테스트.
use lighting_retrofit_toolbox::recommendation::{
    calculate_replacement, EquipmentDescription, FixtureCondition, Priority, ReplacementDecision,
    ReplacementPolicy,
};

fn assess(input: &EquipmentDescription) -> ReplacementDecision {
    calculate_replacement(input, &ReplacementPolicy::default())
}

#[test]
fn incandescent_is_critical() {
    let d = assess(&EquipmentDescription::new("Incandescent A19"));
    assert_eq!(d.priority, Priority::Critical);
    assert!(d.recommended_type.contains("LED A19"));
    assert_eq!(d.energy_savings_percent(), "85-90%");
    assert_eq!(d.payback_years(), "1-2 years");
    assert_eq!(d.when_to_replace, "Immediately");
}

#[test]
fn each_rule_produces_its_base_values() {
    // 기본 입력: 5년, 3650 h/yr, $0.12/kWh (보정 없음)
    let cases = [
        ("Incandescent A19", Priority::Critical, "LED A19", "85-90%", "1-2 years"),
        ("T12 Fluorescent", Priority::Critical, "LED T8 Tube (T12 to T8 conversion)", "50-60%", "2-4 years"),
        ("Mercury Vapor 175W", Priority::Critical, "LED Fixture", "70-80%", "1-3 years"),
        ("Metal Halide 400W", Priority::High, "LED High-Bay / Area Light", "50-70%", "2-5 years"),
        ("CFL 13W", Priority::High, "LED Equivalent", "50% vs CFL / 80% vs incandescent", "1-3 years"),
        ("T8 Fluorescent", Priority::Medium, "LED T8 Tube (Ballast Bypass)", "40-50%", "2-5 years"),
        ("T5 Fluorescent", Priority::Medium, "LED T5 Tube or LED Fixture", "30-40%", "3-6 years"),
        ("Halogen PAR38", Priority::High, "LED Equivalent", "80-85%", "1-3 years"),
        ("LED A19", Priority::Keep, "Keep Current LED", "Already efficient", "N/A"),
        ("Neon sign", Priority::Medium, "LED Equivalent", "40-60%", "2-4 years"),
    ];
    for (bulb, priority, recommended, savings, payback) in cases {
        let d = assess(&EquipmentDescription::new(bulb));
        assert_eq!(d.priority, priority, "{bulb}");
        assert_eq!(d.recommended_type, recommended, "{bulb}");
        assert_eq!(d.energy_savings_percent(), savings, "{bulb}");
        assert_eq!(d.payback_years(), payback, "{bulb}");
    }
}

#[test]
fn halogen_replaced_immediately() {
    let d = assess(&EquipmentDescription::new("Halogen MR16"));
    assert_eq!(d.priority, Priority::High);
    assert_eq!(d.when_to_replace, "Immediately");
}

#[test]
fn high_cost_does_not_shorten_critical_payback() {
    let mut input = EquipmentDescription::new("Incandescent A19");
    input.energy_cost = Some(0.25);
    let d = assess(&input);
    assert_eq!(d.priority, Priority::Critical);
    assert_eq!(d.payback_years(), "1-2 years");
}

#[test]
fn old_t12_replaced_immediately() {
    let mut input = EquipmentDescription::new("T12 Fluorescent");
    input.age_years = Some(12.0);
    let d = assess(&input);
    assert_eq!(d.priority, Priority::Critical);
    assert_eq!(d.when_to_replace, "Immediately");

    input.age_years = Some(4.0);
    assert_eq!(assess(&input).when_to_replace, "At next relamping cycle");
}

#[test]
fn t8_escalates_with_high_hours() {
    let mut input = EquipmentDescription::new("T8");
    assert_eq!(assess(&input).priority, Priority::Medium);
    input.hours_per_day = Some(16.0);
    input.days_per_year = Some(365.0);
    assert_eq!(assess(&input).priority, Priority::High);
}

#[test]
fn t5_escalates_with_high_hours() {
    let mut input = EquipmentDescription::new("T5HO");
    input.hours_per_day = Some(24.0);
    assert_eq!(assess(&input).priority, Priority::High);
}

#[test]
fn led_without_wattage_is_kept() {
    let d = assess(&EquipmentDescription::new("LED A19"));
    assert_eq!(d.priority, Priority::Keep);
    assert_eq!(d.recommended_type, "Keep Current LED");
    assert_eq!(d.energy_savings_percent(), "Already efficient");
}

#[test]
fn inefficient_old_led_gets_low_priority_upgrade() {
    let mut input = EquipmentDescription::new("LED Tube");
    input.current_wattage = Some(40.0);
    input.age_years = Some(8.0);
    let d = assess(&input);
    assert_eq!(d.priority, Priority::Low);
    assert_eq!(d.recommended_type, "High-Efficiency LED");
    assert_eq!(d.energy_savings_percent(), "20-30%");
}

#[test]
fn kept_led_is_never_escalated() {
    let mut input = EquipmentDescription::new("LED Panel");
    input.hours_per_day = Some(24.0);
    input.energy_cost = Some(0.35);
    assert_eq!(assess(&input).priority, Priority::Keep);
}

#[test]
fn old_led_escalates_with_hours_and_cost() {
    let mut input = EquipmentDescription::new("LED Tube");
    input.current_wattage = Some(40.0);
    input.age_years = Some(8.0);
    input.hours_per_day = Some(20.0);
    assert_eq!(assess(&input).priority, Priority::Medium);
    input.energy_cost = Some(0.30);
    assert_eq!(assess(&input).priority, Priority::High);
}

#[test]
fn poor_fixture_forces_fixture_replacement() {
    for bulb in ["T8", "CFL", "Halogen PAR38", "Metal Halide", "something else"] {
        let mut input = EquipmentDescription::new(bulb);
        input.fixture_condition = Some(FixtureCondition::Poor);
        let d = assess(&input);
        assert_ne!(d.priority, Priority::Keep);
        assert_eq!(d.recommended_type, "LED Fixture Replacement", "{bulb}");
        assert!(d.reasoning.contains("poor condition"), "{bulb}");
    }
}

#[test]
fn unknown_type_falls_back_to_generic_led() {
    for bulb in ["", "Neon sign", "???"] {
        let d = assess(&EquipmentDescription::new(bulb));
        assert_eq!(d.priority, Priority::Medium, "{bulb:?}");
        assert_eq!(d.recommended_type, "LED Equivalent");
    }
}

#[test]
fn company_notes_appended_to_reasoning() {
    let policy = ReplacementPolicy::default();
    let d = calculate_replacement(&EquipmentDescription::new("CFL"), &policy);
    let notes = d.company_specific_notes.as_deref().unwrap();
    assert!(notes.contains(&policy.general_note));
    assert!(notes.contains(&policy.controls_note));
    assert!(notes.contains(&policy.rebate_note));
    assert!(d.reasoning.ends_with(notes));
}

#[test]
fn policy_thresholds_are_injected() {
    let policy = ReplacementPolicy {
        high_hours_threshold: 2000.0,
        ..ReplacementPolicy::default()
    };
    let mut input = EquipmentDescription::new("T8");
    input.hours_per_day = Some(8.0);
    input.days_per_year = Some(300.0);
    assert_eq!(assess(&input).priority, Priority::Medium);
    assert_eq!(calculate_replacement(&input, &policy).priority, Priority::High);
}

#[test]
fn mercury_vapor_and_hid() {
    let d = assess(&EquipmentDescription::new("Mercury Vapor 175W"));
    assert_eq!(d.priority, Priority::Critical);
    assert_eq!(d.recommended_type, "LED Fixture");

    let mut hps = EquipmentDescription::new("HPS 250W");
    assert_eq!(assess(&hps).priority, Priority::High);
    hps.hours_per_day = Some(12.0);
    assert_eq!(assess(&hps).priority, Priority::Critical);
}

#[test]
fn cfl_savings_text_compares_two_baselines() {
    let mut input = EquipmentDescription::new("CFL 13W");
    let d = assess(&input);
    assert_eq!(d.energy_savings_percent(), "50% vs CFL / 80% vs incandescent");
    assert_eq!(d.when_to_replace, "At burnout");
    input.age_years = Some(6.0);
    assert_eq!(assess(&input).when_to_replace, "Immediately");
}

#[test]
fn specification_notes_follow_input_flags() {
    let mut input = EquipmentDescription::new("Halogen MR16");
    input.dimming_required = true;
    input.color_quality_important = true;
    let d = assess(&input);
    assert!(d.reasoning.contains("dimmable"));
    assert!(d.reasoning.contains("CRI"));
    assert!(!d.company_specific_notes.unwrap().contains("dimmable"));
}

#[test]
fn same_input_same_output() {
    let mut input = EquipmentDescription::new("Metal Halide 400W");
    input.energy_cost = Some(0.22);
    input.fixture_condition = Some(FixtureCondition::Fair);
    assert_eq!(assess(&input), assess(&input));
}
