use super::policy::ReplacementPolicy;
use super::rules::{self, BaseAssessment, RuleContext};
use super::types::{BudgetTier, EquipmentDescription, FixtureCondition, Priority, ReplacementDecision};

/// 설비 정보를 받아 교체 우선순위/추천 품목/회수기간을 판단한다.
///
/// 어떤 입력에도 판단을 돌려준다. 인식하지 못한 종류는 일반 LED 대체품
/// (Medium)으로 처리한다. 입출력이나 전역 상태가 없으므로 같은 입력에는
/// 항상 같은 결과가 나온다.
pub fn calculate_replacement(
    input: &EquipmentDescription,
    policy: &ReplacementPolicy,
) -> ReplacementDecision {
    let type_lower = input.bulb_type.to_lowercase();
    let ctx = RuleContext::new(&type_lower, input, policy);
    let mut base = rules::base_assessment(&ctx, policy);

    if ctx.is_high_hours {
        escalate(&mut base);
    }
    // Critical/Keep은 단가 보정 대상이 아니다 (Keep은 회수기간 자체가 없음)
    if input.energy_cost() > policy.high_energy_cost && base.priority != Priority::Critical {
        escalate(&mut base);
        base.payback = base.payback.scaled(policy.high_cost_payback_factor);
    }
    if input.fixture_condition == Some(FixtureCondition::Poor) && base.priority != Priority::Keep {
        base.recommended_type = "LED Fixture Replacement".into();
        append_sentence(
            &mut base.reasoning,
            "The existing fixture is in poor condition, so a complete fixture \
             replacement is recommended instead of a lamp-only retrofit.",
        );
    }
    if base.priority != Priority::Keep {
        for note in specification_notes(input) {
            append_sentence(&mut base.reasoning, note);
        }
    }

    let notes = company_notes(base.priority, policy);
    append_sentence(&mut base.reasoning, &notes);

    ReplacementDecision {
        priority: base.priority,
        recommended_type: base.recommended_type,
        reasoning: base.reasoning,
        payback: base.payback,
        energy_savings: base.energy_savings,
        when_to_replace: base.when_to_replace,
        company_specific_notes: Some(notes),
    }
}

/// Critical/Keep은 건드리지 않는다.
fn escalate(base: &mut BaseAssessment) {
    base.priority = base.priority.escalated();
}

fn specification_notes(input: &EquipmentDescription) -> Vec<&'static str> {
    let mut notes = Vec::new();
    if input.dimming_required {
        notes.push("Specify dimmable LED products compatible with existing controls.");
    }
    if input.color_quality_important {
        notes.push("Specify high-CRI (90+) LED products.");
    }
    if input.budget_tier == Some(BudgetTier::Low) {
        notes.push("Consider phased replacement, starting with the highest-hours areas.");
    }
    notes
}

fn company_notes(priority: Priority, policy: &ReplacementPolicy) -> String {
    let mut notes = policy.general_note.clone();
    if priority != Priority::Keep {
        append_sentence(&mut notes, &policy.controls_note);
    }
    append_sentence(&mut notes, &policy.rebate_note);
    notes
}

fn append_sentence(buf: &mut String, sentence: &str) {
    let sentence = sentence.trim();
    if sentence.is_empty() {
        return;
    }
    if !buf.is_empty() {
        buf.push(' ');
    }
    buf.push_str(sentence);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::types::{PaybackEstimate, YearRange};

    #[test]
    fn high_cost_scales_both_payback_bounds() {
        let mut input = EquipmentDescription::new("T8");
        input.energy_cost = Some(0.25);
        let d = calculate_replacement(&input, &ReplacementPolicy::default());
        assert_eq!(d.priority, Priority::High);
        match d.payback {
            PaybackEstimate::Range(YearRange { low, high }) => {
                assert!((low - 1.6).abs() < 1e-9);
                assert!((high - 4.0).abs() < 1e-9);
            }
            PaybackEstimate::NotApplicable => panic!("expected range"),
        }
        assert_eq!(d.payback_years(), "1.6-4 years");
    }

    #[test]
    fn high_cost_leaves_critical_payback_alone() {
        let policy = ReplacementPolicy::default();
        for bulb in ["Incandescent A19", "T12", "Mercury Vapor"] {
            let mut input = EquipmentDescription::new(bulb);
            let base = calculate_replacement(&input, &policy);
            input.energy_cost = Some(0.25);
            let d = calculate_replacement(&input, &policy);
            assert_eq!(d.priority, Priority::Critical, "{bulb}");
            assert_eq!(d.payback, base.payback, "{bulb}");
        }
        let mut input = EquipmentDescription::new("Incandescent A19");
        input.energy_cost = Some(0.25);
        assert_eq!(calculate_replacement(&input, &policy).payback_years(), "1-2 years");
    }

    #[test]
    fn keep_skips_controls_and_spec_notes() {
        let mut input = EquipmentDescription::new("LED A19");
        input.dimming_required = true;
        input.fixture_condition = Some(FixtureCondition::Poor);
        let policy = ReplacementPolicy::default();
        let d = calculate_replacement(&input, &policy);
        assert_eq!(d.priority, Priority::Keep);
        assert_eq!(d.recommended_type, "Keep Current LED");
        assert!(!d.reasoning.contains(&policy.controls_note));
        assert!(!d.reasoning.contains("dimmable"));
        assert!(d.reasoning.contains(&policy.rebate_note));
    }

    #[test]
    fn empty_policy_notes_are_skipped() {
        let policy = ReplacementPolicy {
            general_note: String::new(),
            controls_note: String::new(),
            ..ReplacementPolicy::default()
        };
        let d = calculate_replacement(&EquipmentDescription::new("cfl"), &policy);
        assert_eq!(d.company_specific_notes.as_deref(), Some(policy.rebate_note.as_str()));
    }
}
