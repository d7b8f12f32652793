//! 램프 종류 키워드 → 기본 교체 판단 규칙표.
//!
//! 규칙은 위에서부터 순서대로 평가하고 처음 일치한 규칙만 적용한다.
//! 키워드 비교는 소문자 부분 문자열 검사다.

use super::policy::ReplacementPolicy;
use super::types::{EquipmentDescription, PaybackEstimate, Priority, SavingsEstimate, YearRange};

/// 규칙 평가에 필요한 파생 입력.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// 소문자로 바꾼 종류 문자열
    pub type_lower: &'a str,
    pub age_years: f64,
    pub is_high_hours: bool,
    pub current_wattage: Option<f64>,
}

impl<'a> RuleContext<'a> {
    pub fn new(
        type_lower: &'a str,
        input: &EquipmentDescription,
        policy: &ReplacementPolicy,
    ) -> Self {
        Self {
            type_lower,
            age_years: input.age_years(),
            is_high_hours: input.annual_hours() > policy.high_hours_threshold,
            current_wattage: input.current_wattage,
        }
    }

    fn has(&self, keyword: &str) -> bool {
        self.type_lower.contains(keyword)
    }

    fn has_non_led(&self, keyword: &str) -> bool {
        self.has(keyword) && !self.has("led")
    }
}

/// 규칙이 만들어 내는 기본 판단. 사후 보정 전 단계다.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseAssessment {
    pub priority: Priority,
    pub recommended_type: String,
    pub reasoning: String,
    pub payback: PaybackEstimate,
    pub energy_savings: SavingsEstimate,
    pub when_to_replace: String,
}

impl BaseAssessment {
    fn new(
        priority: Priority,
        recommended_type: &str,
        reasoning: impl Into<String>,
        payback: YearRange,
        energy_savings: SavingsEstimate,
        when_to_replace: &str,
    ) -> Self {
        Self {
            priority,
            recommended_type: recommended_type.to_string(),
            reasoning: reasoning.into(),
            payback: PaybackEstimate::Range(payback),
            energy_savings,
            when_to_replace: when_to_replace.to_string(),
        }
    }
}

/// 규칙 한 줄: 일치 조건 + 판단 생성기.
pub struct LampRule {
    pub name: &'static str,
    pub matches: fn(&RuleContext) -> bool,
    pub assess: fn(&RuleContext, &ReplacementPolicy) -> BaseAssessment,
}

impl std::fmt::Debug for LampRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LampRule").field("name", &self.name).finish()
    }
}

const IMMEDIATELY: &str = "Immediately";

pub static RULES: &[LampRule] = &[
    LampRule {
        name: "incandescent",
        matches: |c| c.has_non_led("incandescent"),
        assess: |_, _| {
            BaseAssessment::new(
                Priority::Critical,
                "LED A19",
                "Incandescent lamps convert most of their energy to heat; \
                 an LED A19 uses roughly 85-90% less energy and lasts 15-25 times longer.",
                YearRange::new(1.0, 2.0),
                SavingsEstimate::percent(85, 90),
                IMMEDIATELY,
            )
        },
    },
    LampRule {
        name: "t12",
        matches: |c| c.has("t12"),
        assess: |c, p| {
            let when = if c.age_years > p.t12_immediate_age_years {
                IMMEDIATELY
            } else {
                "At next relamping cycle"
            };
            BaseAssessment::new(
                Priority::Critical,
                "LED T8 Tube (T12 to T8 conversion)",
                "T12 fluorescent lamps and magnetic ballasts are obsolete and no longer \
                 manufactured; replacement parts are increasingly hard to source.",
                YearRange::new(2.0, 4.0),
                SavingsEstimate::percent(50, 60),
                when,
            )
        },
    },
    LampRule {
        name: "mercury vapor",
        matches: |c| c.has("mercury vapor"),
        assess: |_, _| {
            BaseAssessment::new(
                Priority::Critical,
                "LED Fixture",
                "Mercury vapor ballasts are banned from sale under federal efficiency \
                 rules; lamps are being phased out and contain mercury.",
                YearRange::new(1.0, 3.0),
                SavingsEstimate::percent(70, 80),
                "Immediately (regulatory phase-out)",
            )
        },
    },
    LampRule {
        name: "hid",
        matches: |c| c.has("metal halide") || c.has("hps"),
        assess: |c, _| {
            let (priority, when, hours_clause) = if c.is_high_hours {
                (
                    Priority::Critical,
                    IMMEDIATELY,
                    " High operating hours make the savings substantial.",
                )
            } else {
                (Priority::High, "Within 1-2 years", "")
            };
            BaseAssessment::new(
                priority,
                "LED High-Bay / Area Light",
                format!(
                    "HID lamps lose lumen output quickly, need warm-up time and waste \
                     energy in the ballast.{hours_clause}"
                ),
                YearRange::new(2.0, 5.0),
                SavingsEstimate::percent(50, 70),
                when,
            )
        },
    },
    LampRule {
        name: "cfl",
        matches: |c| c.has("cfl"),
        assess: |c, p| {
            let when = if c.age_years > p.cfl_immediate_age_years {
                IMMEDIATELY
            } else {
                "At burnout"
            };
            BaseAssessment::new(
                Priority::High,
                "LED Equivalent",
                "CFLs contain mercury and are being discontinued; LED equivalents use \
                 less energy and last longer.",
                YearRange::new(1.0, 3.0),
                SavingsEstimate::Versus(&[(50, "CFL"), (80, "incandescent")]),
                when,
            )
        },
    },
    LampRule {
        name: "t8",
        matches: |c| c.has_non_led("t8"),
        assess: |c, _| {
            let (priority, when) = if c.is_high_hours {
                (Priority::High, "Within 1 year")
            } else {
                (Priority::Medium, "At next relamping cycle or ballast failure")
            };
            BaseAssessment::new(
                priority,
                "LED T8 Tube (Ballast Bypass)",
                "T8 fluorescent is moderately efficient, but ballast-bypass LED tubes \
                 cut energy use and remove ballast maintenance.",
                YearRange::new(2.0, 5.0),
                SavingsEstimate::percent(40, 50),
                when,
            )
        },
    },
    LampRule {
        name: "t5",
        matches: |c| c.has_non_led("t5"),
        assess: |_, _| {
            BaseAssessment::new(
                Priority::Medium,
                "LED T5 Tube or LED Fixture",
                "T5 fluorescent is already fairly efficient; LED still offers longer \
                 life and better controllability.",
                YearRange::new(3.0, 6.0),
                SavingsEstimate::percent(30, 40),
                "At end of lamp life",
            )
        },
    },
    LampRule {
        name: "halogen",
        matches: |c| c.has_non_led("halogen"),
        assess: |_, _| {
            BaseAssessment::new(
                Priority::High,
                "LED Equivalent",
                "Halogen lamps run hot and are only marginally better than incandescent.",
                YearRange::new(1.0, 3.0),
                SavingsEstimate::percent(80, 85),
                IMMEDIATELY,
            )
        },
    },
    LampRule {
        name: "led",
        matches: |c| c.has("led"),
        assess: assess_existing_led,
    },
];

/// 이미 LED인 항목. 오래되고 효율이 낮다고 추정될 때만 업그레이드를 권한다.
fn assess_existing_led(c: &RuleContext, p: &ReplacementPolicy) -> BaseAssessment {
    let efficacy = c
        .current_wattage
        .filter(|_| c.age_years > p.led_review_age_years)
        .map(|w| p.reference_lumens / w);
    match efficacy {
        Some(lm_per_w) if lm_per_w < p.min_led_efficacy => BaseAssessment::new(
            Priority::Low,
            "High-Efficiency LED",
            format!(
                "Older LED with an estimated efficacy of {lm_per_w:.0} lm/W, below the \
                 {:.0} lm/W target; current LED products offer additional savings.",
                p.min_led_efficacy
            ),
            YearRange::new(3.0, 6.0),
            SavingsEstimate::percent(20, 30),
            "At end of life or next renovation",
        ),
        _ => BaseAssessment {
            priority: Priority::Keep,
            recommended_type: "Keep Current LED".into(),
            reasoning: "Already LED technology. No replacement needed; consider controls \
                        such as occupancy sensors or dimming for additional savings."
                .into(),
            payback: PaybackEstimate::NotApplicable,
            energy_savings: SavingsEstimate::AlreadyEfficient,
            when_to_replace: "No replacement needed".into(),
        },
    }
}

/// 어떤 규칙에도 맞지 않을 때의 기본 판단.
pub fn fallback() -> BaseAssessment {
    BaseAssessment::new(
        Priority::Medium,
        "LED Equivalent",
        "Lamp type not specifically recognized; a general LED equivalent is recommended.",
        YearRange::new(2.0, 4.0),
        SavingsEstimate::percent(40, 60),
        "At end of lamp life",
    )
}

/// 처음 일치한 규칙을 찾는다.
pub fn find_rule(ctx: &RuleContext) -> Option<&'static LampRule> {
    RULES.iter().find(|rule| (rule.matches)(ctx))
}

/// 규칙표를 적용해 기본 판단을 만든다.
pub fn base_assessment(ctx: &RuleContext, policy: &ReplacementPolicy) -> BaseAssessment {
    match find_rule(ctx) {
        Some(rule) => (rule.assess)(ctx, policy),
        None => fallback(),
    }
}
