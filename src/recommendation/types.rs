use serde::{Deserialize, Serialize};
use std::fmt;

/// 교체 긴급도. 선언 순서가 심각도 순서다(Keep < Low < ... < Critical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Keep,
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 5] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
        Priority::Keep,
    ];

    /// 한 단계 올린다. Low→Medium, Medium→High 만 움직이고 나머지는 그대로다.
    pub fn escalated(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            other => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Keep => "Keep",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 등기구 외관/기계적 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixtureCondition {
    Good,
    Fair,
    Poor,
}

impl FixtureCondition {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "good" => Some(FixtureCondition::Good),
            "fair" => Some(FixtureCondition::Fair),
            "poor" => Some(FixtureCondition::Poor),
            _ => None,
        }
    }
}

/// 예산 수준.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

impl BudgetTier {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Some(BudgetTier::Low),
            "medium" => Some(BudgetTier::Medium),
            "high" => Some(BudgetTier::High),
            _ => None,
        }
    }
}

pub const DEFAULT_AGE_YEARS: f64 = 5.0;
pub const DEFAULT_HOURS_PER_DAY: f64 = 10.0;
pub const DEFAULT_DAYS_PER_YEAR: f64 = 365.0;
/// 기본 전력 단가 [$/kWh]
pub const DEFAULT_ENERGY_COST: f64 = 0.12;

/// 입력 검증 오류. 엔진은 이를 사용하지 않고 CLI 입력 단계에서만 쓴다.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InputError {
    #[error("램프 종류가 비어 있습니다")]
    EmptyType,
    #[error("{field} 값이 올바르지 않습니다: {value}")]
    InvalidNumber { field: &'static str, value: f64 },
}

/// 교체 판단 입력.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentDescription {
    /// 램프/설비 종류 (자유 텍스트, 예: "T8 Fluorescent")
    pub bulb_type: String,
    /// 사용 연수 [년]
    pub age_years: Option<f64>,
    /// 일 운전시간 [h/day]
    pub hours_per_day: Option<f64>,
    /// 연간 운전일수 [day/yr]
    pub days_per_year: Option<f64>,
    /// 전력 단가 [$/kWh]
    pub energy_cost: Option<f64>,
    /// 현재 소비전력 [W]
    pub current_wattage: Option<f64>,
    pub fixture_condition: Option<FixtureCondition>,
    pub dimming_required: bool,
    pub color_quality_important: bool,
    pub budget_tier: Option<BudgetTier>,
}

impl EquipmentDescription {
    pub fn new(bulb_type: impl Into<String>) -> Self {
        Self {
            bulb_type: bulb_type.into(),
            ..Default::default()
        }
    }

    pub fn age_years(&self) -> f64 {
        self.age_years.unwrap_or(DEFAULT_AGE_YEARS)
    }

    pub fn hours_per_day(&self) -> f64 {
        self.hours_per_day.unwrap_or(DEFAULT_HOURS_PER_DAY)
    }

    pub fn days_per_year(&self) -> f64 {
        self.days_per_year.unwrap_or(DEFAULT_DAYS_PER_YEAR)
    }

    pub fn energy_cost(&self) -> f64 {
        self.energy_cost.unwrap_or(DEFAULT_ENERGY_COST)
    }

    /// 연간 운전시간 [h/yr]
    pub fn annual_hours(&self) -> f64 {
        self.hours_per_day() * self.days_per_year()
    }

    /// 음수/비유한 값이나 빈 종류 문자열을 거른다.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.bulb_type.trim().is_empty() {
            return Err(InputError::EmptyType);
        }
        let fields = [
            ("age_years", self.age_years),
            ("hours_per_day", self.hours_per_day),
            ("days_per_year", self.days_per_year),
            ("energy_cost", self.energy_cost),
            ("current_wattage", self.current_wattage),
        ];
        for (field, value) in fields {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(InputError::InvalidNumber { field, value: v });
                }
            }
        }
        if let Some(h) = self.hours_per_day {
            if h > 24.0 {
                return Err(InputError::InvalidNumber {
                    field: "hours_per_day",
                    value: h,
                });
            }
        }
        Ok(())
    }
}

/// 연 단위 범위. 표시 직전까지 숫자로 유지한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRange {
    pub low: f64,
    pub high: f64,
}

impl YearRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// 양 끝을 같은 비율로 조정한다.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            low: self.low * factor,
            high: self.high * factor,
        }
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} years", round1(self.low), round1(self.high))
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// 회수기간 추정.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PaybackEstimate {
    Range(YearRange),
    /// 교체 불필요 항목
    NotApplicable,
}

impl PaybackEstimate {
    pub fn scaled(self, factor: f64) -> Self {
        match self {
            PaybackEstimate::Range(r) => PaybackEstimate::Range(r.scaled(factor)),
            PaybackEstimate::NotApplicable => PaybackEstimate::NotApplicable,
        }
    }
}

impl fmt::Display for PaybackEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaybackEstimate::Range(r) => r.fmt(f),
            PaybackEstimate::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// 에너지 절감률 추정.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SavingsEstimate {
    /// low-high %
    Percent { low: u8, high: u8 },
    /// 비교 대상별 절감률 (예: CFL 대비 50%, 백열등 대비 80%)
    Versus(&'static [(u8, &'static str)]),
    AlreadyEfficient,
}

impl SavingsEstimate {
    pub const fn percent(low: u8, high: u8) -> Self {
        SavingsEstimate::Percent { low, high }
    }

    /// 포트폴리오 합산용 대표 절감률(0~1). 범위의 중간값을 쓴다.
    pub fn midpoint_fraction(&self) -> f64 {
        match self {
            SavingsEstimate::Percent { low, high } => (*low as f64 + *high as f64) / 200.0,
            SavingsEstimate::Versus(pairs) => pairs
                .first()
                .map(|(pct, _)| *pct as f64 / 100.0)
                .unwrap_or(0.0),
            SavingsEstimate::AlreadyEfficient => 0.0,
        }
    }
}

impl fmt::Display for SavingsEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SavingsEstimate::Percent { low, high } => write!(f, "{low}-{high}%"),
            SavingsEstimate::Versus(pairs) => {
                for (i, (pct, baseline)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" / ")?;
                    }
                    write!(f, "{pct}% vs {baseline}")?;
                }
                Ok(())
            }
            SavingsEstimate::AlreadyEfficient => f.write_str("Already efficient"),
        }
    }
}

/// 교체 판단 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplacementDecision {
    pub priority: Priority,
    pub recommended_type: String,
    /// 판단 근거 + 사양/회사 정책 문구가 이어 붙은 설명
    pub reasoning: String,
    pub payback: PaybackEstimate,
    pub energy_savings: SavingsEstimate,
    pub when_to_replace: String,
    pub company_specific_notes: Option<String>,
}

impl ReplacementDecision {
    /// 표시용 회수기간 문자열 (예: "1-2 years")
    pub fn payback_years(&self) -> String {
        self.payback.to_string()
    }

    /// 표시용 절감률 문자열 (예: "85-90%", "Already efficient")
    pub fn energy_savings_percent(&self) -> String {
        self.energy_savings.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escalation_stops_at_high() {
        assert_eq!(Priority::Low.escalated(), Priority::Medium);
        assert_eq!(Priority::Medium.escalated(), Priority::High);
        assert_eq!(Priority::High.escalated(), Priority::High);
        assert_eq!(Priority::Critical.escalated(), Priority::Critical);
        assert_eq!(Priority::Keep.escalated(), Priority::Keep);
    }

    #[test]
    fn priority_ordering_matches_severity() {
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::Low > Priority::Keep);
    }

    #[test]
    fn scaled_range_keeps_both_bounds() {
        let r = YearRange::new(2.0, 4.0).scaled(0.8);
        assert_eq!(r.to_string(), "1.6-3.2 years");
        assert_eq!(YearRange::new(1.0, 2.0).to_string(), "1-2 years");
    }

    #[test]
    fn versus_savings_display() {
        let s = SavingsEstimate::Versus(&[(50, "CFL"), (80, "incandescent")]);
        assert_eq!(s.to_string(), "50% vs CFL / 80% vs incandescent");
    }

    #[test]
    fn validate_rejects_negative_age() {
        let mut input = EquipmentDescription::new("T8");
        input.age_years = Some(-1.0);
        assert_eq!(
            input.validate(),
            Err(InputError::InvalidNumber {
                field: "age_years",
                value: -1.0
            })
        );
        assert_eq!(
            EquipmentDescription::new("  ").validate(),
            Err(InputError::EmptyType)
        );
    }
}
