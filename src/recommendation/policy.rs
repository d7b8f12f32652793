use serde::{Deserialize, Serialize};

/// 교체 판단에 쓰는 회사 정책(임계값과 고정 문구).
///
/// 엔진은 전역 상수 대신 이 값을 인자로 받는다. `config.toml`의 `[policy]`
/// 테이블로 덮어쓸 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplacementPolicy {
    /// 고운전 판정 기준 연간 운전시간 [h/yr]
    pub high_hours_threshold: f64,
    /// 고단가 판정 기준 전력 단가 [$/kWh]
    pub high_energy_cost: f64,
    /// 고단가일 때 회수기간에 곱하는 계수
    pub high_cost_payback_factor: f64,
    /// LED 최소 효율 [lm/W]
    pub min_led_efficacy: f64,
    /// 기존 LED 효율 추정에 쓰는 기준 광속 [lm]
    pub reference_lumens: f64,
    /// 이 연수를 넘은 LED만 효율 재검토 대상이다 [년]
    pub led_review_age_years: f64,
    /// T12 즉시 교체 기준 연수 [년]
    pub t12_immediate_age_years: f64,
    /// CFL 즉시 교체 기준 연수 [년]
    pub cfl_immediate_age_years: f64,
    pub general_note: String,
    pub controls_note: String,
    pub rebate_note: String,
}

impl Default for ReplacementPolicy {
    fn default() -> Self {
        Self {
            high_hours_threshold: 4000.0,
            high_energy_cost: 0.20,
            high_cost_payback_factor: 0.8,
            min_led_efficacy: 100.0,
            reference_lumens: 800.0,
            led_review_age_years: 5.0,
            t12_immediate_age_years: 10.0,
            cfl_immediate_age_years: 5.0,
            general_note: "Company policy: replace with DLC or ENERGY STAR listed LED products \
                           and keep lamp types consistent within each space."
                .into(),
            controls_note: "Consider adding occupancy sensors or daylight controls to maximize savings."
                .into(),
            rebate_note: "Check local utility rebate programs before purchasing.".into(),
        }
    }
}
