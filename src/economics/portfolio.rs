use crate::lamp_db;
use crate::recommendation::{EquipmentDescription, Priority, ReplacementDecision};

/// 평가가 끝난 재고 항목 하나.
#[derive(Debug, Clone)]
pub struct AssessedItem {
    pub label: String,
    pub quantity: u32,
    pub input: EquipmentDescription,
    pub decision: ReplacementDecision,
}

impl AssessedItem {
    /// 항목 기준 소비전력 [W]. 입력값이 없으면 램프 테이블의 대표값을 쓴다.
    /// 테이블 조회는 코드(`T8-4FT`) 또는 전체 이름과 정확히 일치해야 한다.
    pub fn baseline_wattage(&self) -> Option<f64> {
        self.input
            .current_wattage
            .or_else(|| lamp_db::find_lamp(&self.input.bulb_type).map(|l| l.typical_wattage))
    }

    /// 추정 연간 절감 전력량 [kWh/yr]. 소비전력을 알 수 없으면 None.
    pub fn estimated_kwh_savings(&self) -> Option<f64> {
        let watts = self.baseline_wattage()?;
        let fraction = self.decision.energy_savings.midpoint_fraction();
        Some(watts * fraction * self.input.annual_hours() / 1000.0 * self.quantity as f64)
    }

    pub fn estimated_cost_savings(&self) -> Option<f64> {
        self.estimated_kwh_savings()
            .map(|kwh| kwh * self.input.energy_cost())
    }
}

/// 재고 전체 요약.
#[derive(Debug, Clone, Default)]
pub struct PortfolioSummary {
    /// 우선순위별 수량 (Critical → Keep 순)
    pub fixtures_by_priority: Vec<(Priority, u32)>,
    pub total_fixtures: u32,
    pub estimated_kwh_savings: f64,
    pub estimated_cost_savings: f64,
    /// 소비전력을 몰라 절감액 합산에서 빠진 항목 라벨
    pub unpriced_items: Vec<String>,
}

/// 평가 결과를 우선순위별 수량과 추정 절감액으로 집계한다.
pub fn summarize(items: &[AssessedItem]) -> PortfolioSummary {
    let mut summary = PortfolioSummary {
        fixtures_by_priority: Priority::ALL.iter().map(|p| (*p, 0)).collect(),
        ..Default::default()
    };
    for item in items {
        if let Some(slot) = summary
            .fixtures_by_priority
            .iter_mut()
            .find(|(p, _)| *p == item.decision.priority)
        {
            slot.1 = slot.1.saturating_add(item.quantity);
        }
        summary.total_fixtures = summary.total_fixtures.saturating_add(item.quantity);
        match (item.estimated_kwh_savings(), item.estimated_cost_savings()) {
            (Some(kwh), Some(cost)) => {
                summary.estimated_kwh_savings += kwh;
                summary.estimated_cost_savings += cost;
            }
            _ => summary.unpriced_items.push(item.label.clone()),
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::{calculate_replacement, ReplacementPolicy};

    fn item(label: &str, quantity: u32, input: EquipmentDescription) -> AssessedItem {
        let decision = calculate_replacement(&input, &ReplacementPolicy::default());
        AssessedItem {
            label: label.into(),
            quantity,
            input,
            decision,
        }
    }

    #[test]
    fn counts_and_savings() {
        let mut t8 = EquipmentDescription::new("T8-4FT");
        t8.hours_per_day = Some(10.0);
        t8.days_per_year = Some(250.0);
        let items = vec![
            item("office", 10, t8),
            item("lobby", 4, EquipmentDescription::new("LED A19")),
            item("sign", 1, EquipmentDescription::new("neon")),
        ];
        let s = summarize(&items);
        assert_eq!(s.total_fixtures, 15);
        let count = |p: Priority| {
            s.fixtures_by_priority
                .iter()
                .find(|(q, _)| *q == p)
                .map(|(_, n)| *n)
        };
        assert_eq!(count(Priority::Medium), Some(11));
        assert_eq!(count(Priority::Keep), Some(4));
        // T8: 30 W * 45% * 2500 h / 1000 * 10 = 337.5 kWh
        assert!((s.estimated_kwh_savings - 337.5).abs() < 1e-9);
        assert!((s.estimated_cost_savings - 40.5).abs() < 1e-9);
        assert_eq!(s.unpriced_items, vec!["lobby".to_string(), "sign".to_string()]);
    }

    #[test]
    fn fixture_counts_saturate() {
        let items = vec![
            item("a", u32::MAX, EquipmentDescription::new("T8")),
            item("b", u32::MAX, EquipmentDescription::new("T8")),
        ];
        let s = summarize(&items);
        assert_eq!(s.total_fixtures, u32::MAX);
        let medium = s
            .fixtures_by_priority
            .iter()
            .find(|(p, _)| *p == Priority::Medium)
            .map(|(_, n)| *n);
        assert_eq!(medium, Some(u32::MAX));
    }
}
