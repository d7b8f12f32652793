//! 명령행 인자 정의.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::recommendation::{BudgetTier, EquipmentDescription, FixtureCondition};

#[derive(Debug, Parser)]
#[command(
    name = "lighting_retrofit_toolbox",
    version,
    about = "Lamp replacement recommendations and retrofit ROI for energy audits"
)]
pub struct Cli {
    /// 표시 언어 (auto/ko/en)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    pub lang: String,
    /// 설정 파일 경로 (기본 ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// debug 로그 출력
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// 생략하면 대화형 메뉴를 띄운다
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 램프 한 종류의 교체 우선순위를 판단한다
    Recommend(RecommendArgs),
    /// 교체 투자 회수기간과 ROI를 계산한다
    Roi(RoiArgs),
    /// 재고 파일(TOML)의 모든 항목을 평가하고 요약한다
    Batch {
        /// 재고 파일 경로
        file: PathBuf,
    },
    /// 램프 참고 테이블을 출력한다
    Lamps,
}

#[derive(Debug, Args)]
pub struct RecommendArgs {
    /// 램프 종류 (예: "T8 Fluorescent")
    pub bulb_type: String,
    #[arg(long)]
    pub age: Option<f64>,
    #[arg(long)]
    pub hours_per_day: Option<f64>,
    #[arg(long)]
    pub days_per_year: Option<f64>,
    /// 전력 단가 [$/kWh]
    #[arg(long)]
    pub energy_cost: Option<f64>,
    /// 현재 소비전력 [W]
    #[arg(long)]
    pub wattage: Option<f64>,
    /// good/fair/poor
    #[arg(long, value_parser = parse_condition)]
    pub condition: Option<FixtureCondition>,
    #[arg(long)]
    pub dimming: bool,
    #[arg(long)]
    pub color_quality: bool,
    /// low/medium/high
    #[arg(long, value_parser = parse_budget)]
    pub budget: Option<BudgetTier>,
}

impl RecommendArgs {
    pub fn into_equipment(self) -> EquipmentDescription {
        EquipmentDescription {
            bulb_type: self.bulb_type,
            age_years: self.age,
            hours_per_day: self.hours_per_day,
            days_per_year: self.days_per_year,
            energy_cost: self.energy_cost,
            current_wattage: self.wattage,
            fixture_condition: self.condition,
            dimming_required: self.dimming,
            color_quality_important: self.color_quality,
            budget_tier: self.budget,
        }
    }
}

#[derive(Debug, Args)]
pub struct RoiArgs {
    /// 램프 코드. 지정하면 소비전력/교체품 가격 기본값을 테이블에서 가져온다
    #[arg(long)]
    pub lamp: Option<String>,
    /// 기존 소비전력 [W]
    #[arg(long)]
    pub current: Option<f64>,
    /// 교체품 소비전력 [W]
    #[arg(long)]
    pub replacement: Option<f64>,
    /// 연간 운전시간 [h]
    #[arg(long, default_value_t = 3650.0)]
    pub hours: f64,
    /// 전력 단가 [$/kWh]
    #[arg(long, default_value_t = 0.12)]
    pub energy_cost: f64,
    /// 교체품 가격 [$]
    #[arg(long)]
    pub cost: Option<f64>,
    /// 설치비 [$]
    #[arg(long, default_value_t = 0.0)]
    pub install: f64,
}

fn parse_condition(s: &str) -> Result<FixtureCondition, String> {
    FixtureCondition::parse(s).ok_or_else(|| format!("unknown fixture condition: {s}"))
}

fn parse_budget(s: &str) -> Result<BudgetTier, String> {
    BudgetTier::parse(s).ok_or_else(|| format!("unknown budget tier: {s}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recommend_flags() {
        let cli = Cli::try_parse_from([
            "lighting_retrofit_toolbox",
            "recommend",
            "T12 Fluorescent",
            "--age",
            "12",
            "--condition",
            "poor",
        ])
        .unwrap();
        let Some(Command::Recommend(args)) = cli.command else {
            panic!("expected recommend");
        };
        let input = args.into_equipment();
        assert_eq!(input.bulb_type, "T12 Fluorescent");
        assert_eq!(input.age_years, Some(12.0));
        assert_eq!(input.fixture_condition, Some(FixtureCondition::Poor));
    }

    #[test]
    fn rejects_unknown_condition() {
        assert!(Cli::try_parse_from([
            "lighting_retrofit_toolbox",
            "recommend",
            "T8",
            "--condition",
            "broken",
        ])
        .is_err());
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["lighting_retrofit_toolbox", "--lang", "ko"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.lang, "ko");
    }
}
