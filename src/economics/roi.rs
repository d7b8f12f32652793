/// 교체 투자 경제성 입력.
#[derive(Debug, Clone)]
pub struct RoiInput {
    /// 기존 소비전력 [W]
    pub current_wattage: f64,
    /// 교체품 소비전력 [W]
    pub replacement_wattage: f64,
    /// 연간 운전시간 [h/yr]
    pub hours_per_year: f64,
    /// 전력 단가 [$/kWh]
    pub energy_cost: f64,
    /// 교체품 가격 [$]
    pub replacement_cost: f64,
    /// 설치비 [$]
    pub installation_cost: f64,
}

impl RoiInput {
    /// 설치비 0으로 입력을 만든다.
    pub fn new(
        current_wattage: f64,
        replacement_wattage: f64,
        hours_per_year: f64,
        energy_cost: f64,
        replacement_cost: f64,
    ) -> Self {
        Self {
            current_wattage,
            replacement_wattage,
            hours_per_year,
            energy_cost,
            replacement_cost,
            installation_cost: 0.0,
        }
    }

    pub fn with_installation_cost(mut self, installation_cost: f64) -> Self {
        self.installation_cost = installation_cost;
        self
    }
}

/// 경제성 결과.
#[derive(Debug, Clone)]
pub struct RoiResult {
    /// 연간 절감 전력량 [kWh/yr]
    pub annual_energy_savings_kwh: f64,
    /// 연간 절감액 [$/yr]
    pub annual_savings: f64,
    /// 단순 회수기간 [년]
    pub payback_years: f64,
    /// 10년 누적 순절감액 [$]
    pub ten_year_savings: f64,
    /// 10년 ROI [%]
    pub roi_percent: f64,
}

impl RoiResult {
    /// 절감액이 양수일 때만 회수기간이 의미가 있다.
    pub fn has_positive_savings(&self) -> bool {
        self.annual_savings > 0.0
    }
}

/// 단순 회수기간과 10년 ROI를 계산한다.
///
/// 입력 검증은 하지 않는다. 교체품 전력이 기존 이상이면 회수기간이
/// 무한대나 음수가 되므로 호출 측에서 `has_positive_savings`로 확인한다.
pub fn calculate_replacement_roi(input: RoiInput) -> RoiResult {
    let annual_energy_savings_kwh =
        (input.current_wattage - input.replacement_wattage) * input.hours_per_year / 1000.0;
    let annual_savings = annual_energy_savings_kwh * input.energy_cost;
    let total_cost = input.replacement_cost + input.installation_cost;
    let payback_years = total_cost / annual_savings;
    let ten_year_savings = annual_savings * 10.0 - total_cost;
    let roi_percent = ten_year_savings / total_cost * 100.0;
    RoiResult {
        annual_energy_savings_kwh,
        annual_savings,
        payback_years,
        ten_year_savings,
        roi_percent,
    }
}
