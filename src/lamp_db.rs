/// 흔한 램프 종류별 대표 소비전력과 LED 대체품 정보를 담은 참고 테이블.
/// 값은 일반적인 제품 기준이며 실제 현장 값은 명판/계측으로 확인해야 한다.

#[derive(Debug)]
pub struct LampData {
    pub code: &'static str,
    pub name: &'static str,
    /// 대표 소비전력(안정기 포함) [W]
    pub typical_wattage: f64,
    /// 대표 LED 대체품 소비전력 [W]
    pub led_wattage: f64,
    /// LED 대체품 대략적인 단가 [$]
    pub led_unit_cost: f64,
    pub notes: &'static str,
}

pub fn lamps() -> &'static [LampData] {
    LAMPS
}

/// 코드나 이름으로 램프를 찾는다(대소문자 무시).
pub fn find_lamp(code: &str) -> Option<&'static LampData> {
    let code = code.trim();
    LAMPS
        .iter()
        .find(|l| l.code.eq_ignore_ascii_case(code) || l.name.eq_ignore_ascii_case(code))
}

static LAMPS: &[LampData] = &[
    LampData {
        code: "INC-A19-60",
        name: "Incandescent A19 60W",
        typical_wattage: 60.0,
        led_wattage: 9.0,
        led_unit_cost: 3.0,
        notes: "General service lamp",
    },
    LampData {
        code: "INC-A19-100",
        name: "Incandescent A19 100W",
        typical_wattage: 100.0,
        led_wattage: 15.0,
        led_unit_cost: 5.0,
        notes: "General service lamp",
    },
    LampData {
        code: "HAL-PAR38",
        name: "Halogen PAR38 90W",
        typical_wattage: 90.0,
        led_wattage: 15.0,
        led_unit_cost: 12.0,
        notes: "Track/flood",
    },
    LampData {
        code: "HAL-MR16",
        name: "Halogen MR16 50W",
        typical_wattage: 50.0,
        led_wattage: 7.0,
        led_unit_cost: 8.0,
        notes: "Check transformer compatibility",
    },
    LampData {
        code: "CFL-13",
        name: "CFL 13W",
        typical_wattage: 13.0,
        led_wattage: 9.0,
        led_unit_cost: 3.0,
        notes: "Screw-in",
    },
    LampData {
        code: "CFL-26-PL",
        name: "CFL 26W Pin-Based",
        typical_wattage: 28.0,
        led_wattage: 12.0,
        led_unit_cost: 10.0,
        notes: "Ballast power included",
    },
    LampData {
        code: "T12-4FT",
        name: "T12 Fluorescent 4ft",
        typical_wattage: 46.0,
        led_wattage: 15.0,
        led_unit_cost: 9.0,
        notes: "Magnetic ballast, per lamp",
    },
    LampData {
        code: "T8-4FT",
        name: "T8 Fluorescent 4ft",
        typical_wattage: 30.0,
        led_wattage: 15.0,
        led_unit_cost: 8.0,
        notes: "Electronic ballast, per lamp",
    },
    LampData {
        code: "T5HO-4FT",
        name: "T5HO Fluorescent 4ft",
        typical_wattage: 60.0,
        led_wattage: 25.0,
        led_unit_cost: 15.0,
        notes: "Per lamp",
    },
    LampData {
        code: "MH-400",
        name: "Metal Halide 400W",
        typical_wattage: 458.0,
        led_wattage: 150.0,
        led_unit_cost: 180.0,
        notes: "High-bay, ballast included",
    },
    LampData {
        code: "HPS-250",
        name: "HPS 250W",
        typical_wattage: 295.0,
        led_wattage: 100.0,
        led_unit_cost: 150.0,
        notes: "Area/parking light",
    },
    LampData {
        code: "MV-175",
        name: "Mercury Vapor 175W",
        typical_wattage: 205.0,
        led_wattage: 50.0,
        led_unit_cost: 120.0,
        notes: "Ballast sale banned",
    },
    LampData {
        code: "LED-A19-9",
        name: "LED A19 9W",
        typical_wattage: 9.0,
        led_wattage: 9.0,
        led_unit_cost: 3.0,
        notes: "Already LED",
    },
];
