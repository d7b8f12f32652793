//! 재고 목록(TOML) 로드와 일괄 평가.
//!
//! 형식:
//! ```toml
//! [[item]]
//! label = "2층 사무실"
//! quantity = 24
//! bulb_type = "T8-4FT"
//! hours_per_day = 12.0
//! ```
//!
//! `current_wattage`가 없으면 `bulb_type`을 램프 테이블 코드/이름과 정확히
//! 비교해 대표 소비전력을 찾는다.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::economics::portfolio::AssessedItem;
use crate::recommendation::{calculate_replacement, EquipmentDescription, InputError, ReplacementPolicy};

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("재고 파일을 읽을 수 없습니다 ({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("재고 파일 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("항목 '{label}' 입력 오류: {source}")]
    InvalidItem {
        label: String,
        #[source]
        source: InputError,
    },
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct InventoryItem {
    pub label: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(flatten)]
    pub equipment: EquipmentDescription,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Inventory {
    #[serde(default, rename = "item")]
    pub items: Vec<InventoryItem>,
}

impl Inventory {
    pub fn from_toml_str(src: &str) -> Result<Self, InventoryError> {
        let inv: Inventory = toml::from_str(src)?;
        for item in &inv.items {
            item.equipment
                .validate()
                .map_err(|source| InventoryError::InvalidItem {
                    label: item.label.clone(),
                    source,
                })?;
        }
        Ok(inv)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, InventoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| InventoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// 모든 항목을 평가한다.
    pub fn assess(&self, policy: &ReplacementPolicy) -> Vec<AssessedItem> {
        self.items
            .iter()
            .map(|item| AssessedItem {
                label: item.label.clone(),
                quantity: item.quantity,
                input: item.equipment.clone(),
                decision: calculate_replacement(&item.equipment, policy),
            })
            .collect()
    }
}
