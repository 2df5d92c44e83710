//! 材料代碼與計價層級

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::EstimatorError;

/// 每張板材的覆蓋面積（平方英尺，8 × 4 標準板）
pub const SHEET_AREA_SQFT: u64 = 32;

/// 材料需求量（材料 → 數量）
///
/// 使用 `BTreeMap` 讓輸出順序固定為 [`MaterialKey`] 的宣告順序。
pub type MaterialQuantities = BTreeMap<MaterialKey, u64>;

/// 材料代碼
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaterialKey {
    /// PVC 飾面板
    PvcLaminate,
    /// 18mm 夾板
    Ply18mm,
    /// 12mm 夾板
    Ply12mm,
    /// 木芯板
    BlockBoard,
    /// 外層美耐板
    Laminate,
    /// 內層美耐板
    InnerLaminate,
    /// 可彎夾板
    FlexiblePly,
    /// PVC 雲母板
    PvcMica,
    /// 鋁型材
    AluminumSection,
}

impl MaterialKey {
    /// 全部材料（宣告順序）
    pub const ALL: [MaterialKey; 9] = [
        MaterialKey::PvcLaminate,
        MaterialKey::Ply18mm,
        MaterialKey::Ply12mm,
        MaterialKey::BlockBoard,
        MaterialKey::Laminate,
        MaterialKey::InnerLaminate,
        MaterialKey::FlexiblePly,
        MaterialKey::PvcMica,
        MaterialKey::AluminumSection,
    ];

    /// 對外使用的代碼（camelCase）
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialKey::PvcLaminate => "pvcLaminate",
            MaterialKey::Ply18mm => "ply18mm",
            MaterialKey::Ply12mm => "ply12mm",
            MaterialKey::BlockBoard => "blockBoard",
            MaterialKey::Laminate => "laminate",
            MaterialKey::InnerLaminate => "innerLaminate",
            MaterialKey::FlexiblePly => "flexiblePly",
            MaterialKey::PvcMica => "pvcMica",
            MaterialKey::AluminumSection => "aluminumSection",
        }
    }

    /// 顯示名稱
    pub fn label(&self) -> &'static str {
        match self {
            MaterialKey::PvcLaminate => "PVC Laminate",
            MaterialKey::Ply18mm => "Ply 18mm",
            MaterialKey::Ply12mm => "Ply 12mm",
            MaterialKey::BlockBoard => "Block Board",
            MaterialKey::Laminate => "Laminate",
            MaterialKey::InnerLaminate => "Inner Laminate",
            MaterialKey::FlexiblePly => "Flexible Ply",
            MaterialKey::PvcMica => "PVC Mica",
            MaterialKey::AluminumSection => "Aluminum Section",
        }
    }

    /// 計價層級
    pub fn tier(&self) -> PricingTier {
        match self {
            MaterialKey::Ply18mm | MaterialKey::Ply12mm | MaterialKey::BlockBoard => {
                PricingTier::Sheet
            }
            _ => PricingTier::Unit,
        }
    }
}

impl fmt::Display for MaterialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialKey {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaterialKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| EstimatorError::UnknownMaterial(s.to_string()))
    }
}

/// 計價層級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingTier {
    /// 板材：數量（張）× 32 平方英尺 × 每平方英尺單價
    Sheet,
    /// 一般材料：數量 × 單價
    Unit,
}

impl PricingTier {
    /// 每個數量單位對應的計價單位數
    pub fn units_per_quantity(&self) -> u64 {
        match self {
            PricingTier::Sheet => SHEET_AREA_SQFT,
            PricingTier::Unit => 1,
        }
    }
}
