//! 材料用量比例換算

use estimator_core::{
    Dimensions, EstimatorError, FurnitureItem, FurnitureType, MaterialQuantities, StandardRecipe,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

/// 單一家具的材料用量
#[derive(Debug, Clone, Serialize)]
pub struct ItemMaterials {
    /// 家具ID
    pub item_id: u64,
    /// 名稱
    pub name: String,
    /// 家具類型
    pub furniture_type: FurnitureType,
    /// 實際尺寸
    pub dimensions: Dimensions,
    /// 套用的標準配方
    pub standard: StandardRecipe,
    /// 體積比例（實際體積 / 標準體積）
    pub scale_factor: Decimal,
    /// 換算後用量
    pub materials: MaterialQuantities,
}

impl ItemMaterials {
    /// 所有材料用量皆為 0
    pub fn is_empty(&self) -> bool {
        self.materials.values().all(|&qty| qty == 0)
    }
}

/// 比例換算計算器
pub struct ScalingCalculator;

impl ScalingCalculator {
    /// 計算家具的材料用量
    ///
    /// 每種材料用量 = ceil(標準用量 × 實際體積 / 標準體積)，只輸出配方中有的材料。
    pub fn calculate(item: &FurnitureItem) -> estimator_core::Result<MaterialQuantities> {
        let standard = StandardRecipe::for_type(item.furniture_type);
        Self::scale(item, &standard)
    }

    /// 計算家具的材料用量（含配方與比例）
    pub fn item_materials(item: &FurnitureItem) -> estimator_core::Result<ItemMaterials> {
        let standard = StandardRecipe::for_type(item.furniture_type);
        let scale_factor = Self::scale_factor(item, &standard)?;
        let materials = Self::scale(item, &standard)?;

        tracing::debug!(
            "家具 {} ({}) 比例 {}，材料 {} 種",
            item.id,
            item.furniture_type.as_str(),
            scale_factor.round_dp(4),
            materials.len()
        );

        Ok(ItemMaterials {
            item_id: item.id,
            name: item.name.clone(),
            furniture_type: item.furniture_type,
            dimensions: item.dimensions,
            standard,
            scale_factor,
            materials,
        })
    }

    /// 體積比例
    pub fn scale_factor(
        item: &FurnitureItem,
        standard: &StandardRecipe,
    ) -> estimator_core::Result<Decimal> {
        let standard_volume = Self::standard_volume(standard)?;
        let item_volume = item.dimensions.volume()?;

        item_volume
            .checked_div(standard_volume)
            .ok_or_else(|| overflow("體積比例", item))
    }

    fn scale(
        item: &FurnitureItem,
        standard: &StandardRecipe,
    ) -> estimator_core::Result<MaterialQuantities> {
        let standard_volume = Self::standard_volume(standard)?;
        let item_volume = item.dimensions.volume()?;

        standard
            .materials
            .iter()
            .map(|(&material, &standard_qty)| {
                // 先乘後除，整數結果不會因除法捨入而多進一位
                let scaled = Decimal::from(standard_qty)
                    .checked_mul(item_volume)
                    .and_then(|total| total.checked_div(standard_volume))
                    .ok_or_else(|| overflow(material.as_str(), item))?;
                Ok((material, ceil_quantity(scaled)))
            })
            .collect()
    }

    fn standard_volume(standard: &StandardRecipe) -> estimator_core::Result<Decimal> {
        let volume = standard.standard_size.volume()?;
        if volume <= Decimal::ZERO {
            return Err(EstimatorError::InvalidStandardSize(standard.furniture_type));
        }
        Ok(volume)
    }
}

/// 無條件進位為整數數量，超出範圍時取 `u64::MAX`
fn ceil_quantity(value: Decimal) -> u64 {
    if value <= Decimal::ZERO {
        return 0;
    }
    value.ceil().to_u64().unwrap_or(u64::MAX)
}

fn overflow(what: &str, item: &FurnitureItem) -> EstimatorError {
    EstimatorError::CalculationError(format!("家具 {} 的{}計算溢位", item.id, what))
}
