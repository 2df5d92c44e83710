//! 材料總量彙整

use estimator_core::{FurnitureItem, MaterialQuantities};

use crate::scaling::{ItemMaterials, ScalingCalculator};

/// 材料彙整計算器
pub struct AggregationCalculator;

impl AggregationCalculator {
    /// 彙整所有家具的材料用量
    ///
    /// 加總與家具順序無關；配方中沒有的材料對該家具貢獻 0。
    pub fn aggregate(items: &[FurnitureItem]) -> estimator_core::Result<MaterialQuantities> {
        let mut total = MaterialQuantities::new();
        for item in items {
            let materials = ScalingCalculator::calculate(item)?;
            Self::accumulate(&mut total, &materials);
        }
        Ok(total)
    }

    /// 由已換算的家具用量彙整
    pub fn aggregate_items(items: &[ItemMaterials]) -> MaterialQuantities {
        let mut total = MaterialQuantities::new();
        for item in items {
            Self::accumulate(&mut total, &item.materials);
        }
        total
    }

    fn accumulate(total: &mut MaterialQuantities, materials: &MaterialQuantities) {
        for (&material, &qty) in materials {
            let entry = total.entry(material).or_insert(0);
            *entry = entry.saturating_add(qty);
        }
    }
}
