//! 估算專案（單一使用階段的全部狀態）

use estimator_core::{
    Dimensions, EstimatorConfig, FurnitureCollection, FurnitureType, FurnitureUpdate,
    MaterialKey, QuantityOverrides,
};
use rust_decimal::Decimal;

use crate::aggregation::AggregationCalculator;
use crate::estimator::Estimator;
use crate::EstimateResult;

/// 估算專案
///
/// 持有家具清單、單價表、數量覆寫與百分比設定；
/// 衍生結果一律在讀取時重新計算。
#[derive(Debug, Clone)]
pub struct Project {
    items: FurnitureCollection,
    overrides: QuantityOverrides,
    estimator: Estimator,
    show_standard_requirements: bool,
}

impl Project {
    /// 以配置創建專案，家具清單為預設的單一衣櫃
    pub fn new(config: EstimatorConfig) -> Self {
        Self::with_items(config, FurnitureCollection::default())
    }

    pub fn with_items(config: EstimatorConfig, items: FurnitureCollection) -> Self {
        Self {
            items,
            overrides: QuantityOverrides::new(),
            estimator: Estimator::new(config),
            show_standard_requirements: true,
        }
    }

    // ========== 家具 ==========

    pub fn items(&self) -> &FurnitureCollection {
        &self.items
    }

    /// 新增預設家具，回傳新ID
    pub fn add_furniture(&mut self) -> u64 {
        self.items.add()
    }

    /// 新增指定家具，回傳新ID
    pub fn add_custom_furniture(
        &mut self,
        name: impl Into<String>,
        furniture_type: FurnitureType,
        dimensions: Dimensions,
    ) -> u64 {
        self.items.add_item(name, furniture_type, dimensions)
    }

    /// 刪除家具（最後一件不可刪）
    pub fn remove_furniture(&mut self, id: u64) -> bool {
        let removed = self.items.remove(id);
        if !removed {
            tracing::debug!("家具 {} 未刪除（不存在或為最後一件）", id);
        }
        removed
    }

    pub fn update_furniture(&mut self, id: u64, update: FurnitureUpdate) -> bool {
        self.items.update(id, update)
    }

    /// 以欄位名稱與文字輸入更新家具
    pub fn update_furniture_field(
        &mut self,
        id: u64,
        field: &str,
        value: &str,
    ) -> estimator_core::Result<bool> {
        self.items.update_field(id, field, value)
    }

    // ========== 單價 ==========

    pub fn set_rate(&mut self, material: MaterialKey, rate: Decimal) {
        self.estimator.rates_mut().set_rate(material, rate);
    }

    pub fn set_rate_input(&mut self, material: MaterialKey, input: &str) {
        self.estimator.rates_mut().set_rate_input(material, input);
    }

    pub fn set_brand(&mut self, material: MaterialKey, brand: impl Into<String>) {
        self.estimator.rates_mut().set_brand(material, brand);
    }

    // ========== 數量覆寫 ==========

    pub fn overrides(&self) -> &QuantityOverrides {
        &self.overrides
    }

    pub fn set_quantity_override(&mut self, material: MaterialKey, quantity: u64) {
        self.overrides.set(material, quantity);
    }

    pub fn set_quantity_input(&mut self, material: MaterialKey, input: &str) {
        self.overrides.set_input(material, input);
    }

    /// 清除覆寫，回到計算值
    pub fn clear_quantity_override(&mut self, material: MaterialKey) -> Option<u64> {
        self.overrides.clear(material)
    }

    /// 材料的有效數量（覆寫優先，否則為目前的計算總量）
    ///
    /// 目前沒有家具使用的材料一律為 0，覆寫保留但不生效，與 [`Project::estimate`] 一致。
    pub fn effective_quantity(&self, material: MaterialKey) -> estimator_core::Result<u64> {
        let aggregated = AggregationCalculator::aggregate(self.items.items())?;
        Ok(aggregated.get(&material).map_or(0, |&computed| {
            self.overrides.effective_quantity(material, computed)
        }))
    }

    // ========== 百分比 ==========

    pub fn set_labor_percentage(&mut self, percentage: Decimal) {
        self.estimator.settings_mut().set_labor_percentage(percentage);
    }

    pub fn set_gst_percentage(&mut self, percentage: Decimal) {
        self.estimator.settings_mut().set_gst_percentage(percentage);
    }

    pub fn set_labor_input(&mut self, input: &str) {
        self.estimator.settings_mut().set_labor_input(input);
    }

    pub fn set_gst_input(&mut self, input: &str) {
        self.estimator.settings_mut().set_gst_input(input);
    }

    // ========== 顯示 ==========

    /// 是否同時顯示標準配方（不影響計算）
    pub fn show_standard_requirements(&self) -> bool {
        self.show_standard_requirements
    }

    pub fn set_show_standard_requirements(&mut self, show: bool) {
        self.show_standard_requirements = show;
    }

    // ========== 估算 ==========

    pub fn config(&self) -> &EstimatorConfig {
        self.estimator.config()
    }

    /// 重新計算完整估算結果
    pub fn estimate(&self) -> estimator_core::Result<EstimateResult> {
        self.estimator.estimate(&self.items, &self.overrides)
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new(EstimatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_project() {
        let project = Project::default();

        assert_eq!(project.items().len(), 1);
        assert!(project.show_standard_requirements());
        assert!(project.overrides().is_empty());
        assert_eq!(project.config().settings.labor_percentage(), Decimal::from(30));
    }

    #[test]
    fn test_override_survives_item_changes() {
        let mut project = Project::default();
        project.set_quantity_override(MaterialKey::Ply18mm, 9);

        project.add_furniture();
        project.update_furniture(1, FurnitureUpdate::Length(Decimal::from(16)));
        assert_eq!(project.effective_quantity(MaterialKey::Ply18mm).unwrap(), 9);

        assert_eq!(project.clear_quantity_override(MaterialKey::Ply18mm), Some(9));
        // 16 × 8 × 2 衣櫃 = 14，加上 4 × 4 × 2 衣櫃 = 2
        assert_eq!(project.effective_quantity(MaterialKey::Ply18mm).unwrap(), 16);
    }

    #[test]
    fn test_effective_quantity_matches_estimate() {
        let mut project = Project::default();
        project.set_quantity_override(MaterialKey::AluminumSection, 4);
        project.set_quantity_override(MaterialKey::Ply18mm, 9);

        let result = project.estimate().unwrap();
        for material in MaterialKey::ALL {
            let expected = result
                .material(material)
                .map_or(0, |line| line.effective_quantity);
            assert_eq!(project.effective_quantity(material).unwrap(), expected);
        }
        assert_eq!(project.effective_quantity(MaterialKey::AluminumSection).unwrap(), 0);

        // 廚具使用鋁型材後，保留的覆寫開始生效
        project.update_furniture(1, FurnitureUpdate::Type(FurnitureType::Kitchen));
        assert_eq!(project.effective_quantity(MaterialKey::AluminumSection).unwrap(), 4);
        let result = project.estimate().unwrap();
        let line = result.material(MaterialKey::AluminumSection).unwrap();
        assert_eq!(line.effective_quantity, 4);
    }

    #[test]
    fn test_mutations_recompute_estimate() {
        let mut project = Project::default();
        let before = project.estimate().unwrap().total_cost();

        project.set_rate(MaterialKey::Ply18mm, Decimal::from(130));
        let after = project.estimate().unwrap().total_cost();
        assert!(after > before);

        project.set_labor_input("0");
        project.set_gst_input("0");
        let summary = project.estimate().unwrap().summary;
        assert_eq!(summary.total_cost, summary.material_cost);
    }

    #[test]
    fn test_remove_last_furniture_refused() {
        let mut project = Project::default();

        assert!(!project.remove_furniture(1));
        assert_eq!(project.items().len(), 1);

        let id = project.add_furniture();
        assert!(project.remove_furniture(id));
    }

    #[test]
    fn test_display_toggle_does_not_change_cost() {
        let mut project = Project::default();
        let before = project.estimate().unwrap().summary;

        project.set_show_standard_requirements(false);
        assert!(!project.show_standard_requirements());
        assert_eq!(project.estimate().unwrap().summary, before);
    }
}
