//! 估算主計算器

use estimator_core::{
    CostSettings, EstimatorConfig, FurnitureCollection, QuantityOverrides, RateTable,
};

use crate::aggregation::AggregationCalculator;
use crate::pricing::PricingCalculator;
use crate::scaling::{ItemMaterials, ScalingCalculator};
use crate::summary::CostSummary;
use crate::{EstimateResult, EstimateWarning};

/// 估算計算器
///
/// 每次呼叫都從頭計算，不保留任何中間結果。
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    /// 創建新的估算計算器
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// 主估算入口
    pub fn estimate(
        &self,
        items: &FurnitureCollection,
        overrides: &QuantityOverrides,
    ) -> estimator_core::Result<EstimateResult> {
        tracing::info!(
            "開始估算：家具 {} 件，數量覆寫 {} 筆",
            items.len(),
            overrides.len()
        );

        let start_time = std::time::Instant::now();

        // Step 1: 逐件比例換算
        tracing::debug!("Step 1: 比例換算");
        let per_item = items
            .iter()
            .map(ScalingCalculator::item_materials)
            .collect::<estimator_core::Result<Vec<_>>>()?;

        // Step 2: 彙整材料總量
        tracing::debug!("Step 2: 彙整材料");
        let aggregated = AggregationCalculator::aggregate_items(&per_item);
        tracing::debug!("材料種類: {}", aggregated.len());

        // Step 3: 套用覆寫並計價
        tracing::debug!("Step 3: 分層計價");
        let lines = PricingCalculator::price_lines(&aggregated, overrides, &self.config.rates)?;
        let material_cost = PricingCalculator::total_material_cost(&lines)?;

        // Step 4: 工資與 GST
        tracing::debug!("Step 4: 成本彙總");
        let summary = CostSummary::from_settings(material_cost, &self.config.settings)?;

        let mut result = EstimateResult {
            items: per_item,
            materials: lines,
            summary,
            warnings: Vec::new(),
            calculation_time_ms: None,
        };
        Self::collect_warnings(&mut result, overrides);
        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("估算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!("總價: {}", result.summary.total_cost);

        Ok(result)
    }

    fn collect_warnings(result: &mut EstimateResult, overrides: &QuantityOverrides) {
        let mut warnings = Vec::new();

        for item in result.items.iter().filter(|item| item.dimensions.is_degenerate()) {
            warnings.push(EstimateWarning::warning(
                item_subject(item),
                "尺寸含 0，所有材料用量為 0".to_string(),
            ));
        }

        for line in result.materials.iter().filter(|line| line.is_overridden()) {
            warnings.push(EstimateWarning::info(
                line.material.to_string(),
                format!(
                    "使用手動數量 {}（計算值 {}）",
                    line.effective_quantity, line.computed_quantity
                ),
            ));
        }

        for (material, _) in overrides.iter() {
            if result.material(material).is_none() {
                warnings.push(EstimateWarning::info(
                    material.to_string(),
                    "目前沒有家具使用此材料，覆寫不影響成本".to_string(),
                ));
            }
        }

        for warning in warnings {
            result.add_warning(warning);
        }
    }

    /// 獲取配置引用
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// 獲取單價表引用
    pub fn rates(&self) -> &RateTable {
        &self.config.rates
    }

    pub fn rates_mut(&mut self) -> &mut RateTable {
        &mut self.config.rates
    }

    /// 獲取百分比設定引用
    pub fn settings(&self) -> &CostSettings {
        &self.config.settings
    }

    pub fn settings_mut(&mut self) -> &mut CostSettings {
        &mut self.config.settings
    }
}

fn item_subject(item: &ItemMaterials) -> String {
    format!("{}#{}", item.name, item.item_id)
}
