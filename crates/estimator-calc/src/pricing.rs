//! 分層計價

use estimator_core::{
    EstimatorError, MaterialKey, MaterialQuantities, PricingTier, QuantityOverrides, RateTable,
};
use rust_decimal::Decimal;
use serde::Serialize;

/// 材料總表的一列
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialLine {
    /// 材料
    pub material: MaterialKey,
    /// 計價層級
    pub tier: PricingTier,
    /// 計算數量
    pub computed_quantity: u64,
    /// 有效數量（覆寫優先）
    pub effective_quantity: u64,
    /// 總面積／數量：板材為有效數量 × 32 平方英尺，其他等於有效數量
    pub billed_units: u64,
    /// 單價
    pub rate: Decimal,
    /// 品牌
    pub brand: String,
    /// 金額
    pub cost: Decimal,
}

impl MaterialLine {
    /// 有效數量與計算數量不同
    pub fn is_overridden(&self) -> bool {
        self.effective_quantity != self.computed_quantity
    }
}

/// 計價計算器
pub struct PricingCalculator;

impl PricingCalculator {
    /// 單一材料金額
    ///
    /// 板材：數量 × 32 × 單價；其他：數量 × 單價。
    pub fn cost_for(
        material: MaterialKey,
        quantity: u64,
        rate: Decimal,
    ) -> estimator_core::Result<Decimal> {
        let units = Decimal::from(quantity)
            .checked_mul(Decimal::from(material.tier().units_per_quantity()))
            .and_then(|units| units.checked_mul(rate));

        units.ok_or_else(|| {
            EstimatorError::CalculationError(format!(
                "{} 金額溢位: 數量 {}，單價 {}",
                material, quantity, rate
            ))
        })
    }

    /// 計價單位數（板材換算為平方英尺），超出範圍時取 `u64::MAX`
    pub fn billed_units(material: MaterialKey, quantity: u64) -> u64 {
        quantity.saturating_mul(material.tier().units_per_quantity())
    }

    /// 為材料總表計價
    ///
    /// 每種計算出的材料一列（含數量為 0 者），數量一律經過覆寫解析。
    pub fn price_lines(
        aggregated: &MaterialQuantities,
        overrides: &QuantityOverrides,
        rates: &RateTable,
    ) -> estimator_core::Result<Vec<MaterialLine>> {
        aggregated
            .iter()
            .map(|(&material, &computed_quantity)| {
                let effective_quantity = overrides.effective_quantity(material, computed_quantity);
                let material_rate = rates.get(material);
                let billed_units = Self::billed_units(material, effective_quantity);
                let cost = if effective_quantity > 0 {
                    Self::cost_for(material, effective_quantity, material_rate.rate)?
                } else {
                    Decimal::ZERO
                };

                tracing::debug!(
                    "材料 {}: 計算 {}，有效 {}，金額 {}",
                    material,
                    computed_quantity,
                    effective_quantity,
                    cost
                );

                Ok(MaterialLine {
                    material,
                    tier: material.tier(),
                    computed_quantity,
                    effective_quantity,
                    billed_units,
                    rate: material_rate.rate,
                    brand: material_rate.brand.clone(),
                    cost,
                })
            })
            .collect()
    }

    /// 材料費合計（只計有效數量大於 0 的材料）
    pub fn total_material_cost(lines: &[MaterialLine]) -> estimator_core::Result<Decimal> {
        lines
            .iter()
            .filter(|line| line.effective_quantity > 0)
            .try_fold(Decimal::ZERO, |total, line| {
                total.checked_add(line.cost).ok_or_else(|| {
                    EstimatorError::CalculationError("材料費合計溢位".to_string())
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(MaterialKey::Ply18mm, 7, 120, 26880)]
    #[case(MaterialKey::Ply12mm, 3, 100, 9600)]
    #[case(MaterialKey::BlockBoard, 2, 110, 7040)]
    #[case(MaterialKey::PvcLaminate, 2, 150, 300)]
    #[case(MaterialKey::InnerLaminate, 12, 60, 720)]
    #[case(MaterialKey::AluminumSection, 0, 200, 0)]
    fn test_cost_for(
        #[case] material: MaterialKey,
        #[case] quantity: u64,
        #[case] rate: i64,
        #[case] expected: i64,
    ) {
        let cost = PricingCalculator::cost_for(material, quantity, Decimal::from(rate)).unwrap();
        assert_eq!(cost, Decimal::from(expected));
    }

    #[test]
    fn test_cost_for_overflow() {
        let result = PricingCalculator::cost_for(MaterialKey::Ply18mm, u64::MAX, Decimal::MAX);
        assert!(matches!(result, Err(EstimatorError::CalculationError(_))));
    }

    #[rstest]
    #[case(MaterialKey::Ply18mm, 7, 224)]
    #[case(MaterialKey::BlockBoard, 2, 64)]
    #[case(MaterialKey::Laminate, 3, 3)]
    #[case(MaterialKey::AluminumSection, 0, 0)]
    #[case(MaterialKey::Ply12mm, u64::MAX, u64::MAX)]
    fn test_billed_units(
        #[case] material: MaterialKey,
        #[case] quantity: u64,
        #[case] expected: u64,
    ) {
        assert_eq!(PricingCalculator::billed_units(material, quantity), expected);
    }

    #[test]
    fn test_price_lines_apply_overrides() {
        let aggregated: MaterialQuantities =
            [(MaterialKey::Ply18mm, 7), (MaterialKey::Laminate, 3)].into_iter().collect();
        let mut overrides = QuantityOverrides::new();
        overrides.set(MaterialKey::Ply18mm, 5);

        let lines =
            PricingCalculator::price_lines(&aggregated, &overrides, &RateTable::default()).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].material, MaterialKey::Ply18mm);
        assert_eq!(lines[0].effective_quantity, 5);
        assert_eq!(lines[0].cost, Decimal::from(5 * 32 * 120));
        assert_eq!(lines[0].billed_units, 5 * 32);
        assert!(lines[0].is_overridden());
        assert_eq!(lines[1].cost, Decimal::from(240));
        assert!(!lines[1].is_overridden());

        let total = PricingCalculator::total_material_cost(&lines).unwrap();
        assert_eq!(total, Decimal::from(19200 + 240));
    }

    #[test]
    fn test_zero_quantity_contributes_nothing() {
        let aggregated: MaterialQuantities =
            [(MaterialKey::PvcLaminate, 0), (MaterialKey::Ply12mm, 1)].into_iter().collect();

        let lines = PricingCalculator::price_lines(
            &aggregated,
            &QuantityOverrides::new(),
            &RateTable::default(),
        )
        .unwrap();

        assert_eq!(lines[0].cost, Decimal::ZERO);
        assert_eq!(
            PricingCalculator::total_material_cost(&lines).unwrap(),
            Decimal::from(3200)
        );
    }

    #[test]
    fn test_override_to_zero_removes_cost() {
        let aggregated: MaterialQuantities = [(MaterialKey::BlockBoard, 2)].into_iter().collect();
        let mut overrides = QuantityOverrides::new();
        overrides.set(MaterialKey::BlockBoard, 0);

        let lines =
            PricingCalculator::price_lines(&aggregated, &overrides, &RateTable::default()).unwrap();

        assert_eq!(lines[0].computed_quantity, 2);
        assert_eq!(lines[0].effective_quantity, 0);
        assert_eq!(lines[0].billed_units, 0);
        assert_eq!(
            PricingCalculator::total_material_cost(&lines).unwrap(),
            Decimal::ZERO
        );
    }
}
