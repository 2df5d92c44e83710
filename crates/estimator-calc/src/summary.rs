//! 成本彙總（材料 → 工資 → 小計 → GST → 總價）

use estimator_core::{CostSettings, EstimatorError};
use rust_decimal::Decimal;
use serde::Serialize;

/// 成本彙總
///
/// 中間過程不做捨入，顯示時才格式化。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostSummary {
    /// 材料費
    pub material_cost: Decimal,
    /// 工資
    pub labor_cost: Decimal,
    /// 小計（材料費 + 工資）
    pub subtotal: Decimal,
    /// GST（以小計為基礎）
    pub gst_amount: Decimal,
    /// 總價
    pub total_cost: Decimal,
}

impl CostSummary {
    /// 依序計算工資與 GST
    ///
    /// GST 以加上工資後的小計為基礎，順序不可對調。
    pub fn cascade(
        material_cost: Decimal,
        labor_percentage: Decimal,
        gst_percentage: Decimal,
    ) -> estimator_core::Result<Self> {
        let labor_cost = percentage_of(material_cost, labor_percentage)?;
        let subtotal = checked(material_cost.checked_add(labor_cost), "小計")?;
        let gst_amount = percentage_of(subtotal, gst_percentage)?;
        let total_cost = checked(subtotal.checked_add(gst_amount), "總價")?;

        Ok(Self {
            material_cost,
            labor_cost,
            subtotal,
            gst_amount,
            total_cost,
        })
    }

    /// 以百分比設定計算
    pub fn from_settings(
        material_cost: Decimal,
        settings: &CostSettings,
    ) -> estimator_core::Result<Self> {
        Self::cascade(
            material_cost,
            settings.labor_percentage(),
            settings.gst_percentage(),
        )
    }
}

fn percentage_of(amount: Decimal, percentage: Decimal) -> estimator_core::Result<Decimal> {
    let scaled = checked(amount.checked_mul(percentage), "百分比")?;
    checked(scaled.checked_div(Decimal::ONE_HUNDRED), "百分比")
}

fn checked(value: Option<Decimal>, what: &str) -> estimator_core::Result<Decimal> {
    value.ok_or_else(|| EstimatorError::CalculationError(format!("{}計算溢位", what)))
}
