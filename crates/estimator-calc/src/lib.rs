//! # Estimator Calculation Engine
//!
//! 材料用量與成本計算引擎

pub mod aggregation;
pub mod estimator;
pub mod pricing;
pub mod scaling;
pub mod session;
pub mod summary;

// Re-export 主要類型
pub use aggregation::AggregationCalculator;
pub use estimator::Estimator;
pub use pricing::{MaterialLine, PricingCalculator};
pub use scaling::{ItemMaterials, ScalingCalculator};
pub use session::Project;
pub use summary::CostSummary;

use serde::Serialize;

/// 估算結果
#[derive(Debug, Clone, Serialize)]
pub struct EstimateResult {
    /// 各家具的材料用量
    pub items: Vec<ItemMaterials>,

    /// 材料總表（依材料順序）
    pub materials: Vec<MaterialLine>,

    /// 成本彙總
    pub summary: CostSummary,

    /// 警告信息
    pub warnings: Vec<EstimateWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl EstimateResult {
    /// 添加警告
    pub fn add_warning(&mut self, warning: EstimateWarning) {
        self.warnings.push(warning);
    }

    /// 查詢材料總表中的某一列
    pub fn material(&self, material: estimator_core::MaterialKey) -> Option<&MaterialLine> {
        self.materials.iter().find(|line| line.material == material)
    }

    /// 有計價的材料列（有效數量大於 0）
    pub fn priced_lines(&self) -> impl Iterator<Item = &MaterialLine> {
        self.materials.iter().filter(|line| line.effective_quantity > 0)
    }

    /// 總成本
    pub fn total_cost(&self) -> rust_decimal::Decimal {
        self.summary.total_cost
    }
}

/// 估算警告
#[derive(Debug, Clone, Serialize)]
pub struct EstimateWarning {
    pub subject: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl EstimateWarning {
    pub fn new(subject: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            subject,
            message,
            severity,
        }
    }

    pub fn info(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Info)
    }

    pub fn warning(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}
