//! # Interior Estimator
//!
//! 室內裝修材料估算：由家具尺寸依標準配方換算材料用量，
//! 再依單價、工資與 GST 推算總價。
//!
//! ```
//! use interior_estimator::prelude::*;
//!
//! let project = Project::default();
//! let result = project.estimate().unwrap();
//! assert_eq!(result.summary.material_cost, Decimal::from(44780));
//! ```

pub use estimator_calc as calc;
pub use estimator_core as core;

pub mod prelude {
    pub use estimator_calc::{
        AggregationCalculator, CostSummary, EstimateResult, EstimateWarning, Estimator,
        ItemMaterials, MaterialLine, PricingCalculator, Project, ScalingCalculator,
        WarningSeverity,
    };
    pub use estimator_core::{
        get_standard_requirements, CostSettings, Dimensions, EstimatorConfig, EstimatorError,
        FurnitureCollection, FurnitureItem, FurnitureType, FurnitureUpdate, MaterialKey,
        MaterialQuantities, MaterialRate, PricingTier, QuantityOverrides, RateTable,
        StandardRecipe,
    };
    pub use rust_decimal::Decimal;
}
