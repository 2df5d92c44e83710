//! # Estimator Core
//!
//! 核心資料模型與類型定義

pub mod coerce;
pub mod config;
pub mod furniture;
pub mod material;
pub mod overrides;
pub mod rates;
pub mod recipe;

// Re-export 主要類型
pub use config::{CostSettings, EstimatorConfig};
pub use furniture::{
    Dimensions, FurnitureCollection, FurnitureField, FurnitureItem, FurnitureType, FurnitureUpdate,
};
pub use material::{MaterialKey, MaterialQuantities, PricingTier, SHEET_AREA_SQFT};
pub use overrides::QuantityOverrides;
pub use rates::{MaterialRate, RateTable};
pub use recipe::{get_standard_requirements, StandardRecipe};

/// 估算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum EstimatorError {
    #[error("未知的材料代碼: {0}")]
    UnknownMaterial(String),

    #[error("未知的家具欄位: {0}")]
    UnknownField(String),

    #[error("標準尺寸無效（體積為零）: {0:?}")]
    InvalidStandardSize(FurnitureType),

    #[error("家具清單不可為空")]
    EmptyCollection,

    #[error("重複的家具ID: {0}")]
    DuplicateItemId(u64),

    #[error("計算錯誤: {0}")]
    CalculationError(String),

    #[error("配置解析錯誤: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
