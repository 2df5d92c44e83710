//! 估算配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::coerce;
use crate::rates::RateTable;
use crate::Result;

/// 預設工資百分比
pub const DEFAULT_LABOR_PERCENTAGE: i64 = 30;

/// 預設 GST 百分比
pub const DEFAULT_GST_PERCENTAGE: i64 = 18;

/// 成本百分比設定
///
/// 建構、更新與反序列化時負值一律截為 0。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCostSettings", rename_all = "camelCase")]
pub struct CostSettings {
    /// 工資（材料費的百分比）
    labor_percentage: Decimal,

    /// GST（小計的百分比，在工資之後計算）
    gst_percentage: Decimal,
}

#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawCostSettings {
    labor_percentage: Decimal,
    gst_percentage: Decimal,
}

impl Default for RawCostSettings {
    fn default() -> Self {
        Self {
            labor_percentage: Decimal::from(DEFAULT_LABOR_PERCENTAGE),
            gst_percentage: Decimal::from(DEFAULT_GST_PERCENTAGE),
        }
    }
}

impl From<RawCostSettings> for CostSettings {
    fn from(raw: RawCostSettings) -> Self {
        CostSettings::new(raw.labor_percentage, raw.gst_percentage)
    }
}

impl CostSettings {
    /// 創建新的百分比設定
    pub fn new(labor_percentage: Decimal, gst_percentage: Decimal) -> Self {
        Self {
            labor_percentage: coerce::non_negative(labor_percentage),
            gst_percentage: coerce::non_negative(gst_percentage),
        }
    }

    pub fn labor_percentage(&self) -> Decimal {
        self.labor_percentage
    }

    pub fn gst_percentage(&self) -> Decimal {
        self.gst_percentage
    }

    pub fn set_labor_percentage(&mut self, percentage: Decimal) {
        self.labor_percentage = coerce::non_negative(percentage);
    }

    pub fn set_gst_percentage(&mut self, percentage: Decimal) {
        self.gst_percentage = coerce::non_negative(percentage);
    }

    /// 建構器模式：設置工資百分比
    pub fn with_labor_percentage(mut self, percentage: Decimal) -> Self {
        self.set_labor_percentage(percentage);
        self
    }

    /// 建構器模式：設置 GST 百分比
    pub fn with_gst_percentage(mut self, percentage: Decimal) -> Self {
        self.set_gst_percentage(percentage);
        self
    }

    /// 以文字輸入設定工資百分比
    pub fn set_labor_input(&mut self, input: &str) {
        self.set_labor_percentage(coerce::parse_decimal(input));
    }

    /// 以文字輸入設定 GST 百分比
    pub fn set_gst_input(&mut self, input: &str) {
        self.set_gst_percentage(coerce::parse_decimal(input));
    }
}

impl Default for CostSettings {
    fn default() -> Self {
        RawCostSettings::default().into()
    }
}

/// 估算器配置（單價表 + 百分比）
///
/// 所有欄位皆可省略，省略時使用預設值：
///
/// ```json
/// {
///   "rates": { "ply18mm": { "rate": 135, "brand": "Greenply" } },
///   "settings": { "laborPercentage": 25, "gstPercentage": 18 }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// 材料單價表
    pub rates: RateTable,

    /// 百分比設定
    pub settings: CostSettings,
}

impl EstimatorConfig {
    pub fn new(rates: RateTable, settings: CostSettings) -> Self {
        Self { rates, settings }
    }

    /// 由 JSON 載入
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 建構器模式：設置單價表
    pub fn with_rates(mut self, rates: RateTable) -> Self {
        self.rates = rates;
        self
    }

    /// 建構器模式：設置百分比
    pub fn with_settings(mut self, settings: CostSettings) -> Self {
        self.settings = settings;
        self
    }
}
