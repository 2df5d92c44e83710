//! 材料單價表

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::coerce;
use crate::material::MaterialKey;
use crate::Result;

/// 材料單價與品牌
///
/// 板材的單價為每平方英尺，其餘材料為每單位。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRate {
    /// 單價
    pub rate: Decimal,

    /// 品牌
    pub brand: String,
}

impl MaterialRate {
    pub fn new(rate: Decimal, brand: impl Into<String>) -> Self {
        Self {
            rate: coerce::non_negative(rate),
            brand: brand.into(),
        }
    }
}

/// 部分單價設定（JSON 載入用）
#[derive(Debug, Deserialize)]
struct RateInput {
    rate: Option<Decimal>,
    brand: Option<String>,
}

/// 材料單價表
///
/// 全部九種材料永遠存在，不論目前是否有家具用到。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    /// 以 [`MaterialKey`] 宣告順序為索引
    rates: [MaterialRate; 9],
}

impl RateTable {
    /// 取得材料單價設定
    pub fn get(&self, material: MaterialKey) -> &MaterialRate {
        &self.rates[material as usize]
    }

    /// 取得材料單價
    pub fn rate(&self, material: MaterialKey) -> Decimal {
        self.get(material).rate
    }

    /// 取得品牌
    pub fn brand(&self, material: MaterialKey) -> &str {
        &self.get(material).brand
    }

    /// 設定單價（負值截為 0）
    pub fn set_rate(&mut self, material: MaterialKey, rate: Decimal) {
        self.entry(material).rate = coerce::non_negative(rate);
    }

    /// 以文字輸入設定單價
    pub fn set_rate_input(&mut self, material: MaterialKey, input: &str) {
        self.set_rate(material, coerce::parse_decimal(input));
    }

    /// 設定品牌
    pub fn set_brand(&mut self, material: MaterialKey, brand: impl Into<String>) {
        self.entry(material).brand = brand.into();
    }

    /// 依材料順序迭代
    pub fn iter(&self) -> impl Iterator<Item = (MaterialKey, &MaterialRate)> + '_ {
        MaterialKey::ALL
            .into_iter()
            .map(move |key| (key, self.get(key)))
    }

    /// 由 JSON 載入，覆蓋在預設值之上
    ///
    /// ```
    /// # use estimator_core::{MaterialKey, RateTable};
    /// # use rust_decimal::Decimal;
    /// let rates = RateTable::from_json(r#"{"ply18mm": {"rate": 135}}"#).unwrap();
    /// assert_eq!(rates.rate(MaterialKey::Ply18mm), Decimal::from(135));
    /// assert_eq!(rates.brand(MaterialKey::Ply18mm), "Century");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let inputs: BTreeMap<String, RateInput> = serde_json::from_str(json)?;
        Self::default().merged(inputs)
    }

    fn merged(mut self, inputs: BTreeMap<String, RateInput>) -> Result<Self> {
        for (key, input) in inputs {
            let material = key.parse::<MaterialKey>()?;
            if let Some(rate) = input.rate {
                self.set_rate(material, rate);
            }
            if let Some(brand) = input.brand {
                self.set_brand(material, brand);
            }
        }
        Ok(self)
    }

    fn entry(&mut self, material: MaterialKey) -> &mut MaterialRate {
        &mut self.rates[material as usize]
    }
}

impl Default for RateTable {
    fn default() -> Self {
        let rates = MaterialKey::ALL.map(|key| {
            let (rate, brand) = match key {
                MaterialKey::PvcLaminate => (150, "Greenlam"),
                MaterialKey::Ply18mm => (120, "Century"),
                MaterialKey::Ply12mm => (100, "Century"),
                MaterialKey::BlockBoard => (110, "Kitply"),
                MaterialKey::Laminate => (80, "Formica"),
                MaterialKey::InnerLaminate => (60, "Merino"),
                MaterialKey::FlexiblePly => (90, "Century"),
                MaterialKey::PvcMica => (140, "Greenlam"),
                MaterialKey::AluminumSection => (200, "Hindalco"),
            };
            MaterialRate::new(Decimal::from(rate), brand)
        });

        Self { rates }
    }
}

impl Serialize for RateTable {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for RateTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let inputs = BTreeMap::<String, RateInput>::deserialize(deserializer)?;
        Self::default()
            .merged(inputs)
            .map_err(serde::de::Error::custom)
    }
}
