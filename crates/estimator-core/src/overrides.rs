//! 材料數量覆寫

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::coerce;
use crate::material::MaterialKey;

/// 使用者手動輸入的材料數量
///
/// 設定後完全取代計算出的總量（顯示、計價皆然），直到清除為止。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuantityOverrides {
    quantities: BTreeMap<MaterialKey, u64>,
}

impl QuantityOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// 設定覆寫數量
    pub fn set(&mut self, material: MaterialKey, quantity: u64) {
        self.quantities.insert(material, quantity);
    }

    /// 以文字輸入設定（取開頭整數，無法解析視為 0）
    pub fn set_input(&mut self, material: MaterialKey, input: &str) {
        self.set(material, coerce::parse_quantity(input));
    }

    /// 清除覆寫，回到計算值
    pub fn clear(&mut self, material: MaterialKey) -> Option<u64> {
        self.quantities.remove(&material)
    }

    /// 清除全部覆寫
    pub fn clear_all(&mut self) {
        self.quantities.clear();
    }

    pub fn get(&self, material: MaterialKey) -> Option<u64> {
        self.quantities.get(&material).copied()
    }

    pub fn contains(&self, material: MaterialKey) -> bool {
        self.quantities.contains_key(&material)
    }

    /// 有效數量：有覆寫時用覆寫值，否則用計算值
    pub fn effective_quantity(&self, material: MaterialKey, computed: u64) -> u64 {
        self.get(material).unwrap_or(computed)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MaterialKey, u64)> + '_ {
        self.quantities.iter().map(|(key, qty)| (*key, *qty))
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}
