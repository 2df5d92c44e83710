//! 家具模型

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

use crate::coerce;
use crate::{EstimatorError, Result};

/// 新增家具的預設名稱
pub const DEFAULT_ITEM_NAME: &str = "New Furniture";

/// 家具類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FurnitureType {
    /// 衣櫃
    #[default]
    Wardrobe,
    /// 床
    Bed,
    /// 床頭櫃
    SideTable,
    /// 廚具
    Kitchen,
    /// 電視櫃
    TvUnit,
}

impl FurnitureType {
    /// 全部家具類型
    pub const ALL: [FurnitureType; 5] = [
        FurnitureType::Wardrobe,
        FurnitureType::Bed,
        FurnitureType::SideTable,
        FurnitureType::Kitchen,
        FurnitureType::TvUnit,
    ];

    /// 由標籤解析，未知標籤一律視為衣櫃
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "wardrobe" => FurnitureType::Wardrobe,
            "bed" => FurnitureType::Bed,
            "sideTable" => FurnitureType::SideTable,
            "kitchen" => FurnitureType::Kitchen,
            "tvUnit" => FurnitureType::TvUnit,
            _ => FurnitureType::Wardrobe,
        }
    }

    /// 標籤（camelCase）
    pub fn as_str(&self) -> &'static str {
        match self {
            FurnitureType::Wardrobe => "wardrobe",
            FurnitureType::Bed => "bed",
            FurnitureType::SideTable => "sideTable",
            FurnitureType::Kitchen => "kitchen",
            FurnitureType::TvUnit => "tvUnit",
        }
    }

    /// 顯示名稱
    pub fn label(&self) -> &'static str {
        match self {
            FurnitureType::Wardrobe => "Wardrobe",
            FurnitureType::Bed => "Bed",
            FurnitureType::SideTable => "Side Table",
            FurnitureType::Kitchen => "Kitchen",
            FurnitureType::TvUnit => "TV Unit",
        }
    }
}

impl From<&str> for FurnitureType {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl<'de> Deserialize<'de> for FurnitureType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// 尺寸（英尺）
///
/// 建構、更新與反序列化時負值一律截為 0。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDimensions")]
pub struct Dimensions {
    length: Decimal,
    width: Decimal,
    height: Decimal,
}

#[derive(Deserialize)]
struct RawDimensions {
    length: Decimal,
    width: Decimal,
    height: Decimal,
}

impl From<RawDimensions> for Dimensions {
    fn from(raw: RawDimensions) -> Self {
        Dimensions::new(raw.length, raw.width, raw.height)
    }
}

impl Dimensions {
    /// 創建尺寸
    pub fn new(length: Decimal, width: Decimal, height: Decimal) -> Self {
        Self {
            length: coerce::non_negative(length),
            width: coerce::non_negative(width),
            height: coerce::non_negative(height),
        }
    }

    /// 由整數英尺創建
    pub fn from_feet(length: i64, width: i64, height: i64) -> Self {
        Self::new(Decimal::from(length), Decimal::from(width), Decimal::from(height))
    }

    /// 由 `f64` 創建（NaN 與負值視為 0）
    pub fn from_f64(length: f64, width: f64, height: f64) -> Self {
        Self::new(
            coerce::from_f64(length),
            coerce::from_f64(width),
            coerce::from_f64(height),
        )
    }

    pub fn length(&self) -> Decimal {
        self.length
    }

    pub fn width(&self) -> Decimal {
        self.width
    }

    pub fn height(&self) -> Decimal {
        self.height
    }

    pub fn set_length(&mut self, length: Decimal) {
        self.length = coerce::non_negative(length);
    }

    pub fn set_width(&mut self, width: Decimal) {
        self.width = coerce::non_negative(width);
    }

    pub fn set_height(&mut self, height: Decimal) {
        self.height = coerce::non_negative(height);
    }

    /// 體積（立方英尺）
    pub fn volume(&self) -> Result<Decimal> {
        self.length
            .checked_mul(self.width)
            .and_then(|area| area.checked_mul(self.height))
            .ok_or_else(|| {
                EstimatorError::CalculationError(format!(
                    "體積溢位: {} × {} × {}",
                    self.length, self.width, self.height
                ))
            })
    }

    /// 任一邊為零
    pub fn is_degenerate(&self) -> bool {
        self.length.is_zero() || self.width.is_zero() || self.height.is_zero()
    }
}

/// 家具項目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    /// 家具ID（建立時指定，存續期間不重複）
    pub id: u64,

    /// 名稱
    pub name: String,

    /// 家具類型
    #[serde(rename = "type")]
    pub furniture_type: FurnitureType,

    /// 尺寸
    #[serde(flatten)]
    pub dimensions: Dimensions,
}

impl FurnitureItem {
    /// 創建新的家具項目
    pub fn new(
        id: u64,
        name: impl Into<String>,
        furniture_type: FurnitureType,
        dimensions: Dimensions,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            furniture_type,
            dimensions,
        }
    }

    /// 新增時使用的預設家具（衣櫃 4 × 4 × 2）
    pub fn placeholder(id: u64) -> Self {
        Self::new(
            id,
            DEFAULT_ITEM_NAME,
            FurnitureType::Wardrobe,
            Dimensions::from_feet(4, 4, 2),
        )
    }

    /// 套用單一欄位更新
    pub fn apply(&mut self, update: FurnitureUpdate) {
        match update {
            FurnitureUpdate::Name(name) => self.name = name,
            FurnitureUpdate::Type(furniture_type) => self.furniture_type = furniture_type,
            FurnitureUpdate::Length(value) => self.dimensions.set_length(value),
            FurnitureUpdate::Width(value) => self.dimensions.set_width(value),
            FurnitureUpdate::Height(value) => self.dimensions.set_height(value),
        }
    }
}

/// 可更新的家具欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FurnitureField {
    Name,
    Type,
    Length,
    Width,
    Height,
}

impl FromStr for FurnitureField {
    type Err = EstimatorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "name" => Ok(FurnitureField::Name),
            "type" => Ok(FurnitureField::Type),
            "length" => Ok(FurnitureField::Length),
            "width" => Ok(FurnitureField::Width),
            "height" => Ok(FurnitureField::Height),
            other => Err(EstimatorError::UnknownField(other.to_string())),
        }
    }
}

/// 家具欄位更新
#[derive(Debug, Clone, PartialEq)]
pub enum FurnitureUpdate {
    Name(String),
    Type(FurnitureType),
    Length(Decimal),
    Width(Decimal),
    Height(Decimal),
}

impl FurnitureUpdate {
    /// 由欄位與文字輸入建立更新（數值輸入經正規化）
    pub fn from_input(field: FurnitureField, value: &str) -> Self {
        match field {
            FurnitureField::Name => FurnitureUpdate::Name(value.to_string()),
            FurnitureField::Type => FurnitureUpdate::Type(FurnitureType::from_tag(value)),
            FurnitureField::Length => FurnitureUpdate::Length(coerce::parse_decimal(value)),
            FurnitureField::Width => FurnitureUpdate::Width(coerce::parse_decimal(value)),
            FurnitureField::Height => FurnitureUpdate::Height(coerce::parse_decimal(value)),
        }
    }
}

/// 家具清單
///
/// 清單永遠至少有一個項目：無法建立空清單，刪除最後一項會被拒絕。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FurnitureItem>", into = "Vec<FurnitureItem>")]
pub struct FurnitureCollection {
    items: Vec<FurnitureItem>,
}

impl FurnitureCollection {
    /// 以第一個項目建立清單
    pub fn new(first: FurnitureItem) -> Self {
        Self { items: vec![first] }
    }

    /// 新增預設家具，回傳新ID（現有最大ID + 1）
    pub fn add(&mut self) -> u64 {
        let id = self.next_id();
        self.items.push(FurnitureItem::placeholder(id));
        id
    }

    /// 新增指定內容的家具，回傳新ID
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        furniture_type: FurnitureType,
        dimensions: Dimensions,
    ) -> u64 {
        let id = self.next_id();
        self.items
            .push(FurnitureItem::new(id, name, furniture_type, dimensions));
        id
    }

    /// 刪除家具
    ///
    /// 找不到ID或刪除後清單會變空時不做任何事，回傳 `false`。
    pub fn remove(&mut self, id: u64) -> bool {
        let remaining = self.items.iter().filter(|item| item.id != id).count();
        if remaining == 0 || remaining == self.items.len() {
            return false;
        }
        self.items.retain(|item| item.id != id);
        true
    }

    /// 更新家具欄位，找不到ID時回傳 `false`
    pub fn update(&mut self, id: u64, update: FurnitureUpdate) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.apply(update);
                true
            }
            None => false,
        }
    }

    /// 以欄位名稱更新（介面層文字輸入）
    pub fn update_field(&mut self, id: u64, field: &str, value: &str) -> Result<bool> {
        let field = field.parse::<FurnitureField>()?;
        Ok(self.update(id, FurnitureUpdate::from_input(field, value)))
    }

    /// 依ID查詢
    pub fn get(&self, id: u64) -> Option<&FurnitureItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// 全部項目
    pub fn items(&self) -> &[FurnitureItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FurnitureItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 永遠為 `false`
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 下一個ID：現有最大ID + 1
    ///
    /// 最大ID已是 `u64::MAX` 時改用最小的未使用ID。
    fn next_id(&self) -> u64 {
        let max = self.items.iter().map(|item| item.id).max().unwrap_or(0);
        if let Some(id) = max.checked_add(1) {
            return id;
        }

        let used: HashSet<u64> = self.items.iter().map(|item| item.id).collect();
        (1..=u64::MAX)
            .find(|id| !used.contains(id))
            .unwrap_or(0)
    }
}

impl Default for FurnitureCollection {
    /// 預設清單：一個 8 × 8 × 2 的衣櫃
    fn default() -> Self {
        Self::new(FurnitureItem::new(
            1,
            "Wardrobe",
            FurnitureType::Wardrobe,
            Dimensions::from_feet(8, 8, 2),
        ))
    }
}

impl TryFrom<Vec<FurnitureItem>> for FurnitureCollection {
    type Error = EstimatorError;

    fn try_from(items: Vec<FurnitureItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(EstimatorError::EmptyCollection);
        }

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(EstimatorError::DuplicateItemId(item.id));
            }
        }

        Ok(Self { items })
    }
}

impl From<FurnitureCollection> for Vec<FurnitureItem> {
    fn from(collection: FurnitureCollection) -> Self {
        collection.items
    }
}

impl<'a> IntoIterator for &'a FurnitureCollection {
    type Item = &'a FurnitureItem;
    type IntoIter = std::slice::Iter<'a, FurnitureItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
