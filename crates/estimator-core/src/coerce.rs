//! 輸入正規化
//!
//! 介面層的數值輸入在進入核心前一律轉換為非負值：
//! 無法解析的輸入視為 0，負值截為 0。這裡不回傳錯誤。

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// `Decimal` 可表示的最多小數位數
const MAX_FRACTION_DIGITS: usize = 28;

/// 將負值截為 0
pub fn non_negative(value: Decimal) -> Decimal {
    if value.is_sign_negative() {
        Decimal::ZERO
    } else {
        value
    }
}

/// 由 `f64` 轉換（NaN、無限大、負值 → 0）
pub fn from_f64(value: f64) -> Decimal {
    if !value.is_finite() || value <= 0.0 {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// 解析實數輸入（尺寸、單價、百分比）
///
/// 只取開頭的數字部分，例如 `"12.5ft"` → 12.5，`"1e3"` → 1000。
/// 超出 [`Decimal`] 範圍的正值取 `Decimal::MAX`。
pub fn parse_decimal(text: &str) -> Decimal {
    let trimmed = text.trim_start();
    let (negative, rest) = split_sign(trimmed);

    let integer_len = leading_digits(rest);
    let has_point = rest[integer_len..].starts_with('.');
    let fraction_len = if has_point {
        leading_digits(&rest[integer_len + 1..])
    } else {
        0
    };

    if integer_len == 0 && fraction_len == 0 {
        return Decimal::ZERO;
    }

    // 補齊成 "整數.小數"，".5" 與 "7." 都能解析
    let integer = if integer_len == 0 { "0" } else { &rest[..integer_len] };
    let fraction = if fraction_len == 0 {
        "0"
    } else {
        let start = integer_len + 1;
        &rest[start..start + fraction_len.min(MAX_FRACTION_DIGITS)]
    };

    let mantissa = format!("{}.{}", integer, fraction)
        .parse::<Decimal>()
        .or_else(|_| integer.parse::<Decimal>())
        .unwrap_or(Decimal::MAX);

    let mantissa_len = integer_len + usize::from(has_point) + fraction_len;
    let value = match exponent(&rest[mantissa_len..]) {
        Some(exponent) => scale_by_power_of_ten(mantissa, exponent),
        None => mantissa,
    };
    apply_sign(value.normalize(), negative)
}

/// 解析整數數量輸入（材料數量覆寫）
///
/// 只取開頭的整數部分，例如 `"3.7"` → 3。
pub fn parse_quantity(text: &str) -> u64 {
    let trimmed = text.trim_start();
    let (negative, rest) = split_sign(trimmed);
    let digits = &rest[..leading_digits(rest)];

    if negative || digits.is_empty() {
        return 0;
    }
    digits.parse::<u64>().unwrap_or(u64::MAX)
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

fn leading_digits(text: &str) -> usize {
    text.bytes().take_while(|b| b.is_ascii_digit()).count()
}

/// 解析 `e`/`E` 指數，沒有數字時忽略
fn exponent(text: &str) -> Option<i64> {
    let rest = text.strip_prefix('e').or_else(|| text.strip_prefix('E'))?;
    let (negative, rest) = split_sign(rest);
    let digits = &rest[..leading_digits(rest)];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// 乘上 10 的指數次方，溢位取 `Decimal::MAX`，過小則為 0
fn scale_by_power_of_ten(mut value: Decimal, exponent: i64) -> Decimal {
    for _ in 0..exponent.unsigned_abs() {
        if value.is_zero() {
            break;
        }
        let next = if exponent > 0 {
            value.checked_mul(Decimal::TEN)
        } else {
            value.checked_div(Decimal::TEN)
        };
        match next {
            Some(next) => value = next,
            None if exponent > 0 => return Decimal::MAX,
            None => return Decimal::ZERO,
        }
    }
    value
}

fn apply_sign(value: Decimal, negative: bool) -> Decimal {
    if negative {
        Decimal::ZERO
    } else {
        value
    }
}
