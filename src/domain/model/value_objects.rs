use serde::{Deserialize, Serialize};

use std::fmt;

/// 顧客区分
/// 数量割引に上乗せされる割引率を決める
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerTier {
    /// プレミアム会員（+10%）
    #[serde(rename = "PREMIUM")]
    Premium,
    /// 通常会員（+5%）
    #[serde(rename = "REGULER")]
    Regular,
    /// 新規顧客（+2%）
    #[serde(rename = "BARU")]
    New,
    /// 未登録・不明な区分（+0%）
    #[serde(rename = "UNRECOGNIZED")]
    Unrecognized,
}

impl CustomerTier {
    /// ラベル文字列から顧客区分を判定する
    /// 大文字小文字は区別しない。該当しない値はすべて `Unrecognized`
    pub fn parse(label: &str) -> Self {
        if label.eq_ignore_ascii_case("PREMIUM") {
            CustomerTier::Premium
        } else if label.eq_ignore_ascii_case("REGULER") {
            CustomerTier::Regular
        } else if label.eq_ignore_ascii_case("BARU") {
            CustomerTier::New
        } else {
            CustomerTier::Unrecognized
        }
    }

    /// 上乗せ割引率（パーセントポイント）
    pub fn bonus_percent(&self) -> u32 {
        match self {
            CustomerTier::Premium => 10,
            CustomerTier::Regular => 5,
            CustomerTier::New => 2,
            CustomerTier::Unrecognized => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerTier::Premium => "PREMIUM",
            CustomerTier::Regular => "REGULER",
            CustomerTier::New => "BARU",
            CustomerTier::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 割引区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountCategory {
    NoDiscount,
    LightDiscount,
    ModerateDiscount,
    LargeDiscount,
}

impl DiscountCategory {
    /// 割引率（小数、例: 0.15）から割引区分を判定する
    ///
    /// 各区分の下限は上位区分に含まれる（0.10 は MODERATE、0.20 は LARGE）。
    /// NaN は割引なしとして扱う。
    pub fn from_rate(rate: f64) -> Self {
        if rate.is_nan() || rate <= 0.0 {
            DiscountCategory::NoDiscount
        } else if rate < 0.10 {
            DiscountCategory::LightDiscount
        } else if rate < 0.20 {
            DiscountCategory::ModerateDiscount
        } else {
            DiscountCategory::LargeDiscount
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountCategory::NoDiscount => "NO_DISCOUNT",
            DiscountCategory::LightDiscount => "LIGHT_DISCOUNT",
            DiscountCategory::ModerateDiscount => "MODERATE_DISCOUNT",
            DiscountCategory::LargeDiscount => "LARGE_DISCOUNT",
        }
    }
}

impl fmt::Display for DiscountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
