// ドメインサービス
// 特定のエンティティに属さない価格計算ロジックを実装

use crate::domain::error::DomainError;
use crate::domain::model::{CustomerTier, DiscountCategory};

/// 割引率の上限（パーセントポイント）
const MAX_DISCOUNT_PERCENT: u32 = 30;

/// 割引計算サービス
/// 数量による割引に顧客区分の割引を上乗せし、上限30%で打ち切る
///
/// 在庫サービスとは独立しており、価格表示側から直接呼び出す。
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountCalculator;

impl DiscountCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 数量による割引率（パーセントポイント）
    /// 該当する最も高い段階のみを適用する
    fn quantity_percent(quantity: i32) -> u32 {
        match quantity {
            q if q >= 100 => 20,
            q if q >= 50 => 15,
            q if q >= 10 => 10,
            q if q >= 5 => 5,
            _ => 0,
        }
    }

    /// 上限を適用した割引率を小数で返す（例: 0.15）
    ///
    /// # Arguments
    /// * `quantity` - 購入数量
    /// * `customer_tier` - 顧客区分ラベル（大文字小文字は区別しない）
    pub fn discount_rate(&self, quantity: i32, customer_tier: &str) -> f64 {
        let percent = Self::quantity_percent(quantity)
            + CustomerTier::parse(customer_tier).bonus_percent();
        f64::from(percent.min(MAX_DISCOUNT_PERCENT)) / 100.0
    }

    /// 割引額を計算する
    ///
    /// # Arguments
    /// * `price` - 単価
    /// * `quantity` - 購入数量
    /// * `customer_tier` - 顧客区分ラベル
    ///
    /// # Returns
    /// * `Ok(f64)` - 単価 × 数量 × 割引率
    /// * `Err(DomainError::NonPositivePriceOrQuantity)` - 単価または数量が0以下
    pub fn discount_amount(
        &self,
        price: f64,
        quantity: i32,
        customer_tier: &str,
    ) -> Result<f64, DomainError> {
        if price.is_nan() || price <= 0.0 || quantity <= 0 {
            return Err(DomainError::NonPositivePriceOrQuantity);
        }
        let rate = self.discount_rate(quantity, customer_tier);
        Ok(price * f64::from(quantity) * rate)
    }

    /// 割引後の支払額を計算する
    /// 失敗条件は `discount_amount` と同じ
    pub fn final_price(
        &self,
        price: f64,
        quantity: i32,
        customer_tier: &str,
    ) -> Result<f64, DomainError> {
        let discount = self.discount_amount(price, quantity, customer_tier)?;
        Ok(price * f64::from(quantity) - discount)
    }

    /// 割引率から割引区分を判定する
    pub fn classify(&self, rate: f64) -> DiscountCategory {
        DiscountCategory::from_rate(rate)
    }
}
