use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

use std::hash::{Hash, Hasher};

/// 商品エンティティ
/// 在庫数・価格・カテゴリ・有効フラグを保持する
///
/// 同一性は商品コードのみで判定する（`key` を参照）。
/// `Default` で作成した商品はすべて空で、無効（`active == false`）となる。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    code: String,
    name: String,
    category: String,
    price: f64,
    stock: i32,
    minimum_stock: i32,
    active: bool,
}

impl Product {
    /// 新しい商品を作成
    /// 作成直後の商品は有効状態
    ///
    /// # Arguments
    /// * `code` - 商品コード
    /// * `name` - 商品名
    /// * `category` - カテゴリ名
    /// * `price` - 単価
    /// * `stock` - 在庫数
    /// * `minimum_stock` - 最小在庫数
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: i32,
        minimum_stock: i32,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            category: category.into(),
            price,
            stock,
            minimum_stock,
            active: true,
        }
    }

    /// 同一性の判定に使うキー
    /// `PartialEq` と `Hash` はこのキーだけを見る
    pub fn key(&self) -> &str {
        &self.code
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }

    pub fn minimum_stock(&self) -> i32 {
        self.minimum_stock
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn set_stock(&mut self, stock: i32) {
        self.stock = stock;
    }

    pub fn set_minimum_stock(&mut self, minimum_stock: i32) {
        self.minimum_stock = minimum_stock;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// 在庫が最小在庫数を上回っているか
    pub fn is_stock_safe(&self) -> bool {
        self.stock > self.minimum_stock
    }

    /// 在庫が残っているが最小在庫数以下か
    pub fn is_stock_low(&self) -> bool {
        self.stock > 0 && self.stock <= self.minimum_stock
    }

    /// 在庫切れか
    pub fn is_stock_out(&self) -> bool {
        self.stock == 0
    }

    /// 在庫を減らす
    ///
    /// # Arguments
    /// * `quantity` - 減らす数量
    ///
    /// # Returns
    /// * `Ok(())` - 成功
    /// * `Err(DomainError::NonPositiveQuantity)` - 数量が0以下
    /// * `Err(DomainError::InsufficientStock)` - 在庫不足（在庫数は変わらない）
    pub fn decrease_stock_by(&mut self, quantity: i32) -> Result<(), DomainError> {
        if quantity <= 0 {
            return Err(DomainError::NonPositiveQuantity);
        }
        if quantity > self.stock {
            return Err(DomainError::InsufficientStock);
        }
        self.stock -= quantity;
        Ok(())
    }

    /// 在庫を増やす
    ///
    /// # Arguments
    /// * `quantity` - 増やす数量
    ///
    /// # Returns
    /// * `Ok(())` - 成功
    /// * `Err(DomainError::NonPositiveQuantity)` - 数量が0以下
    /// * `Err(DomainError::StockOverflow)` - 加算後の在庫数が上限を超える
    pub fn increase_stock_by(&mut self, quantity: i32) -> Result<(), DomainError> {
        if quantity <= 0 {
            return Err(DomainError::NonPositiveQuantity);
        }
        self.stock = self
            .stock
            .checked_add(quantity)
            .ok_or(DomainError::StockOverflow)?;
        Ok(())
    }

    /// 指定数量の合計金額（単価 × 数量）を計算
    pub fn line_total(&self, quantity: i32) -> Result<f64, DomainError> {
        if quantity <= 0 {
            return Err(DomainError::NonPositiveQuantity);
        }
        Ok(self.price * f64::from(quantity))
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn laptop() -> Product {
        Product::new("PROD001", "Laptop Gaming", "Elektronik", 15_000_000.0, 10, 5)
    }

    #[test]
    fn test_product_creation() {
        let product = laptop();
        assert_eq!(product.code(), "PROD001");
        assert_eq!(product.name(), "Laptop Gaming");
        assert_eq!(product.category(), "Elektronik");
        assert_eq!(product.price(), 15_000_000.0);
        assert_eq!(product.stock(), 10);
        assert_eq!(product.minimum_stock(), 5);
        assert!(product.is_active());
    }

    #[test]
    fn test_default_product_is_inactive_and_empty() {
        let product = Product::default();
        assert_eq!(product.code(), "");
        assert_eq!(product.stock(), 0);
        assert!(!product.is_active());
    }

    #[test]
    fn test_setters() {
        let mut product = Product::default();
        product.set_code("P002");
        product.set_name("Mouse");
        product.set_category("Aksesoris");
        product.set_price(50_000.0);
        product.set_stock(3);
        product.set_minimum_stock(1);
        product.set_active(true);

        assert_eq!(product.code(), "P002");
        assert_eq!(product.name(), "Mouse");
        assert_eq!(product.category(), "Aksesoris");
        assert_eq!(product.price(), 50_000.0);
        assert_eq!(product.stock(), 3);
        assert_eq!(product.minimum_stock(), 1);
        assert!(product.is_active());
    }

    #[test]
    fn test_stock_safe() {
        let product = laptop();
        assert!(product.is_stock_safe());
        assert!(!product.is_stock_low());
        assert!(!product.is_stock_out());
    }

    #[test]
    fn test_stock_low_at_minimum_boundary() {
        let mut product = laptop();
        product.set_stock(5);
        assert!(!product.is_stock_safe());
        assert!(product.is_stock_low());
        assert!(!product.is_stock_out());
    }

    #[test]
    fn test_stock_out() {
        let mut product = laptop();
        product.set_stock(0);
        assert!(!product.is_stock_safe());
        assert!(!product.is_stock_low());
        assert!(product.is_stock_out());
    }

    #[test]
    fn test_stock_out_with_zero_minimum() {
        let mut product = laptop();
        product.set_stock(0);
        product.set_minimum_stock(0);
        assert!(!product.is_stock_safe());
        assert!(!product.is_stock_low());
        assert!(product.is_stock_out());
    }

    #[test]
    fn test_decrease_stock_by() {
        for (quantity, expected) in [(5, 5), (3, 7), (10, 0)] {
            let mut product = laptop();
            assert!(product.decrease_stock_by(quantity).is_ok());
            assert_eq!(product.stock(), expected);
        }
    }

    #[test]
    fn test_decrease_stock_by_non_positive() {
        let mut product = laptop();
        assert_eq!(
            product.decrease_stock_by(-5),
            Err(DomainError::NonPositiveQuantity)
        );
        assert_eq!(product.decrease_stock_by(0), Err(DomainError::NonPositiveQuantity));
        assert_eq!(product.stock(), 10);
    }

    #[test]
    fn test_decrease_stock_by_insufficient() {
        let mut product = laptop();
        let result = product.decrease_stock_by(15);
        assert_eq!(result, Err(DomainError::InsufficientStock));
        assert_eq!(result.unwrap_err().to_string(), "insufficient stock");
        assert_eq!(product.stock(), 10); // 在庫数は変わらない
    }

    #[test]
    fn test_increase_stock_by() {
        let mut product = laptop();
        assert!(product.increase_stock_by(5).is_ok());
        assert_eq!(product.stock(), 15);
    }

    #[test]
    fn test_increase_stock_by_non_positive() {
        let mut product = laptop();
        let result = product.increase_stock_by(-5);
        assert_eq!(result.unwrap_err().to_string(), "quantity must be positive");
        assert_eq!(product.stock(), 10);
    }

    #[test]
    fn test_increase_stock_by_overflow() {
        let mut product = Product::new("P001", "Laptop", "Elektronik", 1.0, i32::MAX - 1, 0);
        assert_eq!(product.increase_stock_by(10), Err(DomainError::StockOverflow));
        assert_eq!(product.stock(), i32::MAX - 1); // 在庫数は変わらない
        assert!(product.increase_stock_by(1).is_ok());
        assert_eq!(product.stock(), i32::MAX);
    }

    #[test]
    fn test_line_total() {
        let product = laptop();
        assert_eq!(product.line_total(1), Ok(15_000_000.0));
        assert_eq!(product.line_total(2), Ok(30_000_000.0));
        assert_eq!(product.line_total(5), Ok(75_000_000.0));
        assert_eq!(product.line_total(-1), Err(DomainError::NonPositiveQuantity));
    }

    #[test]
    fn test_identity_by_code_only() {
        let product1 = Product::new("PROD001", "Laptop A", "Elektronik", 1_000_000.0, 5, 2);
        let product2 = Product::new("PROD001", "Laptop B", "Elektronik", 1_200_000.0, 3, 1);
        let product3 = Product::new("PROD002", "Mouse", "Elektronik", 50_000.0, 10, 5);

        assert_eq!(product1, product2);
        assert_ne!(product1, product3);

        let set: HashSet<Product> = [product1, product2, product3].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_value(laptop()).unwrap();
        assert_eq!(json["minimumStock"], 5);
        assert_eq!(json["active"], true);
    }
}
