use crate::domain::model::Product;
use crate::domain::port::{Logger, ProductRepository};
use crate::domain::validation::{
    is_valid_code, is_valid_product, is_valid_quantity, is_valid_stock,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

const DEFAULT_COMPONENT: &str = "InventoryService";

/// 在庫サービス
/// 商品の登録・削除・検索と在庫の入出庫を担当する
///
/// 事前条件を満たさない操作はエラーを返さず、`false` または `None` を返す。
/// リポジトリに触れる前に必ず入力を再検証する。
pub struct InventoryService {
    product_repository: Arc<dyn ProductRepository>,
    logger: Arc<dyn Logger>,
    component: String,
}

impl InventoryService {
    /// 新しい在庫サービスを作成
    ///
    /// # Arguments
    /// * `product_repository` - 商品リポジトリ
    /// * `logger` - ログ出力先
    pub fn new(product_repository: Arc<dyn ProductRepository>, logger: Arc<dyn Logger>) -> Self {
        Self {
            product_repository,
            logger,
            component: DEFAULT_COMPONENT.to_string(),
        }
    }

    /// ログに出すコンポーネント名を指定
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = component.into();
        self
    }

    /// 事前条件違反を警告ログに残し、`false` を返す
    fn reject(&self, correlation_id: Uuid, operation: &str, code: &str, reason: &str) -> bool {
        let mut context = HashMap::new();
        context.insert("operation".to_string(), operation.to_string());
        context.insert("code".to_string(), code.to_string());
        context.insert("reason".to_string(), reason.to_string());
        self.logger.warn(
            &self.component,
            &format!("{} rejected", operation),
            Some(correlation_id),
            Some(context),
        );
        false
    }

    /// リポジトリの結果をログに残してそのまま返す
    fn record(&self, correlation_id: Uuid, operation: &str, code: &str, succeeded: bool) -> bool {
        let mut context = HashMap::new();
        context.insert("operation".to_string(), operation.to_string());
        context.insert("code".to_string(), code.to_string());
        if succeeded {
            self.logger.info(
                &self.component,
                &format!("{} succeeded", operation),
                Some(correlation_id),
                Some(context),
            );
        } else {
            self.logger.error(
                &self.component,
                &format!("{} failed in repository", operation),
                Some(correlation_id),
                Some(context),
            );
        }
        succeeded
    }

    /// 新しい商品を登録する
    ///
    /// # Returns
    /// * `true` - 登録成功
    /// * `false` - 商品が不正、同じコードの商品が既に存在、または保存失敗
    pub fn add_product(&self, product: &Product) -> bool {
        let correlation_id = Uuid::new_v4();
        let code = product.code();

        if !is_valid_product(product) {
            return self.reject(correlation_id, "add_product", code, "invalid product");
        }
        if self.product_repository.find_by_code(code).is_some() {
            return self.reject(correlation_id, "add_product", code, "duplicate code");
        }

        let saved = self.product_repository.save(product);
        self.record(correlation_id, "add_product", code, saved)
    }

    /// 商品を削除する
    /// 在庫が残っている商品は削除できない
    ///
    /// # Returns
    /// * `true` - 削除成功
    /// * `false` - コードが不正、商品が存在しない、在庫が残っている、または削除失敗
    pub fn remove_product(&self, code: &str) -> bool {
        let correlation_id = Uuid::new_v4();

        if !is_valid_code(code) {
            return self.reject(correlation_id, "remove_product", code, "invalid code");
        }
        let Some(product) = self.product_repository.find_by_code(code) else {
            return self.reject(correlation_id, "remove_product", code, "not found");
        };
        if product.stock() > 0 {
            return self.reject(correlation_id, "remove_product", code, "stock remaining");
        }

        let deleted = self.product_repository.delete(code);
        self.record(correlation_id, "remove_product", code, deleted)
    }

    /// 商品コードで商品を検索する
    /// コードが不正な場合はリポジトリを参照せずに `None` を返す
    pub fn find_by_code(&self, code: &str) -> Option<Product> {
        if !is_valid_code(code) {
            return None;
        }
        self.product_repository.find_by_code(code)
    }

    /// 商品名の部分一致で検索する
    pub fn find_by_name(&self, name_part: &str) -> Vec<Product> {
        self.product_repository.find_by_name(name_part)
    }

    /// カテゴリで検索する
    pub fn find_by_category(&self, category: &str) -> Vec<Product> {
        self.product_repository.find_by_category(category)
    }

    /// 在庫数を直接更新する
    ///
    /// # Returns
    /// * `true` - 更新成功
    /// * `false` - コードまたは在庫数が不正、商品が存在しない、または更新失敗
    pub fn update_stock(&self, code: &str, new_stock: i32) -> bool {
        let correlation_id = Uuid::new_v4();

        if !is_valid_code(code) {
            return self.reject(correlation_id, "update_stock", code, "invalid code");
        }
        if !is_valid_stock(new_stock) {
            return self.reject(correlation_id, "update_stock", code, "negative stock");
        }
        if self.product_repository.find_by_code(code).is_none() {
            return self.reject(correlation_id, "update_stock", code, "not found");
        }

        let updated = self.product_repository.update_stock(code, new_stock);
        self.record(correlation_id, "update_stock", code, updated)
    }

    /// 出庫（販売・持ち出し）により在庫を減らす
    ///
    /// # Returns
    /// * `true` - 出庫成功
    /// * `false` - 入力が不正、商品が存在しないか無効、在庫不足、または更新失敗
    pub fn decrease_stock(&self, code: &str, quantity: i32) -> bool {
        let correlation_id = Uuid::new_v4();

        if !is_valid_code(code) {
            return self.reject(correlation_id, "decrease_stock", code, "invalid code");
        }
        if !is_valid_quantity(quantity) {
            return self.reject(correlation_id, "decrease_stock", code, "non-positive quantity");
        }
        let Some(product) = self.active_product(code) else {
            return self.reject(correlation_id, "decrease_stock", code, "not found or inactive");
        };
        if product.stock() < quantity {
            return self.reject(correlation_id, "decrease_stock", code, "insufficient stock");
        }

        let new_stock = product.stock() - quantity;
        let updated = self.product_repository.update_stock(code, new_stock);
        self.record(correlation_id, "decrease_stock", code, updated)
    }

    /// 入庫（仕入れ）により在庫を増やす
    ///
    /// # Returns
    /// * `true` - 入庫成功
    /// * `false` - 入力が不正、商品が存在しないか無効、在庫数が上限を超える、または更新失敗
    pub fn increase_stock(&self, code: &str, quantity: i32) -> bool {
        let correlation_id = Uuid::new_v4();

        if !is_valid_code(code) {
            return self.reject(correlation_id, "increase_stock", code, "invalid code");
        }
        if !is_valid_quantity(quantity) {
            return self.reject(correlation_id, "increase_stock", code, "non-positive quantity");
        }
        let Some(product) = self.active_product(code) else {
            return self.reject(correlation_id, "increase_stock", code, "not found or inactive");
        };
        let Some(new_stock) = product.stock().checked_add(quantity) else {
            return self.reject(correlation_id, "increase_stock", code, "stock overflow");
        };

        let updated = self.product_repository.update_stock(code, new_stock);
        self.record(correlation_id, "increase_stock", code, updated)
    }

    fn active_product(&self, code: &str) -> Option<Product> {
        self.product_repository
            .find_by_code(code)
            .filter(Product::is_active)
    }

    /// 在庫が少ない商品を取得する
    pub fn low_stock_products(&self) -> Vec<Product> {
        self.product_repository.find_low_stock()
    }

    /// 在庫切れの商品を取得する
    pub fn out_of_stock_products(&self) -> Vec<Product> {
        self.product_repository.find_out_of_stock()
    }

    /// 有効な商品の在庫金額（単価 × 在庫数）の合計
    pub fn total_inventory_value(&self) -> f64 {
        self.product_repository
            .find_all()
            .iter()
            .filter(|product| product.is_active())
            .map(|product| product.price() * f64::from(product.stock()))
            .sum()
    }

    /// 有効な商品の在庫数の合計
    pub fn total_stock_units(&self) -> i64 {
        self.product_repository
            .find_all()
            .iter()
            .filter(|product| product.is_active())
            .map(|product| i64::from(product.stock()))
            .sum()
    }
}
