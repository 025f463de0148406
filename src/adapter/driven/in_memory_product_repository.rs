use crate::domain::model::Product;
use crate::domain::port::ProductRepository;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// スナップショットの読み書きエラー
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate product code in snapshot: {0}")]
    DuplicateCode(String),
}

/// インメモリ商品リポジトリ
/// 前後の空白を除いた商品コードをキーとして商品を保持する
///
/// 一覧系の問い合わせは商品コードの昇順で返す。
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: Mutex<HashMap<String, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 商品を指定してリポジトリを作成
    /// 同じコードの商品は後のものが優先される
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let repository = Self::new();
        {
            let mut map = repository.lock();
            for product in products {
                map.insert(normalize(product.code()), product);
            }
        }
        repository
    }

    /// 保持している商品数
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// 全商品をJSON配列として書き出す
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        let products = self.find_all();
        Ok(serde_json::to_string_pretty(&products)?)
    }

    /// JSON配列からリポジトリを復元する
    ///
    /// # Returns
    /// * `Ok(InMemoryProductRepository)` - 復元成功
    /// * `Err(SnapshotError::Json)` - JSONとして不正
    /// * `Err(SnapshotError::DuplicateCode)` - 同じ商品コードが複数含まれている
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        let mut map = HashMap::with_capacity(products.len());
        for product in products {
            let key = normalize(product.code());
            if map.contains_key(&key) {
                return Err(SnapshotError::DuplicateCode(key));
            }
            map.insert(key, product);
        }
        Ok(Self {
            products: Mutex::new(map),
        })
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Product>> {
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn collect_sorted<F>(&self, predicate: F) -> Vec<Product>
    where
        F: Fn(&Product) -> bool,
    {
        let products = self.lock();
        let mut result: Vec<Product> = products
            .values()
            .filter(|product| predicate(product))
            .cloned()
            .collect();
        // 商品コードの昇順でソート
        result.sort_by(|a, b| a.code().cmp(b.code()));
        result
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_string()
}

impl ProductRepository for InMemoryProductRepository {
    fn save(&self, product: &Product) -> bool {
        let key = normalize(product.code());
        if key.is_empty() {
            return false;
        }
        self.lock().insert(key, product.clone());
        true
    }

    fn find_by_code(&self, code: &str) -> Option<Product> {
        self.lock().get(code.trim()).cloned()
    }

    fn find_by_name(&self, name_part: &str) -> Vec<Product> {
        let needle = name_part.to_lowercase();
        self.collect_sorted(|product| product.name().to_lowercase().contains(&needle))
    }

    fn find_by_category(&self, category: &str) -> Vec<Product> {
        let category = category.trim().to_lowercase();
        self.collect_sorted(|product| product.category().trim().to_lowercase() == category)
    }

    fn find_low_stock(&self) -> Vec<Product> {
        self.collect_sorted(Product::is_stock_low)
    }

    fn find_out_of_stock(&self) -> Vec<Product> {
        self.collect_sorted(Product::is_stock_out)
    }

    fn delete(&self, code: &str) -> bool {
        self.lock().remove(code.trim()).is_some()
    }

    fn update_stock(&self, code: &str, new_stock: i32) -> bool {
        match self.lock().get_mut(code.trim()) {
            Some(product) => {
                product.set_stock(new_stock);
                true
            }
            None => false,
        }
    }

    fn find_all(&self) -> Vec<Product> {
        self.collect_sorted(|_| true)
    }
}
