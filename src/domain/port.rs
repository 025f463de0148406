// 出力ポート
// ドメイン層が外部に依存する機能をトレイトとして定義
// アダプター層でこれらのトレイトを実装する

use crate::domain::model::Product;
use std::collections::HashMap;
use uuid::Uuid;

/// ログレベル
/// 宣言順に重要度が高くなる
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// ロガートレイト
/// ログ出力を抽象化するポート
pub trait Logger: Send + Sync {
    /// デバッグレベルのログを出力
    fn debug(
        &self,
        component: &str,
        message: &str,
        correlation_id: Option<Uuid>,
        context: Option<HashMap<String, String>>,
    );

    /// 情報レベルのログを出力
    fn info(
        &self,
        component: &str,
        message: &str,
        correlation_id: Option<Uuid>,
        context: Option<HashMap<String, String>>,
    );

    /// 警告レベルのログを出力
    fn warn(
        &self,
        component: &str,
        message: &str,
        correlation_id: Option<Uuid>,
        context: Option<HashMap<String, String>>,
    );

    /// エラーレベルのログを出力
    fn error(
        &self,
        component: &str,
        message: &str,
        correlation_id: Option<Uuid>,
        context: Option<HashMap<String, String>>,
    );
}

/// 商品リポジトリトレイト
/// 商品コードをキーとした商品の永続化を抽象化する
///
/// 対象が見つからない場合はエラーではなく `false` / `None` / 空のリストを返す。
/// 在庫の読み取りと書き込みの原子性は実装側の責務とする。
pub trait ProductRepository: Send + Sync {
    /// 商品を保存する（既存の場合は更新）
    ///
    /// # Returns
    /// * `true` - 保存成功
    /// * `false` - 保存失敗
    fn save(&self, product: &Product) -> bool;

    /// 商品コードで商品を検索する
    fn find_by_code(&self, code: &str) -> Option<Product>;

    /// 商品名の部分一致で商品を検索する
    fn find_by_name(&self, name_part: &str) -> Vec<Product>;

    /// カテゴリで商品を検索する
    fn find_by_category(&self, category: &str) -> Vec<Product>;

    /// 在庫が残っているが最小在庫数以下の商品を取得する
    fn find_low_stock(&self) -> Vec<Product>;

    /// 在庫切れ（在庫数0）の商品を取得する
    fn find_out_of_stock(&self) -> Vec<Product>;

    /// 商品を削除する
    ///
    /// # Returns
    /// * `true` - 削除成功
    /// * `false` - 商品コードが見つからない
    fn delete(&self, code: &str) -> bool;

    /// 商品の在庫数を更新する
    ///
    /// # Returns
    /// * `true` - 更新成功
    /// * `false` - 商品コードが見つからない
    fn update_stock(&self, code: &str, new_stock: i32) -> bool;

    /// すべての商品を取得する
    fn find_all(&self) -> Vec<Product>;
}
