//! 商品在庫管理のビジネスルールエンジン
//!
//! - `domain`: エンティティ、検証ルール、割引計算、ポート
//! - `application`: 在庫サービス（リポジトリを介した在庫操作）
//! - `adapter`: インメモリリポジトリ、コンソールロガー、設定

pub mod adapter;
pub mod application;
pub mod domain;
