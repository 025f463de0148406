// アプリケーション層
// ドメインとリポジトリを組み合わせてユースケースを実装する

pub mod service;

pub use service::InventoryService;
