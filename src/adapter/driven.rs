// 駆動される側アダプター（リポジトリ実装、ロガー実装）

mod console_logger;
mod in_memory_product_repository;

pub use console_logger::{ConsoleLogger, LogEntry};
pub use in_memory_product_repository::{InMemoryProductRepository, SnapshotError};
