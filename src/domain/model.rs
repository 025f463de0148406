// ドメインモデル（エンティティと値オブジェクト）

mod category;
mod product;
mod value_objects;

pub use value_objects::{CustomerTier, DiscountCategory};

pub use category::Category;
pub use product::Product;
