// 検証ルール
// 副作用を持たない述語関数のみを置く。リポジトリは参照しない

use crate::domain::model::{Category, Product};

const CODE_MIN_LEN: usize = 3;
const CODE_MAX_LEN: usize = 10;
const NAME_MIN_LEN: usize = 3;
const NAME_MAX_LEN: usize = 100;
const DESCRIPTION_MAX_LEN: usize = 500;

/// 商品・カテゴリコードの検証
/// 前後の空白を除いて3〜10文字の英数字（A-Z, a-z, 0-9）のみ
pub fn is_valid_code(code: &str) -> bool {
    let code = code.trim();
    (CODE_MIN_LEN..=CODE_MAX_LEN).contains(&code.len())
        && code.chars().all(|c| c.is_ascii_alphanumeric())
}

/// 名称の検証
/// 前後の空白を除いて3〜100文字
/// 文字数はUnicodeスカラー値（`char`）の数で数える
pub fn is_valid_name(name: &str) -> bool {
    let length = name.trim().chars().count();
    (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&length)
}

pub fn is_valid_price(price: f64) -> bool {
    price > 0.0
}

pub fn is_valid_stock(stock: i32) -> bool {
    stock >= 0
}

pub fn is_valid_minimum_stock(minimum_stock: i32) -> bool {
    minimum_stock >= 0
}

/// 0〜100の範囲内か
pub fn is_valid_percentage(percentage: f64) -> bool {
    (0.0..=100.0).contains(&percentage)
}

pub fn is_valid_quantity(quantity: i32) -> bool {
    quantity > 0
}

/// 商品の必須項目をすべて検証する
///
/// コード、名称、カテゴリ（名称と同じ規則）、価格、在庫数、最小在庫数の順に評価し、
/// 最初に失敗した時点で `false` を返す。
pub fn is_valid_product(product: &Product) -> bool {
    is_valid_code(product.code())
        && is_valid_name(product.name())
        && is_valid_name(product.category())
        && is_valid_price(product.price())
        && is_valid_stock(product.stock())
        && is_valid_minimum_stock(product.minimum_stock())
}

/// カテゴリの必須項目を検証する
/// 説明は省略可能だが、ある場合は500文字以内
pub fn is_valid_category(category: &Category) -> bool {
    is_valid_code(category.code())
        && is_valid_name(category.name())
        && category
            .description()
            .map_or(true, |description| {
                description.chars().count() <= DESCRIPTION_MAX_LEN
            })
}
