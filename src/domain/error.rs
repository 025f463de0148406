/// ドメイン層のエラー型
/// 呼び出し側のプログラミングミスに相当する不正な引数を表現する
///
/// 在庫サービスの事前条件違反はエラーではなく `false` / `None` で返すため、
/// このエラーは割引計算と商品エンティティの在庫操作からのみ発生する。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// 価格または数量が0以下
    #[error("price and quantity must be positive")]
    NonPositivePriceOrQuantity,
    /// 数量が0以下
    #[error("quantity must be positive")]
    NonPositiveQuantity,
    /// 在庫不足
    #[error("insufficient stock")]
    InsufficientStock,
    /// 在庫数が表現できる上限を超える
    #[error("stock overflow")]
    StockOverflow,
}
