use async_trait::async_trait;
use crate::models::MerchantOrder;
use crate::BoxError;

/// Repository trait for merchant order persistence
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert or replace the order keyed by its merchant order number
    async fn save(
        &self,
        order: &MerchantOrder,
    ) -> Result<(), BoxError>;

    async fn find_by_number(
        &self,
        number: &str,
    ) -> Result<Option<MerchantOrder>, BoxError>;
}
