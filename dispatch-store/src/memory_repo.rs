use async_trait::async_trait;
use dispatch_core::{BoxError, MerchantOrder, OrderRepository};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Keeps merchant orders in process memory, keyed by merchant order number
#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<String, MerchantOrder>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(
        &self,
        order: &MerchantOrder,
    ) -> Result<(), BoxError> {
        self.orders
            .write()
            .await
            .insert(order.number.clone(), order.clone());
        tracing::debug!("Saved merchant order {}", order.number);
        Ok(())
    }

    async fn find_by_number(
        &self,
        number: &str,
    ) -> Result<Option<MerchantOrder>, BoxError> {
        Ok(self.orders.read().await.get(number).cloned())
    }
}
