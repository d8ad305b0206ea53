use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{DeliveryStatus, ProviderOrder};
use crate::payload::{ProviderCreatePayload, ProviderUpdatePayload};
use crate::BoxError;

/// Client of one external delivery gateway
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Register a new delivery order with the gateway
    async fn create_order(
        &self,
        payload: &ProviderCreatePayload,
    ) -> Result<ProviderOrder, BoxError>;

    /// Replace the details of an existing delivery order
    async fn update_order(
        &self,
        provider_order_id: &str,
        payload: &ProviderUpdatePayload,
    ) -> Result<ProviderOrder, BoxError>;

    async fn get_order(
        &self,
        provider_order_id: &str,
    ) -> Result<ProviderOrder, BoxError>;

    /// Mark the delivery as paid so the gateway may dispatch it
    async fn prepaid_order(
        &self,
        provider_order_id: &str,
    ) -> Result<ProviderOrder, BoxError>;
}

/// In-process gateway that keeps delivery orders in memory.
/// Used for local runs and wherever a real carrier is not reachable.
pub struct SandboxProviderClient {
    prefix: String,
    sequence: AtomicU64,
    orders: RwLock<HashMap<String, ProviderOrder>>,
}

impl SandboxProviderClient {
    pub fn new(gateway_code: &str) -> Self {
        Self {
            prefix: gateway_code.to_uppercase(),
            sequence: AtomicU64::new(0),
            orders: RwLock::new(HashMap::new()),
        }
    }

    /// Simulate a status change made on the gateway side (e.g. parcel picked up)
    pub async fn set_status(
        &self,
        provider_order_id: &str,
        status: DeliveryStatus,
    ) -> Result<ProviderOrder, BoxError> {
        let mut orders = self.orders.write().await;
        let order = orders
            .get_mut(provider_order_id)
            .ok_or_else(|| format!("Delivery order {} not found", provider_order_id))?;
        order.status = status;
        Ok(order.clone())
    }
}

#[async_trait]
impl ProviderClient for SandboxProviderClient {
    async fn create_order(
        &self,
        payload: &ProviderCreatePayload,
    ) -> Result<ProviderOrder, BoxError> {
        if payload.shipments.is_empty() {
            return Err(format!("Order {} has no shipments", payload.eshop_order_id).into());
        }

        let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let order = ProviderOrder {
            id: Uuid::new_v4().simple().to_string(),
            number: format!("{}-{:06}", self.prefix, seq),
            status: DeliveryStatus::New,
        };

        tracing::debug!("Sandbox gateway {} created delivery order {}", self.prefix, order.number);
        self.orders.write().await.insert(order.id.clone(), order.clone());
        Ok(order)
    }

    async fn update_order(
        &self,
        provider_order_id: &str,
        payload: &ProviderUpdatePayload,
    ) -> Result<ProviderOrder, BoxError> {
        if payload.shipments.is_empty() {
            return Err(format!("Order {} has no shipments", payload.eshop_order_id).into());
        }
        self.get_order(provider_order_id).await
    }

    async fn get_order(
        &self,
        provider_order_id: &str,
    ) -> Result<ProviderOrder, BoxError> {
        self.orders
            .read()
            .await
            .get(provider_order_id)
            .cloned()
            .ok_or_else(|| format!("Delivery order {} not found", provider_order_id).into())
    }

    async fn prepaid_order(
        &self,
        provider_order_id: &str,
    ) -> Result<ProviderOrder, BoxError> {
        self.set_status(provider_order_id, DeliveryStatus::Prepaid).await
    }
}
