use dispatch_core::{
    DeliveryError, DeliveryOrderRequest, DeliveryResult, DeliverySettings, MerchantOrder,
    OrderRepository,
};
use std::sync::Arc;

use crate::orchestrator::DeliveryOrderOrchestrator;

/// Applies status updates pushed by a gateway to the merchant order
pub struct CallbackReconciler {
    orchestrator: Arc<DeliveryOrderOrchestrator>,
    repository: Arc<dyn OrderRepository>,
}

impl CallbackReconciler {
    pub fn new(
        orchestrator: Arc<DeliveryOrderOrchestrator>,
        repository: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            orchestrator,
            repository,
        }
    }

    /// Re-read the delivery order from its gateway and overwrite the
    /// provider-derived fields of the merchant order with it.
    ///
    /// Every provider field is replaced rather than patched, so delivering the
    /// same callback twice ends in the same state.
    pub async fn reconcile(&self, request: DeliveryOrderRequest) -> DeliveryResult<MerchantOrder> {
        let delivery_order = self.orchestrator.get(&request).await?;

        let mut order = request.order;
        order.apply_provider_state(&delivery_order);
        self.repository
            .save(&order)
            .await
            .map_err(DeliveryError::Repository)?;

        tracing::info!(
            "Order {} reconciled with delivery order {} ({:?})",
            order.number,
            delivery_order.number,
            delivery_order.status
        );
        Ok(order)
    }

    /// Load the merchant order by number and reconcile it
    pub async fn reconcile_by_number(
        &self,
        order_number: &str,
        settings: DeliverySettings,
    ) -> DeliveryResult<MerchantOrder> {
        let order = self
            .repository
            .find_by_number(order_number)
            .await
            .map_err(DeliveryError::Repository)?
            .ok_or_else(|| DeliveryError::MerchantOrderNotFound(order_number.to_string()))?;

        self.reconcile(DeliveryOrderRequest::new(order, settings)).await
    }
}
