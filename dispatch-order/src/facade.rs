use dispatch_core::{DeliveryOrderRequest, DeliveryResult, DeliverySettings, MerchantOrder};
use std::sync::Arc;

use crate::callback::CallbackReconciler;
use crate::orchestrator::DeliveryOrderOrchestrator;

/// Entry point for calling code. Errors are passed through as raised.
pub struct DeliveryFacade {
    orchestrator: Arc<DeliveryOrderOrchestrator>,
    reconciler: CallbackReconciler,
}

impl DeliveryFacade {
    pub fn new(orchestrator: Arc<DeliveryOrderOrchestrator>, reconciler: CallbackReconciler) -> Self {
        Self {
            orchestrator,
            reconciler,
        }
    }

    pub async fn create_delivery_order(&self, request: DeliveryOrderRequest) -> DeliveryResult<MerchantOrder> {
        self.orchestrator.create(request).await
    }

    pub async fn update_delivery_order(&self, request: DeliveryOrderRequest) -> DeliveryResult<MerchantOrder> {
        self.orchestrator.update(request).await
    }

    pub async fn prepaid_delivery_order(&self, request: DeliveryOrderRequest) -> DeliveryResult<MerchantOrder> {
        self.orchestrator.prepaid(request).await
    }

    pub async fn reconcile_callback(&self, request: DeliveryOrderRequest) -> DeliveryResult<MerchantOrder> {
        self.reconciler.reconcile(request).await
    }

    pub async fn reconcile_callback_for_order(
        &self,
        order_number: &str,
        settings: DeliverySettings,
    ) -> DeliveryResult<MerchantOrder> {
        self.reconciler.reconcile_by_number(order_number, settings).await
    }
}

#[cfg(test)]
mod tests {
    use crate::build_facade;
    use crate::registry::GatewayRegistry;
    use crate::test_support::*;
    use dispatch_core::{DeliveryError, DeliveryOrderRequest, DeliveryStatus};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_update_callback_through_facade() {
        let provider = Arc::new(RecordingProvider::returning(provider_order("P-9", "FP-9", DeliveryStatus::New)));
        let repository = Arc::new(RecordingRepository::default());
        let registry = GatewayRegistry::builder().register("fastpost", provider.clone()).build();
        let facade = build_facade(registry, repository.clone(), Arc::new(RecordingLogger::default()));

        let created = facade
            .create_delivery_order(DeliveryOrderRequest::new(order("M-1"), settings("fastpost")))
            .await
            .unwrap();
        assert_eq!(created.provider_order_id.as_deref(), Some("P-9"));

        facade
            .update_delivery_order(DeliveryOrderRequest::new(created.clone(), settings("fastpost")))
            .await
            .unwrap();

        provider.set_response(provider_order("P-9", "FP-9", DeliveryStatus::Delivered));
        let reconciled = facade
            .reconcile_callback_for_order("M-1", settings("fastpost"))
            .await
            .unwrap();

        assert_eq!(reconciled.delivery_status, Some(DeliveryStatus::Delivered));
        assert_eq!(provider.calls(), vec!["create:M-1", "update:P-9:M-1", "get:P-9"]);
        assert_eq!(repository.saved().len(), 2);
    }

    #[tokio::test]
    async fn test_facade_passes_errors_through() {
        let repository = Arc::new(RecordingRepository::default());
        let facade = build_facade(
            GatewayRegistry::builder().build(),
            repository.clone(),
            Arc::new(RecordingLogger::default()),
        );

        let err = facade
            .create_delivery_order(DeliveryOrderRequest::new(order("M-1"), settings("unknown")))
            .await
            .unwrap_err();
        assert!(matches!(err, DeliveryError::GatewayNotFound { .. }));

        let err = facade
            .update_delivery_order(DeliveryOrderRequest::new(order("M-2"), settings("unknown")))
            .await
            .unwrap_err();
        assert!(matches!(err, DeliveryError::UndefinedDeliveryOrder { ref order } if order.number == "M-2"));

        let err = facade
            .prepaid_delivery_order(DeliveryOrderRequest::new(order("M-2"), settings("unknown")))
            .await
            .unwrap_err();
        assert!(matches!(err, DeliveryError::UndefinedDeliveryOrder { .. }));

        let err = facade
            .reconcile_callback(DeliveryOrderRequest::new(order("M-2"), settings("unknown")))
            .await
            .unwrap_err();
        assert!(matches!(err, DeliveryError::UndefinedDeliveryOrder { .. }));

        assert!(repository.saved().is_empty());
    }
}
