use dispatch_core::{
    DeliveryAction, DeliveryError, DeliveryLogger, DeliveryOrderRequest, DeliveryResult,
    LifecycleEvent, LifecycleStage, MerchantOrder, OrderRepository, ProviderClient, ProviderOrder,
};
use std::sync::Arc;

use crate::adapter::RequestAdapter;
use crate::registry::GatewayRegistry;

/// Runs delivery order lifecycle calls against the gateway selected by the
/// request settings and writes the results back to the merchant order.
///
/// Each call is independent. Concurrent calls for the same merchant order are
/// not serialized here; callers that allow them must lock per order number.
pub struct DeliveryOrderOrchestrator {
    registry: Arc<GatewayRegistry>,
    repository: Arc<dyn OrderRepository>,
    logger: Arc<dyn DeliveryLogger>,
}

impl DeliveryOrderOrchestrator {
    pub fn new(
        registry: Arc<GatewayRegistry>,
        repository: Arc<dyn OrderRepository>,
        logger: Arc<dyn DeliveryLogger>,
    ) -> Self {
        Self {
            registry,
            repository,
            logger,
        }
    }

    /// Create the delivery order and store the gateway identifiers on the
    /// merchant order.
    ///
    /// Not idempotent: every call issues a new create on the gateway, so the
    /// caller checks `has_delivery_order()` first. Nothing is saved when the
    /// gateway call fails.
    pub async fn create(&self, request: DeliveryOrderRequest) -> DeliveryResult<MerchantOrder> {
        self.log(DeliveryAction::Create, LifecycleStage::Started, &request, None);

        let client = self.client_for(&request)?;
        let payload = RequestAdapter::to_create_payload(&request);
        let delivery_order = client
            .create_order(&payload)
            .await
            .map_err(|source| request_failed(DeliveryAction::Create, &request, source))?;

        let mut order = request.order.clone();
        order.assign_provider_order(&delivery_order);
        self.repository
            .save(&order)
            .await
            .map_err(DeliveryError::Repository)?;

        self.log(DeliveryAction::Create, LifecycleStage::Completed, &request, Some(&delivery_order));
        Ok(order)
    }

    /// Push the current order details to the gateway.
    ///
    /// The merchant order is returned as given: identifiers are stable after
    /// create and are not re-read from the update response.
    pub async fn update(&self, request: DeliveryOrderRequest) -> DeliveryResult<MerchantOrder> {
        self.log(DeliveryAction::Update, LifecycleStage::Started, &request, None);
        let provider_order_id = require_delivery_order(&request)?;

        let client = self.client_for(&request)?;
        let payload = RequestAdapter::to_update_payload(&request);
        let delivery_order = client
            .update_order(&provider_order_id, &payload)
            .await
            .map_err(|source| request_failed(DeliveryAction::Update, &request, source))?;

        self.log(DeliveryAction::Update, LifecycleStage::Completed, &request, Some(&delivery_order));
        Ok(request.order)
    }

    /// Tell the gateway the delivery has been paid for
    pub async fn prepaid(&self, request: DeliveryOrderRequest) -> DeliveryResult<MerchantOrder> {
        self.log(DeliveryAction::Prepaid, LifecycleStage::Started, &request, None);
        let provider_order_id = require_delivery_order(&request)?;

        let client = self.client_for(&request)?;
        let delivery_order = client
            .prepaid_order(&provider_order_id)
            .await
            .map_err(|source| request_failed(DeliveryAction::Prepaid, &request, source))?;

        self.log(DeliveryAction::Prepaid, LifecycleStage::Completed, &request, Some(&delivery_order));
        Ok(request.order)
    }

    /// Fetch the gateway's view of the delivery order. Does not touch the merchant order.
    pub async fn get(&self, request: &DeliveryOrderRequest) -> DeliveryResult<ProviderOrder> {
        let provider_order_id = require_delivery_order(request)?;
        let client = self.client_for(request)?;

        client
            .get_order(&provider_order_id)
            .await
            .map_err(|source| request_failed(DeliveryAction::Get, request, source))
    }

    fn client_for(&self, request: &DeliveryOrderRequest) -> DeliveryResult<Arc<dyn ProviderClient>> {
        self.registry
            .resolve(&request.settings.gateway_code, request.order_number())
    }

    fn log(
        &self,
        action: DeliveryAction,
        stage: LifecycleStage,
        request: &DeliveryOrderRequest,
        delivery_order: Option<&ProviderOrder>,
    ) {
        self.logger.info(&LifecycleEvent {
            action,
            stage,
            order_number: request.order.number.clone(),
            project_id: request.settings.project_id.clone(),
            provider_order_number: delivery_order.map(|o| o.number.clone()),
        });
    }
}

pub(crate) fn require_delivery_order(request: &DeliveryOrderRequest) -> DeliveryResult<String> {
    request
        .order
        .provider_order_id
        .clone()
        .ok_or_else(|| DeliveryError::undefined_delivery_order(&request.order))
}

fn request_failed(
    action: DeliveryAction,
    request: &DeliveryOrderRequest,
    source: dispatch_core::BoxError,
) -> DeliveryError {
    tracing::error!(
        "Delivery order request '{}' for order {} via gateway '{}' failed: {}",
        action,
        request.order.number,
        request.settings.gateway_code,
        source
    );
    DeliveryError::DeliveryOrderRequest {
        action,
        order_number: request.order.number.clone(),
        source,
    }
}
