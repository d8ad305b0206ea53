pub mod registry;
pub mod adapter;
pub mod orchestrator;
pub mod callback;
pub mod facade;

#[cfg(test)]
pub(crate) mod test_support;

pub use registry::{GatewayRegistry, GatewayRegistryBuilder};
pub use adapter::RequestAdapter;
pub use orchestrator::DeliveryOrderOrchestrator;
pub use callback::CallbackReconciler;
pub use facade::DeliveryFacade;

use dispatch_core::{DeliveryLogger, OrderRepository};
use std::sync::Arc;

/// Wire the orchestrator, reconciler and facade around shared collaborators
pub fn build_facade(
    registry: GatewayRegistry,
    repository: Arc<dyn OrderRepository>,
    logger: Arc<dyn DeliveryLogger>,
) -> DeliveryFacade {
    let orchestrator = Arc::new(DeliveryOrderOrchestrator::new(
        Arc::new(registry),
        repository.clone(),
        logger,
    ));
    let reconciler = CallbackReconciler::new(orchestrator.clone(), repository);
    DeliveryFacade::new(orchestrator, reconciler)
}
