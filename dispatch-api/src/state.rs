use std::sync::Arc;
use dispatch_core::{DeliverySettings, OrderRepository};
use dispatch_order::DeliveryFacade;
use dispatch_store::DeliveryConfig;

/// Settings shared by every request of this merchant project
#[derive(Clone)]
pub struct DeliveryDefaults {
    pub project_id: String,
    pub test_mode: bool,
    pub callback_url: Option<String>,
    pub default_gateway: String,
}

impl DeliveryDefaults {
    /// Build request settings, falling back to the default gateway
    pub fn settings_for(&self, gateway_code: Option<String>) -> DeliverySettings {
        DeliverySettings {
            gateway_code: gateway_code.unwrap_or_else(|| self.default_gateway.clone()),
            project_id: self.project_id.clone(),
            test_mode: self.test_mode,
            callback_url: self.callback_url.clone(),
        }
    }
}

impl From<&DeliveryConfig> for DeliveryDefaults {
    fn from(config: &DeliveryConfig) -> Self {
        Self {
            project_id: config.project_id.clone(),
            test_mode: config.test_mode,
            callback_url: config.callback_url.clone(),
            default_gateway: config.default_gateway.clone(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub facade: Arc<DeliveryFacade>,
    pub order_repo: Arc<dyn OrderRepository>,
    pub delivery: DeliveryDefaults,
}
