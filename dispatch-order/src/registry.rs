use dispatch_core::{DeliveryError, DeliveryResult, ProviderClient};
use std::collections::HashMap;
use std::sync::Arc;

/// Maps gateway codes to the client that talks to that gateway.
/// Built once at startup and only read afterwards.
pub struct GatewayRegistry {
    clients: HashMap<String, Arc<dyn ProviderClient>>,
}

impl GatewayRegistry {
    pub fn builder() -> GatewayRegistryBuilder {
        GatewayRegistryBuilder::default()
    }

    /// Pick the client for `gateway_code`; `order_number` is only carried for diagnostics
    pub fn resolve(
        &self,
        gateway_code: &str,
        order_number: &str,
    ) -> DeliveryResult<Arc<dyn ProviderClient>> {
        self.clients
            .get(gateway_code)
            .cloned()
            .ok_or_else(|| DeliveryError::GatewayNotFound {
                gateway_code: gateway_code.to_string(),
                order_number: order_number.to_string(),
            })
    }

    pub fn contains(&self, gateway_code: &str) -> bool {
        self.clients.contains_key(gateway_code)
    }

    pub fn gateway_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.clients.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

#[derive(Default)]
pub struct GatewayRegistryBuilder {
    clients: HashMap<String, Arc<dyn ProviderClient>>,
}

impl GatewayRegistryBuilder {
    /// Register a client. A later registration under the same code wins.
    pub fn register(mut self, gateway_code: impl Into<String>, client: Arc<dyn ProviderClient>) -> Self {
        let gateway_code = gateway_code.into();
        if self.clients.insert(gateway_code.clone(), client).is_some() {
            tracing::warn!("Delivery gateway '{}' registered twice, keeping the last client", gateway_code);
        }
        self
    }

    pub fn build(self) -> GatewayRegistry {
        GatewayRegistry {
            clients: self.clients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_core::SandboxProviderClient;

    fn registry() -> GatewayRegistry {
        GatewayRegistry::builder()
            .register("fastpost", Arc::new(SandboxProviderClient::new("fastpost")))
            .register("slowpost", Arc::new(SandboxProviderClient::new("slowpost")))
            .build()
    }

    #[test]
    fn test_resolve_registered_gateway() {
        let registry = registry();
        assert!(registry.resolve("fastpost", "M-1").is_ok());
        assert!(registry.contains("slowpost"));
        assert_eq!(registry.gateway_codes(), vec!["fastpost", "slowpost"]);
    }

    #[test]
    fn test_unknown_gateway_carries_code_and_order() {
        let registry = registry();

        for code in ["unknown", "", "FASTPOST", "fastpost "] {
            match registry.resolve(code, "M-1") {
                Err(DeliveryError::GatewayNotFound { gateway_code, order_number }) => {
                    assert_eq!(gateway_code, code);
                    assert_eq!(order_number, "M-1");
                }
                Err(other) => panic!("unexpected error: {other}"),
                Ok(_) => panic!("gateway '{code}' should not resolve"),
            }
        }
    }

    #[test]
    fn test_error_message() {
        let err = GatewayRegistry::builder().build().resolve("unknown", "M-1").err().unwrap();
        assert_eq!(err.to_string(), "Cannot find delivery gateway with code 'unknown' for order M-1.");
    }
}
