pub mod app_config;
pub mod memory_repo;

pub use app_config::{Config, DeliveryConfig, GatewayConfig, ProviderKind};
pub use memory_repo::InMemoryOrderRepository;
