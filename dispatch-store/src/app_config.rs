use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub delivery: DeliveryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeliveryConfig {
    pub project_id: String,
    #[serde(default)]
    pub test_mode: bool,
    pub callback_url: Option<String>,
    pub default_gateway: String,
    #[serde(default)]
    pub gateways: Vec<GatewayConfig>,
}

/// A gateway code and the client implementation serving it
#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    pub code: String,
    #[serde(default)]
    pub provider: ProviderKind,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    #[default]
    Sandbox,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `DISPATCH__DELIVERY__PROJECT_ID=42` sets `delivery.project_id`
            .add_source(config::Environment::with_prefix("DISPATCH").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Parse a single TOML document, without the file and environment layers
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
