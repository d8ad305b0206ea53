use std::fmt;
use crate::models::DeliveryAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStage {
    Started,
    Completed,
}

/// Diagnostic record emitted around each gateway operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleEvent {
    pub action: DeliveryAction,
    pub stage: LifecycleStage,
    pub order_number: String,
    pub project_id: String,
    pub provider_order_number: Option<String>,
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stage {
            LifecycleStage::Started => write!(
                f,
                "Attempting to perform operation '{}' of delivery order for order id {} with project id: {}",
                self.action, self.order_number, self.project_id
            ),
            LifecycleStage::Completed => write!(
                f,
                "Operation '{}' of delivery order {} for order id {} is completed.",
                self.action,
                self.provider_order_number.as_deref().unwrap_or("-"),
                self.order_number
            ),
        }
    }
}

/// Sink for lifecycle events. Implementations must not panic; nothing they do
/// can fail the operation being logged.
pub trait DeliveryLogger: Send + Sync {
    fn info(&self, event: &LifecycleEvent);
}

/// Forwards lifecycle events to `tracing`
pub struct TracingLogger;

impl DeliveryLogger for TracingLogger {
    fn info(&self, event: &LifecycleEvent) {
        tracing::info!(
            action = %event.action,
            order_number = %event.order_number,
            project_id = %event.project_id,
            provider_order_number = event.provider_order_number.as_deref(),
            "{}",
            event
        );
    }
}
