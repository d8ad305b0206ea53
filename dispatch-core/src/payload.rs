use serde::{Deserialize, Serialize};
use crate::models::Contact;

/// One package as a gateway expects it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShipmentPayload {
    pub weight: u32,
    pub length: u32,
    pub width: u32,
    pub height: u32,
}

/// Where the gateway pushes status changes of the delivery order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationPayload {
    pub url: String,
    pub events: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderCreatePayload {
    pub project_id: String,
    pub shipment_gateway_code: String,
    pub shipment_method_code: String,
    pub eshop_order_id: String,
    pub receiver: Contact,
    pub shipments: Vec<ShipmentPayload>,
    pub notification: Option<NotificationPayload>,
    pub test_mode: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderUpdatePayload {
    pub shipment_gateway_code: String,
    pub shipment_method_code: String,
    pub eshop_order_id: String,
    pub receiver: Contact,
    pub shipments: Vec<ShipmentPayload>,
    pub test_mode: bool,
}
