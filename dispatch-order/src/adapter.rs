use dispatch_core::{
    DeliveryOrderRequest, NotificationPayload, Parcel, ProviderCreatePayload, ProviderUpdatePayload,
    ShipmentPayload,
};

const ORDER_UPDATED_EVENT: &str = "order_updated";

/// Projects a merchant order and its settings into gateway payloads.
/// Both conversions are pure; validation happens before the request is built.
pub struct RequestAdapter;

impl RequestAdapter {
    pub fn to_create_payload(request: &DeliveryOrderRequest) -> ProviderCreatePayload {
        let order = &request.order;
        let settings = &request.settings;

        ProviderCreatePayload {
            project_id: settings.project_id.clone(),
            shipment_gateway_code: settings.gateway_code.clone(),
            shipment_method_code: order.shipment_method.clone(),
            eshop_order_id: order.number.clone(),
            receiver: order.receiver.clone(),
            shipments: Self::shipments(&order.parcels),
            notification: settings.callback_url.as_ref().map(|url| NotificationPayload {
                url: url.clone(),
                events: vec![ORDER_UPDATED_EVENT.to_string()],
            }),
            test_mode: settings.test_mode,
        }
    }

    pub fn to_update_payload(request: &DeliveryOrderRequest) -> ProviderUpdatePayload {
        let order = &request.order;

        ProviderUpdatePayload {
            shipment_gateway_code: request.settings.gateway_code.clone(),
            shipment_method_code: order.shipment_method.clone(),
            eshop_order_id: order.number.clone(),
            receiver: order.receiver.clone(),
            shipments: Self::shipments(&order.parcels),
            test_mode: request.settings.test_mode,
        }
    }

    fn shipments(parcels: &[Parcel]) -> Vec<ShipmentPayload> {
        parcels
            .iter()
            .map(|parcel| ShipmentPayload {
                weight: parcel.weight_grams,
                length: parcel.length_mm,
                width: parcel.width_mm,
                height: parcel.height_mm,
            })
            .collect()
    }
}
