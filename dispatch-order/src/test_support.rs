use async_trait::async_trait;
use dispatch_core::{
    Address, BoxError, Contact, DeliveryLogger, DeliverySettings, DeliveryStatus, LifecycleEvent,
    MerchantOrder, OrderRepository, Parcel, ProviderClient, ProviderCreatePayload, ProviderOrder,
    ProviderUpdatePayload,
};
use std::collections::HashMap;
use std::sync::Mutex;

pub fn order(number: &str) -> MerchantOrder {
    let receiver = Contact {
        name: "Jonas Jonaitis".to_string(),
        phone: "+37060000000".to_string(),
        email: None,
        address: Address {
            country: "LT".to_string(),
            city: "Kaunas".to_string(),
            street: "Laisves al. 10".to_string(),
            postal_code: "44280".to_string(),
        },
    };
    let mut order = MerchantOrder::new(number, "courier", receiver);
    order.add_parcel(Parcel { weight_grams: 1500, length_mm: 300, width_mm: 200, height_mm: 100 });
    order
}

pub fn settings(gateway_code: &str) -> DeliverySettings {
    DeliverySettings::new(gateway_code, "100")
}

pub fn provider_order(id: &str, number: &str, status: DeliveryStatus) -> ProviderOrder {
    ProviderOrder {
        id: id.to_string(),
        number: number.to_string(),
        status,
    }
}

/// Gateway double that answers every call with a fixed order (or a fixed failure)
/// and records what it was asked
pub struct RecordingProvider {
    response: Mutex<Result<ProviderOrder, String>>,
    pub calls: Mutex<Vec<String>>,
}

impl RecordingProvider {
    pub fn returning(order: ProviderOrder) -> Self {
        Self {
            response: Mutex::new(Ok(order)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Mutex::new(Err(message.to_string())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_response(&self, order: ProviderOrder) {
        *self.response.lock().unwrap() = Ok(order);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: String) -> Result<ProviderOrder, BoxError> {
        self.calls.lock().unwrap().push(call);
        self.response.lock().unwrap().clone().map_err(Into::into)
    }
}

#[async_trait]
impl ProviderClient for RecordingProvider {
    async fn create_order(&self, payload: &ProviderCreatePayload) -> Result<ProviderOrder, BoxError> {
        self.answer(format!("create:{}", payload.eshop_order_id))
    }

    async fn update_order(
        &self,
        provider_order_id: &str,
        payload: &ProviderUpdatePayload,
    ) -> Result<ProviderOrder, BoxError> {
        self.answer(format!("update:{}:{}", provider_order_id, payload.eshop_order_id))
    }

    async fn get_order(&self, provider_order_id: &str) -> Result<ProviderOrder, BoxError> {
        self.answer(format!("get:{}", provider_order_id))
    }

    async fn prepaid_order(&self, provider_order_id: &str) -> Result<ProviderOrder, BoxError> {
        self.answer(format!("prepaid:{}", provider_order_id))
    }
}

#[derive(Default)]
pub struct RecordingRepository {
    pub saved: Mutex<Vec<MerchantOrder>>,
    orders: Mutex<HashMap<String, MerchantOrder>>,
    fail_saves: bool,
}

impl RecordingRepository {
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn with_order(order: MerchantOrder) -> Self {
        let repository = Self::default();
        repository.orders.lock().unwrap().insert(order.number.clone(), order);
        repository
    }

    pub fn saved(&self) -> Vec<MerchantOrder> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderRepository for RecordingRepository {
    async fn save(&self, order: &MerchantOrder) -> Result<(), BoxError> {
        if self.fail_saves {
            return Err("connection reset".into());
        }
        self.saved.lock().unwrap().push(order.clone());
        self.orders.lock().unwrap().insert(order.number.clone(), order.clone());
        Ok(())
    }

    async fn find_by_number(&self, number: &str) -> Result<Option<MerchantOrder>, BoxError> {
        Ok(self.orders.lock().unwrap().get(number).cloned())
    }
}

#[derive(Default)]
pub struct RecordingLogger {
    pub events: Mutex<Vec<LifecycleEvent>>,
}

impl RecordingLogger {
    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl DeliveryLogger for RecordingLogger {
    fn info(&self, event: &LifecycleEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
