use serde::{Deserialize, Serialize};

/// Маршрут доставки.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryRoute {
    pub id: String,
    pub name: String,
    pub district: String,
    pub driver_name: Option<String>,
    /// Количество абонентов, привязанных к маршруту (считает сервер)
    pub consumers_count: usize,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDeliveryRouteDto {
    pub name: String,
    pub district: String,
    pub driver_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDeliveryRouteDto {
    pub id: String,
    pub name: String,
    pub district: String,
    pub driver_name: Option<String>,
    pub is_active: bool,
}
