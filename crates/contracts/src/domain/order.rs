use serde::{Deserialize, Serialize};

/// Статус заказа на доставку.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    New,
    Confirmed,
    InDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Код статуса на проводе и в фильтрах.
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::InDelivery => "in_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    /// Человекочитаемое название статуса.
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::New => "Новый",
            OrderStatus::Confirmed => "Подтверждён",
            OrderStatus::InDelivery => "В доставке",
            OrderStatus::Delivered => "Доставлен",
            OrderStatus::Cancelled => "Отменён",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::New,
            OrderStatus::Confirmed,
            OrderStatus::InDelivery,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }
}

/// Заказ на доставку газа.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub number: String,
    pub consumer_id: String,
    pub consumer_name: String,
    pub route_name: Option<String>,
    pub status: OrderStatus,
    /// Сумма заказа, ₽
    pub total: f64,
    pub comment: Option<String>,
    pub created_at: String,
    pub delivered_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusDto {
    pub id: String,
    pub status: OrderStatus,
    pub comment: Option<String>,
}
