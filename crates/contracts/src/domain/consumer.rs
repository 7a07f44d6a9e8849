use serde::{Deserialize, Serialize};

/// Абонент газоснабжения.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consumer {
    pub id: String,
    /// Лицевой счёт
    pub account_no: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: String,
    pub route_id: Option<String>,
    pub route_name: Option<String>,
    /// Текущий баланс лицевого счёта, ₽
    pub balance: f64,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConsumerDto {
    pub account_no: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: String,
    pub route_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateConsumerDto {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: String,
    pub route_id: Option<String>,
    pub is_active: bool,
}
