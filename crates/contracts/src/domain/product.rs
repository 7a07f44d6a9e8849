use serde::{Deserialize, Serialize};

/// Товарная позиция (баллоны, газ в литрах, оборудование).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    /// Единица измерения: "шт", "л", "кг"
    pub unit: String,
    pub price: f64,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductDto {
    pub name: String,
    pub sku: String,
    pub unit: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProductDto {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub unit: String,
    pub price: f64,
    pub is_active: bool,
}
