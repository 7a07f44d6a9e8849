use contracts::domain::product::{CreateProductDto, UpdateProductDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

/// Create new product
pub async fn create_product(dto: CreateProductDto) -> Result<String, String> {
    let auth_header = storage::auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&api_url("/api/products"))
        .header("Authorization", &auth_header)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create product: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

/// Update product
pub async fn update_product(dto: UpdateProductDto) -> Result<(), String> {
    let auth_header = storage::auth_header().ok_or("Not authenticated")?;

    let response = Request::put(&api_url(&format!("/api/products/{}", dto.id)))
        .header("Authorization", &auth_header)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update product: {}", response.status()));
    }

    Ok(())
}

/// Delete product
pub async fn delete_product(id: &str) -> Result<(), String> {
    let auth_header = storage::auth_header().ok_or("Not authenticated")?;

    let response = Request::delete(&api_url(&format!("/api/products/{}", id)))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete product: {}", response.status()));
    }

    Ok(())
}
