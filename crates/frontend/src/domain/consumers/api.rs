use contracts::domain::consumer::{CreateConsumerDto, UpdateConsumerDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

/// Create new consumer
pub async fn create_consumer(dto: CreateConsumerDto) -> Result<String, String> {
    let auth_header = storage::auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&api_url("/api/consumers"))
        .header("Authorization", &auth_header)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create consumer: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

/// Update consumer
pub async fn update_consumer(dto: UpdateConsumerDto) -> Result<(), String> {
    let auth_header = storage::auth_header().ok_or("Not authenticated")?;

    let response = Request::put(&api_url(&format!("/api/consumers/{}", dto.id)))
        .header("Authorization", &auth_header)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update consumer: {}", response.status()));
    }

    Ok(())
}

/// Delete consumer
pub async fn delete_consumer(id: &str) -> Result<(), String> {
    let auth_header = storage::auth_header().ok_or("Not authenticated")?;

    let response = Request::delete(&api_url(&format!("/api/consumers/{}", id)))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete consumer: {}", response.status()));
    }

    Ok(())
}
