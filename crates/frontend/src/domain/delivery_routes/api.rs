use contracts::domain::delivery_route::{
    CreateDeliveryRouteDto, DeliveryRoute, UpdateDeliveryRouteDto,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

/// Полный справочник маршрутов — для выпадающих списков.
pub async fn fetch_all_routes() -> Result<Vec<DeliveryRoute>, String> {
    let auth_header = storage::auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url("/api/delivery-routes/all"))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch routes: {}", response.status()));
    }

    response
        .json::<Vec<DeliveryRoute>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create new route
pub async fn create_route(dto: CreateDeliveryRouteDto) -> Result<String, String> {
    let auth_header = storage::auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&api_url("/api/delivery-routes"))
        .header("Authorization", &auth_header)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create route: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

/// Update route
pub async fn update_route(dto: UpdateDeliveryRouteDto) -> Result<(), String> {
    let auth_header = storage::auth_header().ok_or("Not authenticated")?;

    let response = Request::put(&api_url(&format!("/api/delivery-routes/{}", dto.id)))
        .header("Authorization", &auth_header)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update route: {}", response.status()));
    }

    Ok(())
}

/// Delete route
pub async fn delete_route(id: &str) -> Result<(), String> {
    let auth_header = storage::auth_header().ok_or("Not authenticated")?;

    let response = Request::delete(&api_url(&format!("/api/delivery-routes/{}", id)))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete route: {}", response.status()));
    }

    Ok(())
}
