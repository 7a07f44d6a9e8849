use contracts::domain::order::UpdateOrderStatusDto;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

/// Change order status
///
/// Заказы создаются импортом или операторами в другой системе;
/// здесь доступна только смена статуса.
pub async fn update_order_status(dto: UpdateOrderStatusDto) -> Result<(), String> {
    let auth_header = storage::auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&api_url(&format!("/api/orders/{}/status", dto.id)))
        .header("Authorization", &auth_header)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update status: {}", response.status()));
    }

    Ok(())
}
