use contracts::system::roles::{CreateRoleDto, Permission, Role, SetPermissionDto, UpdateRoleDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

/// Fetch the permission catalog
pub async fn fetch_permissions() -> Result<Vec<Permission>, String> {
    let auth_header = storage::auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url("/api/system/permissions"))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch permissions: {}", response.status()));
    }

    response
        .json::<Vec<Permission>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create new role
pub async fn create_role(dto: CreateRoleDto) -> Result<String, String> {
    let auth_header = storage::auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&api_url("/api/system/roles"))
        .header("Authorization", &auth_header)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create role: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

/// Update role
pub async fn update_role(dto: UpdateRoleDto) -> Result<(), String> {
    let auth_header = storage::auth_header().ok_or("Not authenticated")?;

    let response = Request::put(&api_url(&format!("/api/system/roles/{}", dto.id)))
        .header("Authorization", &auth_header)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update role: {}", response.status()));
    }

    Ok(())
}

/// Delete role
pub async fn delete_role(id: &str) -> Result<(), String> {
    let auth_header = storage::auth_header().ok_or("Not authenticated")?;

    let response = Request::delete(&api_url(&format!("/api/system/roles/{}", id)))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete role: {}", response.status()));
    }

    Ok(())
}

/// Grant or revoke a single permission
pub async fn set_permission(dto: SetPermissionDto) -> Result<(), String> {
    let auth_header = storage::auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&api_url(&format!(
        "/api/system/roles/{}/permissions",
        dto.role_id
    )))
    .header("Authorization", &auth_header)
    .json(&dto)
    .map_err(|e| format!("Failed to serialize request: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to set permission: {}", response.status()));
    }

    Ok(())
}
