use serde::{Deserialize, Serialize};

/// Роль оператора бэк-офиса.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Коды назначенных прав
    pub permissions: Vec<String>,
    pub users_count: usize,
    pub created_at: String,
}

/// Право доступа из справочника сервера.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    pub code: String,
    pub description: String,
    /// Группа в UI: "Абоненты", "Заказы", ...
    pub group: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoleDto {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoleDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// Назначение/снятие одного права — по одному вызову на переключатель.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPermissionDto {
    pub role_id: String,
    pub permission_code: String,
    pub granted: bool,
}
