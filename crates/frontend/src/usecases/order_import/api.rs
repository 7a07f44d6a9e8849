use contracts::usecases::order_import::{ImportMapping, ImportResultDto};
use gloo_net::http::Request;
use web_sys::FormData;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

/// Отправляет файл и привязку колонок на серверный импорт.
///
/// Разбор CSV/Excel и валидация строк — целиком на сервере; клиент передаёт
/// файл как есть плюс JSON с конфигурацией соответствия колонок.
pub async fn import_orders(
    file: &web_sys::File,
    mapping: &ImportMapping,
) -> Result<ImportResultDto, String> {
    let auth_header = storage::auth_header().ok_or("Not authenticated")?;

    let mapping_json =
        serde_json::to_string(mapping).map_err(|e| format!("Failed to serialize mapping: {}", e))?;

    let form = FormData::new().map_err(|e| format!("Failed to create form: {:?}", e))?;
    form.append_with_blob("file", file)
        .map_err(|e| format!("Failed to attach file: {:?}", e))?;
    form.append_with_str("mapping", &mapping_json)
        .map_err(|e| format!("Failed to attach mapping: {:?}", e))?;

    let response = Request::post(&api_url("/api/orders/import"))
        .header("Authorization", &auth_header)
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Import failed: {}", response.status()));
    }

    response
        .json::<ImportResultDto>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
