//! Экспорт списка во внешний файл (CSV/Excel/PDF).
//!
//! Сериализацией занимается сервер: клиент только собирает параметры —
//! формат, видимые колонки и ровно те же параметры поиска/сортировки/фильтров,
//! что ушли бы в обычную загрузку данных, — а затем скачивает готовый файл
//! через Blob-ссылку.

use contracts::common::ListQuery;
use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::shared::api_utils::api_url_with_params;
use crate::system::auth::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Excel,
    Pdf,
}

impl ExportFormat {
    /// Значение параметра `export`.
    pub fn as_param(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_param()
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv;charset=utf-8;",
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Excel => "Excel",
            ExportFormat::Pdf => "PDF",
        }
    }

    pub fn all() -> Vec<ExportFormat> {
        vec![ExportFormat::Csv, ExportFormat::Excel, ExportFormat::Pdf]
    }
}

/// Параметры экспортного запроса: формат, видимые поля и параметры выборки.
///
/// Пагинация не передаётся — экспортируется вся выборка.
pub fn export_params(
    query: &ListQuery,
    visible_fields: &[String],
    format: ExportFormat,
    extra: &[(String, String)],
) -> Vec<(String, String)> {
    let mut params = query.query_params();
    for (key, value) in extra {
        params.push((key.clone(), value.clone()));
    }
    params.push(("export".to_string(), format.as_param().to_string()));
    params.push(("fields".to_string(), visible_fields.join(",")));
    params
}

/// Запрашивает у сервера файл экспорта и инициирует скачивание.
pub async fn export_table(
    endpoint: &str,
    filename_base: &str,
    format: ExportFormat,
    query: &ListQuery,
    visible_fields: &[String],
    extra: &[(String, String)],
) -> Result<(), String> {
    let params = export_params(query, visible_fields, format, extra);
    let url = api_url_with_params(endpoint, &params);

    let mut builder = Request::get(&url);
    if let Some(header) = storage::auth_header() {
        builder = builder.header("Authorization", &header);
    }
    let response = builder
        .send()
        .await
        .map_err(|e| format!("Ошибка сети: {e}"))?;
    if !response.ok() {
        return Err(format!("Ошибка сервера: {}", response.status()));
    }
    let bytes = response
        .binary()
        .await
        .map_err(|e| format!("Ошибка чтения ответа: {e}"))?;

    let stamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("{filename_base}_{stamp}.{}", format.extension());

    let blob = bytes_to_blob(&bytes, format.mime())?;
    download_blob(&blob, &filename)
}

fn bytes_to_blob(bytes: &[u8], mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Скачивание через временную ссылку: создаём, кликаем, убираем.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::common::{FilterClause, FilterOperator, FilterValue};

    #[test]
    fn test_export_params_match_fetch_params() {
        let mut query = ListQuery::default();
        query.set_search("котельная".to_string());
        query.toggle_sort("name");
        query.set_filters(vec![FilterClause::new(
            "balance",
            FilterOperator::Lt,
            FilterValue::Number(0.0),
        )]);

        let fields = vec!["name".to_string(), "balance".to_string()];
        let params = export_params(&query, &fields, ExportFormat::Csv, &[]);

        // параметры выборки — ровно те, что ушли бы в обычный запрос
        let fetch_params = query.query_params();
        for pair in &fetch_params {
            assert!(params.contains(pair), "нет параметра {pair:?}");
        }

        // плюс формат и список видимых полей
        assert!(params.contains(&("export".to_string(), "csv".to_string())));
        assert!(params.contains(&("fields".to_string(), "name,balance".to_string())));

        // и ничего от пагинации
        assert!(!params.iter().any(|(k, _)| k == "page" || k == "page_size"));
    }

    #[test]
    fn test_extra_params_included() {
        let query = ListQuery::default();
        let params = export_params(
            &query,
            &[],
            ExportFormat::Pdf,
            &[("region".to_string(), "север".to_string())],
        );
        assert!(params.contains(&("region".to_string(), "север".to_string())));
        assert!(params.contains(&("export".to_string(), "pdf".to_string())));
    }
}
