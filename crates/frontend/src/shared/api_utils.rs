//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```no_run
/// use frontend::shared::api_utils::api_url;
/// let url = api_url("/api/consumers/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Собирает URL с query-строкой; значения кодируются, ключи считаются
/// безопасными (имена полей и суффиксы операторов).
pub fn api_url_with_params(path: &str, params: &[(String, String)]) -> String {
    let mut url = api_url(path);
    for (i, (key, value)) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    // вне браузера api_base() пустая — проверяем только query-строку
    #[test]
    fn test_query_string_assembly() {
        let url = api_url_with_params(
            "/api/orders",
            &[
                ("search".to_string(), "газ 50".to_string()),
                ("page".to_string(), "2".to_string()),
            ],
        );
        assert_eq!(url, "/api/orders?search=%D0%B3%D0%B0%D0%B7%2050&page=2");
    }

    #[test]
    fn test_no_params_no_question_mark() {
        assert_eq!(api_url_with_params("/api/orders", &[]), "/api/orders");
    }
}
