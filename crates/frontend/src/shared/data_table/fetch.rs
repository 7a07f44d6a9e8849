//! Загрузка страницы данных с подавлением устаревших ответов.
//!
//! Для каждого представления действует правило: строки может обновить только
//! ответ самого свежего, не перекрытого запроса. Устаревание отслеживается
//! токенами поколений; сетевой запрос предыдущего поколения дополнительно
//! отменяется через `AbortController`, и его завершение (успех или ошибка)
//! молча выбрасывается.

use std::cell::Cell;
use std::rc::Rc;

use contracts::common::Paged;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use web_sys::AbortSignal;

use crate::system::auth::storage;

/// Окно тишины между изменением состояния запроса и уходом в сеть, мс.
pub const DEBOUNCE_MS: u32 = 300;

/// Счётчик поколений запросов одного представления.
///
/// Однопоточная среда браузера — `Rc<Cell<_>>` достаточно.
#[derive(Clone, Default)]
pub struct RequestSequence {
    current: Rc<Cell<u64>>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Выпустить токен нового поколения; все ранее выпущенные устаревают.
    pub fn issue(&self) -> RequestToken {
        let next = self.current.get() + 1;
        self.current.set(next);
        RequestToken {
            issued: next,
            current: Rc::clone(&self.current),
        }
    }

    /// Сделать устаревшими все токены (размонтирование представления).
    pub fn cancel_all(&self) {
        self.current.set(self.current.get() + 1);
    }
}

/// Токен одного запроса. Проверяется после каждой точки ожидания.
#[derive(Clone)]
pub struct RequestToken {
    issued: u64,
    current: Rc<Cell<u64>>,
}

impl RequestToken {
    pub fn is_current(&self) -> bool {
        self.current.get() == self.issued
    }
}

#[derive(Debug)]
pub enum FetchError {
    /// Запрос отменён как перекрытый — не ошибка, наружу не показывается.
    Aborted,
    Failed(String),
}

fn classify(e: gloo_net::Error) -> FetchError {
    match &e {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => FetchError::Aborted,
        _ => FetchError::Failed(e.to_string()),
    }
}

/// Загружает одну страницу коллекции.
///
/// Ответ разбирается терпимо ([`Paged::from_json`]): и голый массив, и объект
/// `results`/`count`, и мусор — последний превращается в пустую страницу.
pub async fn fetch_page<T: DeserializeOwned>(
    url: &str,
    abort: Option<&AbortSignal>,
) -> Result<Paged<T>, FetchError> {
    let mut builder = Request::get(url);
    if abort.is_some() {
        builder = builder.abort_signal(abort);
    }
    if let Some(header) = storage::auth_header() {
        builder = builder.header("Authorization", &header);
    }

    let response = builder.send().await.map_err(classify)?;
    if !response.ok() {
        return Err(FetchError::Failed(format!("HTTP {}", response.status())));
    }

    let value = response
        .json::<serde_json::Value>()
        .await
        .map_err(classify)?;
    Ok(Paged::from_json(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_token_supersedes_older() {
        let seq = RequestSequence::new();
        let a = seq.issue();
        assert!(a.is_current());

        let b = seq.issue();
        assert!(!a.is_current());
        assert!(b.is_current());
    }

    #[test]
    fn test_cancel_all_invalidates_current() {
        let seq = RequestSequence::new();
        let token = seq.issue();
        seq.cancel_all();
        assert!(!token.is_current());
    }

    #[test]
    fn test_stale_token_stays_stale() {
        let seq = RequestSequence::new();
        let a = seq.issue();
        let _b = seq.issue();
        let _c = seq.issue();
        // токен не «оживает» от новых выпусков
        assert!(!a.is_current());
    }
}
