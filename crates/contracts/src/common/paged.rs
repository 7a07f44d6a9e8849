//! Страница списочного ответа сервера.
//!
//! Сервер отдаёт либо объект `{ "results": [...], "count": N }`, либо голый
//! массив. Декодер терпимый: отсутствующие `results`/`count` и вовсе
//! нераспознанный ответ превращаются в пустую страницу, а не в ошибку —
//! представление в любом случае должно отрисоваться.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paged<T> {
    pub results: Vec<T>,
    pub count: usize,
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
        }
    }
}

impl<T> Paged<T> {
    pub fn total_pages(&self, page_size: usize) -> usize {
        if self.count == 0 || page_size == 0 {
            1
        } else {
            (self.count + page_size - 1) / page_size
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
enum PagedRepr<T> {
    List(Vec<T>),
    Object {
        #[serde(default)]
        results: Option<Vec<T>>,
        #[serde(default)]
        count: Option<usize>,
    },
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Paged<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = PagedRepr::<T>::deserialize(deserializer)?;
        Ok(match repr {
            PagedRepr::List(items) => {
                let count = items.len();
                Paged {
                    results: items,
                    count,
                }
            }
            PagedRepr::Object { results, count } => {
                let results = results.unwrap_or_default();
                let count = count.unwrap_or(results.len());
                Paged { results, count }
            }
        })
    }
}

impl<T: DeserializeOwned> Paged<T> {
    /// Декодирование без ошибок: всё, что не удалось разобрать, — пустая страница.
    pub fn from_json(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_with_results_and_count() {
        let page: Paged<String> = Paged::from_json(json!({
            "results": ["а", "б"],
            "count": 42
        }));
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.count, 42);
    }

    #[test]
    fn test_bare_list() {
        let page: Paged<i32> = Paged::from_json(json!([1, 2, 3]));
        assert_eq!(page.results, vec![1, 2, 3]);
        assert_eq!(page.count, 3);
    }

    #[test]
    fn test_missing_count_falls_back_to_len() {
        let page: Paged<i32> = Paged::from_json(json!({ "results": [7] }));
        assert_eq!(page.count, 1);
    }

    #[test]
    fn test_missing_results_is_empty() {
        let page: Paged<i32> = Paged::from_json(json!({ "count": 9 }));
        assert!(page.results.is_empty());
        assert_eq!(page.count, 9);
    }

    #[test]
    fn test_garbage_is_empty_page() {
        let page: Paged<i32> = Paged::from_json(json!("не страница"));
        assert!(page.results.is_empty());
        assert_eq!(page.count, 0);

        // элементы не того типа — тоже пустая страница, а не паника
        let page: Paged<i32> = Paged::from_json(json!({ "results": ["строка"], "count": 1 }));
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_total_pages() {
        let page = Paged::<i32> {
            results: vec![],
            count: 101,
        };
        assert_eq!(page.total_pages(50), 3);
        assert_eq!(Paged::<i32>::default().total_pages(50), 1);
    }
}
