//! Пользовательские настройки списочного представления: видимость колонок и
//! размер страницы. Живут в localStorage по ключу представления и переживают
//! перезапуск приложения.
//!
//! Настройки сугубо рекомендательные: их отсутствие, порча или недоступность
//! хранилища никогда не мешают отрисовке — представление откатывается на
//! встроенные значения по умолчанию.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewPreferences {
    pub column_visibility: HashMap<String, bool>,
    pub page_size: usize,
}

/// Ключ хранения для представления (версионируется на случай смены формата).
pub fn prefs_key(view: &str) -> String {
    format!("table_prefs_{view}_v1")
}

/// Абстракция над клиентским key-value хранилищем, чтобы логика представления
/// не знала про браузер.
pub trait PreferenceStore {
    /// `None` — значения нет или оно не разобралось. Никогда не паникует.
    fn load(&self, key: &str) -> Option<ViewPreferences>;

    /// Сбой записи логируется и игнорируется — настройка не стоит падения UI.
    fn save(&self, key: &str, prefs: &ViewPreferences);
}

/// Хранилище поверх `window.localStorage`.
#[derive(Clone, Copy, Default)]
pub struct LocalStoragePreferences;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl PreferenceStore for LocalStoragePreferences {
    fn load(&self, key: &str) -> Option<ViewPreferences> {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        match serde_json::from_str::<ViewPreferences>(&raw) {
            Ok(prefs) => Some(prefs),
            Err(e) => {
                log::debug!("настройки {key} не разобрались ({e}), используем значения по умолчанию");
                None
            }
        }
    }

    fn save(&self, key: &str, prefs: &ViewPreferences) {
        let Some(storage) = local_storage() else {
            log::debug!("localStorage недоступен, настройки {key} не сохранены");
            return;
        };
        let Ok(raw) = serde_json::to_string(prefs) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::debug!("не удалось записать настройки {key}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Хранилище в памяти с тем же JSON-форматом, что и localStorage.
    #[derive(Default)]
    struct MemoryPreferences {
        items: RefCell<HashMap<String, String>>,
    }

    impl MemoryPreferences {
        fn put_raw(&self, key: &str, raw: &str) {
            self.items
                .borrow_mut()
                .insert(key.to_string(), raw.to_string());
        }
    }

    impl PreferenceStore for MemoryPreferences {
        fn load(&self, key: &str) -> Option<ViewPreferences> {
            let raw = self.items.borrow().get(key).cloned()?;
            serde_json::from_str(&raw).ok()
        }

        fn save(&self, key: &str, prefs: &ViewPreferences) {
            if let Ok(raw) = serde_json::to_string(prefs) {
                self.items.borrow_mut().insert(key.to_string(), raw);
            }
        }
    }

    #[test]
    fn test_round_trip() {
        let store = MemoryPreferences::default();
        let prefs = ViewPreferences {
            column_visibility: HashMap::from([
                ("a".to_string(), false),
                ("b".to_string(), true),
            ]),
            page_size: 25,
        };

        let key = prefs_key("consumers");
        store.save(&key, &prefs);
        assert_eq!(store.load(&key), Some(prefs));
    }

    #[test]
    fn test_absent_key_is_none() {
        let store = MemoryPreferences::default();
        assert_eq!(store.load(&prefs_key("orders")), None);
    }

    #[test]
    fn test_corrupt_value_is_none() {
        let store = MemoryPreferences::default();
        let key = prefs_key("orders");
        store.put_raw(&key, "{ это не json ");
        assert_eq!(store.load(&key), None);
    }

    #[test]
    fn test_keys_are_per_view() {
        let store = MemoryPreferences::default();
        let prefs = ViewPreferences {
            column_visibility: HashMap::new(),
            page_size: 100,
        };
        store.save(&prefs_key("consumers"), &prefs);
        assert_eq!(store.load(&prefs_key("products")), None);
    }
}
