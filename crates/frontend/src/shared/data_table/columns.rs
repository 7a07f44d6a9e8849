//! Описание колонок серверного табличного представления.

use std::collections::HashMap;
use std::sync::Arc;

use leptos::prelude::*;

use crate::shared::view_prefs::ViewPreferences;

/// Колонка: имя поля на сервере, подпись, флаги и рендер ячейки.
#[derive(Clone)]
pub struct ColumnDef<T> {
    pub field: &'static str,
    pub label: &'static str,
    pub default_visible: bool,
    pub sortable: bool,
    render: Arc<dyn Fn(&T) -> AnyView + Send + Sync>,
}

impl<T> ColumnDef<T> {
    pub fn new(
        field: &'static str,
        label: &'static str,
        render: impl Fn(&T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            field,
            label,
            default_visible: true,
            sortable: true,
            render: Arc::new(render),
        }
    }

    /// Колонка по умолчанию скрыта (пока пользователь не включит её сам).
    pub fn hidden(mut self) -> Self {
        self.default_visible = false;
        self
    }

    /// Колонка без сортировки (действия, вычисляемые значения).
    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Служебная колонка действий: без имени поля, всегда видима,
    /// не участвует в сортировке, экспорте и настройках видимости.
    pub fn action(render: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> Self {
        Self::new("", "", render).not_sortable()
    }

    pub fn render_cell(&self, row: &T) -> AnyView {
        (self.render)(row)
    }
}

/// Начальная карта видимости: флаги колонок, поверх — сохранённые настройки.
/// Поля из настроек, которых больше нет среди колонок, игнорируются.
pub fn initial_visibility<T>(
    columns: &[ColumnDef<T>],
    prefs: Option<&ViewPreferences>,
) -> HashMap<String, bool> {
    columns
        .iter()
        .filter(|col| !col.field.is_empty())
        .map(|col| {
            let visible = prefs
                .and_then(|p| p.column_visibility.get(col.field).copied())
                .unwrap_or(col.default_visible);
            (col.field.to_string(), visible)
        })
        .collect()
}

/// Имена видимых колонок в порядке объявления — этот список уходит в экспорт.
pub fn visible_fields<T>(
    columns: &[ColumnDef<T>],
    visibility: &HashMap<String, bool>,
) -> Vec<String> {
    columns
        .iter()
        .filter(|col| !col.field.is_empty())
        .filter(|col| {
            visibility
                .get(col.field)
                .copied()
                .unwrap_or(col.default_visible)
        })
        .map(|col| col.field.to_string())
        .collect()
}

/// Видима ли колонка. Служебные колонки (без имени поля) видимы всегда.
pub fn is_visible<T>(col: &ColumnDef<T>, visibility: &HashMap<String, bool>) -> bool {
    col.field.is_empty()
        || visibility
            .get(col.field)
            .copied()
            .unwrap_or(col.default_visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<ColumnDef<()>> {
        vec![
            ColumnDef::new("name", "Название", |_| view! { <></> }.into_any()),
            ColumnDef::new("sku", "Артикул", |_| view! { <></> }.into_any()).hidden(),
            ColumnDef::new("price", "Цена", |_| view! { <></> }.into_any()),
        ]
    }

    #[test]
    fn test_defaults_without_prefs() {
        let cols = columns();
        let visibility = initial_visibility(&cols, None);
        assert_eq!(visibility.get("name"), Some(&true));
        assert_eq!(visibility.get("sku"), Some(&false));
        assert_eq!(visible_fields(&cols, &visibility), vec!["name", "price"]);
    }

    #[test]
    fn test_prefs_override_defaults() {
        let cols = columns();
        let prefs = ViewPreferences {
            column_visibility: HashMap::from([
                ("sku".to_string(), true),
                ("price".to_string(), false),
                ("удалённая".to_string(), true),
            ]),
            page_size: 50,
        };
        let visibility = initial_visibility(&cols, Some(&prefs));
        assert_eq!(visible_fields(&cols, &visibility), vec!["name", "sku"]);
        // поле из настроек, которого нет среди колонок, не всплывает
        assert!(!visibility.contains_key("удалённая"));
    }

    #[test]
    fn test_visible_fields_keep_declaration_order() {
        let cols = columns();
        let mut visibility = initial_visibility(&cols, None);
        visibility.insert("sku".to_string(), true);
        assert_eq!(
            visible_fields(&cols, &visibility),
            vec!["name", "sku", "price"]
        );
    }

    #[test]
    fn test_action_column_always_visible_and_not_exported() {
        let mut cols = columns();
        cols.push(ColumnDef::action(|_| view! { <></> }.into_any()));

        let visibility = initial_visibility(&cols, None);
        assert!(!visibility.contains_key(""));
        assert!(is_visible(&cols[3], &visibility));
        assert_eq!(visible_fields(&cols, &visibility), vec!["name", "price"]);
    }
}
