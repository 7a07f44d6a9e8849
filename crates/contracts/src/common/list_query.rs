//! Модель запроса списочного представления: пагинация, многоступенчатая
//! сортировка, структурные фильтры и быстрый поиск.
//!
//! Единственный источник истины для сериализации состояния списка в
//! query-параметры REST API. Экспорт использует те же параметры, что и
//! загрузка данных, поэтому сборка параметров живёт здесь, а не в UI.

use serde::{Deserialize, Serialize};

/// Одна ступень сортировки: поле и направление.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortEntry {
    pub field: String,
    pub descending: bool,
}

/// Оператор структурного фильтра.
///
/// Серверный контракт — суффиксы вида `__gte`; оператор `Eq` передаётся без
/// суффикса, и сервер сам решает, точное это совпадение или вхождение
/// (зависит от типа поля на стороне сервера).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
    Eq,
    Ne,
    Contains,
    StartsWith,
    EndsWith,
    Gt,
    Gte,
    Lt,
    Lte,
    IsNull,
    NotNull,
    In,
}

impl FilterOperator {
    /// Суффикс query-параметра для оператора.
    pub fn suffix(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "",
            FilterOperator::Ne => "__ne",
            FilterOperator::Contains => "__contains",
            FilterOperator::StartsWith => "__startswith",
            FilterOperator::EndsWith => "__endswith",
            FilterOperator::Gt => "__gt",
            FilterOperator::Gte => "__gte",
            FilterOperator::Lt => "__lt",
            FilterOperator::Lte => "__lte",
            FilterOperator::IsNull | FilterOperator::NotNull => "__isnull",
            FilterOperator::In => "__in",
        }
    }

    /// Требует ли оператор значение (у `IsNull`/`NotNull` значение фиксировано).
    pub fn requires_value(&self) -> bool {
        !matches!(self, FilterOperator::IsNull | FilterOperator::NotNull)
    }

    /// Строковый код для сохранения и выпадающих списков.
    pub fn code(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "eq",
            FilterOperator::Ne => "ne",
            FilterOperator::Contains => "contains",
            FilterOperator::StartsWith => "startswith",
            FilterOperator::EndsWith => "endswith",
            FilterOperator::Gt => "gt",
            FilterOperator::Gte => "gte",
            FilterOperator::Lt => "lt",
            FilterOperator::Lte => "lte",
            FilterOperator::IsNull => "isnull",
            FilterOperator::NotNull => "notnull",
            FilterOperator::In => "in",
        }
    }

    /// Парсинг из строкового кода.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|op| op.code() == code)
    }

    /// Человекочитаемое название для панели фильтров.
    pub fn display_name(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "равно",
            FilterOperator::Ne => "не равно",
            FilterOperator::Contains => "содержит",
            FilterOperator::StartsWith => "начинается с",
            FilterOperator::EndsWith => "заканчивается на",
            FilterOperator::Gt => "больше",
            FilterOperator::Gte => "больше или равно",
            FilterOperator::Lt => "меньше",
            FilterOperator::Lte => "меньше или равно",
            FilterOperator::IsNull => "пусто",
            FilterOperator::NotNull => "не пусто",
            FilterOperator::In => "в списке",
        }
    }

    /// Все операторы в порядке отображения в UI.
    pub fn all() -> Vec<FilterOperator> {
        vec![
            FilterOperator::Eq,
            FilterOperator::Ne,
            FilterOperator::Contains,
            FilterOperator::StartsWith,
            FilterOperator::EndsWith,
            FilterOperator::Gt,
            FilterOperator::Gte,
            FilterOperator::Lt,
            FilterOperator::Lte,
            FilterOperator::IsNull,
            FilterOperator::NotNull,
            FilterOperator::In,
        ]
    }
}

/// Значение фильтра.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<String>),
}

impl FilterValue {
    /// Пустое значение эквивалентно отсутствию фильтра.
    pub fn is_blank(&self) -> bool {
        match self {
            FilterValue::Text(s) => s.trim().is_empty(),
            FilterValue::Number(_) | FilterValue::Bool(_) => false,
            FilterValue::List(items) => items.iter().all(|s| s.trim().is_empty()),
        }
    }

    /// Строковое представление для query-параметра.
    pub fn render(&self) -> String {
        match self {
            FilterValue::Text(s) => s.trim().to_string(),
            FilterValue::Number(n) => {
                // 100.0 сериализуем как "100", не "100.0"
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            FilterValue::Bool(b) => b.to_string(),
            FilterValue::List(items) => items
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// Одна строка структурного фильтра: поле, оператор, значение.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterClause {
    pub field: String,
    pub operator: FilterOperator,
    pub value: Option<FilterValue>,
}

impl FilterClause {
    pub fn new(field: impl Into<String>, operator: FilterOperator, value: FilterValue) -> Self {
        Self {
            field: field.into(),
            operator,
            value: Some(value),
        }
    }

    pub fn without_value(field: impl Into<String>, operator: FilterOperator) -> Self {
        Self {
            field: field.into(),
            operator,
            value: None,
        }
    }

    /// Преобразует строку фильтра в пару (имя параметра, значение).
    ///
    /// Возвращает `None` для строк, которые не должны попасть в запрос:
    /// пустое поле, отсутствующее или пустое значение у операторов,
    /// требующих значение.
    pub fn to_param(&self) -> Option<(String, String)> {
        let field = self.field.trim();
        if field.is_empty() {
            return None;
        }

        match self.operator {
            FilterOperator::IsNull => Some((format!("{field}__isnull"), "true".to_string())),
            FilterOperator::NotNull => Some((format!("{field}__isnull"), "false".to_string())),
            op => {
                let value = self.value.as_ref()?;
                if value.is_blank() {
                    return None;
                }
                Some((format!("{field}{}", op.suffix()), value.render()))
            }
        }
    }
}

/// Состояние запроса одного списочного представления.
///
/// `page` хранится с нуля (как индекс), на провод уходит единица-базированный
/// номер страницы. Любое изменение сортировки, фильтров, поиска или размера
/// страницы сбрасывает на первую страницу.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: usize,
    pub page_size: usize,
    pub sort: Vec<SortEntry>,
    pub filters: Vec<FilterClause>,
    pub search: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 50,
            sort: Vec::new(),
            filters: Vec::new(),
            search: String::new(),
        }
    }
}

impl ListQuery {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    /// Переход на страницу. Единственная мутация без сброса на первую страницу.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page = 0;
    }

    pub fn set_search(&mut self, search: String) {
        if self.search != search {
            self.search = search;
            self.page = 0;
        }
    }

    pub fn set_filters(&mut self, filters: Vec<FilterClause>) {
        self.filters = filters;
        self.page = 0;
    }

    /// Трёхпозиционный цикл сортировки по клику на заголовок:
    /// нет → по возрастанию → по убыванию → нет. Новое поле добавляется в
    /// конец набора (стабильная мульти-сортировка), остальные ступени
    /// сохраняют свой порядок.
    pub fn toggle_sort(&mut self, field: &str) {
        if let Some(pos) = self.sort.iter().position(|s| s.field == field) {
            if self.sort[pos].descending {
                self.sort.remove(pos);
            } else {
                self.sort[pos].descending = true;
            }
        } else {
            self.sort.push(SortEntry {
                field: field.to_string(),
                descending: false,
            });
        }
        self.page = 0;
    }

    /// Текущее направление сортировки поля: `None` — не сортируется,
    /// `Some(false)` — по возрастанию, `Some(true)` — по убыванию.
    pub fn sort_direction(&self, field: &str) -> Option<bool> {
        self.sort
            .iter()
            .find(|s| s.field == field)
            .map(|s| s.descending)
    }

    /// Позиция поля в наборе сортировки (для бейджа "1", "2" в заголовке).
    pub fn sort_position(&self, field: &str) -> Option<usize> {
        self.sort.iter().position(|s| s.field == field)
    }

    /// `ordering=field,-field2` — список полей через запятую, `-` = по убыванию.
    pub fn ordering_param(&self) -> Option<String> {
        if self.sort.is_empty() {
            return None;
        }
        let rendered: Vec<String> = self
            .sort
            .iter()
            .map(|s| {
                if s.descending {
                    format!("-{}", s.field)
                } else {
                    s.field.clone()
                }
            })
            .collect();
        Some(rendered.join(","))
    }

    /// Есть ли активный поиск или хотя бы один действующий фильтр.
    ///
    /// Используется для выбора текста пустого состояния: «ничего не найдено»
    /// против «данных пока нет».
    pub fn is_narrowed(&self) -> bool {
        !self.search.trim().is_empty() || self.filters.iter().any(|c| c.to_param().is_some())
    }

    /// Параметры поиска, сортировки и фильтров — без пагинации.
    ///
    /// Именно этот набор уходит во внешнюю функцию экспорта, поэтому экспорт
    /// всегда совпадает с тем, что видит пользователь.
    pub fn query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search".to_string(), search.to_string()));
        }
        if let Some(ordering) = self.ordering_param() {
            params.push(("ordering".to_string(), ordering));
        }
        for clause in &self.filters {
            if let Some(param) = clause.to_param() {
                params.push(param);
            }
        }
        params
    }

    /// Полный набор параметров запроса страницы: поиск/сортировка/фильтры,
    /// неизменённые extra-параметры вызывающей стороны и пагинация
    /// (единица-базированный `page` + `page_size`).
    pub fn to_params(&self, extra: &[(String, String)]) -> Vec<(String, String)> {
        let mut params = self.query_params();
        for (key, value) in extra {
            params.push((key.clone(), value.clone()));
        }
        params.push(("page".to_string(), (self.page + 1).to_string()));
        params.push(("page_size".to_string(), self.page_size.to_string()));
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_sort_cycle_three_states() {
        let mut q = ListQuery::default();

        q.toggle_sort("name");
        assert_eq!(q.sort_direction("name"), Some(false));

        q.toggle_sort("name");
        assert_eq!(q.sort_direction("name"), Some(true));

        q.toggle_sort("name");
        assert_eq!(q.sort_direction("name"), None);
        assert!(q.sort.is_empty());
    }

    #[test]
    fn test_sort_appends_secondary_and_keeps_order() {
        let mut q = ListQuery::default();
        q.toggle_sort("district");
        q.toggle_sort("name");
        q.toggle_sort("name"); // name → по убыванию

        assert_eq!(q.sort_position("district"), Some(0));
        assert_eq!(q.sort_position("name"), Some(1));
        assert_eq!(q.ordering_param().as_deref(), Some("district,-name"));

        // удаление первой ступени не трогает порядок остальных
        q.toggle_sort("district");
        q.toggle_sort("district");
        q.toggle_sort("district");
        assert_eq!(q.sort_position("name"), Some(0));
        assert_eq!(q.ordering_param().as_deref(), Some("-name"));
    }

    #[test]
    fn test_filter_suffix_mapping() {
        let cases = [
            (FilterOperator::Eq, "amount"),
            (FilterOperator::Ne, "amount__ne"),
            (FilterOperator::Contains, "amount__contains"),
            (FilterOperator::StartsWith, "amount__startswith"),
            (FilterOperator::EndsWith, "amount__endswith"),
            (FilterOperator::Gt, "amount__gt"),
            (FilterOperator::Gte, "amount__gte"),
            (FilterOperator::Lt, "amount__lt"),
            (FilterOperator::Lte, "amount__lte"),
        ];
        for (op, expected_key) in cases {
            let clause = FilterClause::new("amount", op, FilterValue::Number(100.0));
            let (key, value) = clause.to_param().unwrap();
            assert_eq!(key, expected_key);
            assert_eq!(value, "100");
        }
    }

    #[test]
    fn test_isnull_clauses() {
        let clause = FilterClause::without_value("delivered_at", FilterOperator::IsNull);
        assert_eq!(
            clause.to_param(),
            Some(("delivered_at__isnull".to_string(), "true".to_string()))
        );

        let clause = FilterClause::without_value("delivered_at", FilterOperator::NotNull);
        assert_eq!(
            clause.to_param(),
            Some(("delivered_at__isnull".to_string(), "false".to_string()))
        );
    }

    #[test]
    fn test_in_clause_joined_with_comma() {
        let clause = FilterClause::new(
            "status",
            FilterOperator::In,
            FilterValue::List(vec!["new".to_string(), "delivered".to_string()]),
        );
        assert_eq!(
            clause.to_param(),
            Some(("status__in".to_string(), "new,delivered".to_string()))
        );
    }

    #[test]
    fn test_blank_clauses_are_dropped() {
        // пустое поле
        let clause = FilterClause::new("", FilterOperator::Eq, FilterValue::Text("x".into()));
        assert_eq!(clause.to_param(), None);

        // отсутствующее значение
        let clause = FilterClause::without_value("name", FilterOperator::Eq);
        assert_eq!(clause.to_param(), None);

        // пустой текст
        let clause = FilterClause::new("name", FilterOperator::Contains, FilterValue::Text("  ".into()));
        assert_eq!(clause.to_param(), None);

        // пустой список
        let clause = FilterClause::new("status", FilterOperator::In, FilterValue::List(vec![]));
        assert_eq!(clause.to_param(), None);
    }

    #[test]
    fn test_page_reset_on_every_narrowing_mutation() {
        let mut q = ListQuery::default();
        q.set_page(4);
        q.set_search("газ".to_string());
        assert_eq!(q.page, 0);

        q.set_page(4);
        q.toggle_sort("name");
        assert_eq!(q.page, 0);

        q.set_page(4);
        q.set_filters(vec![FilterClause::new(
            "route_id",
            FilterOperator::Eq,
            FilterValue::Text("r1".into()),
        )]);
        assert_eq!(q.page, 0);

        q.set_page(4);
        q.set_page_size(100);
        assert_eq!(q.page, 0);
    }

    #[test]
    fn test_page_is_one_based_on_the_wire() {
        let mut q = ListQuery::with_page_size(25);
        q.set_page(2);
        let params = q.to_params(&[]);
        assert_eq!(find(&params, "page"), Some("3"));
        assert_eq!(find(&params, "page_size"), Some("25"));
    }

    #[test]
    fn test_extra_params_pass_through_unchanged() {
        let q = ListQuery::default();
        let extra = vec![("region".to_string(), "север".to_string())];
        let params = q.to_params(&extra);
        assert_eq!(find(&params, "region"), Some("север"));
    }

    #[test]
    fn test_query_params_skip_pagination_and_blank_search() {
        let mut q = ListQuery::default();
        q.set_search("  ".to_string());
        let params = q.query_params();
        assert!(params.is_empty());

        q.set_search(" котельная ".to_string());
        let params = q.query_params();
        assert_eq!(find(&params, "search"), Some("котельная"));
        assert_eq!(find(&params, "page"), None);
        assert_eq!(find(&params, "page_size"), None);
    }

    #[test]
    fn test_is_narrowed() {
        let mut q = ListQuery::default();
        assert!(!q.is_narrowed());

        q.set_search("x".to_string());
        assert!(q.is_narrowed());

        q.set_search(String::new());
        // фильтр без значения не считается действующим
        q.set_filters(vec![FilterClause::without_value("name", FilterOperator::Eq)]);
        assert!(!q.is_narrowed());

        q.set_filters(vec![FilterClause::new(
            "balance",
            FilterOperator::Lt,
            FilterValue::Number(0.0),
        )]);
        assert!(q.is_narrowed());
    }

    #[test]
    fn test_operator_code_round_trip() {
        for op in FilterOperator::all() {
            assert_eq!(FilterOperator::from_code(op.code()), Some(op));
        }
        assert_eq!(FilterOperator::from_code("unknown"), None);
    }
}
