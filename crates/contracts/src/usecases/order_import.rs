use serde::{Deserialize, Serialize};

/// Поле заказа, которое можно привязать к колонке загружаемого файла.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportField {
    AccountNo,
    ProductSku,
    Quantity,
    OrderDate,
    Comment,
}

impl ImportField {
    pub fn code(&self) -> &'static str {
        match self {
            ImportField::AccountNo => "account_no",
            ImportField::ProductSku => "product_sku",
            ImportField::Quantity => "quantity",
            ImportField::OrderDate => "order_date",
            ImportField::Comment => "comment",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ImportField::AccountNo => "Лицевой счёт",
            ImportField::ProductSku => "Артикул товара",
            ImportField::Quantity => "Количество",
            ImportField::OrderDate => "Дата заказа",
            ImportField::Comment => "Комментарий",
        }
    }

    /// Обязательные поля должны быть привязаны до отправки файла.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            ImportField::AccountNo | ImportField::ProductSku | ImportField::Quantity
        )
    }

    pub fn all() -> Vec<ImportField> {
        vec![
            ImportField::AccountNo,
            ImportField::ProductSku,
            ImportField::Quantity,
            ImportField::OrderDate,
            ImportField::Comment,
        ]
    }
}

/// Привязка одного поля заказа к заголовку колонки файла.
///
/// Разбор и валидация файла выполняются сервером; клиент только передаёт
/// конфигурацию соответствия колонок.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnBinding {
    pub field: ImportField,
    /// Заголовок колонки в файле, как его ввёл оператор
    pub column: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportMapping {
    pub bindings: Vec<ColumnBinding>,
    /// Первая строка файла содержит заголовки
    pub has_header_row: bool,
}

impl ImportMapping {
    /// Обязательные поля без привязанной колонки.
    pub fn missing_required(&self) -> Vec<ImportField> {
        ImportField::all()
            .into_iter()
            .filter(|f| f.is_required())
            .filter(|f| {
                !self
                    .bindings
                    .iter()
                    .any(|b| b.field == *f && !b.column.trim().is_empty())
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRowError {
    /// Номер строки файла (с единицы, включая строку заголовков)
    pub row: usize,
    pub message: String,
}

/// Итог серверной обработки файла.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResultDto {
    pub created: usize,
    pub skipped: usize,
    pub errors: Vec<ImportRowError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_reports_unbound_fields() {
        let mapping = ImportMapping {
            bindings: vec![ColumnBinding {
                field: ImportField::AccountNo,
                column: "Лицевой счёт".to_string(),
            }],
            has_header_row: true,
        };
        let missing = mapping.missing_required();
        assert_eq!(missing, vec![ImportField::ProductSku, ImportField::Quantity]);
    }

    #[test]
    fn test_blank_column_counts_as_unbound() {
        let mapping = ImportMapping {
            bindings: vec![
                ColumnBinding {
                    field: ImportField::AccountNo,
                    column: "A".to_string(),
                },
                ColumnBinding {
                    field: ImportField::ProductSku,
                    column: "   ".to_string(),
                },
                ColumnBinding {
                    field: ImportField::Quantity,
                    column: "C".to_string(),
                },
            ],
            has_header_row: true,
        };
        assert_eq!(mapping.missing_required(), vec![ImportField::ProductSku]);
    }
}
