//! Редактор структурных фильтров: строки «поле — оператор — значение».
//!
//! Черновики строк живут как простые строки (под select/input), в
//! [`FilterClause`] они превращаются только по кнопке «Применить».

use contracts::common::{FilterClause, FilterOperator, FilterValue};
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Черновик одной строки фильтра в том виде, в каком его держит форма.
#[derive(Clone, Debug, PartialEq)]
pub struct ClauseDraft {
    pub field: String,
    pub op_code: String,
    pub value: String,
}

impl Default for ClauseDraft {
    fn default() -> Self {
        Self {
            field: String::new(),
            op_code: FilterOperator::Eq.code().to_string(),
            value: String::new(),
        }
    }
}

/// Переводит черновики в строки фильтра.
///
/// Значение сравнений порядка разбирается как число, если получается;
/// `в списке` режется по запятым. Мусорные черновики (неизвестный оператор)
/// выбрасываются здесь, пустые значения отсеет [`FilterClause::to_param`].
pub fn drafts_to_clauses(drafts: &[ClauseDraft]) -> Vec<FilterClause> {
    drafts
        .iter()
        .filter_map(|draft| {
            let operator = FilterOperator::from_code(&draft.op_code)?;
            let clause = if !operator.requires_value() {
                FilterClause::without_value(draft.field.clone(), operator)
            } else {
                let value = match operator {
                    FilterOperator::In => FilterValue::List(
                        draft.value.split(',').map(|s| s.trim().to_string()).collect(),
                    ),
                    FilterOperator::Gt
                    | FilterOperator::Gte
                    | FilterOperator::Lt
                    | FilterOperator::Lte => match draft.value.trim().parse::<f64>() {
                        Ok(n) => FilterValue::Number(n),
                        Err(_) => FilterValue::Text(draft.value.clone()),
                    },
                    _ => FilterValue::Text(draft.value.clone()),
                };
                FilterClause::new(draft.field.clone(), operator, value)
            };
            Some(clause)
        })
        .collect()
}

/// Форма редактирования набора фильтров.
#[component]
pub fn FilterClauseEditor(
    /// Доступные поля: (имя на сервере, подпись)
    fields: Vec<(&'static str, &'static str)>,
    /// Черновики строк — состоянием владеет таблица
    drafts: RwSignal<Vec<ClauseDraft>>,
    /// «Применить»
    on_apply: Callback<()>,
    /// «Сбросить» — очистить черновики и активные фильтры
    on_reset: Callback<()>,
) -> impl IntoView {
    let fields_for_rows = StoredValue::new(fields);

    let rows = move || {
        let fields = fields_for_rows.get_value();
        drafts
            .get()
            .into_iter()
            .enumerate()
            .map(|(idx, draft)| {
                let operator = FilterOperator::from_code(&draft.op_code);
                let needs_value = operator.map(|op| op.requires_value()).unwrap_or(true);
                let fields = fields.clone();
                view! {
                    <div class="filter-clause-row">
                        <select
                            class="filter-clause-row__field"
                            on:change=move |ev| {
                                let val = event_target_value(&ev);
                                drafts.update(|d| {
                                    if let Some(row) = d.get_mut(idx) {
                                        row.field = val;
                                    }
                                });
                            }
                            prop:value=draft.field.clone()
                        >
                            <option value="">"— поле —"</option>
                            {fields
                                .iter()
                                .map(|(field, label)| {
                                    let selected = draft.field == *field;
                                    view! {
                                        <option value={field.to_string()} selected=selected>
                                            {label.to_string()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                        <select
                            class="filter-clause-row__operator"
                            on:change=move |ev| {
                                let val = event_target_value(&ev);
                                drafts.update(|d| {
                                    if let Some(row) = d.get_mut(idx) {
                                        row.op_code = val;
                                    }
                                });
                            }
                            prop:value=draft.op_code.clone()
                        >
                            {FilterOperator::all()
                                .into_iter()
                                .map(|op| {
                                    let selected = draft.op_code == op.code();
                                    view! {
                                        <option value={op.code()} selected=selected>
                                            {op.display_name()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                        {if needs_value {
                            view! {
                                <input
                                    type="text"
                                    class="filter-clause-row__value"
                                    placeholder="Значение"
                                    prop:value=draft.value.clone()
                                    on:input=move |ev| {
                                        let val = event_target_value(&ev);
                                        drafts.update(|d| {
                                            if let Some(row) = d.get_mut(idx) {
                                                row.value = val;
                                            }
                                        });
                                    }
                                />
                            }
                            .into_any()
                        } else {
                            view! { <span class="filter-clause-row__value filter-clause-row__value--empty"></span> }
                                .into_any()
                        }}
                        <button
                            class="filter-clause-row__remove"
                            title="Убрать условие"
                            on:click=move |_| {
                                drafts.update(|d| {
                                    if idx < d.len() {
                                        d.remove(idx);
                                    }
                                });
                            }
                        >
                            {icon("x")}
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="filter-clause-editor">
            {rows}
            <div class="filter-clause-editor__actions">
                <button
                    class="filter-clause-editor__add"
                    on:click=move |_| drafts.update(|d| d.push(ClauseDraft::default()))
                >
                    {icon("plus")}
                    " Добавить условие"
                </button>
                <div class="filter-clause-editor__spacer"></div>
                <button class="filter-clause-editor__apply" on:click=move |_| on_apply.run(())>
                    "Применить"
                </button>
                <button class="filter-clause-editor__reset" on:click=move |_| on_reset.run(())>
                    "Сбросить"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(field: &str, op: FilterOperator, value: &str) -> ClauseDraft {
        ClauseDraft {
            field: field.to_string(),
            op_code: op.code().to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_order_comparison_parses_number() {
        let clauses = drafts_to_clauses(&[draft("amount", FilterOperator::Gte, "100")]);
        assert_eq!(
            clauses[0].to_param(),
            Some(("amount__gte".to_string(), "100".to_string()))
        );
    }

    #[test]
    fn test_in_splits_by_comma() {
        let clauses = drafts_to_clauses(&[draft("status", FilterOperator::In, "new, delivered")]);
        assert_eq!(
            clauses[0].to_param(),
            Some(("status__in".to_string(), "new,delivered".to_string()))
        );
    }

    #[test]
    fn test_isnull_keeps_no_value() {
        let clauses = drafts_to_clauses(&[draft("delivered_at", FilterOperator::IsNull, "мусор")]);
        assert_eq!(clauses[0].value, None);
    }

    #[test]
    fn test_unknown_operator_dropped() {
        let bad = ClauseDraft {
            field: "x".to_string(),
            op_code: "какой-то".to_string(),
            value: "1".to_string(),
        };
        assert!(drafts_to_clauses(&[bad]).is_empty());
    }
}
