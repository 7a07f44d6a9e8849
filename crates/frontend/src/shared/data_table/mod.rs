//! Серверное табличное представление.
//!
//! Одна привязка к одному REST-эндпоинту коллекции: пагинация, сортировка и
//! фильтры выполняются сервером, компонент лишь держит состояние запроса и
//! синхронизирует его с круговоротом запрос-ответ. Строки убираются сразу при
//! любом изменении состояния (чтобы не показывать данные под чужой запрос),
//! на их месте — скелетон до прихода ответа.

pub mod columns;
pub mod fetch;
pub mod filter_editor;

pub use columns::ColumnDef;

use contracts::common::ListQuery;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use thaw::*;
use web_sys::AbortController;

use crate::shared::api_utils::api_url_with_params;
use crate::shared::components::column_picker::ColumnPicker;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::data_table::columns::{initial_visibility, is_visible, visible_fields};
use crate::shared::data_table::fetch::{fetch_page, FetchError, RequestSequence, DEBOUNCE_MS};
use crate::shared::data_table::filter_editor::{
    drafts_to_clauses, ClauseDraft, FilterClauseEditor,
};
use crate::shared::export::{export_table, ExportFormat};
use crate::shared::icons::icon;
use crate::shared::view_prefs::{prefs_key, LocalStoragePreferences, PreferenceStore, ViewPreferences};

/// Количество строк скелетона во время загрузки.
const SKELETON_ROWS: usize = 8;

#[component]
pub fn DataTable<T>(
    /// Путь коллекции, например `"/api/consumers"`
    endpoint: &'static str,
    /// Ключ представления (настройки видимости колонок и размера страницы)
    view_key: &'static str,
    columns: Vec<ColumnDef<T>>,
    /// Неизменяемые параметры, добавляемые к каждому запросу
    #[prop(optional)]
    extra_params: Vec<(String, String)>,
    #[prop(default = vec![25, 50, 100])]
    page_size_options: Vec<usize>,
    #[prop(default = true)]
    show_filter_panel: bool,
    #[prop(default = true)]
    show_column_picker: bool,
    #[prop(default = true)]
    show_export: bool,
    /// Внешний триггер перезагрузки: экран инкрементирует после создания или
    /// редактирования записи
    #[prop(optional, into)]
    reload: Option<Signal<u64>>,
) -> impl IntoView
where
    T: Clone + DeserializeOwned + Send + Sync + 'static,
{
    let prefs_store = LocalStoragePreferences;
    let saved = prefs_store.load(&prefs_key(view_key));
    let initial_page_size = saved.as_ref().map(|p| p.page_size).unwrap_or(50);

    let visibility = RwSignal::new(initial_visibility(&columns, saved.as_ref()));
    let field_choices: Vec<(&'static str, &'static str)> = columns
        .iter()
        .filter(|c| !c.field.is_empty())
        .map(|c| (c.field, c.label))
        .collect();
    let columns = StoredValue::new(columns);
    let extra_params = StoredValue::new(extra_params);

    let query = RwSignal::new(ListQuery::with_page_size(initial_page_size));
    let rows: RwSignal<Vec<T>> = RwSignal::new(Vec::new());
    let total_count = RwSignal::new(0usize);
    let loading = RwSignal::new(true);
    let exporting = RwSignal::new(false);

    let filter_drafts = RwSignal::new(Vec::<ClauseDraft>::new());
    let filter_expanded = RwSignal::new(false);

    let persist_prefs = move || {
        let prefs = ViewPreferences {
            column_visibility: visibility.get_untracked(),
            page_size: query.with_untracked(|q| q.page_size),
        };
        LocalStoragePreferences.save(&prefs_key(view_key), &prefs);
    };

    // --- загрузка: дебаунс + отмена устаревших запросов -------------------

    let sequence = StoredValue::new_local(RequestSequence::new());
    let abort_ctrl = StoredValue::new_local(None::<AbortController>);

    Effect::new(move |_| {
        let q = query.get();
        if let Some(reload) = reload {
            reload.track();
        }

        // строки убираются сразу, до прихода ответа
        rows.set(Vec::new());
        loading.set(true);

        let token = sequence.with_value(|s| s.issue());
        let url = extra_params.with_value(|extra| api_url_with_params(endpoint, &q.to_params(extra)));

        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if !token.is_current() {
                // таймер перекрыт более новым изменением состояния
                return;
            }

            abort_ctrl.update_value(|slot| {
                if let Some(ctrl) = slot.take() {
                    ctrl.abort();
                }
            });
            let ctrl = AbortController::new().ok();
            let abort_signal = ctrl.as_ref().map(|c| c.signal());
            abort_ctrl.set_value(ctrl);

            let result = fetch_page::<T>(&url, abort_signal.as_ref()).await;
            if !token.is_current() {
                // ответ устарел — выбрасываем молча, успех он или ошибка
                return;
            }

            match result {
                Ok(page) => {
                    total_count.set(page.count);
                    rows.set(page.results);
                    loading.set(false);
                }
                Err(FetchError::Aborted) => {}
                Err(FetchError::Failed(msg)) => {
                    log::error!("{view_key}: не удалось загрузить список: {msg}");
                    loading.set(false);
                }
            }
        });
    });

    on_cleanup(move || {
        sequence.with_value(|s| s.cancel_all());
        abort_ctrl.update_value(|slot| {
            if let Some(ctrl) = slot.take() {
                ctrl.abort();
            }
        });
    });

    // --- производные и обработчики ----------------------------------------

    let visible_columns = Signal::derive(move || {
        let vis = visibility.get();
        columns.with_value(|cols| {
            cols.iter()
                .filter(|c| is_visible(c, &vis))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let total_pages = Signal::derive(move || {
        let count = total_count.get();
        let size = query.with(|q| q.page_size).max(1);
        if count == 0 {
            1
        } else {
            (count + size - 1) / size
        }
    });

    let active_filters_count = Signal::derive(move || {
        query.with(|q| {
            let clauses = q.filters.iter().filter(|c| c.to_param().is_some()).count();
            clauses + usize::from(!q.search.trim().is_empty())
        })
    });

    let go_to_page = Callback::new(move |page: usize| {
        query.update(|q| q.set_page(page));
    });

    let change_page_size = Callback::new(move |size: usize| {
        query.update(|q| q.set_page_size(size));
        persist_prefs();
    });

    let toggle_column = Callback::new(move |(field, on): (String, bool)| {
        visibility.update(|v| {
            v.insert(field, on);
        });
        persist_prefs();
    });

    let apply_filters = Callback::new(move |_: ()| {
        let clauses = drafts_to_clauses(&filter_drafts.get_untracked());
        query.update(|q| q.set_filters(clauses));
    });

    let reset_filters = Callback::new(move |_: ()| {
        filter_drafts.set(Vec::new());
        query.update(|q| q.set_filters(Vec::new()));
    });

    let toggle_sort = move |field: &'static str| {
        query.update(|q| q.toggle_sort(field));
    };

    // " ▲2" — направление и номер ступени при мульти-сортировке
    let sort_indicator = move |field: &'static str| {
        query.with(|q| {
            let arrow = match q.sort_direction(field) {
                Some(false) => "▲",
                Some(true) => "▼",
                None => return " ⇅".to_string(),
            };
            match (q.sort.len() > 1, q.sort_position(field)) {
                (true, Some(pos)) => format!(" {arrow}{}", pos + 1),
                _ => format!(" {arrow}"),
            }
        })
    };

    let run_export = move |format: ExportFormat| {
        if exporting.get_untracked() {
            return;
        }
        exporting.set(true);
        let q = query.get_untracked();
        let fields = columns.with_value(|cols| visible_fields(cols, &visibility.get_untracked()));
        let extra = extra_params.get_value();
        spawn_local(async move {
            if let Err(e) = export_table(endpoint, view_key, format, &q, &fields, &extra).await {
                log::error!("{view_key}: экспорт не удался: {e}");
            }
            exporting.set(false);
        });
    };

    let search_value = Signal::derive(move || query.with(|q| q.search.clone()));

    let field_choices_for_editor = field_choices.clone();

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <div class="data-table__search">
                    <input
                        type="text"
                        class="data-table__search-input"
                        placeholder="Быстрый поиск..."
                        prop:value=move || search_value.get()
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            query.update(|q| q.set_search(text));
                        }
                    />
                    {move || {
                        if search_value.get().is_empty() {
                            view! { <></> }.into_any()
                        } else {
                            view! {
                                <button
                                    class="data-table__search-clear"
                                    title="Очистить"
                                    on:click=move |_| query.update(|q| q.set_search(String::new()))
                                >
                                    {icon("x")}
                                </button>
                            }
                            .into_any()
                        }
                    }}
                </div>
                <div class="data-table__toolbar-spacer"></div>
                <PaginationControls
                    current_page=Signal::derive(move || query.with(|q| q.page))
                    total_pages=total_pages
                    total_count=total_count
                    page_size=Signal::derive(move || query.with(|q| q.page_size))
                    on_page_change=go_to_page
                    on_page_size_change=change_page_size
                    page_size_options=page_size_options
                />
                {show_column_picker
                    .then(|| {
                        view! {
                            <ColumnPicker
                                columns=field_choices.clone()
                                visibility=Signal::derive(move || visibility.get())
                                on_toggle=toggle_column
                            />
                        }
                    })}
                {show_export
                    .then(|| {
                        view! {
                            <div class="data-table__export">
                                {icon("download")}
                                {ExportFormat::all()
                                    .into_iter()
                                    .map(|format| {
                                        view! {
                                            <button
                                                class="data-table__export-btn"
                                                disabled=move || exporting.get()
                                                on:click=move |_| run_export(format)
                                            >
                                                {format.display_name()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>

            {show_filter_panel
                .then(|| {
                    view! {
                        <FilterPanel
                            is_expanded=filter_expanded
                            active_filters_count=active_filters_count
                        >
                            <FilterClauseEditor
                                fields=field_choices_for_editor.clone()
                                drafts=filter_drafts
                                on_apply=apply_filters
                                on_reset=reset_filters
                            />
                        </FilterPanel>
                    }
                })}

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <For
                                each=move || visible_columns.get()
                                key=|col| format!("{}|{}", col.field, col.label)
                                children=move |col| {
                                    let field = col.field;
                                    if col.sortable && !field.is_empty() {
                                        view! {
                                            <TableHeaderCell>
                                                <div
                                                    class="table__sortable-header"
                                                    style="cursor:pointer;"
                                                    on:click=move |_| toggle_sort(field)
                                                >
                                                    {col.label}
                                                    <span class="table__sort-indicator">
                                                        {move || sort_indicator(field)}
                                                    </span>
                                                </div>
                                            </TableHeaderCell>
                                        }
                                        .into_any()
                                    } else {
                                        view! { <TableHeaderCell>{col.label}</TableHeaderCell> }
                                            .into_any()
                                    }
                                }
                            />
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            if loading.get() {
                                let width = visible_columns.get().len().max(1);
                                (0..SKELETON_ROWS)
                                    .map(|_| {
                                        view! {
                                            <TableRow>
                                                {(0..width)
                                                    .map(|_| {
                                                        view! {
                                                            <TableCell>
                                                                <div class="skeleton-line"></div>
                                                            </TableCell>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            } else if rows.with(|r| r.is_empty()) {
                                let width = visible_columns.get().len().max(1);
                                let message = if query.with(|q| q.is_narrowed()) {
                                    "По заданным условиям ничего не найдено"
                                } else {
                                    "Данных пока нет"
                                };
                                view! {
                                    <TableRow>
                                        <TableCell attr:colspan=width.to_string()>
                                            <div class="data-table__empty">{message}</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any()
                            } else {
                                rows.get()
                                    .into_iter()
                                    .map(|row| {
                                        let cells = visible_columns
                                            .get()
                                            .into_iter()
                                            .map(|col| {
                                                let cell = col.render_cell(&row);
                                                view! {
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {cell}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                }
                                            })
                                            .collect_view();
                                        view! {
                                            <TableRow>
                                                {cells}
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
