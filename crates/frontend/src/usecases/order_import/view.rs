use contracts::usecases::order_import::{
    ColumnBinding, ImportField, ImportMapping, ImportResultDto,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use crate::usecases::order_import::api;

/// Импорт заказов из CSV/Excel.
///
/// Оператор выбирает файл, привязывает поля заказа к заголовкам колонок и
/// отправляет всё на сервер. Разбор и валидация — серверные; экран только
/// конфигурация и показ итога.
#[component]
pub fn OrderImportPage() -> impl IntoView {
    let file = StoredValue::new_local(None::<web_sys::File>);
    let (file_name, set_file_name) = signal(Option::<String>::None);

    let bindings: RwSignal<Vec<ColumnBinding>> = RwSignal::new(
        ImportField::all()
            .into_iter()
            .map(|field| ColumnBinding {
                field,
                column: String::new(),
            })
            .collect(),
    );
    let has_header_row = RwSignal::new(true);

    let (importing, set_importing) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let result: RwSignal<Option<ImportResultDto>> = RwSignal::new(None);

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let picked = input.files().and_then(|list| list.get(0));
        set_file_name.set(picked.as_ref().map(|f| f.name()));
        file.set_value(picked);
        result.set(None);
        set_error.set(None);
    };

    let on_import = move |_| {
        let mapping = ImportMapping {
            bindings: bindings.get_untracked(),
            has_header_row: has_header_row.get_untracked(),
        };

        let missing = mapping.missing_required();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|f| f.display_name()).collect();
            set_error.set(Some(format!(
                "Привяжите обязательные поля: {}",
                names.join(", ")
            )));
            return;
        }
        let Some(picked) = file.with_value(|f| f.clone()) else {
            set_error.set(Some("Выберите файл".to_string()));
            return;
        };

        set_importing.set(true);
        set_error.set(None);
        result.set(None);

        spawn_local(async move {
            match api::import_orders(&picked, &mapping).await {
                Ok(summary) => {
                    result.set(Some(summary));
                    set_importing.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Импорт не выполнен: {}", e)));
                    set_importing.set(false);
                }
            }
        });
    };

    view! {
        <PageFrame page_id="order_import--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Импорт заказов"</h1>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="import-step">
                    <div class="import-step__title">"1. Файл"</div>
                    <label class="import-file">
                        {icon("import")}
                        <span>
                            {move || {
                                file_name.get().unwrap_or_else(|| "Выбрать CSV или Excel...".to_string())
                            }}
                        </span>
                        <input
                            type="file"
                            accept=".csv,.xlsx,.xls"
                            style="display: none;"
                            on:change=on_file_change
                        />
                    </label>
                    <label class="import-header-row">
                        <Checkbox checked=has_header_row label="Первая строка — заголовки" />
                    </label>
                </div>

                <div class="import-step">
                    <div class="import-step__title">"2. Соответствие колонок"</div>
                    <div class="import-mapping">
                        {move || {
                            bindings
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(idx, binding)| {
                                    let field = binding.field;
                                    view! {
                                        <div class="import-mapping__row">
                                            <span class="import-mapping__field">
                                                {field.display_name()}
                                                {field
                                                    .is_required()
                                                    .then(|| view! { <span class="import-mapping__required">"*"</span> })}
                                            </span>
                                            <input
                                                type="text"
                                                class="import-mapping__column"
                                                placeholder="Заголовок колонки в файле"
                                                prop:value=binding.column.clone()
                                                on:input=move |ev| {
                                                    let val = event_target_value(&ev);
                                                    bindings.update(|b| {
                                                        if let Some(row) = b.get_mut(idx) {
                                                            row.column = val;
                                                        }
                                                    });
                                                }
                                            />
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>

                <div class="import-step">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_import
                        disabled=Signal::derive(move || importing.get())
                    >
                        {move || if importing.get() { "Импорт..." } else { "Импортировать" }}
                    </Button>
                </div>

                {move || {
                    result.get().map(|summary| {
                        view! {
                            <div class="import-result">
                                <div class="import-result__totals">
                                    <span class="badge badge--success">
                                        {format!("Создано: {}", summary.created)}
                                    </span>
                                    <span class="badge badge--neutral">
                                        {format!("Пропущено: {}", summary.skipped)}
                                    </span>
                                    {(!summary.errors.is_empty())
                                        .then(|| {
                                            view! {
                                                <span class="badge badge--error">
                                                    {format!("Ошибок: {}", summary.errors.len())}
                                                </span>
                                            }
                                        })}
                                </div>
                                {(!summary.errors.is_empty())
                                    .then(|| {
                                        view! {
                                            <table class="import-result__errors">
                                                <thead>
                                                    <tr>
                                                        <th>"Строка"</th>
                                                        <th>"Ошибка"</th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {summary
                                                        .errors
                                                        .iter()
                                                        .map(|err| {
                                                            view! {
                                                                <tr>
                                                                    <td>{err.row}</td>
                                                                    <td>{err.message.clone()}</td>
                                                                </tr>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </tbody>
                                            </table>
                                        }
                                    })}
                            </div>
                        }
                    })
                }}
            </div>
        </PageFrame>
    }
}
