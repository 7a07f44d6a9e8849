use std::collections::HashMap;

use leptos::prelude::*;

use crate::shared::icons::icon;

/// Выпадающий список управления видимостью колонок.
///
/// Сам не хранит видимость — только отображает карту и сообщает о
/// переключениях наверх (таблица пишет их в настройки представления).
#[component]
pub fn ColumnPicker(
    /// Колонки: (имя поля, подпись)
    columns: Vec<(&'static str, &'static str)>,
    #[prop(into)] visibility: Signal<HashMap<String, bool>>,
    on_toggle: Callback<(String, bool)>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="column-picker">
            <button
                class="column-picker__trigger"
                title="Колонки"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {icon("columns")}
                " Колонки"
            </button>
            {move || {
                if !open.get() {
                    return view! { <></> }.into_any();
                }
                let columns = columns.clone();
                view! {
                    <div class="column-picker__panel">
                        {columns
                            .into_iter()
                            .map(|(field, label)| {
                                let checked = Signal::derive(move || {
                                    visibility.get().get(field).copied().unwrap_or(true)
                                });
                                view! {
                                    <label class="column-picker__item">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || checked.get()
                                            on:change=move |ev| {
                                                let on = event_target_checked(&ev);
                                                on_toggle.run((field.to_string(), on));
                                            }
                                        />
                                        <span>{label}</span>
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
