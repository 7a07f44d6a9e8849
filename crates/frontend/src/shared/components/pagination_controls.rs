use leptos::prelude::*;

use crate::shared::icons::icon;

/// Управление пагинацией списка: первая/последняя страница, шаг на одну,
/// счётчик и выбор размера страницы.
#[component]
pub fn PaginationControls(
    /// Текущая страница (с нуля)
    #[prop(into)]
    current_page: Signal<usize>,
    /// Всего страниц
    #[prop(into)]
    total_pages: Signal<usize>,
    /// Всего записей
    #[prop(into)]
    total_count: Signal<usize>,
    /// Текущий размер страницы
    #[prop(into)]
    page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    /// Варианты размера страницы
    #[prop(default = vec![25, 50, 100])]
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let page_size_opts = page_size_options;

    let at_first = Signal::derive(move || current_page.get() == 0);
    let at_last = Signal::derive(move || current_page.get() + 1 >= total_pages.get());

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                title="Первая страница"
                disabled=move || at_first.get()
                on:click=move |_| on_page_change.run(0)
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                title="Предыдущая страница"
                disabled=move || at_first.get()
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "стр. {} из {} · {} зап.",
                        current_page.get() + 1,
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                title="Следующая страница"
                disabled=move || at_last.get()
                on:click=move |_| {
                    if !at_last.get_untracked() {
                        on_page_change.run(current_page.get_untracked() + 1);
                    }
                }
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                title="Последняя страница"
                disabled=move || at_last.get()
                on:click=move |_| {
                    let total = total_pages.get_untracked();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value={size.to_string()} selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
