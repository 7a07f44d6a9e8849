use leptos::prelude::*;

use crate::shared::icons::icon;

/// Сворачиваемая панель структурных фильтров.
#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: RwSignal<bool>,
    /// Количество действующих фильтров для бейджа в шапке
    #[prop(into)]
    active_filters_count: Signal<usize>,
    /// Содержимое панели (форма фильтров)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div
                class="filter-panel-header"
                on:click=move |_| is_expanded.update(|e| *e = !*e)
            >
                <span class=move || {
                    if is_expanded.get() {
                        "filter-panel__chevron filter-panel__chevron--expanded"
                    } else {
                        "filter-panel__chevron"
                    }
                }>
                    {icon("chevron-right")}
                </span>
                {icon("filter")}
                <span class="filter-panel__title">"Фильтры"</span>
                {move || {
                    let count = active_filters_count.get();
                    if count > 0 {
                        view! { <span class="badge badge--primary">{count}</span> }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </div>
            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible"
                }
            }>
                <div class="filter-panel-content">{children()}</div>
            </div>
        </div>
    }
}
