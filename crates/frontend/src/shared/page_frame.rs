//! PageFrame — стандартная обёртка страницы.
//!
//! Гарантирует `id` и категорию на корневом DOM-элементе страницы, чтобы по
//! дереву можно было находить экраны при отладке.

use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_DETAIL: &str = "detail";
pub const PAGE_CAT_USECASE: &str = "usecase";
pub const PAGE_CAT_SYSTEM: &str = "system";

#[component]
pub fn PageFrame(
    /// HTML id в формате `{entity}--{category}`, например `"consumers--list"`.
    page_id: &'static str,
    /// Одна из констант PAGE_CAT_*.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
