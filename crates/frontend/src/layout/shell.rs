use leptos::prelude::*;

use super::sidebar::Sidebar;

/// Каркас приложения: сайдбар слева, рабочая область справа.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="app-main">{children()}</main>
        </div>
    }
}
