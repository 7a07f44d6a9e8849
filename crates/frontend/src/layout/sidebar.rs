use leptos::prelude::*;

use super::{use_nav, AppScreen};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = use_nav();
    let auth = use_auth();

    let user_label = move || {
        auth.state.with(|s| {
            s.user_info
                .as_ref()
                .map(|u| u.full_name.clone().unwrap_or_else(|| u.username.clone()))
                .unwrap_or_default()
        })
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"Газсбыт"</div>

            <nav class="sidebar__nav">
                {AppScreen::all()
                    .into_iter()
                    .map(|screen| {
                        let is_active = move || nav.current.get() == screen;
                        view! {
                            <button
                                class=move || {
                                    if is_active() {
                                        "sidebar__item sidebar__item--active"
                                    } else {
                                        "sidebar__item"
                                    }
                                }
                                on:click=move |_| nav.current.set(screen)
                            >
                                {icon(screen.icon_name())}
                                <span>{screen.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar__footer">
                <span class="sidebar__user">{user_label}</span>
                <button
                    class="sidebar__logout"
                    title="Выйти"
                    on:click=move |_| auth.logout()
                >
                    {icon("logout")}
                </button>
            </div>
        </aside>
    }
}
