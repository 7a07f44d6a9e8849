use leptos::prelude::*;

use crate::domain::consumers::ui::list::ConsumersListPage;
use crate::domain::delivery_routes::ui::list::DeliveryRoutesListPage;
use crate::domain::orders::ui::list::OrdersListPage;
use crate::domain::products::ui::list::ProductsListPage;
use crate::layout::shell::Shell;
use crate::layout::{AppScreen, NavContext};
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::pages::login::LoginPage;
use crate::system::roles::ui::list::RolesListPage;
use crate::usecases::order_import::view::OrderImportPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <AppRoot />
        </AuthProvider>
    }
}

#[component]
fn AppRoot() -> impl IntoView {
    let auth = use_auth();
    let nav = NavContext::new();
    provide_context(nav);

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <Shell>
                {move || match nav.current.get() {
                    AppScreen::Consumers => view! { <ConsumersListPage /> }.into_any(),
                    AppScreen::DeliveryRoutes => view! { <DeliveryRoutesListPage /> }.into_any(),
                    AppScreen::Products => view! { <ProductsListPage /> }.into_any(),
                    AppScreen::Orders => view! { <OrdersListPage /> }.into_any(),
                    AppScreen::OrderImport => view! { <OrderImportPage /> }.into_any(),
                    AppScreen::Roles => view! { <RolesListPage /> }.into_any(),
                }}
            </Shell>
        </Show>
    }
}
