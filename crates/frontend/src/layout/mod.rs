pub mod shell;
pub mod sidebar;

use leptos::prelude::*;

/// Экран приложения. Навигация без роутера: текущий экран — просто сигнал.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppScreen {
    Consumers,
    DeliveryRoutes,
    Products,
    Orders,
    OrderImport,
    Roles,
}

impl AppScreen {
    pub fn title(&self) -> &'static str {
        match self {
            AppScreen::Consumers => "Абоненты",
            AppScreen::DeliveryRoutes => "Маршруты",
            AppScreen::Products => "Товары",
            AppScreen::Orders => "Заказы",
            AppScreen::OrderImport => "Импорт заказов",
            AppScreen::Roles => "Роли и права",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            AppScreen::Consumers => "consumers",
            AppScreen::DeliveryRoutes => "routes",
            AppScreen::Products => "products",
            AppScreen::Orders => "orders",
            AppScreen::OrderImport => "import",
            AppScreen::Roles => "roles",
        }
    }

    pub fn all() -> Vec<AppScreen> {
        vec![
            AppScreen::Consumers,
            AppScreen::DeliveryRoutes,
            AppScreen::Products,
            AppScreen::Orders,
            AppScreen::OrderImport,
            AppScreen::Roles,
        ]
    }
}

/// Контекст навигации, кладётся в leptos-контекст в корне приложения.
#[derive(Clone, Copy)]
pub struct NavContext {
    pub current: RwSignal<AppScreen>,
}

impl NavContext {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(AppScreen::Consumers),
        }
    }
}

impl Default for NavContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_nav() -> NavContext {
    use_context::<NavContext>().expect("NavContext not provided in context")
}
