use contracts::domain::delivery_route::{
    CreateDeliveryRouteDto, DeliveryRoute, UpdateDeliveryRouteDto,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::delivery_routes::api;
use crate::shared::icons::icon;

/// Форма маршрута (`route = None` — создание).
#[component]
pub fn DeliveryRouteForm(
    route: Option<DeliveryRoute>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let editing_id = route.as_ref().map(|r| r.id.clone());
    let title = if editing_id.is_some() {
        "Редактирование маршрута"
    } else {
        "Новый маршрут"
    };

    let name = RwSignal::new(route.as_ref().map(|r| r.name.clone()).unwrap_or_default());
    let district = RwSignal::new(
        route
            .as_ref()
            .map(|r| r.district.clone())
            .unwrap_or_default(),
    );
    let driver_name = RwSignal::new(
        route
            .as_ref()
            .and_then(|r| r.driver_name.clone())
            .unwrap_or_default(),
    );
    let is_active = RwSignal::new(route.as_ref().map(|r| r.is_active).unwrap_or(true));
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        if name.get_untracked().trim().is_empty() {
            set_error.set(Some("Укажите название маршрута".to_string()));
            return;
        }
        set_saving.set(true);
        set_error.set(None);

        let driver = driver_name.get_untracked();
        let driver_opt = if driver.trim().is_empty() {
            None
        } else {
            Some(driver)
        };
        let editing_id = editing_id.clone();

        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_route(UpdateDeliveryRouteDto {
                    id,
                    name: name.get_untracked(),
                    district: district.get_untracked(),
                    driver_name: driver_opt,
                    is_active: is_active.get_untracked(),
                })
                .await,
                None => api::create_route(CreateDeliveryRouteDto {
                    name: name.get_untracked(),
                    district: district.get_untracked(),
                    driver_name: driver_opt,
                })
                .await
                .map(|_| ()),
            };
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => {
                    set_error.set(Some(format!("Ошибка сохранения: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Название"</Label>
                        <Input value=name disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Район"</Label>
                        <Input value=district disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Водитель"</Label>
                        <Input value=driver_name disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Checkbox checked=is_active label="Маршрут действует" />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Отмена"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Сохранение..." } else { "Сохранить" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
