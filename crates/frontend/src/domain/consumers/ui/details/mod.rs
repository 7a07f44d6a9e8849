use contracts::domain::consumer::{Consumer, CreateConsumerDto, UpdateConsumerDto};
use contracts::domain::delivery_route::DeliveryRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::consumers::api;
use crate::domain::delivery_routes::api as routes_api;
use crate::shared::icons::icon;

/// Форма абонента (`consumer = None` — создание).
///
/// Лицевой счёт присваивается при создании и дальше не меняется.
#[component]
pub fn ConsumerForm(
    consumer: Option<Consumer>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let editing_id = consumer.as_ref().map(|c| c.id.clone());
    let is_edit = editing_id.is_some();
    let title = if is_edit {
        "Редактирование абонента"
    } else {
        "Новый абонент"
    };

    let account_no = RwSignal::new(
        consumer
            .as_ref()
            .map(|c| c.account_no.clone())
            .unwrap_or_default(),
    );
    let name = RwSignal::new(consumer.as_ref().map(|c| c.name.clone()).unwrap_or_default());
    let phone = RwSignal::new(
        consumer
            .as_ref()
            .and_then(|c| c.phone.clone())
            .unwrap_or_default(),
    );
    let address = RwSignal::new(
        consumer
            .as_ref()
            .map(|c| c.address.clone())
            .unwrap_or_default(),
    );
    let route_id = RwSignal::new(
        consumer
            .as_ref()
            .and_then(|c| c.route_id.clone())
            .unwrap_or_default(),
    );
    let is_active = RwSignal::new(consumer.as_ref().map(|c| c.is_active).unwrap_or(true));

    let routes: RwSignal<Vec<DeliveryRoute>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    // справочник маршрутов для выпадающего списка
    Effect::new(move |_| {
        spawn_local(async move {
            match routes_api::fetch_all_routes().await {
                Ok(list) => routes.set(list),
                Err(e) => log::error!("consumers: справочник маршрутов не загрузился: {e}"),
            }
        });
    });

    let on_save = move |_| {
        if name.get_untracked().trim().is_empty() {
            set_error.set(Some("Укажите имя абонента".to_string()));
            return;
        }
        if !is_edit && account_no.get_untracked().trim().is_empty() {
            set_error.set(Some("Укажите лицевой счёт".to_string()));
            return;
        }
        set_saving.set(true);
        set_error.set(None);

        let phone_val = phone.get_untracked();
        let phone_opt = if phone_val.trim().is_empty() {
            None
        } else {
            Some(phone_val)
        };
        let route_val = route_id.get_untracked();
        let route_opt = if route_val.is_empty() {
            None
        } else {
            Some(route_val)
        };
        let editing_id = editing_id.clone();

        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_consumer(UpdateConsumerDto {
                    id,
                    name: name.get_untracked(),
                    phone: phone_opt,
                    address: address.get_untracked(),
                    route_id: route_opt,
                    is_active: is_active.get_untracked(),
                })
                .await,
                None => api::create_consumer(CreateConsumerDto {
                    account_no: account_no.get_untracked(),
                    name: name.get_untracked(),
                    phone: phone_opt,
                    address: address.get_untracked(),
                    route_id: route_opt,
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
                        <Label>"Лицевой счёт"</Label>
                        <Input
                            value=account_no
                            disabled=Signal::derive(move || saving.get() || is_edit)
                        />
                    </div>

                    <div class="form__group">
                        <Label>"ФИО / организация"</Label>
                        <Input value=name disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Телефон"</Label>
                        <Input value=phone disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Адрес"</Label>
                        <Input value=address disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Маршрут"</Label>
                        <select
                            class="form__select"
                            disabled=move || saving.get()
                            on:change=move |ev| route_id.set(event_target_value(&ev))
                            prop:value=move || route_id.get()
                        >
                            <option value="">"— не привязан —"</option>
                            {move || {
                                routes
                                    .get()
                                    .into_iter()
                                    .map(|route| {
                                        let selected = route_id.get_untracked() == route.id;
                                        view! {
                                            <option value={route.id.clone()} selected=selected>
                                                {format!("{} ({})", route.name, route.district)}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    {is_edit
                        .then(|| {
                            view! {
                                <div class="form__group">
                                    <Checkbox checked=is_active label="Абонент активен" />
                                </div>
                            }
                        })}
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
