use contracts::domain::delivery_route::DeliveryRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::delivery_routes::api;
use crate::domain::delivery_routes::ui::details::DeliveryRouteForm;
use crate::shared::data_table::{ColumnDef, DataTable};
use crate::shared::dialog::DialogState;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[component]
pub fn DeliveryRoutesListPage() -> impl IntoView {
    let reload = RwSignal::new(0u64);
    let bump = move || reload.update(|n| *n += 1);

    let create_dialog: DialogState<()> = DialogState::new();
    let edit_dialog: DialogState<DeliveryRoute> = DialogState::new();

    let delete_route = move |route: DeliveryRoute| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Удалить маршрут «{}»?", route.name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_route(&route.id).await {
                Ok(_) => bump(),
                Err(e) => log::error!("delivery_routes: удаление не удалось: {e}"),
            }
        });
    };

    let columns = vec![
        ColumnDef::new("name", "Маршрут", |r: &DeliveryRoute| {
            view! { <span style="font-weight: 500;">{r.name.clone()}</span> }.into_any()
        }),
        ColumnDef::new("district", "Район", |r: &DeliveryRoute| {
            view! { <span>{r.district.clone()}</span> }.into_any()
        }),
        ColumnDef::new("driver_name", "Водитель", |r: &DeliveryRoute| {
            view! { <span>{r.driver_name.clone().unwrap_or_else(|| "—".to_string())}</span> }
                .into_any()
        }),
        ColumnDef::new("consumers_count", "Абонентов", |r: &DeliveryRoute| {
            view! { <span>{r.consumers_count.to_string()}</span> }.into_any()
        })
        .not_sortable(),
        ColumnDef::new("is_active", "Статус", |r: &DeliveryRoute| {
            if r.is_active {
                view! { <span class="badge badge--success">"Действует"</span> }.into_any()
            } else {
                view! { <span class="badge badge--neutral">"Закрыт"</span> }.into_any()
            }
        }),
        ColumnDef::action(move |r: &DeliveryRoute| {
            let for_edit = r.clone();
            let for_delete = r.clone();
            view! {
                <div class="table__row-actions">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| edit_dialog.open(Some(for_edit.clone()))
                        attr:title="Редактировать"
                    >
                        {icon("edit")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| delete_route(for_delete.clone())
                        attr:title="Удалить"
                    >
                        {icon("x")}
                    </Button>
                </div>
            }
            .into_any()
        }),
    ];

    view! {
        <PageFrame page_id="delivery_routes--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Маршруты доставки"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| create_dialog.open_empty()
                    >
                        {icon("plus")}
                        " Новый маршрут"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| bump()
                    >
                        {icon("refresh")}
                        " Обновить"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <DataTable<DeliveryRoute>
                    endpoint="/api/delivery-routes"
                    view_key="delivery_routes"
                    columns=columns
                    reload=Signal::derive(move || reload.get())
                />

                {move || {
                    if create_dialog.is_open().get() {
                        Some(view! {
                            <DeliveryRouteForm
                                route=None
                                on_close=Callback::new(move |_| create_dialog.close())
                                on_saved=Callback::new(move |_| {
                                    create_dialog.close();
                                    bump();
                                })
                            />
                        })
                    } else {
                        None
                    }
                }}

                {move || {
                    if edit_dialog.is_open().get() {
                        edit_dialog.payload().get().map(|route| {
                            view! {
                                <DeliveryRouteForm
                                    route=Some(route)
                                    on_close=Callback::new(move |_| edit_dialog.close())
                                    on_saved=Callback::new(move |_| {
                                        edit_dialog.close();
                                        bump();
                                    })
                                />
                            }
                        })
                    } else {
                        None
                    }
                }}
            </div>
        </PageFrame>
    }
}
