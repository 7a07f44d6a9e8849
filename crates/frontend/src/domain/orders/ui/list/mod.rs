use contracts::domain::order::{Order, OrderStatus};
use leptos::prelude::*;
use thaw::*;

use crate::domain::orders::ui::details::OrderStatusDialog;
use crate::shared::data_table::{ColumnDef, DataTable};
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::dialog::DialogState;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

fn status_badge(status: OrderStatus) -> AnyView {
    let class = match status {
        OrderStatus::New => "badge badge--primary",
        OrderStatus::Confirmed => "badge badge--neutral",
        OrderStatus::InDelivery => "badge badge--warning",
        OrderStatus::Delivered => "badge badge--success",
        OrderStatus::Cancelled => "badge badge--error",
    };
    view! { <span class=class>{status.display_name()}</span> }.into_any()
}

#[component]
pub fn OrdersListPage() -> impl IntoView {
    let reload = RwSignal::new(0u64);
    let bump = move || reload.update(|n| *n += 1);

    let status_dialog: DialogState<Order> = DialogState::new();

    let columns = vec![
        ColumnDef::new("number", "Номер", |o: &Order| {
            view! { <span style="font-weight: 500;">{o.number.clone()}</span> }.into_any()
        }),
        ColumnDef::new("created_at", "Создан", |o: &Order| {
            view! { <span>{format_datetime(&o.created_at)}</span> }.into_any()
        }),
        ColumnDef::new("consumer_name", "Абонент", |o: &Order| {
            view! { <span>{o.consumer_name.clone()}</span> }.into_any()
        }),
        ColumnDef::new("route_name", "Маршрут", |o: &Order| {
            view! { <span>{o.route_name.clone().unwrap_or_else(|| "—".to_string())}</span> }
                .into_any()
        })
        .hidden(),
        ColumnDef::new("total", "Сумма", |o: &Order| {
            view! { <span class="amount">{format_money(o.total)}</span> }.into_any()
        }),
        ColumnDef::new("status", "Статус", |o: &Order| status_badge(o.status)),
        ColumnDef::new("delivered_at", "Доставлен", |o: &Order| {
            view! {
                <span>
                    {o.delivered_at
                        .as_deref()
                        .map(format_date)
                        .unwrap_or_else(|| "—".to_string())}
                </span>
            }
            .into_any()
        })
        .hidden(),
        ColumnDef::action(move |o: &Order| {
            let for_status = o.clone();
            view! {
                <div class="table__row-actions">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| status_dialog.open(Some(for_status.clone()))
                        attr:title="Сменить статус"
                    >
                        {icon("edit")}
                    </Button>
                </div>
            }
            .into_any()
        }),
    ];

    view! {
        <PageFrame page_id="orders--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Заказы"</h1>
                </div>
                <div class="page__header-right">
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
                <DataTable<Order>
                    endpoint="/api/orders"
                    view_key="orders"
                    columns=columns
                    page_size_options=vec![25, 50, 100, 200]
                    reload=Signal::derive(move || reload.get())
                />

                {move || {
                    if status_dialog.is_open().get() {
                        status_dialog.payload().get().map(|order| {
                            view! {
                                <OrderStatusDialog
                                    order=order
                                    on_close=Callback::new(move |_| status_dialog.close())
                                    on_saved=Callback::new(move |_| {
                                        status_dialog.close();
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
