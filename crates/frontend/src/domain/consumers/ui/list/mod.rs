use contracts::domain::consumer::Consumer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::consumers::api;
use crate::domain::consumers::ui::details::ConsumerForm;
use crate::shared::data_table::{ColumnDef, DataTable};
use crate::shared::date_utils::format_date;
use crate::shared::dialog::DialogState;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[component]
pub fn ConsumersListPage() -> impl IntoView {
    let reload = RwSignal::new(0u64);
    let bump = move || reload.update(|n| *n += 1);

    let create_dialog: DialogState<()> = DialogState::new();
    let edit_dialog: DialogState<Consumer> = DialogState::new();

    let delete_consumer = move |consumer: Consumer| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!(
                    "Удалить абонента «{}» (л/с {})?",
                    consumer.name, consumer.account_no
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_consumer(&consumer.id).await {
                Ok(_) => bump(),
                Err(e) => log::error!("consumers: удаление не удалось: {e}"),
            }
        });
    };

    let columns = vec![
        ColumnDef::new("account_no", "Лицевой счёт", |c: &Consumer| {
            view! { <span style="font-weight: 500;">{c.account_no.clone()}</span> }.into_any()
        }),
        ColumnDef::new("name", "Абонент", |c: &Consumer| {
            view! { <span>{c.name.clone()}</span> }.into_any()
        }),
        ColumnDef::new("phone", "Телефон", |c: &Consumer| {
            view! { <span>{c.phone.clone().unwrap_or_else(|| "—".to_string())}</span> }.into_any()
        })
        .hidden(),
        ColumnDef::new("address", "Адрес", |c: &Consumer| {
            view! { <span>{c.address.clone()}</span> }.into_any()
        }),
        ColumnDef::new("route_name", "Маршрут", |c: &Consumer| {
            view! { <span>{c.route_name.clone().unwrap_or_else(|| "—".to_string())}</span> }
                .into_any()
        }),
        ColumnDef::new("balance", "Баланс", |c: &Consumer| {
            let class = if c.balance < 0.0 {
                "amount amount--negative"
            } else {
                "amount"
            };
            view! { <span class=class>{format_money(c.balance)}</span> }.into_any()
        }),
        ColumnDef::new("is_active", "Статус", |c: &Consumer| {
            if c.is_active {
                view! { <span class="badge badge--success">"Активен"</span> }.into_any()
            } else {
                view! { <span class="badge badge--neutral">"Отключён"</span> }.into_any()
            }
        }),
        ColumnDef::new("created_at", "Создан", |c: &Consumer| {
            view! { <span>{format_date(&c.created_at)}</span> }.into_any()
        })
        .hidden(),
        ColumnDef::action(move |c: &Consumer| {
            let for_edit = c.clone();
            let for_delete = c.clone();
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
                        on_click=move |_| delete_consumer(for_delete.clone())
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
        <PageFrame page_id="consumers--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Абоненты"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| create_dialog.open_empty()
                    >
                        {icon("plus")}
                        " Новый абонент"
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
                <DataTable<Consumer>
                    endpoint="/api/consumers"
                    view_key="consumers"
                    columns=columns
                    reload=Signal::derive(move || reload.get())
                />

                {move || {
                    if create_dialog.is_open().get() {
                        Some(view! {
                            <ConsumerForm
                                consumer=None
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
                        edit_dialog.payload().get().map(|consumer| {
                            view! {
                                <ConsumerForm
                                    consumer=Some(consumer)
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
