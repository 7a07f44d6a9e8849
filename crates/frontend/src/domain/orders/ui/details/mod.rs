use contracts::domain::order::{Order, OrderStatus, UpdateOrderStatusDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::orders::api;
use crate::shared::format::format_money;
use crate::shared::icons::icon;

/// Смена статуса заказа.
#[component]
pub fn OrderStatusDialog(
    order: Order,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let order_id = StoredValue::new(order.id.clone());
    let number = order.number.clone();
    let consumer_name = order.consumer_name.clone();
    let total = order.total;

    let status_code = RwSignal::new(order.status.code().to_string());
    let comment = RwSignal::new(order.comment.clone().unwrap_or_default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let Some(status) = OrderStatus::from_code(&status_code.get_untracked()) else {
            set_error.set(Some("Неизвестный статус".to_string()));
            return;
        };
        set_saving.set(true);
        set_error.set(None);

        let comment_val = comment.get_untracked();
        let comment_opt = if comment_val.trim().is_empty() {
            None
        } else {
            Some(comment_val)
        };

        spawn_local(async move {
            let dto = UpdateOrderStatusDto {
                id: order_id.get_value(),
                status,
                comment: comment_opt,
            };
            match api::update_order_status(dto).await {
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
                    <h2 class="modal-title">{format!("Заказ {}", number)}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="order-summary">
                        <div>{consumer_name}</div>
                        <div class="amount">{format_money(total)}</div>
                    </div>

                    <div class="form__group">
                        <Label>"Статус"</Label>
                        <select
                            class="form__select"
                            disabled=move || saving.get()
                            on:change=move |ev| status_code.set(event_target_value(&ev))
                            prop:value=move || status_code.get()
                        >
                            {OrderStatus::all()
                                .into_iter()
                                .map(|status| {
                                    let selected = status_code.get_untracked() == status.code();
                                    view! {
                                        <option value={status.code()} selected=selected>
                                            {status.display_name()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Комментарий"</Label>
                        <Input value=comment disabled=Signal::derive(move || saving.get()) />
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
