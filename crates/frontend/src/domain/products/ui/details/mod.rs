use contracts::domain::product::{CreateProductDto, Product, UpdateProductDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::products::api;
use crate::shared::icons::icon;

const UNITS: [&str; 3] = ["шт", "л", "кг"];

/// Форма товара (`product = None` — создание).
#[component]
pub fn ProductForm(
    product: Option<Product>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let editing_id = product.as_ref().map(|p| p.id.clone());
    let title = if editing_id.is_some() {
        "Редактирование товара"
    } else {
        "Новый товар"
    };

    let name = RwSignal::new(product.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let sku = RwSignal::new(product.as_ref().map(|p| p.sku.clone()).unwrap_or_default());
    let unit = RwSignal::new(
        product
            .as_ref()
            .map(|p| p.unit.clone())
            .unwrap_or_else(|| UNITS[0].to_string()),
    );
    let price_text = RwSignal::new(
        product
            .as_ref()
            .map(|p| p.price.to_string())
            .unwrap_or_default(),
    );
    let is_active = RwSignal::new(product.as_ref().map(|p| p.is_active).unwrap_or(true));
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        if name.get_untracked().trim().is_empty() {
            set_error.set(Some("Укажите название товара".to_string()));
            return;
        }
        let Ok(price) = price_text.get_untracked().trim().replace(',', ".").parse::<f64>() else {
            set_error.set(Some("Цена должна быть числом".to_string()));
            return;
        };
        set_saving.set(true);
        set_error.set(None);

        let editing_id = editing_id.clone();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_product(UpdateProductDto {
                    id,
                    name: name.get_untracked(),
                    sku: sku.get_untracked(),
                    unit: unit.get_untracked(),
                    price,
                    is_active: is_active.get_untracked(),
                })
                .await,
                None => api::create_product(CreateProductDto {
                    name: name.get_untracked(),
                    sku: sku.get_untracked(),
                    unit: unit.get_untracked(),
                    price,
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
                        <Label>"Артикул"</Label>
                        <Input value=sku disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Единица измерения"</Label>
                        <select
                            class="form__select"
                            disabled=move || saving.get()
                            on:change=move |ev| unit.set(event_target_value(&ev))
                            prop:value=move || unit.get()
                        >
                            {UNITS
                                .iter()
                                .map(|&u| {
                                    let selected = unit.get_untracked() == u;
                                    view! {
                                        <option value=u selected=selected>{u}</option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Цена, ₽"</Label>
                        <Input value=price_text disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Checkbox checked=is_active label="В продаже" />
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
