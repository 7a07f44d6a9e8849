use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::products::api;
use crate::domain::products::ui::details::ProductForm;
use crate::shared::data_table::{ColumnDef, DataTable};
use crate::shared::dialog::DialogState;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[component]
pub fn ProductsListPage() -> impl IntoView {
    let reload = RwSignal::new(0u64);
    let bump = move || reload.update(|n| *n += 1);

    let create_dialog: DialogState<()> = DialogState::new();
    let edit_dialog: DialogState<Product> = DialogState::new();

    let delete_product = move |product: Product| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Удалить товар «{}»?", product.name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_product(&product.id).await {
                Ok(_) => bump(),
                Err(e) => log::error!("products: удаление не удалось: {e}"),
            }
        });
    };

    let columns = vec![
        ColumnDef::new("sku", "Артикул", |p: &Product| {
            view! { <span style="font-weight: 500;">{p.sku.clone()}</span> }.into_any()
        }),
        ColumnDef::new("name", "Название", |p: &Product| {
            view! { <span>{p.name.clone()}</span> }.into_any()
        }),
        ColumnDef::new("unit", "Ед. изм.", |p: &Product| {
            view! { <span>{p.unit.clone()}</span> }.into_any()
        }),
        ColumnDef::new("price", "Цена", |p: &Product| {
            view! { <span class="amount">{format_money(p.price)}</span> }.into_any()
        }),
        ColumnDef::new("is_active", "Статус", |p: &Product| {
            if p.is_active {
                view! { <span class="badge badge--success">"В продаже"</span> }.into_any()
            } else {
                view! { <span class="badge badge--neutral">"Снят"</span> }.into_any()
            }
        }),
        ColumnDef::action(move |p: &Product| {
            let for_edit = p.clone();
            let for_delete = p.clone();
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
                        on_click=move |_| delete_product(for_delete.clone())
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
        <PageFrame page_id="products--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Товары"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| create_dialog.open_empty()
                    >
                        {icon("plus")}
                        " Новый товар"
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
                <DataTable<Product>
                    endpoint="/api/products"
                    view_key="products"
                    columns=columns
                    reload=Signal::derive(move || reload.get())
                />

                {move || {
                    if create_dialog.is_open().get() {
                        Some(view! {
                            <ProductForm
                                product=None
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
                        edit_dialog.payload().get().map(|product| {
                            view! {
                                <ProductForm
                                    product=Some(product)
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
