use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::data_table::{ColumnDef, DataTable};
use crate::shared::date_utils::format_date;
use crate::shared::dialog::DialogState;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::roles::api;
use crate::system::roles::ui::details::{PermissionsDialog, RoleForm};

#[component]
pub fn RolesListPage() -> impl IntoView {
    let reload = RwSignal::new(0u64);
    let bump = move || reload.update(|n| *n += 1);

    let create_dialog: DialogState<()> = DialogState::new();
    let edit_dialog: DialogState<Role> = DialogState::new();
    let perms_dialog: DialogState<Role> = DialogState::new();

    let delete_role = move |role: Role| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Удалить роль «{}»?", role.name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_role(&role.id).await {
                Ok(_) => bump(),
                Err(e) => log::error!("roles: удаление не удалось: {e}"),
            }
        });
    };

    let columns = vec![
        ColumnDef::new("name", "Название", |r: &Role| {
            view! { <span style="font-weight: 500;">{r.name.clone()}</span> }.into_any()
        }),
        ColumnDef::new("description", "Описание", |r: &Role| {
            view! { <span>{r.description.clone().unwrap_or_default()}</span> }.into_any()
        }),
        ColumnDef::new("users_count", "Пользователи", |r: &Role| {
            view! { <span>{r.users_count.to_string()}</span> }.into_any()
        }),
        ColumnDef::new("permissions", "Права", |r: &Role| {
            view! { <span class="badge badge--neutral">{r.permissions.len().to_string()}</span> }
                .into_any()
        })
        .not_sortable(),
        ColumnDef::new("created_at", "Создана", |r: &Role| {
            view! { <span>{format_date(&r.created_at)}</span> }.into_any()
        })
        .hidden(),
        ColumnDef::action(move |r: &Role| {
            let for_edit = r.clone();
            let for_perms = r.clone();
            let for_delete = r.clone();
            view! {
                <div class="table__row-actions">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| perms_dialog.open(Some(for_perms.clone()))
                        attr:title="Права"
                    >
                        {icon("roles")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| edit_dialog.open(Some(for_edit.clone()))
                        attr:title="Редактировать"
                    >
                        {icon("edit")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| delete_role(for_delete.clone())
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
        <PageFrame page_id="roles--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Роли и права"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| create_dialog.open_empty()
                    >
                        {icon("plus")}
                        " Новая роль"
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
                <DataTable<Role>
                    endpoint="/api/system/roles"
                    view_key="roles"
                    columns=columns
                    show_filter_panel=false
                    show_export=false
                    reload=Signal::derive(move || reload.get())
                />

                {move || {
                    if create_dialog.is_open().get() {
                        Some(view! {
                            <RoleForm
                                role=None
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
                        edit_dialog.payload().get().map(|role| {
                            view! {
                                <RoleForm
                                    role=Some(role)
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

                {move || {
                    if perms_dialog.is_open().get() {
                        perms_dialog.payload().get().map(|role| {
                            view! {
                                <PermissionsDialog
                                    role=role
                                    on_close=Callback::new(move |_| {
                                        perms_dialog.close();
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
