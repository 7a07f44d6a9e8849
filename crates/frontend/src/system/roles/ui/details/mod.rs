use std::collections::{BTreeMap, HashSet};

use contracts::system::roles::{CreateRoleDto, Permission, Role, SetPermissionDto, UpdateRoleDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;
use crate::system::roles::api;

/// Форма создания/редактирования роли (`role = None` — создание).
#[component]
pub fn RoleForm(
    role: Option<Role>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let editing_id = role.as_ref().map(|r| r.id.clone());
    let title = if editing_id.is_some() {
        "Редактирование роли"
    } else {
        "Новая роль"
    };

    let name = RwSignal::new(role.as_ref().map(|r| r.name.clone()).unwrap_or_default());
    let description = RwSignal::new(
        role.as_ref()
            .and_then(|r| r.description.clone())
            .unwrap_or_default(),
    );
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        if name.get_untracked().trim().is_empty() {
            set_error.set(Some("Укажите название роли".to_string()));
            return;
        }
        set_saving.set(true);
        set_error.set(None);

        let description_val = description.get_untracked();
        let description_opt = if description_val.trim().is_empty() {
            None
        } else {
            Some(description_val)
        };
        let editing_id = editing_id.clone();

        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_role(UpdateRoleDto {
                    id,
                    name: name.get_untracked(),
                    description: description_opt,
                })
                .await,
                None => api::create_role(CreateRoleDto {
                    name: name.get_untracked(),
                    description: description_opt,
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
                        <Label>"Описание"</Label>
                        <Input value=description disabled=Signal::derive(move || saving.get()) />
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

/// Назначение прав роли.
///
/// Переключатель срабатывает оптимистично: чекбокс меняется сразу, запрос
/// уходит следом; при ошибке сервера состояние откатывается.
#[component]
pub fn PermissionsDialog(role: Role, on_close: Callback<()>) -> impl IntoView {
    let role_id = StoredValue::new(role.id.clone());
    let role_name = role.name.clone();

    let granted: RwSignal<HashSet<String>> =
        RwSignal::new(role.permissions.iter().cloned().collect());
    let catalog: RwSignal<Vec<Permission>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_permissions().await {
                Ok(list) => {
                    catalog.set(list);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Не удалось загрузить права: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    });

    let toggle = move |code: String, grant: bool| {
        // оптимистично: сначала локально, потом на сервер
        granted.update(|g| {
            if grant {
                g.insert(code.clone());
            } else {
                g.remove(&code);
            }
        });
        set_error.set(None);

        let dto = SetPermissionDto {
            role_id: role_id.get_value(),
            permission_code: code.clone(),
            granted: grant,
        };
        spawn_local(async move {
            if let Err(e) = api::set_permission(dto).await {
                // откат оптимистичного переключения
                granted.update(|g| {
                    if grant {
                        g.remove(&code);
                    } else {
                        g.insert(code.clone());
                    }
                });
                set_error.set(Some(format!("Право не сохранено: {}", e)));
            }
        });
    };

    // каталог прав группами, в стабильном порядке
    let grouped = Signal::derive(move || {
        let mut groups: BTreeMap<String, Vec<Permission>> = BTreeMap::new();
        for permission in catalog.get() {
            groups
                .entry(permission.group.clone())
                .or_default()
                .push(permission);
        }
        groups
    });

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal modal--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{format!("Права роли: {}", role_name)}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    {move || {
                        if loading.get() {
                            view! { <div class="modal__loading">"Загрузка..."</div> }.into_any()
                        } else {
                            grouped
                                .get()
                                .into_iter()
                                .map(|(group, permissions)| {
                                    view! {
                                        <div class="permission-group">
                                            <div class="permission-group__title">{group}</div>
                                            {permissions
                                                .into_iter()
                                                .map(|permission| {
                                                    let code = permission.code.clone();
                                                    let code_for_checked = permission.code.clone();
                                                    let checked = Signal::derive(move || {
                                                        granted.with(|g| g.contains(&code_for_checked))
                                                    });
                                                    view! {
                                                        <label class="permission-group__item">
                                                            <input
                                                                type="checkbox"
                                                                prop:checked=move || checked.get()
                                                                on:change=move |ev| {
                                                                    let grant = event_target_checked(&ev);
                                                                    toggle(code.clone(), grant);
                                                                }
                                                            />
                                                            <span>{permission.description.clone()}</span>
                                                            <code class="permission-group__code">
                                                                {permission.code.clone()}
                                                            </code>
                                                        </label>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_close.run(())
                    >
                        "Готово"
                    </Button>
                </div>
            </div>
        </div>
    }
}
