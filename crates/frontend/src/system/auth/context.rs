use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.access_token.is_some())
    }

    pub fn login(&self, access_token: String, user_info: UserInfo) {
        storage::save_access_token(&access_token);
        self.state.set(AuthState {
            access_token: Some(access_token),
            user_info: Some(user_info),
        });
    }

    pub fn logout(&self) {
        storage::clear_token();
        self.state.set(AuthState::default());
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Auth context provider component
///
/// Восстанавливает сессию из localStorage при монтировании: сохранённый токен
/// проверяется запросом текущего пользователя, битый токен вычищается.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);

    Effect::new(move |_| {
        spawn_local(async move {
            if let Some(access_token) = storage::get_access_token() {
                match api::get_current_user(&access_token).await {
                    Ok(user_info) => {
                        auth.state.set(AuthState {
                            access_token: Some(access_token),
                            user_info: Some(user_info),
                        });
                    }
                    Err(_) => {
                        storage::clear_token();
                    }
                }
            }
        });
    });

    children()
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not provided in context")
}
