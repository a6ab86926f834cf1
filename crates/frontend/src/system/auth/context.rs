use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api::ApiError;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        access_token: storage::get_access_token(),
    });

    // Only the refresh cookie survived: trade it for a new access token
    if auth_state.with_untracked(|s| !s.is_authenticated()) {
        if let Some(refresh) = storage::get_refresh_token() {
            spawn_local(async move {
                match api::refresh_token(refresh).await {
                    Ok(response) => {
                        storage::save_access_token(&response.access);
                        if let Some(rotated) = response.refresh.as_deref() {
                            storage::save_refresh_token(rotated);
                        }
                        set_auth_state.set(AuthState {
                            access_token: Some(response.access),
                        });
                    }
                    Err(e) => {
                        log::debug!("Token refresh failed: {}", e);
                        storage::clear_tokens();
                    }
                }
            });
        }
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Logs in, stores both tokens and flips the app to the signed-in shell.
pub async fn do_login(
    username: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let tokens = api::login(username, password).await?;

    storage::save_access_token(&tokens.access);
    storage::save_refresh_token(&tokens.refresh);

    set_auth_state.set(AuthState {
        access_token: Some(tokens.access),
    });

    Ok(())
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
