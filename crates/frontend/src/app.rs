use std::sync::Arc;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api::{ApiHandle, HttpResourceClient};
use crate::shared::crud::DeleteConfirmService;
use crate::shared::toast::ToastService;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    let api: ApiHandle = Arc::new(HttpResourceClient::from_env());
    provide_context(api);

    provide_context(ToastService::new());
    provide_context(DeleteConfirmService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
