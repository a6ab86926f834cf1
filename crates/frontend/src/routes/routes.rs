use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the layout mounts
    ctx.init_router_integration();

    view! { <Shell /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RequireAuth fallback=|| view! { <LoginPage /> }>
            <MainLayout />
        </RequireAuth>
    }
}
