use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::render_page;
use leptos::prelude::*;

/// Renders the active page; switching pages remounts it.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-content">
            {move || render_page(ctx.active.get())}
        </div>
    }
}
