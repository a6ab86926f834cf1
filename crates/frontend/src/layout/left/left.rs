use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Sidebar zone. Collapsed on narrow screens unless the menu is open.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div data-zone="left" class="left" class:left--open=move || ctx.menu_open.get()>
            {children()}
        </div>
    }
}
