//! Top bar: menu toggle, title of the open page and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (_, set_auth_state) = use_auth();

    let toggle_menu = move |_| ctx.toggle_menu();
    let logout = move |_| do_logout(set_auth_state);
    let is_menu_open = move || ctx.menu_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn top-header__menu"
                    on:click=toggle_menu
                    title=move || if is_menu_open() { "Hide menu" } else { "Show menu" }
                >
                    {move || if is_menu_open() { icon("x") } else { icon("menu") }}
                </button>
                <span class="top-header__title">"Admin Dashboard"</span>
                <span class="top-header__page">{move || ctx.active.get().label()}</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
