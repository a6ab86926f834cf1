use leptos::prelude::*;

use super::context::use_auth;

/// Shows `children` once a token is present, `fallback` until then
#[component]
pub fn RequireAuth(#[prop(into)] fallback: ViewFn, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated())
            fallback=fallback
        >
            {children()}
        </Show>
    }
}
