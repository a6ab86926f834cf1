use leptos::prelude::*;

/// Button with a variant class ("primary" by default, "secondary", "ghost", "danger")
#[component]
pub fn Button(
    #[prop(optional)] variant: Option<&'static str>,
    /// "button" unless given
    #[prop(optional)]
    button_type: Option<&'static str>,
    #[prop(optional)] disabled: Option<Signal<bool>>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = match variant.unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        "danger" => "button--danger",
        _ => "button--primary",
    };

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=format!("button {}", variant_class)
            disabled=move || disabled.map(|d| d.get()).unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
