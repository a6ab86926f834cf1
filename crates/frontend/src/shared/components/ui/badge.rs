use leptos::prelude::*;

/// Pill label: "success", "warning", "error", or neutral
#[component]
pub fn Badge(#[prop(optional)] variant: Option<&'static str>, children: Children) -> impl IntoView {
    let variant_class = match variant.unwrap_or("neutral") {
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! { <span class=format!("badge {}", variant_class)>{children()}</span> }
}
