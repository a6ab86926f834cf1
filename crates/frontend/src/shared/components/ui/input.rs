use leptos::prelude::*;

/// Labelled text input bound to one draft field
#[component]
pub fn Input(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    /// "text" unless given
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                class="form__input"
                type=input_type.unwrap_or("text")
                prop:value=move || value.get()
                placeholder=placeholder.unwrap_or_default()
                required=required
                disabled=disabled
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
