use leptos::prelude::*;

#[component]
pub fn Textarea(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    view! {
        <div class="form__group form__group--wide">
            <label class="form__label">{label}</label>
            <textarea
                class="form__textarea"
                placeholder=placeholder.unwrap_or_default()
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
