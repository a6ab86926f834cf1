use leptos::prelude::*;
use web_sys::HtmlInputElement;

/// Single file picker; reports the chosen file, or `None` when cleared.
#[component]
pub fn FileInput(
    label: &'static str,
    #[prop(optional)] accept: Option<&'static str>,
    on_file: Callback<Option<web_sys::File>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input form__input--file"
                type="file"
                accept=accept.unwrap_or_default()
                on:change=move |ev| {
                    let file = event_target::<HtmlInputElement>(&ev)
                        .files()
                        .and_then(|files| files.get(0));
                    on_file.run(file);
                }
            />
        </div>
    }
}
