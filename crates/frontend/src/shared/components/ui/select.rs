use leptos::prelude::*;

/// Labelled selector. `options` are `(value, label)` pairs.
#[component]
pub fn Select(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    on_change: Callback<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <select
                class="form__select"
                required=required
                disabled=disabled
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <For
                    each=move || options.get()
                    key=|(val, label)| (val.clone(), label.clone())
                    children=move |(val, label)| {
                        let current = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == current>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
