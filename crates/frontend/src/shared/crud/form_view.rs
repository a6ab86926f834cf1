use contracts::domain::common::Draft;
use leptos::prelude::*;

use super::form_state::FormMode;
use super::form_view_model::FormViewModel;
use crate::shared::components::ui::Button;

/// Renders the inputs of one draft type
pub type FieldsView<D> = fn(FormViewModel<D>) -> AnyView;

/// Create/edit pane shared by every resource: heading, fields, Cancel and Save.
#[component]
pub fn ResourceForm<D: Draft>(
    mode: FormMode<D::Record>,
    fields: FieldsView<D>,
    /// Runs after a successful save, once the draft is cleared
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = FormViewModel::<D>::new(mode);
    let submitting = vm.is_submitting();
    let error = vm.error();
    let submit_label = if vm.is_edit() { "Update" } else { "Save" };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit(on_saved);
    };

    view! {
        <form class="form resource-form" on:submit=on_submit novalidate=true>
            <h2 class="form__title">{vm.heading()}</h2>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
            <div class="form__grid">
                {fields(vm)}
            </div>
            <div class="form__actions">
                <Button variant="secondary" disabled=submitting on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancel"
                </Button>
                <Button button_type="submit" disabled=submitting>
                    {move || if submitting.get() { "Saving..." } else { submit_label }}
                </Button>
            </div>
        </form>
    }
}
