use contracts::domain::a001_category::aggregate::CategoryDraft;
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Textarea};
use crate::shared::crud::FormViewModel;

pub fn category_fields(vm: FormViewModel<CategoryDraft>) -> AnyView {
    view! {
        <Input
            label="Name"
            value=vm.value("name")
            on_input=vm.setter("name")
            placeholder="Category name"
            required=true
        />
        <Textarea
            label="Info"
            value=vm.value("info")
            on_input=vm.setter("info")
            placeholder="Additional details"
        />
    }
    .into_any()
}
