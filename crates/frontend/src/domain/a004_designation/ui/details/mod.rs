use contracts::domain::a004_designation::aggregate::DesignationDraft;
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::crud::FormViewModel;

pub fn designation_fields(vm: FormViewModel<DesignationDraft>) -> AnyView {
    view! {
        <Input
            label="Name"
            value=vm.value("name")
            on_input=vm.setter("name")
            placeholder="Designation name"
            required=true
        />
        <Select
            label="Department"
            value=vm.value("department")
            options=vm.choices("department", "Select department")
            on_change=vm.setter("department")
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
