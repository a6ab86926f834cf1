use contracts::domain::a002_service::aggregate::ServiceDraft;
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::crud::FormViewModel;

pub fn service_fields(vm: FormViewModel<ServiceDraft>) -> AnyView {
    view! {
        <Input
            label="Name"
            value=vm.value("name")
            on_input=vm.setter("name")
            placeholder="Service name"
            required=true
        />
        <Select
            label="Category"
            value=vm.value("category")
            options=vm.choices("category", "Select category")
            on_change=vm.setter("category")
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
