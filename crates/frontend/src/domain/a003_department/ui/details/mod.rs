mod view;

pub use view::{department_detail, DepartmentDetail, DepartmentTab};

use contracts::domain::a003_department::aggregate::DepartmentDraft;
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Textarea};
use crate::shared::crud::FormViewModel;

pub fn department_fields(vm: FormViewModel<DepartmentDraft>) -> AnyView {
    view! {
        <Input
            label="Name"
            value=vm.value("name")
            on_input=vm.setter("name")
            placeholder="Department name"
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
