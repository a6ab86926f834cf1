use contracts::domain::a006_customer::aggregate::{CustomerDraft, CustomerType};
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Select};
use crate::shared::crud::FormViewModel;

/// `(value, label)` options of a customer-type selector
pub fn customer_type_options(placeholder: &'static str) -> Signal<Vec<(String, String)>> {
    Signal::derive(move || {
        std::iter::once((String::new(), placeholder.to_string()))
            .chain(
                CustomerType::ALL
                    .into_iter()
                    .map(|t| (t.as_str().to_string(), t.title().to_string())),
            )
            .collect()
    })
}

pub fn customer_fields(vm: FormViewModel<CustomerDraft>) -> AnyView {
    view! {
        <Input
            label="Name"
            value=vm.value("name")
            on_input=vm.setter("name")
            placeholder="Customer name"
            required=true
        />
        <Select
            label="Type"
            value=vm.value("type")
            options=customer_type_options("Select type")
            on_change=vm.setter("type")
            required=true
        />
        <Input
            label="Mobile"
            value=vm.value("mobile")
            on_input=vm.setter("mobile")
            input_type="tel"
            required=true
        />
        <Input label="Email" value=vm.value("email") on_input=vm.setter("email") input_type="email" />
        <Input label="Location" value=vm.value("location") on_input=vm.setter("location") />
    }
    .into_any()
}
