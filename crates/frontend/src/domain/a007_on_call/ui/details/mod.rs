use contracts::domain::a007_on_call::aggregate::{OnCallDraft, EXISTING_CUSTOMER, NEW_CUSTOMER};
use leptos::prelude::*;

use crate::domain::a006_customer::ui::details::customer_type_options;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::crud::FormViewModel;

fn customer_source_options() -> Signal<Vec<(String, String)>> {
    Signal::derive(|| {
        vec![
            (EXISTING_CUSTOMER.to_string(), "Existing customer".to_string()),
            (NEW_CUSTOMER.to_string(), "New customer".to_string()),
        ]
    })
}

/// Work type and customer are fixed once the job exists.
pub fn on_call_fields(vm: FormViewModel<OnCallDraft>) -> AnyView {
    let editing = vm.is_edit();
    let customer_type = vm.value("customer_type");

    let customer_block = move || {
        if !editing && customer_type.get() == NEW_CUSTOMER {
            view! {
                <Input label="Customer Name" value=vm.value("name") on_input=vm.setter("name") required=true />
                <Input
                    label="Mobile"
                    value=vm.value("mobile")
                    on_input=vm.setter("mobile")
                    input_type="tel"
                    required=true
                />
                <Input
                    label="Email"
                    value=vm.value("email")
                    on_input=vm.setter("email")
                    input_type="email"
                    required=true
                />
                <Input label="Location" value=vm.value("location") on_input=vm.setter("location") required=true />
            }
            .into_any()
        } else {
            view! {
                <Select
                    label="Customer"
                    value=vm.value("customer")
                    options=vm.choices("customer", "Select customer")
                    on_change=vm.setter("customer")
                    required={!editing}
                    disabled=editing
                />
            }
            .into_any()
        }
    };

    view! {
        {(!editing).then(|| view! {
            <Select
                label="Customer"
                value=customer_type
                options=customer_source_options()
                on_change=vm.setter("customer_type")
            />
        })}
        <Select
            label="Work Type"
            value=vm.value("type")
            options=customer_type_options("Select work type")
            on_change=vm.setter("type")
            required={!editing}
            disabled=editing
        />
        {customer_block}
        <Input
            label="Site Name"
            value=vm.value("site_name")
            on_input=vm.setter("site_name")
            required=true
        />
        <Select
            label="Category"
            value=vm.value("category")
            options=vm.choices("category", "Select category")
            on_change=vm.setter("category")
            required=true
        />
        <Select
            label="Service"
            value=vm.value("service")
            options=vm.choices("service", "Select service")
            on_change=vm.setter("service")
            required=true
        />
        <Textarea
            label="Info"
            value=vm.value("info")
            on_input=vm.setter("info")
            placeholder="Job details"
        />
    }
    .into_any()
}
