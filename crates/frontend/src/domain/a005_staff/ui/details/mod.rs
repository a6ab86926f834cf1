use contracts::domain::a005_staff::aggregate::StaffDraft;
use leptos::prelude::*;

use crate::shared::components::ui::{FileInput, Input, Select, Textarea};
use crate::shared::crud::FormViewModel;

pub fn staff_fields(vm: FormViewModel<StaffDraft>) -> AnyView {
    let creating = !vm.is_edit();
    let photo_name = vm.attachment_name("photo");

    view! {
        <Input label="Name" value=vm.value("first_name") on_input=vm.setter("first_name") required=true />
        <Input label="Mobile" value=vm.value("mobile") on_input=vm.setter("mobile") input_type="tel" required=true />
        <Input label="Email" value=vm.value("email") on_input=vm.setter("email") input_type="email" />
        <Select
            label="Department"
            value=vm.value("department")
            options=vm.choices("department", "Select department")
            on_change=vm.setter("department")
            required=true
        />
        <Select
            label="Designation"
            value=vm.value("designation")
            options=vm.choices("designation", "Select designation")
            on_change=vm.setter("designation")
            required=true
        />
        <Input label="Location" value=vm.value("location") on_input=vm.setter("location") />
        <Input label="Aadhar" value=vm.value("aadhar") on_input=vm.setter("aadhar") />
        <Input label="Blood Group" value=vm.value("blood") on_input=vm.setter("blood") />
        <Input label="Emergency Contact" value=vm.value("contact_name") on_input=vm.setter("contact_name") />
        <Input
            label="Emergency Number"
            value=vm.value("contact_number")
            on_input=vm.setter("contact_number")
            input_type="tel"
        />
        <Input label="Relation" value=vm.value("relation") on_input=vm.setter("relation") />
        <Input
            label="Wage"
            value=vm.value("staff_wage")
            on_input=vm.setter("staff_wage")
            input_type="number"
        />
        <Input label="Username" value=vm.value("username") on_input=vm.setter("username") required=creating />
        <Input
            label="Password"
            value=vm.value("password")
            on_input=vm.setter("password")
            input_type="password"
            placeholder=if creating { "" } else { "Leave blank to keep" }
            required=creating
        />
        <Textarea label="Address" value=vm.value("address") on_input=vm.setter("address") rows=3 />
        <FileInput
            label="Photo"
            accept="image/*"
            on_file=Callback::new(move |file| vm.attach("photo", file))
        />
        {move || photo_name.get().map(|name| view! { <span class="form__hint">{name}</span> })}
    }
    .into_any()
}
