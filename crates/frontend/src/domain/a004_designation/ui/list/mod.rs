use contracts::domain::a004_designation::aggregate::{Designation, DesignationDraft};
use leptos::prelude::*;

use super::details::designation_fields;
use crate::shared::crud::{counted, status_cell, text_cell, Column, CrudPage};

pub fn columns() -> Vec<Column<Designation>> {
    vec![
        Column::new("Name", |d| text_cell(&d.name)),
        Column::new("Department", |d| {
            text_cell(d.department_name.as_deref().unwrap_or_default())
        }),
        Column::new("Staffs", |d| text_cell(&counted(d.staffs, "Staff", "Staffs"))),
        Column::new("Status", |d| status_cell(d.status.as_ref())),
    ]
}

#[component]
pub fn DesignationList() -> impl IntoView {
    view! { <CrudPage<DesignationDraft> columns=columns() fields=designation_fields /> }
}
