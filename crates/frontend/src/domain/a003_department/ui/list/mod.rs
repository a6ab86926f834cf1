use contracts::domain::a003_department::aggregate::{Department, DepartmentDraft};
use leptos::prelude::*;

use super::details::{department_detail, department_fields};
use crate::shared::crud::{counted, text_cell, Column, CrudPage};

fn columns() -> Vec<Column<Department>> {
    vec![
        Column::new("Name", |d| text_cell(&d.name)),
        Column::new("Designations", |d| {
            text_cell(&counted(d.designations, "Designation", "Designations"))
        }),
        Column::new("Staffs", |d| text_cell(&counted(d.staffs, "Staff", "Staffs"))),
    ]
}

#[component]
pub fn DepartmentList() -> impl IntoView {
    view! {
        <CrudPage<DepartmentDraft>
            columns=columns()
            fields=department_fields
            detail=department_detail
        />
    }
}
