use contracts::domain::a005_staff::aggregate::{Staff, StaffDraft};
use contracts::domain::common::NamedRef;
use leptos::prelude::*;

use super::details::staff_fields;
use crate::shared::crud::{status_cell, text_cell, Column, CrudPage};
use crate::shared::icons::icon;

fn placement(staff: &Staff) -> String {
    let name = |r: &Option<NamedRef>| {
        r.as_ref().map(|r| r.name.clone()).unwrap_or_default()
    };
    let parts: Vec<String> = [name(&staff.department_data), name(&staff.designation_data)]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    parts.join(" / ")
}

fn name_cell(staff: &Staff) -> AnyView {
    let name = staff.user_data.first_name.clone();
    let placement = placement(staff);
    view! {
        <div class="cell-stack">
            <span class="cell-stack__main">{name}</span>
            <span class="cell-stack__sub">{placement}</span>
        </div>
    }
    .into_any()
}

fn photo_cell(staff: &Staff) -> AnyView {
    match staff.user_data.photo.clone().filter(|p| !p.is_empty()) {
        Some(src) => {
            let alt = staff.user_data.first_name.clone();
            view! { <img class="avatar" src=src alt=alt /> }.into_any()
        }
        None => view! { <span class="avatar avatar--empty">{icon("user")}</span> }.into_any(),
    }
}

fn contact_cell(staff: &Staff) -> AnyView {
    let mobile = staff.user_data.mobile.clone();
    let email = staff.user_data.email.clone();
    view! {
        <div class="cell-stack">
            <span class="cell-stack__main">{mobile}</span>
            <span class="cell-stack__sub">{email}</span>
        </div>
    }
    .into_any()
}

pub fn columns() -> Vec<Column<Staff>> {
    vec![
        Column::new("Name", name_cell),
        Column::new("Photo", photo_cell),
        Column::new("Contact", contact_cell),
        Column::new("Status", |s| status_cell(s.status.as_ref())),
    ]
}

/// Compact columns for the department detail tab
pub fn department_columns() -> Vec<Column<Staff>> {
    vec![
        Column::new("Name", |s| text_cell(&s.user_data.first_name)),
        Column::new("Designation", |s| {
            text_cell(
                s.designation_data
                    .as_ref()
                    .map(|d| d.name.as_str())
                    .unwrap_or_default(),
            )
        }),
        Column::new("Contact", contact_cell),
        Column::new("Status", |s| status_cell(s.status.as_ref())),
    ]
}

#[component]
pub fn StaffList() -> impl IntoView {
    view! { <CrudPage<StaffDraft> columns=columns() fields=staff_fields /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_skips_missing_parts() {
        let staff: Staff = serde_json::from_value(serde_json::json!({
            "id": 3,
            "slug": "ravi",
            "user_data": {"first_name": "Ravi", "mobile": "555", "email": ""},
            "designation_data": {"id": 2, "name": "Electrician"}
        }))
        .unwrap();
        assert_eq!(placement(&staff), "Electrician");
    }
}
