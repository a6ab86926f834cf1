use contracts::domain::a002_service::aggregate::{Service, ServiceDraft};
use leptos::prelude::*;

use super::details::service_fields;
use crate::shared::crud::{counted, status_cell, text_cell, Column, CrudPage};

fn columns() -> Vec<Column<Service>> {
    vec![
        Column::new("Name", |s| text_cell(&s.name)),
        Column::new("Category", |s| {
            text_cell(s.category_name.as_deref().unwrap_or_default())
        }),
        Column::new("On Calls", |s| {
            text_cell(&counted(s.on_calls, "On Call", "On Calls"))
        }),
        Column::new("Status", |s| status_cell(s.status.as_ref())),
    ]
}

#[component]
pub fn ServiceList() -> impl IntoView {
    view! { <CrudPage<ServiceDraft> columns=columns() fields=service_fields /> }
}
