use contracts::domain::a007_on_call::aggregate::{OnCall, OnCallDraft};
use contracts::domain::common::NamedRef;
use leptos::prelude::*;

use super::details::on_call_fields;
use crate::shared::crud::{status_cell, text_cell, Column, CrudPage};

fn ref_name(r: Option<&NamedRef>) -> String {
    r.map(|r| r.name.clone()).unwrap_or_default()
}

fn customer_cell(on_call: &OnCall) -> AnyView {
    let name = ref_name(on_call.customer_data.as_ref());
    let contact = on_call.customer_contact();
    view! {
        <div class="cell-stack">
            <span class="cell-stack__main">{name}</span>
            <span class="cell-stack__sub">{contact}</span>
        </div>
    }
    .into_any()
}

fn service_cell(on_call: &OnCall) -> AnyView {
    let service = ref_name(on_call.service_data.as_ref());
    let category = ref_name(on_call.category_data.as_ref());
    view! {
        <div class="cell-stack">
            <span class="cell-stack__main">{service}</span>
            <span class="cell-stack__sub">{category}</span>
        </div>
    }
    .into_any()
}

fn columns() -> Vec<Column<OnCall>> {
    vec![
        Column::new("Site", |o| text_cell(&o.site_name)),
        Column::new("Date", |o| text_cell(&o.display_date())),
        Column::new("Customer", customer_cell),
        Column::new("Service", service_cell),
        Column::new("Status", |o| status_cell(o.status.as_ref())),
    ]
}

#[component]
pub fn OnCallList() -> impl IntoView {
    view! { <CrudPage<OnCallDraft> columns=columns() fields=on_call_fields /> }
}
