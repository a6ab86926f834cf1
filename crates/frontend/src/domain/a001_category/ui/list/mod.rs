use contracts::domain::a001_category::aggregate::{Category, CategoryDraft};
use leptos::prelude::*;

use super::details::category_fields;
use crate::shared::crud::{counted, status_cell, text_cell, Column, CrudPage};

fn columns() -> Vec<Column<Category>> {
    vec![
        Column::new("Name", |c| text_cell(&c.name)),
        Column::new("Services", |c| {
            text_cell(&counted(c.services, "Service", "Services"))
        }),
        Column::new("Status", |c| status_cell(c.status.as_ref())),
    ]
}

#[component]
pub fn CategoryList() -> impl IntoView {
    view! { <CrudPage<CategoryDraft> columns=columns() fields=category_fields /> }
}
