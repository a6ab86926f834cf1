use contracts::domain::common::{Resource, Status};
use leptos::prelude::*;

use super::delete_confirm::use_delete_confirm;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;

/// One table column: header text and a cell renderer
pub struct Column<R> {
    pub header: &'static str,
    pub cell: fn(&R) -> AnyView,
}

impl<R> Column<R> {
    pub const fn new(header: &'static str, cell: fn(&R) -> AnyView) -> Self {
        Self { header, cell }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

/// "1 Service", "3 Services"
pub fn counted(count: u64, singular: &str, plural: &str) -> String {
    let noun = if count == 1 { singular } else { plural };
    format!("{} {}", count, noun)
}

/// Text cell, "N/A" when blank
pub fn text_cell(value: &str) -> AnyView {
    let text = if value.trim().is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    };
    view! { <span>{text}</span> }.into_any()
}

pub fn status_cell(status: Option<&Status>) -> AnyView {
    match status {
        Some(status) => {
            let variant = if status.is_active() { "success" } else { "error" };
            let label = status.label().to_string();
            view! { <Badge variant=variant>{label}</Badge> }.into_any()
        }
        None => view! { <Badge>"N/A"</Badge> }.into_any(),
    }
}

/// Rows of `rows` with edit and delete actions. Owns no fetching.
///
/// Delete goes through the confirmation modal; `on_delete` runs only after
/// the user confirms. Kinds without a delete endpoint get no delete button.
#[component]
pub fn ResourceTable<R: Resource>(
    #[prop(into)] rows: Signal<Vec<R>>,
    columns: Vec<Column<R>>,
    on_edit: Callback<R>,
    #[prop(optional_no_strip)] on_delete: Option<Callback<R>>,
    /// Extra "view" action, e.g. opening a department's detail
    #[prop(optional_no_strip)]
    on_view: Option<Callback<R>>,
) -> impl IntoView {
    let confirm = use_delete_confirm();
    let columns = StoredValue::new(columns);
    let deletable = R::KIND.supports_delete() && on_delete.is_some();

    let ask_delete = move |record: R| {
        if let Some(on_delete) = on_delete {
            confirm.show(
                R::KIND.label(),
                Callback::new(move |_| on_delete.run(record.clone())),
            );
        }
    };

    move || {
        let rows = rows.get();
        if rows.is_empty() {
            return view! {
                <div class="table-empty">
                    <p>{format!("No {} available", R::KIND.plural_label())}</p>
                </div>
            }
            .into_any();
        }

        view! {
            <div class="table-wrapper">
                <table class="table">
                    <thead>
                        <tr>
                            <th class="table__cell--index">"No."</th>
                            {columns.with_value(|cols| {
                                cols.iter()
                                    .map(|c| view! { <th>{c.header}</th> })
                                    .collect_view()
                            })}
                            <th class="table__cell--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows.into_iter().enumerate().map(|(index, row)| {
                            let cells = columns.with_value(|cols| {
                                cols.iter()
                                    .map(|c| view! { <td>{(c.cell)(&row)}</td> })
                                    .collect_view()
                            });
                            let view_row = row.clone();
                            let edit_row = row.clone();
                            let delete_row = row;
                            view! {
                                <tr>
                                    <td class="table__cell--index">{index + 1}</td>
                                    {cells}
                                    <td class="table__cell--actions">
                                        {on_view.map(|on_view| view! {
                                            <button
                                                class="button button--ghost button--icon"
                                                title=format!("View {}", R::KIND.label())
                                                on:click=move |_| on_view.run(view_row.clone())
                                            >
                                                {icon("list")}
                                            </button>
                                        })}
                                        <button
                                            class="button button--ghost button--icon"
                                            title=format!("Edit {}", R::KIND.label())
                                            on:click=move |_| on_edit.run(edit_row.clone())
                                        >
                                            {icon("edit")}
                                        </button>
                                        {deletable.then(|| view! {
                                            <button
                                                class="button button--ghost button--icon button--danger"
                                                title=format!("Delete {}", R::KIND.label())
                                                on:click=move |_| ask_delete(delete_row.clone())
                                            >
                                                {icon("delete")}
                                            </button>
                                        })}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counted_pluralises() {
        assert_eq!(counted(1, "Service", "Services"), "1 Service");
        assert_eq!(counted(0, "Service", "Services"), "0 Services");
        assert_eq!(counted(3, "Staff", "Staffs"), "3 Staffs");
    }
}
