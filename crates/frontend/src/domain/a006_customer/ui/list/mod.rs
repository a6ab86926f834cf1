use contracts::domain::a006_customer::aggregate::{Customer, CustomerDraft, CustomerType};
use contracts::domain::common::{ResourceKind, StatCards};
use leptos::prelude::*;

use super::details::customer_fields;
use crate::shared::api::filter;
use crate::shared::components::ui::Button;
use crate::shared::components::{PageHeader, StatCardRow};
use crate::shared::crud::{text_cell, Column, ListViewModel, PageState, Pane, ResourceForm, ResourceTable};
use crate::shared::icons::icon;

fn columns() -> Vec<Column<Customer>> {
    vec![
        Column::new("Name", |c| text_cell(&c.name)),
        Column::new("Type", |c| text_cell(c.kind.label())),
        Column::new("Mobile", |c| text_cell(&c.mobile)),
        Column::new("Email", |c| text_cell(c.email.as_deref().unwrap_or_default())),
        Column::new("Location", |c| text_cell(c.location.as_deref().unwrap_or_default())),
    ]
}

/// Customers split into enterprise and individual tabs, one list each
#[component]
pub fn CustomerList() -> impl IntoView {
    let enterprise = ListViewModel::<Customer>::load(filter("type", CustomerType::Enterprise.as_str()));
    let individual = ListViewModel::<Customer>::new(filter("type", CustomerType::Individual.as_str()));
    let list_for = move |tab: CustomerType| match tab {
        CustomerType::Enterprise => enterprise,
        CustomerType::Individual => individual,
    };

    let page = RwSignal::new(PageState::<Customer, CustomerType>::new(CustomerType::Enterprise));
    let active = Signal::derive(move || page.with(|p| p.tab()));

    let select = move |tab: CustomerType| {
        if page.try_update(|p| p.select_tab(tab)).unwrap_or(false) {
            list_for(tab).ensure_fresh();
        }
    };

    let on_saved = Callback::new(move |_| {
        if let Some(after) = page.try_update(|p| p.saved(&CustomerType::ALL)) {
            list_for(after.refetch).refetch();
            for tab in after.stale {
                list_for(tab).mark_stale();
            }
        }
    });
    let on_cancel = Callback::new(move |_| page.update(|p| p.close()));
    let on_edit = Callback::new(move |record: Customer| page.update(|p| p.open_edit(record)));
    let on_delete = Callback::new(move |record: Customer| list_for(active.get_untracked()).remove(record));

    let rows = Signal::derive(move || list_for(active.get()).state.with(|s| s.items().to_vec()));
    let cards = Signal::derive(move || {
        list_for(active.get())
            .state
            .with(|s| s.stats().cards(ResourceKind::Customer))
    });
    let title = Signal::derive(move || page.with(|p| p.title()));

    view! {
        <div class="page">
            <PageHeader title=title>
                {move || if page.with(|p| p.is_list()) {
                    view! {
                        <Button on_click=Callback::new(move |_| page.update(|p| p.open_create()))>
                            {icon("plus")}
                            "Add Customer"
                        </Button>
                    }.into_any()
                } else {
                    view! {
                        <Button variant="secondary" on_click=Callback::new(move |_| page.update(|p| p.close()))>
                            {icon("arrow-left")}
                            "Back"
                        </Button>
                    }.into_any()
                }}
            </PageHeader>

            <StatCardRow cards=cards />

            <div class="tabs">
                {CustomerType::ALL.into_iter().map(|tab| view! {
                    <button
                        class="tabs__item"
                        class:tabs__item--active=move || active.get() == tab
                        on:click=move |_| select(tab)
                    >
                        {tab.title()}
                    </button>
                }).collect_view()}
            </div>

            <div class="page__body">
                {move || match page.with(|p| p.pane().clone()) {
                    Pane::Form(mode) => view! {
                        <ResourceForm<CustomerDraft>
                            mode=mode
                            fields=customer_fields
                            on_saved=on_saved
                            on_cancel=on_cancel
                        />
                    }.into_any(),
                    _ => view! {
                        <ResourceTable
                            rows=rows
                            columns=columns()
                            on_edit=on_edit
                            on_delete=Some(on_delete)
                        />
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
