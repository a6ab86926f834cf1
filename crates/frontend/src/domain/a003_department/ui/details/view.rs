use contracts::domain::a003_department::aggregate::Department;
use contracts::domain::a004_designation::aggregate::{Designation, DesignationDraft};
use contracts::domain::a005_staff::aggregate::{Staff, StaffDraft};
use contracts::domain::common::{Draft, Resource, StatCard};
use leptos::prelude::*;

use crate::domain::a004_designation::ui::{details::designation_fields, list as designation_list};
use crate::domain::a005_staff::ui::{details::staff_fields, list as staff_list};
use crate::shared::api::filter;
use crate::shared::components::StatCardRow;
use crate::shared::crud::{
    Column, FieldsView, ListViewModel, PageState, Pane, ResourceForm, ResourceTable,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentTab {
    Designations,
    Staffs,
}

impl DepartmentTab {
    pub const ALL: [DepartmentTab; 2] = [DepartmentTab::Designations, DepartmentTab::Staffs];

    pub fn label(self) -> &'static str {
        match self {
            DepartmentTab::Designations => "Designations",
            DepartmentTab::Staffs => "Staffs",
        }
    }

    /// CSS `display` of this tab's pane. Hidden panes stay mounted so their
    /// open form and draft survive a tab switch.
    pub fn display(self, active: DepartmentTab) -> &'static str {
        if self == active {
            ""
        } else {
            "none"
        }
    }
}

pub fn department_detail(department: Department) -> AnyView {
    view! { <DepartmentDetail department=department /> }.into_any()
}

/// Designations and staffs of one department, each tab with its own list
#[component]
pub fn DepartmentDetail(department: Department) -> impl IntoView {
    let scope = filter("department", department.id());
    let designations = ListViewModel::<Designation>::load(scope.clone());
    let staffs = ListViewModel::<Staff>::load(scope);
    let tab = RwSignal::new(DepartmentTab::Designations);
    let designation_page = RwSignal::new(PageState::<Designation>::new(()));
    let staff_page = RwSignal::new(PageState::<Staff>::new(()));

    let designation_stats = designations.stats();
    let staff_stats = staffs.stats();
    let cards = Signal::derive(move || {
        vec![
            StatCard::new("Total Designations", "briefcase", designation_stats.get().total),
            StatCard::new("Total Staffs", "id-card", staff_stats.get().total),
        ]
    });

    let select = move |next: DepartmentTab| {
        if tab.get_untracked() == next {
            return;
        }
        tab.set(next);
        match next {
            DepartmentTab::Designations => designations.ensure_fresh(),
            DepartmentTab::Staffs => staffs.ensure_fresh(),
        }
    };

    view! {
        <div class="department-detail">
            <StatCardRow cards=cards />
            <div class="tabs">
                {DepartmentTab::ALL.into_iter().map(|t| view! {
                    <button
                        class="tabs__item"
                        class:tabs__item--active=move || tab.get() == t
                        on:click=move |_| select(t)
                    >
                        {t.label()}
                    </button>
                }).collect_view()}
            </div>
            <div style:display=move || DepartmentTab::Designations.display(tab.get())>
                <ScopedList<DesignationDraft>
                    list=designations
                    page=designation_page
                    columns=designation_list::columns()
                    fields=designation_fields
                />
            </div>
            <div style:display=move || DepartmentTab::Staffs.display(tab.get())>
                <ScopedList<StaffDraft>
                    list=staffs
                    page=staff_page
                    columns=staff_list::department_columns()
                    fields=staff_fields
                />
            </div>
        </div>
    }
}

/// A filtered list that can edit and delete in place
#[component]
fn ScopedList<D: Draft>(
    list: ListViewModel<D::Record>,
    page: RwSignal<PageState<D::Record>>,
    columns: Vec<Column<D::Record>>,
    fields: FieldsView<D>,
) -> impl IntoView {
    let columns = StoredValue::new(columns);

    let on_edit = Callback::new(move |record: D::Record| page.update(|p| p.open_edit(record)));
    let on_delete = Callback::new(move |record: D::Record| list.remove(record));
    let on_cancel = Callback::new(move |_| page.update(|p| p.close()));
    let on_saved = Callback::new(move |_| {
        if page.try_update(|p| p.saved(&[()])).is_some() {
            list.refetch();
        }
    });

    move || match page.with(|p| p.pane().clone()) {
        Pane::Form(mode) => view! {
            <ResourceForm<D> mode=mode fields=fields on_saved=on_saved on_cancel=on_cancel />
        }
        .into_any(),
        _ => view! {
            <ResourceTable
                rows=list.items()
                columns=columns.get_value()
                on_edit=on_edit
                on_delete=Some(on_delete)
            />
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_the_active_tab_is_displayed() {
        for active in DepartmentTab::ALL {
            let shown: Vec<_> = DepartmentTab::ALL
                .into_iter()
                .filter(|t| t.display(active).is_empty())
                .collect();
            assert_eq!(shown, vec![active]);
        }
        assert_eq!(DepartmentTab::Staffs.display(DepartmentTab::Designations), "none");
    }
}
