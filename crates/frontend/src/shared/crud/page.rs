use contracts::domain::common::{Draft, Resource};
use leptos::prelude::*;

use super::form_state::FormMode;
use super::form_view::{FieldsView, ResourceForm};
use super::list_view_model::ListViewModel;
use super::table::{Column, ResourceTable};
use crate::shared::api::Filters;
use crate::shared::components::ui::Button;
use crate::shared::components::{PageHeader, StatCardRow};
use crate::shared::icons::icon;

/// What the page body shows
#[derive(Debug, Clone, PartialEq)]
pub enum Pane<R> {
    List,
    Form(FormMode<R>),
    Detail(R),
}

/// Lists to reload after a save: the visible one now, the rest when shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfterSave<T> {
    pub refetch: T,
    pub stale: Vec<T>,
}

/// Pane and tab selection of a resource page.
///
/// `T` is the tab type of partitioned pages; simple pages use `()`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState<R, T = ()> {
    pane: Pane<R>,
    tab: T,
}

impl<R: Resource, T: Copy + PartialEq> PageState<R, T> {
    pub fn new(tab: T) -> Self {
        Self {
            pane: Pane::List,
            tab,
        }
    }

    pub fn pane(&self) -> &Pane<R> {
        &self.pane
    }

    pub fn tab(&self) -> T {
        self.tab
    }

    pub fn is_list(&self) -> bool {
        matches!(self.pane, Pane::List)
    }

    pub fn open_create(&mut self) {
        self.pane = Pane::Form(FormMode::Create);
    }

    pub fn open_edit(&mut self, record: R) {
        self.pane = Pane::Form(FormMode::Edit(record));
    }

    pub fn open_detail(&mut self, record: R) {
        self.pane = Pane::Detail(record);
    }

    pub fn close(&mut self) {
        self.pane = Pane::List;
    }

    /// Header "Back". Returns true when a detail pane was left: edits made
    /// inside it can change the counters shown by this page's list.
    pub fn back(&mut self) -> bool {
        let left_detail = matches!(self.pane, Pane::Detail(_));
        self.pane = Pane::List;
        left_detail
    }

    /// Returns true when the tab actually changed. The pane is kept.
    pub fn select_tab(&mut self, tab: T) -> bool {
        if self.tab == tab {
            return false;
        }
        self.tab = tab;
        true
    }

    /// Back to the list after a successful submit.
    pub fn saved(&mut self, tabs: &[T]) -> AfterSave<T> {
        self.pane = Pane::List;
        AfterSave {
            refetch: self.tab,
            stale: tabs.iter().copied().filter(|t| *t != self.tab).collect(),
        }
    }

    pub fn title(&self) -> String {
        match &self.pane {
            Pane::List => R::KIND.plural_title().to_string(),
            Pane::Form(mode) => mode.heading(),
            Pane::Detail(record) => record.title(),
        }
    }
}

/// Renders a record's detail pane
pub type DetailView<R> = fn(R) -> AnyView;

/// List, stats and create/edit form of a single unpartitioned resource
#[component]
pub fn CrudPage<D: Draft>(
    columns: Vec<Column<D::Record>>,
    fields: FieldsView<D>,
    #[prop(optional)] detail: Option<DetailView<D::Record>>,
) -> impl IntoView {
    let kind = <D::Record as Resource>::KIND;
    let list = ListViewModel::<D::Record>::load(Filters::new());
    let page = RwSignal::new(PageState::<D::Record>::new(()));
    let columns = StoredValue::new(columns);

    let on_saved = Callback::new(move |_| {
        if page.try_update(|p| p.saved(&[()])).is_some() {
            list.refetch();
        }
    });
    let on_cancel = Callback::new(move |_| page.update(|p| p.close()));
    let on_edit = Callback::new(move |record: D::Record| page.update(|p| p.open_edit(record)));
    let on_delete = Callback::new(move |record: D::Record| list.remove(record));
    let on_view = detail.map(|_| {
        Callback::new(move |record: D::Record| page.update(|p| p.open_detail(record)))
    });

    let title = Signal::derive(move || page.with(|p| p.title()));

    view! {
        <div class="page">
            <PageHeader title=title>
                {move || if page.with(|p| p.is_list()) {
                    view! {
                        <Button on_click=Callback::new(move |_| page.update(|p| p.open_create()))>
                            {icon("plus")}
                            {format!("Add {}", kind.title())}
                        </Button>
                    }.into_any()
                } else {
                    view! {
                        <Button variant="secondary" on_click=Callback::new(move |_| {
                            if page.try_update(|p| p.back()).unwrap_or(false) {
                                list.refetch();
                            }
                        })>
                            {icon("arrow-left")}
                            "Back"
                        </Button>
                    }.into_any()
                }}
            </PageHeader>

            <StatCardRow cards=list.stat_cards() />

            <div class="page__body">
                {move || match page.with(|p| p.pane().clone()) {
                    Pane::List => view! {
                        <ResourceTable
                            rows=list.items()
                            columns=columns.get_value()
                            on_edit=on_edit
                            on_delete=Some(on_delete)
                            on_view=on_view
                        />
                    }.into_any(),
                    Pane::Form(mode) => view! {
                        <ResourceForm<D> mode=mode fields=fields on_saved=on_saved on_cancel=on_cancel />
                    }.into_any(),
                    Pane::Detail(record) => match detail {
                        Some(render) => render(record),
                        None => view! { <></> }.into_any(),
                    },
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::Category;
    use contracts::domain::a002_service::aggregate::{Service, ServiceDraft};
    use contracts::domain::a006_customer::aggregate::{Customer, CustomerType};
    use contracts::domain::common::ResourceKind;
    use futures::executor::block_on;

    use crate::shared::api::fake::{FakeApi, FakeCall};
    use crate::shared::api::fetch_listing;
    use crate::shared::crud::form_state::{FormEffect, FormState};
    use crate::shared::crud::list_state::{ListState, Settled};

    fn plumbing() -> Category {
        serde_json::from_value(serde_json::json!({"slug": "plumbing", "name": "Plumbing"})).unwrap()
    }

    #[test]
    fn test_create_and_edit_are_distinct_modes() {
        let mut page = PageState::<Category>::new(());
        assert!(page.is_list());
        assert_eq!(page.title(), "Categories");

        page.open_create();
        assert_eq!(page.pane(), &Pane::Form(FormMode::Create));
        assert_eq!(page.title(), "Create Category");

        page.open_edit(plumbing());
        assert_eq!(page.pane(), &Pane::Form(FormMode::Edit(plumbing())));
        assert_eq!(page.title(), "Edit Category");

        page.close();
        assert!(page.is_list());
    }

    #[test]
    fn test_save_refetches_exactly_the_visible_list() {
        let mut page = PageState::<Category>::new(());
        page.open_create();
        let after = page.saved(&[()]);
        assert_eq!(after, AfterSave { refetch: (), stale: vec![] });
        assert!(page.is_list());
    }

    #[test]
    fn test_save_on_one_tab_leaves_other_tab_stale() {
        let tabs = [CustomerType::Enterprise, CustomerType::Individual];
        let mut page = PageState::<Customer, CustomerType>::new(CustomerType::Individual);
        page.open_create();

        let after = page.saved(&tabs);
        assert_eq!(after.refetch, CustomerType::Individual);
        assert_eq!(after.stale, vec![CustomerType::Enterprise]);
    }

    #[test]
    fn test_back_from_detail_asks_for_a_reload() {
        let mut page = PageState::<Category>::new(());
        page.open_detail(plumbing());
        assert_eq!(page.title(), "Plumbing");
        assert!(page.back());
        assert!(page.is_list());

        page.open_edit(plumbing());
        assert!(!page.back());
        assert!(!page.back());
    }

    #[test]
    fn test_tab_switch_keeps_pane() {
        let mut page = PageState::<Customer, CustomerType>::new(CustomerType::Enterprise);
        page.open_create();
        assert!(page.select_tab(CustomerType::Individual));
        assert!(!page.select_tab(CustomerType::Individual));
        assert_eq!(page.pane(), &Pane::Form(FormMode::Create));
    }

    fn reload(api: &FakeApi, list: &mut ListState<Service>) {
        let (ticket, filters) = list.begin(None).unwrap();
        let result = block_on(fetch_listing::<Service>(api, &filters));
        assert!(matches!(list.settle(ticket, result), Settled::Applied));
    }

    #[test]
    fn test_successful_save_lists_exactly_once_more() {
        let api = FakeApi::new();
        let mut list = ListState::<Service>::new(Filters::new());
        reload(&api, &mut list);

        let mut page = PageState::<Service>::new(());
        page.open_create();
        let mut form = FormState::<ServiceDraft>::new(FormMode::Create);
        form.change("name", "Pipe fitting".to_string());
        form.change("category", "2".to_string());
        let request = form.prepare().unwrap();
        let effect = form.settle(block_on(request.dispatch(&api, Vec::new())));
        assert!(matches!(effect, FormEffect::Saved { .. }));

        let after = page.saved(&[()]);
        assert!(after.stale.is_empty());
        reload(&api, &mut list);

        let lists = api
            .calls()
            .into_iter()
            .filter(|c| matches!(c, FakeCall::List(ResourceKind::Service, _)))
            .count();
        assert_eq!(lists, 2);
        assert!(page.is_list());
    }
}
