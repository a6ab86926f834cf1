use contracts::domain::common::{Resource, StatCard, StatCards};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::marker::PhantomData;

use super::list_state::{ListState, Settled};
use crate::shared::api::{delete_record, fetch_listing, use_api, ApiHandle, Filters, Operation};
use crate::shared::toast::{use_toasts, ToastService};

/// Reactive owner of one list.
///
/// Responses that arrive after a newer fetch started, or after the owning
/// component unmounted, are dropped.
pub struct ListViewModel<R: Resource> {
    pub state: RwSignal<ListState<R>>,
    api: StoredValue<ApiHandle>,
    toasts: ToastService,
    _marker: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ListViewModel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ListViewModel<R> {}

impl<R: Resource> ListViewModel<R> {
    /// Creates the list without fetching.
    pub fn new(filters: Filters) -> Self {
        let state = RwSignal::new(ListState::new(filters));
        on_cleanup(move || {
            let _ = state.try_update(|s| s.close());
        });
        Self {
            state,
            api: StoredValue::new(use_api()),
            toasts: use_toasts(),
            _marker: PhantomData,
        }
    }

    /// `new` followed by the first fetch
    pub fn load(filters: Filters) -> Self {
        let vm = Self::new(filters);
        vm.refetch();
        vm
    }

    pub fn refetch(&self) {
        self.fetch(None);
    }

    pub fn set_filters(&self, filters: Filters) {
        self.fetch(Some(filters));
    }

    /// Fetches only if never loaded or marked stale.
    pub fn ensure_fresh(&self) {
        if self.state.with_untracked(|s| s.needs_load()) {
            self.refetch();
        }
    }

    pub fn mark_stale(&self) {
        let _ = self.state.try_update(|s| s.mark_stale());
    }

    fn fetch(&self, filters: Option<Filters>) {
        let Some((ticket, filters)) = self.state.try_update(|s| s.begin(filters)).flatten() else {
            return;
        };
        let Some(api) = self.api.try_get_value() else {
            return;
        };
        let state = self.state;
        let toasts = self.toasts;

        spawn_local(async move {
            let result = fetch_listing::<R>(api.as_ref(), &filters).await;
            match state.try_update(|s| s.settle(ticket, result)) {
                Some(Settled::Applied) => {}
                Some(Settled::Failed(err)) => {
                    log::error!("Fetching {} failed: {}", R::KIND.plural_label(), err);
                    toasts.error(err.user_message());
                }
                Some(Settled::Superseded) => {
                    log::debug!("Discarding superseded {} response", R::KIND.label());
                }
                None => {
                    log::debug!("{} list unmounted, response dropped", R::KIND.label());
                }
            }
        });
    }

    /// Deletes `record` and reloads. Call only after confirmation.
    pub fn remove(&self, record: R) {
        let Some(api) = self.api.try_get_value() else {
            return;
        };
        let toasts = self.toasts;
        let vm = *self;

        spawn_local(async move {
            let kind = R::KIND;
            match delete_record(api.as_ref(), &record).await {
                Ok(message) => {
                    toasts.success(message);
                    vm.refetch();
                }
                Err(err) => {
                    log::error!(
                        "{} {} failed: {}",
                        Operation::Delete.fallback(kind),
                        record.slug(),
                        err
                    );
                    toasts.error(err.user_message());
                }
            }
        });
    }

    pub fn items(&self) -> Signal<Vec<R>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.items().to_vec()))
    }

    pub fn stats(&self) -> Signal<R::Stats> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.stats().clone()))
    }

    pub fn stat_cards(&self) -> Signal<Vec<StatCard>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.stats().cards(R::KIND)))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::fake::FakeApi;
    use contracts::domain::a001_category::aggregate::Category;
    use std::sync::Arc;

    fn view_model() -> ListViewModel<Category> {
        let api: ApiHandle = Arc::new(FakeApi::new());
        ListViewModel {
            state: RwSignal::new(ListState::new(Filters::new())),
            api: StoredValue::new(api),
            toasts: ToastService::new(),
            _marker: PhantomData,
        }
    }

    #[test]
    fn test_mark_stale_after_unmount_is_ignored() {
        let vm = view_model();
        vm.mark_stale();
        assert!(vm.state.with_untracked(|s| s.needs_load()));

        vm.state.dispose();
        vm.mark_stale();
        assert!(vm.state.try_with_untracked(|s| s.needs_load()).is_none());
    }
}
