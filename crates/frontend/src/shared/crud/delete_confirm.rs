use leptos::prelude::*;

struct PendingDelete<A> {
    item_type: String,
    action: A,
}

/// Single-slot confirmation gate.
///
/// At most one action waits for confirmation; showing a new one drops the
/// previous action unrun.
pub struct DeleteGate<A> {
    pending: Option<PendingDelete<A>>,
}

impl<A> Default for DeleteGate<A> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<A> DeleteGate<A> {
    /// Opens the gate and returns the action it replaced, if any.
    pub fn show(&mut self, item_type: impl Into<String>, action: A) -> Option<A> {
        self.pending
            .replace(PendingDelete {
                item_type: item_type.into(),
                action,
            })
            .map(|p| p.action)
    }

    /// Closes the gate and hands back the action to run.
    pub fn confirm(&mut self) -> Option<A> {
        self.pending.take().map(|p| p.action)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn item_type(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.item_type.as_str())
    }
}

/// App-wide delete confirmation, rendered by `DeleteConfirmModal`
#[derive(Clone, Copy)]
pub struct DeleteConfirmService {
    gate: RwSignal<DeleteGate<Callback<()>>>,
}

impl DeleteConfirmService {
    pub fn new() -> Self {
        Self {
            gate: RwSignal::new(DeleteGate::default()),
        }
    }

    pub fn show(&self, item_type: &str, on_confirm: Callback<()>) {
        let replaced = self
            .gate
            .try_update(|gate| gate.show(item_type, on_confirm).is_some())
            .unwrap_or(false);
        if replaced {
            log::debug!("delete confirmation for {} replaced a pending one", item_type);
        }
    }

    pub fn confirm(&self) {
        if let Some(action) = self.gate.try_update(|gate| gate.confirm()).flatten() {
            action.run(());
        }
    }

    pub fn cancel(&self) {
        let _ = self.gate.try_update(|gate| gate.cancel());
    }

    pub fn is_open(&self) -> bool {
        self.gate.with(|gate| gate.is_open())
    }

    pub fn is_open_untracked(&self) -> bool {
        self.gate.with_untracked(|gate| gate.is_open())
    }

    pub fn item_type(&self) -> String {
        self.gate
            .with(|gate| gate.item_type().map(str::to_string))
            .unwrap_or_default()
    }
}

pub fn use_delete_confirm() -> DeleteConfirmService {
    use_context::<DeleteConfirmService>().expect("DeleteConfirmService not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::{delete_record, ResourceApi};
    use crate::shared::api::fake::{FakeApi, FakeCall};
    use contracts::domain::a001_category::aggregate::Category;
    use contracts::domain::common::ResourceKind;
    use futures::executor::block_on;

    #[test]
    fn test_confirm_hands_back_action_once() {
        let mut gate = DeleteGate::default();
        assert!(gate.show("category", "delete plumbing").is_none());
        assert!(gate.is_open());
        assert_eq!(gate.item_type(), Some("category"));

        assert_eq!(gate.confirm(), Some("delete plumbing"));
        assert!(!gate.is_open());
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn test_cancel_runs_nothing() {
        let mut gate = DeleteGate::default();
        gate.show("service", 1);
        gate.cancel();
        assert!(!gate.is_open());
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn test_second_show_replaces_pending_action() {
        let mut gate = DeleteGate::default();
        gate.show("category", "first");
        assert_eq!(gate.show("customer", "second"), Some("first"));
        assert_eq!(gate.item_type(), Some("customer"));
        assert_eq!(gate.confirm(), Some("second"));
    }

    #[test]
    fn test_delete_reaches_the_api_only_after_confirm() {
        let api = FakeApi::new();
        let plumbing: Category =
            serde_json::from_value(serde_json::json!({"slug": "plumbing", "name": "Plumbing"}))
                .unwrap();
        let removes = |api: &FakeApi| {
            api.calls()
                .into_iter()
                .filter(|c| matches!(c, FakeCall::Remove(..)))
                .count()
        };

        let mut gate = DeleteGate::default();
        gate.show("category", plumbing);
        assert_eq!(removes(&api), 0);

        let record = gate.confirm().unwrap();
        let message = block_on(delete_record(&api, &record)).unwrap();
        assert_eq!(message, "Deleted category successfully");
        assert_eq!(
            api.calls(),
            vec![FakeCall::Remove(ResourceKind::Category, "plumbing".to_string())]
        );

        // a second confirm has nothing left to run
        assert!(gate.confirm().is_none());
        assert_eq!(removes(&api), 1);
    }

    #[test]
    fn test_cancelled_delete_never_reaches_the_api() {
        let api = FakeApi::new();
        let mut gate = DeleteGate::default();
        gate.show("category", "plumbing");
        gate.cancel();
        if let Some(slug) = gate.confirm() {
            let _ = block_on(api.remove(ResourceKind::Category, slug));
        }
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_cancel_after_disposal_is_ignored() {
        let service = DeleteConfirmService::new();
        service.gate.dispose();
        service.cancel();
    }
}
