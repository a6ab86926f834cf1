use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

/// How long a toast stays up
pub const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible notifications, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let Some(id) = self.queue.try_update(|q| q.push(kind, message)) else {
            return;
        };
        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            let _ = queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self.queue.try_update(|q| q.dismiss(id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let (class, icon_name) = match toast.kind {
                        ToastKind::Success => ("toast toast--success", "check-circle"),
                        ToastKind::Error => ("toast toast--error", "x-circle"),
                    };
                    view! {
                        <div class=class role="status">
                            {icon(icon_name)}
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" on:click=move |_| toasts.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keeps_order_and_dismisses_by_id() {
        let mut queue = ToastQueue::default();
        let saved = queue.push(ToastKind::Success, "Created category successfully");
        let failed = queue.push(ToastKind::Error, "Failed to fetch services");

        assert_eq!(queue.toasts().len(), 2);
        assert_eq!(queue.toasts()[0].id, saved);

        assert!(queue.dismiss(saved));
        assert!(!queue.dismiss(saved));
        assert_eq!(queue.toasts()[0].id, failed);
        assert_eq!(queue.toasts()[0].kind, ToastKind::Error);
    }

    #[test]
    fn test_dismiss_after_disposal_is_ignored() {
        let service = ToastService::new();
        service.queue.dispose();
        service.dismiss(1);
        assert!(service.queue.try_with_untracked(|q| q.toasts().len()).is_none());
    }
}
