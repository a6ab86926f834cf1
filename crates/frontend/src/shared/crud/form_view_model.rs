use contracts::domain::common::Draft;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form_state::{FormEffect, FormMode, FormState, OptionRequest};
use super::options::OptionsBoard;
use crate::shared::api::{fetch_choices, use_api, ApiHandle, Attachment};
use crate::shared::toast::{use_toasts, ToastService};

/// Reactive wrapper over `FormState` plus the option lists of its selectors
pub struct FormViewModel<D: Draft> {
    pub state: RwSignal<FormState<D>>,
    pub options: RwSignal<OptionsBoard>,
    attachments: RwSignal<Vec<Attachment>, LocalStorage>,
    api: StoredValue<ApiHandle>,
    toasts: ToastService,
}

impl<D: Draft> Clone for FormViewModel<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Draft> Copy for FormViewModel<D> {}

impl<D: Draft> FormViewModel<D> {
    /// Seeds the draft and starts loading the selectors that can be filled.
    pub fn new(mode: FormMode<D::Record>) -> Self {
        let vm = Self {
            state: RwSignal::new(FormState::new(mode)),
            options: RwSignal::new(OptionsBoard::default()),
            attachments: RwSignal::new_local(Vec::new()),
            api: StoredValue::new(use_api()),
            toasts: use_toasts(),
        };
        for request in vm.state.with_untracked(|s| s.initial_option_requests()) {
            vm.load_options(request);
        }
        vm
    }

    pub fn is_edit(&self) -> bool {
        self.state.with_untracked(|s| s.mode().is_edit())
    }

    pub fn heading(&self) -> String {
        self.state.with_untracked(|s| s.mode().heading())
    }

    pub fn value(&self, field: &'static str) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.value(field)))
    }

    pub fn set(&self, field: &'static str, value: String) {
        let requests = self
            .state
            .try_update(|s| s.change(field, value))
            .unwrap_or_default();
        for request in requests {
            self.load_options(request);
        }
    }

    /// Input handler bound to one field
    pub fn setter(&self, field: &'static str) -> Callback<String> {
        let vm = *self;
        Callback::new(move |value: String| vm.set(field, value))
    }

    /// `(value, label)` pairs for a `Select`, led by an empty placeholder
    pub fn choices(&self, field: &'static str, placeholder: &'static str) -> Signal<Vec<(String, String)>> {
        let options = self.options;
        Signal::derive(move || {
            let mut list = vec![(String::new(), placeholder.to_string())];
            options.with(|board| {
                list.extend(
                    board
                        .choices(field)
                        .iter()
                        .map(|c| (c.value.clone(), c.label.clone())),
                )
            });
            list
        })
    }

    pub fn attach(&self, field: &str, file: Option<web_sys::File>) {
        let field = field.to_string();
        let _ = self.attachments.try_update(|files| {
            files.retain(|a| a.field != field);
            if let Some(file) = file {
                files.push(Attachment { field, file });
            }
        });
    }

    pub fn attachment_name(&self, field: &'static str) -> Signal<Option<String>, LocalStorage> {
        let attachments = self.attachments;
        Signal::derive_local(move || {
            attachments.with(|files| {
                files
                    .iter()
                    .find(|a| a.field == field)
                    .map(|a| a.file.name())
            })
        })
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_submitting()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error().map(str::to_string)))
    }

    /// Validates, sends, and on success calls `on_saved`.
    pub fn submit(&self, on_saved: Callback<()>) {
        if self.state.with_untracked(|s| s.is_submitting()) {
            return;
        }
        let request = match self.state.try_update(|s| s.prepare()) {
            Some(Ok(request)) => request,
            Some(Err(err)) => {
                self.toasts.error(err.user_message());
                return;
            }
            None => return,
        };
        let Some(api) = self.api.try_get_value() else {
            return;
        };
        let files = self.attachments.get_untracked();
        let state = self.state;
        let attachments = self.attachments;
        let toasts = self.toasts;

        spawn_local(async move {
            let kind = request.kind;
            let result = request.dispatch(api.as_ref(), files).await;
            let effect = request.outcome(result);
            if state.try_update(|s| s.apply(&effect)).is_none() {
                log::debug!("{} form closed before the save finished", kind.label());
            }
            match effect {
                FormEffect::Saved { message } => {
                    toasts.success(message);
                    let _ = attachments.try_set(Vec::new());
                    // the owning list still reloads when the form is gone
                    let _ = on_saved.try_run(());
                }
                FormEffect::Failed { message } => {
                    log::error!("Saving {} failed: {}", kind.label(), message);
                    toasts.error(message);
                }
            }
        });
    }

    fn load_options(&self, request: OptionRequest) {
        let options = self.options;
        match request {
            OptionRequest::Clear { field } => {
                let _ = options.try_update(|b| b.clear(field));
            }
            OptionRequest::Fetch {
                field,
                kind,
                filters,
            } => {
                let Some(ticket) = options.try_update(|b| b.begin(field)) else {
                    return;
                };
                let Some(api) = self.api.try_get_value() else {
                    return;
                };
                let toasts = self.toasts;
                spawn_local(async move {
                    match fetch_choices(api.as_ref(), kind, &filters).await {
                        Ok(choices) => {
                            let _ = options.try_update(|b| b.settle(field, ticket, choices));
                        }
                        Err(err) => {
                            log::error!("Loading {} options failed: {}", field, err);
                            let _ = options.try_update(|b| b.fail(field, ticket));
                            toasts.error(err.user_message());
                        }
                    }
                });
            }
        }
    }
}
