use contracts::domain::common::{
    BodyEncoding, Draft, MutationEnvelope, OptionSource, Resource, ResourceKind,
};
use serde_json::Value;

use crate::shared::api::{ApiError, Attachment, Filters, RequestBody, ResourceApi};

/// Create or edit. Editing carries the record the draft was seeded from.
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode<R> {
    Create,
    Edit(R),
}

impl<R: Resource> FormMode<R> {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    pub fn record(&self) -> Option<&R> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(record) => Some(record),
        }
    }

    /// Slug of the backing record; present only when it can be updated
    pub fn slug(&self) -> Option<&str> {
        self.record().map(|r| r.slug()).filter(|s| !s.is_empty())
    }

    pub fn heading(&self) -> String {
        match self {
            FormMode::Create => format!("Create {}", R::KIND.title()),
            FormMode::Edit(_) => format!("Edit {}", R::KIND.title()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update { slug: String },
}

/// A validated submit, ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub kind: ResourceKind,
    pub target: SubmitTarget,
    pub encoding: BodyEncoding,
    pub payload: Value,
}

impl SubmitRequest {
    pub async fn dispatch(
        &self,
        api: &dyn ResourceApi,
        files: Vec<Attachment>,
    ) -> Result<MutationEnvelope, ApiError> {
        let body = RequestBody::encode(self.encoding, self.payload.clone(), files);
        match &self.target {
            SubmitTarget::Create => api.create(self.kind, body).await,
            SubmitTarget::Update { slug } => api.update(self.kind, slug, body).await,
        }
    }

    /// What the user is told about this submit. Needs no form state, so it
    /// still applies when the form closed while the request was in flight.
    pub fn outcome(&self, result: Result<MutationEnvelope, ApiError>) -> FormEffect {
        let updating = matches!(self.target, SubmitTarget::Update { .. });
        FormEffect::from_result(self.kind, updating, result)
    }
}

/// Where a selector should get its options after a change
#[derive(Debug, Clone, PartialEq)]
pub enum OptionRequest {
    Fetch {
        field: &'static str,
        kind: ResourceKind,
        filters: Filters,
    },
    /// Parent is blank: the list is emptied without a request.
    Clear { field: &'static str },
}

impl OptionRequest {
    pub fn field(&self) -> &'static str {
        match self {
            OptionRequest::Fetch { field, .. } | OptionRequest::Clear { field } => field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    Saved { message: String },
    Failed { message: String },
}

impl FormEffect {
    /// Backend message when present, else "Created/Updated <label> successfully"
    pub fn from_result(
        kind: ResourceKind,
        updating: bool,
        result: Result<MutationEnvelope, ApiError>,
    ) -> Self {
        match result {
            Ok(envelope) => {
                let message = envelope
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| {
                        let verb = if updating { "Updated" } else { "Created" };
                        format!("{} {} successfully", verb, kind.label())
                    });
                FormEffect::Saved { message }
            }
            Err(err) => FormEffect::Failed {
                message: err.user_message(),
            },
        }
    }
}

/// Draft, mode and submit status of one form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<D: Draft> {
    mode: FormMode<D::Record>,
    draft: D,
    submitting: bool,
    error: Option<String>,
}

impl<D: Draft> FormState<D> {
    /// Seeds the draft once from the edited record.
    pub fn new(mode: FormMode<D::Record>) -> Self {
        let draft = match &mode {
            FormMode::Create => D::default(),
            FormMode::Edit(record) => D::seed(record),
        };
        Self {
            mode,
            draft,
            submitting: false,
            error: None,
        }
    }

    pub fn mode(&self) -> &FormMode<D::Record> {
        &self.mode
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn value(&self, field: &str) -> String {
        self.draft.field(field).unwrap_or_default().to_string()
    }

    /// Applies an edit and returns the option lists it invalidated.
    pub fn change(&mut self, field: &str, value: String) -> Vec<OptionRequest> {
        self.error = None;
        self.draft
            .apply_change(field, value)
            .iter()
            .map(|source| self.option_request(source))
            .collect()
    }

    pub fn option_request(&self, source: &OptionSource) -> OptionRequest {
        match source.depends_on {
            None => OptionRequest::Fetch {
                field: source.field,
                kind: source.kind,
                filters: Filters::new(),
            },
            Some((parent, query_key)) => {
                let parent_value = self.value(parent);
                if parent_value.trim().is_empty() {
                    OptionRequest::Clear {
                        field: source.field,
                    }
                } else {
                    OptionRequest::Fetch {
                        field: source.field,
                        kind: source.kind,
                        filters: Filters::from([(query_key.to_string(), parent_value)]),
                    }
                }
            }
        }
    }

    /// Option loads needed right after the form opens
    pub fn initial_option_requests(&self) -> Vec<OptionRequest> {
        D::option_sources()
            .iter()
            .map(|source| self.option_request(source))
            .filter(|req| matches!(req, OptionRequest::Fetch { .. }))
            .collect()
    }

    /// Validates and marks the form as submitting.
    ///
    /// A blank required field yields `ApiError::Validation` and nothing is sent.
    pub fn prepare(&mut self) -> Result<SubmitRequest, ApiError> {
        let kind = D::Record::KIND;
        if let Some(field) = self.draft.first_missing(self.mode.is_edit()) {
            let err = ApiError::missing(field);
            self.error = Some(err.user_message());
            return Err(err);
        }
        let payload = self.draft.payload().map_err(|e| {
            log::error!("Failed to encode {} draft: {}", kind.label(), e);
            ApiError::RequestFailed {
                status: 0,
                message: kind.save_failed_message(),
            }
        })?;
        let target = match self.mode.slug() {
            Some(slug) => SubmitTarget::Update {
                slug: slug.to_string(),
            },
            None => SubmitTarget::Create,
        };
        self.submitting = true;
        self.error = None;
        Ok(SubmitRequest {
            kind,
            target,
            encoding: D::ENCODING,
            payload,
        })
    }

    /// Success clears the draft; failure keeps every typed value.
    pub fn settle(&mut self, result: Result<MutationEnvelope, ApiError>) -> FormEffect {
        let effect = FormEffect::from_result(D::Record::KIND, self.mode.slug().is_some(), result);
        self.apply(&effect);
        effect
    }

    pub fn apply(&mut self, effect: &FormEffect) {
        self.submitting = false;
        match effect {
            FormEffect::Saved { .. } => {
                self.draft = D::default();
                self.error = None;
            }
            FormEffect::Failed { message } => self.error = Some(message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::fake::{FakeApi, FakeCall};
    use contracts::domain::a002_service::aggregate::{Service, ServiceDraft};
    use contracts::domain::a005_staff::aggregate::StaffDraft;
    use contracts::domain::a007_on_call::aggregate::{OnCall, OnCallDraft};
    use futures::executor::block_on;
    use serde_json::json;

    fn service() -> Service {
        serde_json::from_value(json!({
            "id": 9, "slug": "pipe-fitting", "name": "Pipe fitting",
            "category_id": 2, "category_name": "Plumbing"
        }))
        .unwrap()
    }

    #[test]
    fn test_blank_required_field_never_reaches_the_network() {
        let api = FakeApi::new();
        let mut form = FormState::<ServiceDraft>::new(FormMode::Create);
        form.change("name", "Pipe fitting".to_string());

        let err = form.prepare().unwrap_err();
        assert_eq!(
            err,
            ApiError::Validation {
                field: "category",
                label: "Category"
            }
        );
        assert!(!form.is_submitting());
        assert_eq!(form.error(), Some("Category is required"));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_create_then_reset_on_success() {
        let api = FakeApi::new();
        let mut form = FormState::<ServiceDraft>::new(FormMode::Create);
        form.change("name", "Pipe fitting".to_string());
        form.change("category", "2".to_string());

        let request = form.prepare().unwrap();
        assert!(form.is_submitting());
        assert_eq!(request.target, SubmitTarget::Create);

        let result = block_on(request.dispatch(&api, Vec::new()));
        let effect = form.settle(result);
        assert_eq!(
            effect,
            FormEffect::Saved {
                message: "Created service successfully".to_string()
            }
        );
        assert_eq!(form.draft(), &ServiceDraft::default());
        assert!(matches!(
            api.calls().as_slice(),
            [FakeCall::Create(ResourceKind::Service, body)] if body["name"] == "Pipe fitting"
        ));
    }

    #[test]
    fn test_save_finishing_after_the_form_closed_still_reports() {
        let api = FakeApi::new();
        let mut form = FormState::<ServiceDraft>::new(FormMode::Create);
        form.change("name", "Pipe fitting".to_string());
        form.change("category", "2".to_string());
        let request = form.prepare().unwrap();
        drop(form);

        let result = block_on(request.dispatch(&api, Vec::new()));
        assert_eq!(
            request.outcome(result),
            FormEffect::Saved {
                message: "Created service successfully".to_string()
            }
        );
        assert_eq!(api.calls().len(), 1);

        let mut edit = FormState::<ServiceDraft>::new(FormMode::Edit(service()));
        let request = edit.prepare().unwrap();
        drop(edit);
        api.respond_message("Service updated");
        let result = block_on(request.dispatch(&api, Vec::new()));
        assert_eq!(
            request.outcome(result),
            FormEffect::Saved {
                message: "Service updated".to_string()
            }
        );
    }

    #[test]
    fn test_edit_updates_by_slug_and_prefers_backend_message() {
        let api = FakeApi::new();
        api.respond_message("Service updated");
        let mut form = FormState::<ServiceDraft>::new(FormMode::Edit(service()));
        assert_eq!(form.value("category"), "2");
        form.change("info", "Fixing leaks".to_string());

        let request = form.prepare().unwrap();
        assert_eq!(
            request.target,
            SubmitTarget::Update {
                slug: "pipe-fitting".to_string()
            }
        );
        let effect = form.settle(block_on(request.dispatch(&api, Vec::new())));
        assert_eq!(
            effect,
            FormEffect::Saved {
                message: "Service updated".to_string()
            }
        );
        assert!(matches!(
            api.calls().as_slice(),
            [FakeCall::Update(ResourceKind::Service, slug, _)] if slug == "pipe-fitting"
        ));
    }

    #[test]
    fn test_failed_submit_keeps_the_draft() {
        let api = FakeApi::new();
        api.fail_with(ApiError::RequestFailed {
            status: 400,
            message: "Service with this name already exists".to_string(),
        });
        let mut form = FormState::<ServiceDraft>::new(FormMode::Create);
        form.change("name", "Pipe fitting".to_string());
        form.change("category", "2".to_string());
        form.change("info", "typed by hand".to_string());
        let typed = form.draft().clone();

        let request = form.prepare().unwrap();
        let effect = form.settle(block_on(request.dispatch(&api, Vec::new())));

        assert_eq!(
            effect,
            FormEffect::Failed {
                message: "Service with this name already exists".to_string()
            }
        );
        assert_eq!(form.draft(), &typed);
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_network_failure_uses_generic_message() {
        let api = FakeApi::new();
        api.fail_with(ApiError::Network("Failed to save service".to_string()));
        let mut form = FormState::<ServiceDraft>::new(FormMode::Edit(service()));

        let request = form.prepare().unwrap();
        let effect = form.settle(block_on(request.dispatch(&api, Vec::new())));
        assert_eq!(
            effect,
            FormEffect::Failed {
                message: "Failed to save service. Please try again.".to_string()
            }
        );
        assert_eq!(form.value("name"), "Pipe fitting");
    }

    #[test]
    fn test_category_change_resets_and_refetches_service() {
        let mut form = FormState::<OnCallDraft>::new(FormMode::Create);
        form.change("category", "1".to_string());
        form.change("service", "11".to_string());

        let requests = form.change("category", "2".to_string());
        assert_eq!(form.value("service"), "");
        assert_eq!(
            requests,
            vec![OptionRequest::Fetch {
                field: "service",
                kind: ResourceKind::Service,
                filters: Filters::from([("category".to_string(), "2".to_string())]),
            }]
        );
    }

    #[test]
    fn test_clearing_parent_clears_child_options_without_fetch() {
        let mut form = FormState::<StaffDraft>::new(FormMode::Create);
        form.change("department", "3".to_string());
        form.change("designation", "8".to_string());

        let requests = form.change("department", String::new());
        assert_eq!(form.value("designation"), "");
        assert_eq!(
            requests,
            vec![OptionRequest::Clear {
                field: "designation"
            }]
        );
    }

    #[test]
    fn test_same_value_changes_nothing() {
        let mut form = FormState::<OnCallDraft>::new(FormMode::Create);
        form.change("category", "1".to_string());
        form.change("service", "11".to_string());

        assert!(form.change("category", "1".to_string()).is_empty());
        assert_eq!(form.value("service"), "11");
    }

    #[test]
    fn test_edit_form_loads_scoped_options_for_seeded_parents() {
        let record: OnCall = serde_json::from_value(json!({
            "id": 5, "slug": "site-a", "site_name": "Site A",
            "type": {"id": "enterprise", "name": "Enterprise"},
            "customer": 4, "category": 1, "service": 11
        }))
        .unwrap();
        let form = FormState::<OnCallDraft>::new(FormMode::Edit(record));
        let fields: Vec<&str> = form
            .initial_option_requests()
            .iter()
            .map(OptionRequest::field)
            .collect();
        assert_eq!(fields, vec!["category", "service", "customer"]);
    }

    #[test]
    fn test_create_form_loads_only_root_options() {
        let form = FormState::<StaffDraft>::new(FormMode::Create);
        let fields: Vec<&str> = form
            .initial_option_requests()
            .iter()
            .map(OptionRequest::field)
            .collect();
        assert_eq!(fields, vec!["department"]);
    }
}
