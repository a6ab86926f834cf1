//! In-memory `ResourceApi` for tests.

use async_trait::async_trait;
use contracts::domain::common::{MutationEnvelope, ResourceKind};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Mutex;

use super::client::{Filters, RequestBody, ResourceApi};
use super::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum FakeCall {
    List(ResourceKind, Filters),
    Create(ResourceKind, Value),
    Update(ResourceKind, String, Value),
    Remove(ResourceKind, String),
}

#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<FakeCall>>,
    lists: Mutex<HashMap<ResourceKind, Value>>,
    failure: Mutex<Option<ApiError>>,
    message: Mutex<Option<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_list(&self, kind: ResourceKind, body: Value) {
        self.lists.lock().unwrap().insert(kind, body);
    }

    /// Every following call fails with `err`
    pub fn fail_with(&self, err: ApiError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    pub fn respond_message(&self, message: &str) {
        *self.message.lock().unwrap() = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<FakeCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: FakeCall) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn envelope(&self, data: Option<Value>) -> MutationEnvelope {
        MutationEnvelope {
            data,
            message: self.message.lock().unwrap().clone(),
        }
    }
}

fn body_value(body: RequestBody) -> Value {
    match body {
        RequestBody::Json(value) => value,
        RequestBody::Multipart { fields, .. } => Value::Object(
            fields
                .into_iter()
                .map(|(name, value)| (name, Value::String(value)))
                .collect::<Map<_, _>>(),
        ),
    }
}

#[async_trait(?Send)]
impl ResourceApi for FakeApi {
    async fn list(&self, kind: ResourceKind, filters: &Filters) -> Result<Value, ApiError> {
        self.record(FakeCall::List(kind, filters.clone()))?;
        Ok(self
            .lists
            .lock()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| serde_json::json!({"data": {}})))
    }

    async fn create(
        &self,
        kind: ResourceKind,
        body: RequestBody,
    ) -> Result<MutationEnvelope, ApiError> {
        let value = body_value(body);
        self.record(FakeCall::Create(kind, value.clone()))?;
        Ok(self.envelope(Some(value)))
    }

    async fn update(
        &self,
        kind: ResourceKind,
        slug: &str,
        body: RequestBody,
    ) -> Result<MutationEnvelope, ApiError> {
        let value = body_value(body);
        self.record(FakeCall::Update(kind, slug.to_string(), value.clone()))?;
        Ok(self.envelope(Some(value)))
    }

    async fn remove(&self, kind: ResourceKind, slug: &str) -> Result<MutationEnvelope, ApiError> {
        self.record(FakeCall::Remove(kind, slug.to_string()))?;
        Ok(self.envelope(None))
    }
}
