use async_trait::async_trait;
use contracts::domain::common::{
    BodyEncoding, Choice, ListEnvelope, Listing, MutationEnvelope, Resource, ResourceKind,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::error::ApiError;

/// Query parameters for a list request (`?department=<id>`, `?type=enterprise`)
pub type Filters = BTreeMap<String, String>;

/// Shared handle provided through context
pub type ApiHandle = Arc<dyn ResourceApi>;

pub fn filter(key: &str, value: impl Into<String>) -> Filters {
    Filters::from([(key.to_string(), value.into())])
}

/// File part of a multipart submit
#[derive(Debug, Clone)]
pub struct Attachment {
    pub field: String,
    pub file: web_sys::File,
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    Json(Value),
    /// Sent as `FormData`; the browser writes the content type and boundary.
    Multipart {
        fields: Vec<(String, String)>,
        files: Vec<Attachment>,
    },
}

impl RequestBody {
    /// Encodes a draft payload. Multipart drops null and empty values.
    pub fn encode(encoding: BodyEncoding, payload: Value, files: Vec<Attachment>) -> Self {
        match encoding {
            BodyEncoding::Json => RequestBody::Json(payload),
            BodyEncoding::Multipart => {
                let fields = match payload {
                    Value::Object(map) => map
                        .into_iter()
                        .filter_map(|(name, value)| {
                            let text = match value {
                                Value::Null => return None,
                                Value::String(s) => s,
                                other => other.to_string(),
                            };
                            (!text.is_empty()).then_some((name, text))
                        })
                        .collect(),
                    _ => Vec::new(),
                };
                RequestBody::Multipart { fields, files }
            }
        }
    }
}

/// What a request was doing, used to pick the fallback error text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Save,
    Delete,
}

impl Operation {
    pub fn fallback(self, kind: ResourceKind) -> String {
        match self {
            Operation::Fetch => kind.fetch_failed_message(),
            Operation::Save => kind.save_failed_message(),
            Operation::Delete => kind.delete_failed_message(),
        }
    }
}

/// Backend CRUD boundary. Every method is authenticated.
#[async_trait(?Send)]
pub trait ResourceApi: Send + Sync {
    /// Raw list body (`{ data: { ... } }`)
    async fn list(&self, kind: ResourceKind, filters: &Filters) -> Result<Value, ApiError>;

    async fn create(
        &self,
        kind: ResourceKind,
        body: RequestBody,
    ) -> Result<MutationEnvelope, ApiError>;

    async fn update(
        &self,
        kind: ResourceKind,
        slug: &str,
        body: RequestBody,
    ) -> Result<MutationEnvelope, ApiError>;

    async fn remove(&self, kind: ResourceKind, slug: &str) -> Result<MutationEnvelope, ApiError>;
}

/// Typed list call: rows and stats from the same response
pub async fn fetch_listing<R: Resource>(
    api: &dyn ResourceApi,
    filters: &Filters,
) -> Result<Listing<R>, ApiError> {
    let body = api.list(R::KIND, filters).await?;
    serde_json::from_value::<ListEnvelope<R::Payload>>(body)
        .map(|envelope| envelope.data.into())
        .map_err(|e| {
            log::error!("Failed to decode {} list: {}", R::KIND.label(), e);
            ApiError::RequestFailed {
                status: 200,
                message: Operation::Fetch.fallback(R::KIND),
            }
        })
}

/// Deletes one record. Returns the message to show the user.
pub async fn delete_record<R: Resource>(api: &dyn ResourceApi, record: &R) -> Result<String, ApiError> {
    let kind = R::KIND;
    let envelope = api.remove(kind, record.slug()).await?;
    Ok(envelope
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Deleted {} successfully", kind.label())))
}

/// Options for a foreign-key selector
pub async fn fetch_choices(
    api: &dyn ResourceApi,
    kind: ResourceKind,
    filters: &Filters,
) -> Result<Vec<Choice>, ApiError> {
    let body = api.list(kind, filters).await?;
    Ok(Choice::from_list_body(kind, &body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::fake::{FakeApi, FakeCall};
    use contracts::domain::a001_category::aggregate::Category;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_fetch_listing_reads_items_and_stats() {
        let api = FakeApi::new();
        api.respond_list(
            ResourceKind::Category,
            json!({"data": {
                "items": [{"slug": "plumbing", "name": "Plumbing", "status": {"id": "active"}}],
                "total": 1, "active": 1, "inactive": 0
            }}),
        );

        let listing = block_on(fetch_listing::<Category>(&api, &Filters::new())).unwrap();
        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.items[0].name, "Plumbing");
        assert_eq!(listing.stats.total, 1);
        assert_eq!(listing.stats.active, 1);
        assert_eq!(listing.stats.inactive, 0);
        assert_eq!(
            api.calls(),
            vec![FakeCall::List(ResourceKind::Category, Filters::new())]
        );
    }

    #[test]
    fn test_undecodable_listing_uses_fetch_fallback() {
        let api = FakeApi::new();
        api.respond_list(ResourceKind::Category, json!({"data": {"items": "nope"}}));

        let err = block_on(fetch_listing::<Category>(&api, &Filters::new())).unwrap_err();
        assert_eq!(
            err,
            ApiError::RequestFailed {
                status: 200,
                message: "Failed to fetch categories".to_string()
            }
        );
    }

    #[test]
    fn test_choices_pass_filters_through() {
        let api = FakeApi::new();
        api.respond_list(
            ResourceKind::Designation,
            json!({"data": {"designations": [{"id": 4, "name": "Plumber"}]}}),
        );

        let filters = filter("department", "2");
        let choices = block_on(fetch_choices(&api, ResourceKind::Designation, &filters)).unwrap();
        assert_eq!(choices, vec![Choice::new("4", "Plumber")]);
        assert_eq!(
            api.calls(),
            vec![FakeCall::List(ResourceKind::Designation, filters)]
        );
    }

    #[test]
    fn test_multipart_drops_blank_values() {
        let body = RequestBody::encode(
            BodyEncoding::Multipart,
            json!({"first_name": "Asha", "email": "", "blood": null, "department": "3"}),
            Vec::new(),
        );
        match body {
            RequestBody::Multipart { mut fields, files } => {
                fields.sort();
                assert_eq!(
                    fields,
                    vec![
                        ("department".to_string(), "3".to_string()),
                        ("first_name".to_string(), "Asha".to_string()),
                    ]
                );
                assert!(files.is_empty());
            }
            RequestBody::Json(_) => panic!("expected multipart"),
        }
    }

    #[test]
    fn test_json_body_is_untouched() {
        let payload = json!({"name": "Plumbing", "info": ""});
        match RequestBody::encode(BodyEncoding::Json, payload.clone(), Vec::new()) {
            RequestBody::Json(value) => assert_eq!(value, payload),
            RequestBody::Multipart { .. } => panic!("expected json"),
        }
    }
}
