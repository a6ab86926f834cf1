use async_trait::async_trait;
use contracts::domain::common::{ErrorBody, MutationEnvelope, ResourceKind};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use super::client::{Attachment, Filters, Operation, RequestBody, ResourceApi};
use super::error::ApiError;
use crate::shared::api_utils::api_base;
use crate::system::auth::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Whether the bearer token from the `token` cookie is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Bearer,
    /// Only the token endpoints go out without credentials.
    Anonymous,
}

/// `ResourceApi` over `fetch` (gloo-net)
#[derive(Debug, Clone)]
pub struct HttpResourceClient {
    base_url: String,
}

impl HttpResourceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(api_base())
    }

    fn url(&self, path: &str, filters: Option<&Filters>) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if let Some(query) = filters.and_then(encode_filters) {
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    /// POST a JSON body outside the resource catalogue (token endpoints)
    pub async fn post_json<T, R>(
        &self,
        path: &str,
        body: &T,
        auth: AuthMode,
        fallback: &str,
    ) -> Result<R, ApiError>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let payload = serde_json::to_value(body).map_err(|e| {
            log::error!("Failed to serialize request for {}: {}", path, e);
            ApiError::Network(fallback.to_string())
        })?;
        let url = self.url(path, None);
        let value = self
            .send(Method::Post, &url, Some(RequestBody::Json(payload)), auth, fallback)
            .await?;
        serde_json::from_value(value).map_err(|e| {
            log::error!("Unexpected response from {}: {}", path, e);
            ApiError::RequestFailed {
                status: 200,
                message: fallback.to_string(),
            }
        })
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<RequestBody>,
        auth: AuthMode,
        fallback: &str,
    ) -> Result<Value, ApiError> {
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };
        let builder = authorize(builder.header("Accept", "application/json"), auth);

        let network = |reason: String| {
            log::error!("{:?} {} failed: {}", method, url, reason);
            ApiError::Network(fallback.to_string())
        };

        let request = match body {
            None => builder.build(),
            Some(RequestBody::Json(value)) => builder.json(&value),
            Some(RequestBody::Multipart { fields, files }) => {
                let form = form_data(&fields, &files)
                    .map_err(|e| network(format!("form data: {:?}", e)))?;
                builder.body(form)
            }
        }
        .map_err(|e| network(e.to_string()))?;

        let response = request.send().await.map_err(|e| network(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| network(e.to_string()))?;

        let result = interpret(status, response.ok(), &text, fallback);
        if let Err(err) = &result {
            log::error!("{:?} {} -> {}: {}", method, url, status, err);
        }
        result
    }
}

fn authorize(builder: RequestBuilder, auth: AuthMode) -> RequestBuilder {
    match (auth, storage::get_access_token()) {
        (AuthMode::Bearer, Some(token)) => {
            builder.header("Authorization", &format!("Bearer {}", token))
        }
        _ => builder,
    }
}

/// No explicit content type: `fetch` derives the multipart boundary from the body.
fn form_data(fields: &[(String, String)], files: &[Attachment]) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    for (name, value) in fields {
        form.append_with_str(name, value)?;
    }
    for attachment in files {
        form.append_with_blob_and_filename(
            &attachment.field,
            &attachment.file,
            &attachment.file.name(),
        )?;
    }
    Ok(form)
}

/// `None` when no filter has a value
fn encode_filters(filters: &Filters) -> Option<String> {
    let present: Filters = filters
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    if present.is_empty() {
        return None;
    }
    serde_qs::to_string(&present).ok()
}

/// Maps a finished response to the body value or the error to show.
fn interpret(status: u16, ok: bool, text: &str, fallback: &str) -> Result<Value, ApiError> {
    if !ok {
        let message = serde_json::from_str::<ErrorBody>(text)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| fallback.to_string());
        return Err(ApiError::RequestFailed { status, message });
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|_| ApiError::RequestFailed {
        status,
        message: fallback.to_string(),
    })
}

fn mutation(value: Value) -> MutationEnvelope {
    serde_json::from_value(value).unwrap_or_default()
}

#[async_trait(?Send)]
impl ResourceApi for HttpResourceClient {
    async fn list(&self, kind: ResourceKind, filters: &Filters) -> Result<Value, ApiError> {
        let url = self.url(kind.list_path(), Some(filters));
        self.send(
            Method::Get,
            &url,
            None,
            AuthMode::Bearer,
            &Operation::Fetch.fallback(kind),
        )
        .await
    }

    async fn create(
        &self,
        kind: ResourceKind,
        body: RequestBody,
    ) -> Result<MutationEnvelope, ApiError> {
        let url = self.url(kind.list_path(), None);
        let fallback = Operation::Save.fallback(kind);
        self.send(Method::Post, &url, Some(body), AuthMode::Bearer, &fallback)
            .await
            .map(mutation)
    }

    async fn update(
        &self,
        kind: ResourceKind,
        slug: &str,
        body: RequestBody,
    ) -> Result<MutationEnvelope, ApiError> {
        let url = self.url(&kind.detail_path(&urlencoding::encode(slug)), None);
        let fallback = Operation::Save.fallback(kind);
        self.send(Method::Put, &url, Some(body), AuthMode::Bearer, &fallback)
            .await
            .map(mutation)
    }

    async fn remove(&self, kind: ResourceKind, slug: &str) -> Result<MutationEnvelope, ApiError> {
        let url = self.url(&kind.detail_path(&urlencoding::encode(slug)), None);
        let fallback = Operation::Delete.fallback(kind);
        self.send(Method::Delete, &url, None, AuthMode::Bearer, &fallback)
            .await
            .map(mutation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::client::filter;

    #[test]
    fn test_backend_message_is_used_verbatim() {
        let err = interpret(
            400,
            false,
            r#"{"message": "Service with this name already exists"}"#,
            "Failed to save service",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ApiError::RequestFailed {
                status: 400,
                message: "Service with this name already exists".to_string()
            }
        );
    }

    #[test]
    fn test_non_json_error_uses_fallback() {
        let err = interpret(502, false, "<html>Bad Gateway</html>", "Failed to delete category")
            .unwrap_err();
        assert_eq!(err.user_message(), "Failed to delete category");
    }

    #[test]
    fn test_empty_success_body_is_null() {
        assert_eq!(interpret(204, true, "", "x").unwrap(), Value::Null);
    }

    #[test]
    fn test_filters_skip_empty_values() {
        let mut filters = Filters::new();
        assert_eq!(encode_filters(&filters), None);

        filters.insert("type".to_string(), "enterprise".to_string());
        filters.insert("department".to_string(), String::new());
        assert_eq!(encode_filters(&filters).as_deref(), Some("type=enterprise"));
    }

    #[test]
    fn test_urls() {
        let client = HttpResourceClient::new("http://localhost:8000/api/");
        assert_eq!(
            client.url(ResourceKind::Service.list_path(), Some(&filter("category", "7"))),
            "http://localhost:8000/api/service/services/?category=7"
        );
        assert_eq!(
            client.url(
                &ResourceKind::OnCall.detail_path(&urlencoding::encode("site a")),
                None
            ),
            "http://localhost:8000/api/customers/on-call/site%20a/"
        );
    }
}
