use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{ "data": ... }` wrapper around every list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: T,
}

/// `{ "data": record, "message": "..." }` returned by create/update/delete
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationEnvelope {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a non-2xx response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    /// token endpoints report failures under `detail`
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.detail)
            .filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_prefers_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message": "Name taken", "detail": "x"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Name taken"));
    }

    #[test]
    fn test_error_body_blank_is_none() {
        let body: ErrorBody = serde_json::from_str(r#"{"message": "  "}"#).unwrap();
        assert_eq!(body.into_message(), None);
    }

    #[test]
    fn test_mutation_without_message() {
        let env: MutationEnvelope = serde_json::from_str(r#"{"data": {"id": 1}}"#).unwrap();
        assert!(env.message.is_none());
        assert!(env.data.is_some());
    }
}
