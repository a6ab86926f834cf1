use contracts::domain::common::RequiredField;
use thiserror::Error;

/// Failures surfaced by the resource client and the form view-models.
///
/// Every variant is recoverable: the user retries by repeating the action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A required draft field is empty; raised before any request is sent.
    #[error("{label} is required")]
    Validation {
        field: &'static str,
        label: &'static str,
    },

    /// Non-success status. `message` is the backend text or the fallback.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// Transport failure. Holds the fallback for the operation.
    #[error("{0}. Please try again.")]
    Network(String),
}

impl ApiError {
    pub fn missing(field: RequiredField) -> Self {
        ApiError::Validation {
            field: field.name,
            label: field.label,
        }
    }

    /// Text shown in the error toast.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
