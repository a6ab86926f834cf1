use serde::{Deserialize, Serialize};

use super::lenient;

/// Backend status tag, e.g. `{ "id": "active", "name": "Active" }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl Status {
    pub fn is_active(&self) -> bool {
        self.id == "active"
    }

    /// Display name, falling back to the tag id when the backend sends no name
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Embedded reference to a related record (`category_data`, `department_data`, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
