use serde::{Deserialize, Serialize};

use crate::domain::common::{
    lenient, ActivityCounts, Draft, Listing, RequiredField, Resource, ResourceKind, Status,
};

// ============================================================================
// Record
// ============================================================================

/// Service category (plumbing, electrical, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    /// Number of services in the category
    #[serde(default)]
    pub services: u64,
}

/// `data` object of `GET /service/categories/`
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryPayload {
    #[serde(default, alias = "items")]
    pub categories: Vec<Category>,
    #[serde(default, alias = "total")]
    pub total_categories: u64,
    #[serde(default, alias = "active")]
    pub active_categories: u64,
    #[serde(default, alias = "inactive")]
    pub inactive_categories: u64,
}

impl From<CategoryPayload> for Listing<Category> {
    fn from(p: CategoryPayload) -> Self {
        Self {
            items: p.categories,
            stats: ActivityCounts {
                total: p.total_categories,
                active: p.active_categories,
                inactive: p.inactive_categories,
            },
        }
    }
}

impl Resource for Category {
    type Stats = ActivityCounts;
    type Payload = CategoryPayload;

    const KIND: ResourceKind = ResourceKind::Category;

    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

// ============================================================================
// Draft
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub info: String,
}

impl Draft for CategoryDraft {
    type Record = Category;

    fn seed(record: &Category) -> Self {
        Self {
            name: record.name.clone(),
            info: record.info.clone().unwrap_or_default(),
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "info" => Some(&self.info),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> bool {
        match name {
            "name" => self.name = value,
            "info" => self.info = value,
            _ => return false,
        }
        true
    }

    fn required_fields(&self, _editing: bool) -> Vec<RequiredField> {
        vec![RequiredField::new("name", "Category name")]
    }
}
