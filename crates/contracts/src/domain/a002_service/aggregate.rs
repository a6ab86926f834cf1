use serde::{Deserialize, Serialize};

use crate::domain::common::{
    lenient, ActivityCounts, Draft, Listing, OptionSource, RequiredField, Resource, ResourceKind,
    Status,
};

/// A bookable service, belongs to one category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default, deserialize_with = "lenient::opt_string_or_number")]
    pub category_id: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub on_calls: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServicePayload {
    #[serde(default, alias = "items")]
    pub services: Vec<Service>,
    #[serde(default, alias = "total")]
    pub total_services: u64,
    #[serde(default, alias = "active")]
    pub active_services: u64,
    #[serde(default, alias = "inactive")]
    pub inactive_services: u64,
}

impl From<ServicePayload> for Listing<Service> {
    fn from(p: ServicePayload) -> Self {
        Self {
            items: p.services,
            stats: ActivityCounts {
                total: p.total_services,
                active: p.active_services,
                inactive: p.inactive_services,
            },
        }
    }
}

impl Resource for Service {
    type Stats = ActivityCounts;
    type Payload = ServicePayload;

    const KIND: ResourceKind = ResourceKind::Service;

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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub name: String,
    /// Category id
    pub category: String,
    pub info: String,
}

impl Draft for ServiceDraft {
    type Record = Service;

    fn seed(record: &Service) -> Self {
        Self {
            name: record.name.clone(),
            category: record.category_id.clone().unwrap_or_default(),
            info: record.info.clone().unwrap_or_default(),
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "category" => Some(&self.category),
            "info" => Some(&self.info),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> bool {
        match name {
            "name" => self.name = value,
            "category" => self.category = value,
            "info" => self.info = value,
            _ => return false,
        }
        true
    }

    fn required_fields(&self, _editing: bool) -> Vec<RequiredField> {
        vec![
            RequiredField::new("name", "Service name"),
            RequiredField::new("category", "Category"),
        ]
    }

    fn option_sources() -> Vec<OptionSource> {
        vec![OptionSource::root("category", ResourceKind::Category)]
    }
}
