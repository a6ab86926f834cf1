use serde::{Deserialize, Serialize};

use crate::domain::common::{
    lenient, ActivityCounts, Draft, Listing, RequiredField, Resource, ResourceKind, Status,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub designations: u64,
    #[serde(default)]
    pub staffs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentPayload {
    #[serde(default, alias = "items")]
    pub departments: Vec<Department>,
    #[serde(default, alias = "total")]
    pub total_departments: u64,
    #[serde(default, alias = "active")]
    pub active_departments: u64,
    #[serde(default, alias = "inactive")]
    pub inactive_departments: u64,
}

impl From<DepartmentPayload> for Listing<Department> {
    fn from(p: DepartmentPayload) -> Self {
        Self {
            items: p.departments,
            stats: ActivityCounts {
                total: p.total_departments,
                active: p.active_departments,
                inactive: p.inactive_departments,
            },
        }
    }
}

impl Resource for Department {
    type Stats = ActivityCounts;
    type Payload = DepartmentPayload;

    const KIND: ResourceKind = ResourceKind::Department;

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
pub struct DepartmentDraft {
    pub name: String,
    pub info: String,
}

impl Draft for DepartmentDraft {
    type Record = Department;

    fn seed(record: &Department) -> Self {
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
        vec![RequiredField::new("name", "Department name")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ListEnvelope;

    #[test]
    fn test_stats_come_from_response() {
        let body = r#"{"data": {"departments": [], "total_departments": 4,
                        "active_departments": 3, "inactive_departments": 1}}"#;
        let env: ListEnvelope<DepartmentPayload> = serde_json::from_str(body).unwrap();
        let listing: Listing<Department> = env.data.into();
        assert_eq!(
            listing.stats,
            ActivityCounts {
                total: 4,
                active: 3,
                inactive: 1
            }
        );
    }
}
