use serde::{Deserialize, Serialize};

use crate::domain::common::{
    lenient, ActivityCounts, Draft, Listing, OptionSource, RequiredField, Resource, ResourceKind,
    Status,
};

/// Job title inside a department
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Designation {
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default, deserialize_with = "lenient::opt_string_or_number")]
    pub department_id: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub staffs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DesignationPayload {
    #[serde(default, alias = "items")]
    pub designations: Vec<Designation>,
    #[serde(default, alias = "total")]
    pub total_designations: u64,
    #[serde(default, alias = "active")]
    pub active_designations: u64,
    #[serde(default, alias = "inactive")]
    pub inactive_designations: u64,
}

impl From<DesignationPayload> for Listing<Designation> {
    fn from(p: DesignationPayload) -> Self {
        Self {
            items: p.designations,
            stats: ActivityCounts {
                total: p.total_designations,
                active: p.active_designations,
                inactive: p.inactive_designations,
            },
        }
    }
}

impl Resource for Designation {
    type Stats = ActivityCounts;
    type Payload = DesignationPayload;

    const KIND: ResourceKind = ResourceKind::Designation;

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
pub struct DesignationDraft {
    pub name: String,
    /// Department id
    pub department: String,
    pub info: String,
}

impl Draft for DesignationDraft {
    type Record = Designation;

    fn seed(record: &Designation) -> Self {
        Self {
            name: record.name.clone(),
            department: record.department_id.clone().unwrap_or_default(),
            info: record.info.clone().unwrap_or_default(),
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "department" => Some(&self.department),
            "info" => Some(&self.info),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> bool {
        match name {
            "name" => self.name = value,
            "department" => self.department = value,
            "info" => self.info = value,
            _ => return false,
        }
        true
    }

    fn required_fields(&self, _editing: bool) -> Vec<RequiredField> {
        vec![
            RequiredField::new("name", "Designation name"),
            RequiredField::new("department", "Department"),
        ]
    }

    fn option_sources() -> Vec<OptionSource> {
        vec![OptionSource::root("department", ResourceKind::Department)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_uses_department_id() {
        let record: Designation = serde_json::from_str(
            r#"{"id": 2, "slug": "site-lead", "name": "Site lead", "department_id": 5,
                "department_name": "Field"}"#,
        )
        .unwrap();
        let draft = DesignationDraft::seed(&record);
        assert_eq!(draft.department, "5");
        assert_eq!(draft.name, "Site lead");
    }
}
