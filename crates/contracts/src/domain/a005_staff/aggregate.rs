use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::{
    lenient, ActivityCounts, BodyEncoding, Draft, Listing, NamedRef, OptionSource, RequiredField,
    Resource, ResourceKind, Status,
};

/// Login/contact sub-record embedded in every staff member
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffUser {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub email: String,
    /// URL of the uploaded photo
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub id: String,
    pub slug: String,
    #[serde(default)]
    pub user_data: StaffUser,
    #[serde(default, deserialize_with = "lenient::opt_string_or_number")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string_or_number")]
    pub designation: Option<String>,
    #[serde(default)]
    pub department_data: Option<NamedRef>,
    #[serde(default)]
    pub designation_data: Option<NamedRef>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub aadhar: Option<String>,
    #[serde(default)]
    pub blood: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub relation: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub staff_wage: Option<Value>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
}

impl Staff {
    /// "Department / Designation" line shown under the staff name
    pub fn placement(&self) -> String {
        let name = |r: &Option<NamedRef>| r.as_ref().map(|r| r.name.clone()).unwrap_or_default();
        format!("{} / {}", name(&self.department_data), name(&self.designation_data))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaffPayload {
    #[serde(default, alias = "items")]
    pub staffs: Vec<Staff>,
    #[serde(default, alias = "total")]
    pub total_staffs: u64,
    #[serde(default, alias = "active")]
    pub active_staffs: u64,
    #[serde(default, alias = "inactive")]
    pub inactive_staffs: u64,
}

impl From<StaffPayload> for Listing<Staff> {
    fn from(p: StaffPayload) -> Self {
        Self {
            items: p.staffs,
            stats: ActivityCounts {
                total: p.total_staffs,
                active: p.active_staffs,
                inactive: p.inactive_staffs,
            },
        }
    }
}

impl Resource for Staff {
    type Stats = ActivityCounts;
    type Payload = StaffPayload;

    const KIND: ResourceKind = ResourceKind::Staff;

    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> String {
        self.user_data.first_name.clone()
    }
}

/// Staff form fields; the photo travels as a separate multipart file part
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffDraft {
    pub first_name: String,
    pub mobile: String,
    pub email: String,
    /// Department id
    pub department: String,
    /// Designation id
    pub designation: String,
    pub location: String,
    pub aadhar: String,
    pub blood: String,
    pub contact_name: String,
    pub contact_number: String,
    pub relation: String,
    pub address: String,
    pub staff_wage: String,
    pub username: String,
    pub password: String,
}

fn wage_text(value: &Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

impl Draft for StaffDraft {
    type Record = Staff;

    const ENCODING: BodyEncoding = BodyEncoding::Multipart;

    fn seed(record: &Staff) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            first_name: record.user_data.first_name.clone(),
            mobile: record.user_data.mobile.clone(),
            email: record.user_data.email.clone(),
            department: text(&record.department),
            designation: text(&record.designation),
            location: text(&record.location),
            aadhar: text(&record.aadhar),
            blood: text(&record.blood),
            contact_name: text(&record.contact_name),
            contact_number: text(&record.contact_number),
            relation: text(&record.relation),
            address: text(&record.address),
            staff_wage: wage_text(&record.staff_wage),
            username: text(&record.username),
            // never echoed back; blank means "unchanged"
            password: String::new(),
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        let v = match name {
            "first_name" => &self.first_name,
            "mobile" => &self.mobile,
            "email" => &self.email,
            "department" => &self.department,
            "designation" => &self.designation,
            "location" => &self.location,
            "aadhar" => &self.aadhar,
            "blood" => &self.blood,
            "contact_name" => &self.contact_name,
            "contact_number" => &self.contact_number,
            "relation" => &self.relation,
            "address" => &self.address,
            "staff_wage" => &self.staff_wage,
            "username" => &self.username,
            "password" => &self.password,
            _ => return None,
        };
        Some(v.as_str())
    }

    fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "first_name" => &mut self.first_name,
            "mobile" => &mut self.mobile,
            "email" => &mut self.email,
            "department" => &mut self.department,
            "designation" => &mut self.designation,
            "location" => &mut self.location,
            "aadhar" => &mut self.aadhar,
            "blood" => &mut self.blood,
            "contact_name" => &mut self.contact_name,
            "contact_number" => &mut self.contact_number,
            "relation" => &mut self.relation,
            "address" => &mut self.address,
            "staff_wage" => &mut self.staff_wage,
            "username" => &mut self.username,
            "password" => &mut self.password,
            _ => return false,
        };
        *slot = value;
        true
    }

    fn required_fields(&self, editing: bool) -> Vec<RequiredField> {
        let mut fields = vec![
            RequiredField::new("first_name", "Staff name"),
            RequiredField::new("mobile", "Staff mobile"),
            RequiredField::new("department", "Department"),
            RequiredField::new("designation", "Designation"),
        ];
        if !editing {
            fields.push(RequiredField::new("username", "Username"));
            fields.push(RequiredField::new("password", "Password"));
        }
        fields
    }

    fn option_sources() -> Vec<OptionSource> {
        vec![
            OptionSource::root("department", ResourceKind::Department),
            OptionSource::scoped(
                "designation",
                ResourceKind::Designation,
                "department",
                "department",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Staff {
        serde_json::from_str(
            r#"{"id": 11, "slug": "ravi", "department": 2, "designation": "6",
                "user_data": {"first_name": "Ravi", "mobile": "98450", "email": "r@x.in"},
                "department_data": {"id": 2, "name": "Field"},
                "designation_data": {"id": 6, "name": "Technician"},
                "staff_wage": 650, "username": "ravi"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_seed_from_record() {
        let draft = StaffDraft::seed(&record());
        assert_eq!(draft.first_name, "Ravi");
        assert_eq!(draft.department, "2");
        assert_eq!(draft.designation, "6");
        assert_eq!(draft.staff_wage, "650");
        assert_eq!(draft.password, "");
        assert_eq!(record().placement(), "Field / Technician");
    }

    #[test]
    fn test_credentials_required_only_on_create() {
        let draft = StaffDraft::seed(&record());
        assert!(draft.first_missing(true).is_none());
        assert_eq!(draft.first_missing(false).map(|f| f.name), Some("password"));
    }

    #[test]
    fn test_department_change_clears_designation() {
        let mut draft = StaffDraft::seed(&record());
        let stale = draft.apply_change("department", "3".into());
        assert_eq!(draft.designation, "");
        assert_eq!(stale.len(), 1);
        assert_eq!(stale[0].field, "designation");
        assert_eq!(stale[0].depends_on, Some(("department", "department")));
    }

    #[test]
    fn test_same_value_is_not_a_change() {
        let mut draft = StaffDraft::seed(&record());
        assert!(draft.apply_change("department", "2".into()).is_empty());
        assert_eq!(draft.designation, "6");
    }
}
