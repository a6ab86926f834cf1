use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::{
    lenient, Draft, Listing, NamedRef, OptionSource, RequiredField, Resource, ResourceKind,
    StatCard, StatCards, Status,
};

/// A field job raised for a customer against one service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnCall {
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub id: String,
    pub slug: String,
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub date: Option<String>,
    /// Work type tag (`enterprise` | `individual`)
    #[serde(default, rename = "type")]
    pub work_type: Option<Status>,
    #[serde(default, deserialize_with = "lenient::opt_string_or_number")]
    pub customer: Option<String>,
    #[serde(default)]
    pub customer_data: Option<NamedRef>,
    #[serde(default, deserialize_with = "lenient::opt_string_or_number")]
    pub category: Option<String>,
    #[serde(default)]
    pub category_data: Option<NamedRef>,
    #[serde(default, deserialize_with = "lenient::opt_string_or_number")]
    pub service: Option<String>,
    #[serde(default)]
    pub service_data: Option<NamedRef>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub info: Option<String>,
}

impl OnCall {
    /// Date as `YYYY-MM-DD`; unparseable values are shown as sent
    pub fn display_date(&self) -> String {
        let Some(raw) = self.date.as_deref() else {
            return String::new();
        };
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return dt.format("%Y-%m-%d").to_string();
        }
        if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return d.format("%Y-%m-%d").to_string();
        }
        raw.to_string()
    }

    /// "mobile / email" under the customer name, `N/A` for a missing email
    pub fn customer_contact(&self) -> String {
        let Some(c) = self.customer_data.as_ref() else {
            return String::new();
        };
        let email = c
            .email
            .as_deref()
            .filter(|e| !e.is_empty())
            .unwrap_or("N/A");
        format!("{} / {}", c.mobile.as_deref().unwrap_or_default(), email)
    }
}

/// total / pending / completed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnCallCounts {
    pub total: u64,
    pub pending: u64,
    pub completed: u64,
}

impl StatCards for OnCallCounts {
    fn cards(&self, _kind: ResourceKind) -> Vec<StatCard> {
        vec![
            StatCard::new("Total On Calls", "phone", self.total),
            StatCard::new("Pending On Calls", "clock", self.pending),
            StatCard::new("Completed On Calls", "check-circle", self.completed),
        ]
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OnCallPayload {
    #[serde(default, alias = "items")]
    pub on_calls: Vec<OnCall>,
    #[serde(default, alias = "total")]
    pub total_on_calls: u64,
    #[serde(default, alias = "pending")]
    pub pending_on_calls: u64,
    #[serde(default, alias = "completed")]
    pub completed_on_calls: u64,
}

impl From<OnCallPayload> for Listing<OnCall> {
    fn from(p: OnCallPayload) -> Self {
        Self {
            items: p.on_calls,
            stats: OnCallCounts {
                total: p.total_on_calls,
                pending: p.pending_on_calls,
                completed: p.completed_on_calls,
            },
        }
    }
}

impl Resource for OnCall {
    type Stats = OnCallCounts;
    type Payload = OnCallPayload;

    const KIND: ResourceKind = ResourceKind::OnCall;

    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> String {
        self.site_name.clone()
    }
}

pub const EXISTING_CUSTOMER: &str = "existing";
pub const NEW_CUSTOMER: &str = "new";

/// On-call form. Either points at an existing customer or carries the
/// details of a customer the backend creates inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnCallDraft {
    /// "existing" | "new"
    pub customer_type: String,
    /// Work type: "enterprise" | "individual"
    #[serde(rename = "type")]
    pub work_type: String,
    pub site_name: String,
    /// Category id
    pub category: String,
    /// Service id
    pub service: String,
    /// Customer id
    pub customer: String,
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub location: String,
    pub info: String,
}

impl Default for OnCallDraft {
    fn default() -> Self {
        Self {
            customer_type: EXISTING_CUSTOMER.to_string(),
            work_type: String::new(),
            site_name: String::new(),
            category: String::new(),
            service: String::new(),
            customer: String::new(),
            name: String::new(),
            mobile: String::new(),
            email: String::new(),
            location: String::new(),
            info: String::new(),
        }
    }
}

impl OnCallDraft {
    pub fn is_new_customer(&self) -> bool {
        self.customer_type == NEW_CUSTOMER
    }
}

impl Draft for OnCallDraft {
    type Record = OnCall;

    fn seed(record: &OnCall) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            customer_type: EXISTING_CUSTOMER.to_string(),
            work_type: record
                .work_type
                .as_ref()
                .map(|t| t.id.to_ascii_lowercase())
                .unwrap_or_default(),
            site_name: record.site_name.clone(),
            category: text(&record.category),
            service: text(&record.service),
            customer: text(&record.customer),
            info: text(&record.info),
            ..Default::default()
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        let v = match name {
            "customer_type" => &self.customer_type,
            "type" => &self.work_type,
            "site_name" => &self.site_name,
            "category" => &self.category,
            "service" => &self.service,
            "customer" => &self.customer,
            "name" => &self.name,
            "mobile" => &self.mobile,
            "email" => &self.email,
            "location" => &self.location,
            "info" => &self.info,
            _ => return None,
        };
        Some(v.as_str())
    }

    fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "customer_type" => &mut self.customer_type,
            "type" => &mut self.work_type,
            "site_name" => &mut self.site_name,
            "category" => &mut self.category,
            "service" => &mut self.service,
            "customer" => &mut self.customer,
            "name" => &mut self.name,
            "mobile" => &mut self.mobile,
            "email" => &mut self.email,
            "location" => &mut self.location,
            "info" => &mut self.info,
            _ => return false,
        };
        *slot = value;
        true
    }

    fn required_fields(&self, editing: bool) -> Vec<RequiredField> {
        let mut fields = Vec::new();
        if !editing {
            fields.push(RequiredField::new("type", "Work type"));
        }
        fields.push(RequiredField::new("site_name", "Site name"));
        if !editing {
            if self.is_new_customer() {
                fields.push(RequiredField::new("name", "Customer name"));
                fields.push(RequiredField::new("mobile", "Mobile number"));
                fields.push(RequiredField::new("email", "Email address"));
                fields.push(RequiredField::new("location", "Location"));
            } else {
                fields.push(RequiredField::new("customer", "Customer"));
            }
        }
        fields.push(RequiredField::new("category", "Category"));
        fields.push(RequiredField::new("service", "Service"));
        fields
    }

    fn option_sources() -> Vec<OptionSource> {
        vec![
            OptionSource::root("category", ResourceKind::Category),
            OptionSource::scoped("service", ResourceKind::Service, "category", "category"),
            OptionSource::scoped("customer", ResourceKind::Customer, "type", "type"),
        ]
    }

    /// The backend reads the work type from `work_type`
    fn payload(&self) -> Result<Value, serde_json::Error> {
        let mut body = serde_json::to_value(self)?;
        if let Value::Object(map) = &mut body {
            map.insert("work_type".to_string(), Value::String(self.work_type.clone()));
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> OnCallDraft {
        OnCallDraft {
            work_type: "enterprise".into(),
            site_name: "Tower B".into(),
            category: "1".into(),
            service: "4".into(),
            customer: "9".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_category_change_resets_service() {
        let mut draft = filled();
        let stale = draft.apply_change("category", "2".into());
        assert_eq!(draft.category, "2");
        assert_eq!(draft.service, "");
        assert_eq!(draft.customer, "9");
        let fields: Vec<_> = stale.iter().map(|s| s.field).collect();
        assert_eq!(fields, vec!["service"]);
        assert_eq!(stale[0].kind, ResourceKind::Service);
    }

    #[test]
    fn test_work_type_change_resets_customer() {
        let mut draft = filled();
        let stale = draft.apply_change("type", "individual".into());
        assert_eq!(draft.customer, "");
        assert_eq!(draft.service, "4");
        assert_eq!(stale[0].depends_on, Some(("type", "type")));
    }

    #[test]
    fn test_required_fields_follow_customer_type() {
        let mut draft = filled();
        assert!(draft.first_missing(false).is_none());

        draft.customer_type = NEW_CUSTOMER.into();
        assert_eq!(draft.first_missing(false).map(|f| f.name), Some("name"));

        // customer and work type are fixed while editing
        let mut editing = filled();
        editing.customer = String::new();
        editing.work_type = String::new();
        assert!(editing.first_missing(true).is_none());
    }

    #[test]
    fn test_payload_carries_work_type() {
        let body = filled().payload().unwrap();
        assert_eq!(body["type"], "enterprise");
        assert_eq!(body["work_type"], "enterprise");
        assert_eq!(body["customer_type"], "existing");
    }

    #[test]
    fn test_display_helpers() {
        let call: OnCall = serde_json::from_str(
            r#"{"id": 1, "slug": "oc-1", "site_name": "Tower B",
                "date": "2026-03-04T10:00:00+05:30",
                "customer_data": {"id": 9, "name": "Acme", "mobile": "555", "email": null}}"#,
        )
        .unwrap();
        assert_eq!(call.display_date(), "2026-03-04");
        assert_eq!(call.customer_contact(), "555 / N/A");
    }
}
