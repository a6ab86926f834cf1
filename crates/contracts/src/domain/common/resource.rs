use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;

use super::lenient::value_to_key;
use super::stats::StatCards;

// ============================================================================
// Resource catalogue
// ============================================================================

/// Every backend-managed entity type the dashboard can list and edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Category,
    Service,
    Department,
    Designation,
    Staff,
    Customer,
    OnCall,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 7] = [
        ResourceKind::Category,
        ResourceKind::Service,
        ResourceKind::Department,
        ResourceKind::Designation,
        ResourceKind::Staff,
        ResourceKind::Customer,
        ResourceKind::OnCall,
    ];

    /// Lower-case singular used in user-facing messages ("Delete this category?")
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Category => "category",
            ResourceKind::Service => "service",
            ResourceKind::Department => "department",
            ResourceKind::Designation => "designation",
            ResourceKind::Staff => "staff",
            ResourceKind::Customer => "customer",
            ResourceKind::OnCall => "on call",
        }
    }

    pub fn plural_label(self) -> &'static str {
        match self {
            ResourceKind::Category => "categories",
            ResourceKind::Service => "services",
            ResourceKind::Department => "departments",
            ResourceKind::Designation => "designations",
            ResourceKind::Staff => "staffs",
            ResourceKind::Customer => "customers",
            ResourceKind::OnCall => "on calls",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ResourceKind::Category => "Category",
            ResourceKind::Service => "Service",
            ResourceKind::Department => "Department",
            ResourceKind::Designation => "Designation",
            ResourceKind::Staff => "Staff",
            ResourceKind::Customer => "Customer",
            ResourceKind::OnCall => "On Call",
        }
    }

    pub fn plural_title(self) -> &'static str {
        match self {
            ResourceKind::Category => "Categories",
            ResourceKind::Service => "Services",
            ResourceKind::Department => "Departments",
            ResourceKind::Designation => "Designations",
            ResourceKind::Staff => "Staffs",
            ResourceKind::Customer => "Customers",
            ResourceKind::OnCall => "On Calls",
        }
    }

    /// Collection endpoint, relative to the API base (GET list, POST create)
    pub fn list_path(self) -> &'static str {
        match self {
            ResourceKind::Category => "/service/categories/",
            ResourceKind::Service => "/service/services/",
            ResourceKind::Department => "/workforce/departments/",
            ResourceKind::Designation => "/workforce/designations/",
            ResourceKind::Staff => "/workforce/staffs/",
            ResourceKind::Customer => "/customers/customers/",
            ResourceKind::OnCall => "/customers/on-calls/",
        }
    }

    /// Detail endpoint (GET/PUT/DELETE). `slug` must already be URL-safe.
    pub fn detail_path(self, slug: &str) -> String {
        let prefix = match self {
            ResourceKind::Category => "/service/category/",
            ResourceKind::Service => "/service/service/",
            ResourceKind::Department => "/workforce/department/",
            ResourceKind::Designation => "/workforce/designation/",
            ResourceKind::Staff => "/workforce/staff/",
            ResourceKind::Customer => "/customers/customer/",
            ResourceKind::OnCall => "/customers/on-call/",
        };
        format!("{}{}/", prefix, slug)
    }

    /// Key of the collection array inside a list response's `data` object
    pub fn collection_key(self) -> &'static str {
        match self {
            ResourceKind::Category => "categories",
            ResourceKind::Service => "services",
            ResourceKind::Department => "departments",
            ResourceKind::Designation => "designations",
            ResourceKind::Staff => "staffs",
            ResourceKind::Customer => "customers",
            ResourceKind::OnCall => "on_calls",
        }
    }

    /// The staff detail endpoint has no DELETE.
    pub fn supports_delete(self) -> bool {
        !matches!(self, ResourceKind::Staff)
    }

    pub fn fetch_failed_message(self) -> String {
        format!("Failed to fetch {}", self.plural_label())
    }

    pub fn save_failed_message(self) -> String {
        format!("Failed to save {}", self.label())
    }

    pub fn delete_failed_message(self) -> String {
        format!("Failed to delete {}", self.label())
    }
}

// ============================================================================
// Records and listings
// ============================================================================

/// A backend record addressable by slug and referenced by id
pub trait Resource: Clone + Debug + PartialEq + DeserializeOwned + Send + Sync + 'static {
    type Stats: StatCards + Clone + Debug + Default + PartialEq + Send + Sync + 'static;
    /// Shape of the `data` object returned by the list endpoint
    type Payload: DeserializeOwned + Into<Listing<Self>>;

    const KIND: ResourceKind;

    fn id(&self) -> &str;
    fn slug(&self) -> &str;
    /// Human-readable name used in rows and confirmation prompts
    fn title(&self) -> String;
}

/// Rows and stats decoded from one list response
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<R: Resource> {
    pub items: Vec<R>,
    pub stats: R::Stats,
}

impl<R: Resource> Default for Listing<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            stats: R::Stats::default(),
        }
    }
}

// ============================================================================
// Select options
// ============================================================================

/// One `<option>` of a foreign-key selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Builds an option from one raw list item of the given kind
    pub fn from_item(kind: ResourceKind, item: &Value) -> Option<Self> {
        let value = item.get("id").and_then(value_to_key)?;
        let text = |v: Option<&Value>| v.and_then(Value::as_str).unwrap_or_default().to_string();
        let label = match kind {
            ResourceKind::Staff => text(item.pointer("/user_data/first_name")),
            ResourceKind::Customer => {
                let name = text(item.get("name"));
                match item.get("mobile").and_then(Value::as_str) {
                    Some(mobile) if !mobile.is_empty() => format!("{} - {}", name, mobile),
                    _ => name,
                }
            }
            _ => text(item.get("name")),
        };
        Some(Self { value, label })
    }

    /// Extracts options from a full list response body (`{ data: { <key>: [...] } }`)
    pub fn from_list_body(kind: ResourceKind, body: &Value) -> Vec<Self> {
        let data = body.get("data").unwrap_or(body);
        data.get(kind.collection_key())
            .or_else(|| data.get("items"))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| Choice::from_item(kind, item))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paths() {
        assert_eq!(ResourceKind::Category.list_path(), "/service/categories/");
        assert_eq!(
            ResourceKind::Designation.detail_path("site-lead"),
            "/workforce/designation/site-lead/"
        );
        assert_eq!(ResourceKind::OnCall.detail_path("oc-1"), "/customers/on-call/oc-1/");
    }

    #[test]
    fn test_only_staff_cannot_be_deleted() {
        let undeletable: Vec<_> = ResourceKind::ALL
            .iter()
            .filter(|k| !k.supports_delete())
            .collect();
        assert_eq!(undeletable, vec![&ResourceKind::Staff]);
    }

    #[test]
    fn test_fallback_messages() {
        assert_eq!(
            ResourceKind::Category.fetch_failed_message(),
            "Failed to fetch categories"
        );
        assert_eq!(ResourceKind::OnCall.save_failed_message(), "Failed to save on call");
        assert_eq!(
            ResourceKind::Customer.delete_failed_message(),
            "Failed to delete customer"
        );
    }

    #[test]
    fn test_choices_from_customer_list() {
        let body = json!({
            "data": {
                "customers": [
                    {"id": 4, "name": "Acme", "mobile": "555-0100"},
                    {"id": 5, "name": "Walk-in", "mobile": ""}
                ],
                "total_customers": 2
            }
        });
        let choices = Choice::from_list_body(ResourceKind::Customer, &body);
        assert_eq!(
            choices,
            vec![Choice::new("4", "Acme - 555-0100"), Choice::new("5", "Walk-in")]
        );
    }

    #[test]
    fn test_choices_accept_generic_items_key() {
        let body = json!({"data": {"items": [{"id": "9", "name": "Wiring"}]}});
        let choices = Choice::from_list_body(ResourceKind::Service, &body);
        assert_eq!(choices, vec![Choice::new("9", "Wiring")]);
    }

    #[test]
    fn test_staff_choice_uses_embedded_user_name() {
        let item = json!({"id": 1, "user_data": {"first_name": "Ravi"}});
        assert_eq!(
            Choice::from_item(ResourceKind::Staff, &item),
            Some(Choice::new("1", "Ravi"))
        );
    }
}
