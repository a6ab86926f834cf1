use serde::{Deserialize, Serialize};

use crate::domain::common::{
    lenient, Draft, Listing, RequiredField, Resource, ResourceKind, StatCard, StatCards, Status,
};

/// Customer partition. Drives which tab a customer is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    Enterprise,
    Individual,
}

impl CustomerType {
    pub const ALL: [CustomerType; 2] = [CustomerType::Enterprise, CustomerType::Individual];

    pub fn as_str(self) -> &'static str {
        match self {
            CustomerType::Enterprise => "enterprise",
            CustomerType::Individual => "individual",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CustomerType::Enterprise => "Enterprise",
            CustomerType::Individual => "Individual",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enterprise" => Some(CustomerType::Enterprise),
            "individual" => Some(CustomerType::Individual),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub id: String,
    pub slug: String,
    pub name: String,
    /// `{ "id": "enterprise", "name": "Enterprise" }`
    #[serde(default, rename = "type")]
    pub kind: Status,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Customer {
    pub fn customer_type(&self) -> Option<CustomerType> {
        CustomerType::parse(&self.kind.id).or_else(|| CustomerType::parse(&self.kind.name))
    }
}

/// total / enterprise / individual
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCounts {
    pub total: u64,
    pub enterprise: u64,
    pub individual: u64,
}

impl StatCards for CustomerCounts {
    fn cards(&self, _kind: ResourceKind) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Customers", "users", self.total),
            StatCard::new("Enterprise Customers", "building", self.enterprise),
            StatCard::new("Individual Customers", "user", self.individual),
        ]
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerPayload {
    #[serde(default, alias = "items")]
    pub customers: Vec<Customer>,
    #[serde(default, alias = "total")]
    pub total_customers: u64,
    #[serde(default, alias = "enterprise")]
    pub enterprise_customers: u64,
    #[serde(default, alias = "individual")]
    pub individual_customers: u64,
}

impl From<CustomerPayload> for Listing<Customer> {
    fn from(p: CustomerPayload) -> Self {
        Self {
            items: p.customers,
            stats: CustomerCounts {
                total: p.total_customers,
                enterprise: p.enterprise_customers,
                individual: p.individual_customers,
            },
        }
    }
}

impl Resource for Customer {
    type Stats = CustomerCounts;
    type Payload = CustomerPayload;

    const KIND: ResourceKind = ResourceKind::Customer;

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
pub struct CustomerDraft {
    pub name: String,
    /// "enterprise" | "individual"
    #[serde(rename = "type")]
    pub kind: String,
    pub mobile: String,
    pub email: String,
    pub location: String,
}

impl Draft for CustomerDraft {
    type Record = Customer;

    fn seed(record: &Customer) -> Self {
        Self {
            name: record.name.clone(),
            kind: record
                .customer_type()
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
            mobile: record.mobile.clone(),
            email: record.email.clone().unwrap_or_default(),
            location: record.location.clone().unwrap_or_default(),
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "type" => Some(&self.kind),
            "mobile" => Some(&self.mobile),
            "email" => Some(&self.email),
            "location" => Some(&self.location),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> bool {
        match name {
            "name" => self.name = value,
            "type" => self.kind = value,
            "mobile" => self.mobile = value,
            "email" => self.email = value,
            "location" => self.location = value,
            _ => return false,
        }
        true
    }

    fn required_fields(&self, _editing: bool) -> Vec<RequiredField> {
        vec![
            RequiredField::new("name", "Customer name"),
            RequiredField::new("type", "Customer type"),
            RequiredField::new("mobile", "Mobile number"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_normalizes_type_tag() {
        let c: Customer = serde_json::from_str(
            r#"{"id": 1, "slug": "acme", "name": "Acme", "mobile": "555",
                "type": {"id": "ENTERPRISE", "name": "Enterprise"}}"#,
        )
        .unwrap();
        assert_eq!(c.customer_type(), Some(CustomerType::Enterprise));
        assert_eq!(CustomerDraft::seed(&c).kind, "enterprise");
    }

    #[test]
    fn test_payload_uses_type_key() {
        let draft = CustomerDraft {
            name: "Acme".into(),
            kind: "enterprise".into(),
            mobile: "555".into(),
            ..Default::default()
        };
        let body = draft.payload().unwrap();
        assert_eq!(body["type"], "enterprise");
        assert!(body.get("kind").is_none());
    }

    #[test]
    fn test_counts_cards() {
        let counts = CustomerCounts {
            total: 5,
            enterprise: 2,
            individual: 3,
        };
        let values: Vec<u64> = counts
            .cards(ResourceKind::Customer)
            .into_iter()
            .map(|c| c.value)
            .collect();
        assert_eq!(values, vec![5, 2, 3]);
    }
}
