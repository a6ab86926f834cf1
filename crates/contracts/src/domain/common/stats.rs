use serde::{Deserialize, Serialize};

use super::resource::ResourceKind;

/// One overview card above a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub icon: String,
    pub value: u64,
}

impl StatCard {
    pub fn new(title: impl Into<String>, icon: &str, value: u64) -> Self {
        Self {
            title: title.into(),
            icon: icon.to_string(),
            value,
        }
    }
}

/// Aggregate counters that render as overview cards
pub trait StatCards {
    fn cards(&self, kind: ResourceKind) -> Vec<StatCard>;
}

/// total / active / inactive breakdown shared by most resources
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCounts {
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
}

impl StatCards for ActivityCounts {
    fn cards(&self, kind: ResourceKind) -> Vec<StatCard> {
        let noun = kind.plural_title();
        vec![
            StatCard::new(format!("Total {}", noun), "list", self.total),
            StatCard::new(format!("Active {}", noun), "check-circle", self.active),
            StatCard::new(format!("Inactive {}", noun), "x-circle", self.inactive),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_cards() {
        let counts = ActivityCounts {
            total: 3,
            active: 2,
            inactive: 1,
        };
        let cards = counts.cards(ResourceKind::Service);
        let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Total Services", "Active Services", "Inactive Services"]
        );
        let values: Vec<_> = cards.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![3, 2, 1]);
    }
}
