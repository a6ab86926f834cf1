//! Editable drafts and the declarative rules that drive their forms.

use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;

use super::resource::{Resource, ResourceKind};

/// How a draft travels to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    Json,
    /// `multipart/form-data`; the transport picks the boundary
    Multipart,
}

/// A field that must be non-blank before submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredField {
    pub name: &'static str,
    pub label: &'static str,
}

impl RequiredField {
    pub const fn new(name: &'static str, label: &'static str) -> Self {
        Self { name, label }
    }
}

/// Where a selector field gets its options from.
///
/// With `depends_on = Some((parent, query_key))` the options are the `kind`
/// list filtered by `?query_key=<parent value>`, and the field is cleared
/// whenever the parent changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSource {
    pub field: &'static str,
    pub kind: ResourceKind,
    pub depends_on: Option<(&'static str, &'static str)>,
}

impl OptionSource {
    pub const fn root(field: &'static str, kind: ResourceKind) -> Self {
        Self {
            field,
            kind,
            depends_on: None,
        }
    }

    pub const fn scoped(
        field: &'static str,
        kind: ResourceKind,
        parent: &'static str,
        query_key: &'static str,
    ) -> Self {
        Self {
            field,
            kind,
            depends_on: Some((parent, query_key)),
        }
    }

    pub fn parent(&self) -> Option<&'static str> {
        self.depends_on.map(|(parent, _)| parent)
    }
}

/// Locally held, not-yet-submitted copy of a record's editable fields
pub trait Draft: Clone + Debug + Default + PartialEq + Serialize + Send + Sync + 'static {
    type Record: Resource;

    const ENCODING: BodyEncoding = BodyEncoding::Json;

    /// Copies the editable fields of an existing record
    fn seed(record: &Self::Record) -> Self;

    fn field(&self, name: &str) -> Option<&str>;

    /// Returns false for unknown field names
    fn set_field(&mut self, name: &str, value: String) -> bool;

    fn required_fields(&self, editing: bool) -> Vec<RequiredField>;

    fn option_sources() -> Vec<OptionSource> {
        Vec::new()
    }

    /// JSON body sent on create/update
    fn payload(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// First required field that is blank, in declaration order
    fn first_missing(&self, editing: bool) -> Option<RequiredField> {
        self.required_fields(editing).into_iter().find(|f| {
            self.field(f.name)
                .map(|v| v.trim().is_empty())
                .unwrap_or(true)
        })
    }

    /// Option sources whose parent chain leads back to `field`, nearest first
    fn dependents_of(field: &str) -> Vec<OptionSource> {
        let sources = Self::option_sources();
        let mut found: Vec<OptionSource> = Vec::new();
        let mut frontier = vec![field.to_string()];
        while let Some(parent) = frontier.pop() {
            for source in sources.iter() {
                let is_child = source.parent() == Some(parent.as_str());
                if is_child && !found.iter().any(|f| f.field == source.field) {
                    found.push(*source);
                    frontier.push(source.field.to_string());
                }
            }
        }
        found
    }

    /// Sets `name` and, when the value actually changed, clears every dependent
    /// field. Returns the dependents whose option lists are now out of date.
    fn apply_change(&mut self, name: &str, value: String) -> Vec<OptionSource> {
        if self.field(name) == Some(value.as_str()) {
            return Vec::new();
        }
        if !self.set_field(name, value) {
            return Vec::new();
        }
        let dependents = Self::dependents_of(name);
        for dep in dependents.iter() {
            self.set_field(dep.field, String::new());
        }
        dependents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::aggregate::Category;

    /// region -> site -> crew, all scoped selectors
    #[derive(Debug, Clone, Default, PartialEq, Serialize)]
    struct ChainDraft {
        region: String,
        site: String,
        crew: String,
    }

    impl Draft for ChainDraft {
        type Record = Category;

        fn seed(_record: &Category) -> Self {
            Self::default()
        }

        fn field(&self, name: &str) -> Option<&str> {
            match name {
                "region" => Some(&self.region),
                "site" => Some(&self.site),
                "crew" => Some(&self.crew),
                _ => None,
            }
        }

        fn set_field(&mut self, name: &str, value: String) -> bool {
            match name {
                "region" => self.region = value,
                "site" => self.site = value,
                "crew" => self.crew = value,
                _ => return false,
            }
            true
        }

        fn required_fields(&self, _editing: bool) -> Vec<RequiredField> {
            vec![RequiredField::new("crew", "Crew")]
        }

        fn option_sources() -> Vec<OptionSource> {
            vec![
                OptionSource::root("region", ResourceKind::Department),
                OptionSource::scoped("site", ResourceKind::Designation, "region", "department"),
                OptionSource::scoped("crew", ResourceKind::Staff, "site", "designation"),
            ]
        }
    }

    #[test]
    fn test_resets_are_transitive() {
        let mut draft = ChainDraft {
            region: "1".into(),
            site: "2".into(),
            crew: "3".into(),
        };
        let stale = draft.apply_change("region", "5".into());
        let fields: Vec<_> = stale.iter().map(|s| s.field).collect();
        assert_eq!(fields, vec!["site", "crew"]);
        assert_eq!(draft.site, "");
        assert_eq!(draft.crew, "");
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut draft = ChainDraft::default();
        assert!(draft.apply_change("colour", "red".into()).is_empty());
        assert_eq!(draft, ChainDraft::default());
    }

    #[test]
    fn test_leaf_change_touches_nothing_else() {
        let mut draft = ChainDraft {
            region: "1".into(),
            site: "2".into(),
            crew: String::new(),
        };
        assert!(draft.apply_change("crew", "7".into()).is_empty());
        assert_eq!(draft.site, "2");
        assert!(draft.first_missing(false).is_none());
    }
}
