use contracts::domain::common::Choice;
use std::collections::HashMap;

use super::sequence::{RequestSequence, Ticket};

#[derive(Debug, Clone, Default, PartialEq)]
struct FieldOptions {
    sequence: RequestSequence,
    choices: Vec<Choice>,
    loading: bool,
}

/// Option lists of every selector on a form, sequenced per field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionsBoard {
    fields: HashMap<&'static str, FieldOptions>,
}

impl OptionsBoard {
    pub fn begin(&mut self, field: &'static str) -> Ticket {
        let entry = self.fields.entry(field).or_default();
        entry.loading = true;
        entry.sequence.issue()
    }

    /// Returns false when a newer request for the same field was started.
    pub fn settle(&mut self, field: &'static str, ticket: Ticket, choices: Vec<Choice>) -> bool {
        match self.fields.get_mut(field) {
            Some(entry) if entry.sequence.is_current(ticket) => {
                entry.choices = choices;
                entry.loading = false;
                true
            }
            _ => false,
        }
    }

    /// Failed load: keep whatever was there, stop the spinner.
    pub fn fail(&mut self, field: &'static str, ticket: Ticket) {
        if let Some(entry) = self.fields.get_mut(field) {
            if entry.sequence.is_current(ticket) {
                entry.loading = false;
            }
        }
    }

    /// Empties the list and discards any load still in flight.
    pub fn clear(&mut self, field: &'static str) {
        let entry = self.fields.entry(field).or_default();
        entry.sequence.invalidate();
        entry.choices.clear();
        entry.loading = false;
    }

    pub fn choices(&self, field: &str) -> &[Choice] {
        self.fields
            .get(field)
            .map(|f| f.choices.as_slice())
            .unwrap_or_default()
    }

    pub fn is_loading(&self, field: &str) -> bool {
        self.fields.get(field).map(|f| f.loading).unwrap_or(false)
    }
}
