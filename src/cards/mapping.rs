//! Flat name → text view of a card, used for proxy generation.
//!
//! `FieldMapping` is what the renderer draws from and what template
//! selection matches against. Values are already stringified; nothing
//! downstream needs the typed form.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;

/// Ordered field-name → value pairs.
///
/// Field names are unique ignoring ASCII case. Inserting a name that is
/// already present overwrites its value and keeps its position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    fields: SmallVec<[(String, String); 8]>,
}

impl FieldMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(i) => Some(std::mem::replace(&mut self.fields[i].1, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    /// Add a field (builder pattern).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a field value (case-insensitive name).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.fields[i].1.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|(n, _)| n.eq_ignore_ascii_case(name))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FieldMapping {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut mapping = FieldMapping::new();
        for (name, value) in iter {
            mapping.insert(name, value);
        }
        mapping
    }
}

/// Build the proxy field mapping for a card's active alternate.
///
/// Placeholder (undefined) properties are dropped and every value is
/// converted to its text form. Should two properties share a name, the
/// later one wins.
#[must_use]
pub fn proxy_mappings(card: &Card) -> FieldMapping {
    card.property_set()
        .map(|(def, value)| (def.name.clone(), value.to_string()))
        .collect()
}
