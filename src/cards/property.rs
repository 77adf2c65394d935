//! Property definitions and per-alternate property sets.
//!
//! A game declares the properties its cards carry. Each card then holds one
//! `PropertySet` per alternate (the base card uses the empty alternate name).
//! Properties flagged `undefined` are placeholders and are skipped wherever
//! values are read for display.

use serde::{Deserialize, Serialize};

use super::attributes::AttributeValue;

/// Declaration of a card property.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyDef {
    /// Property name as declared by the game.
    pub name: String,

    /// Placeholder property with no meaningful value.
    pub undefined: bool,
}

impl PropertyDef {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            undefined: false,
        }
    }

    /// Create a placeholder property.
    #[must_use]
    pub fn undefined(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            undefined: true,
        }
    }

    /// Case-insensitive name comparison.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Ordered property values for one alternate of a card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySet {
    entries: Vec<(PropertyDef, AttributeValue)>,
}

impl PropertySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property (builder pattern).
    #[must_use]
    pub fn with(mut self, def: PropertyDef, value: impl Into<AttributeValue>) -> Self {
        self.insert(def, value);
        self
    }

    /// Add a defined property by name (builder pattern).
    #[must_use]
    pub fn with_value(self, name: &str, value: impl Into<AttributeValue>) -> Self {
        self.with(PropertyDef::new(name), value)
    }

    /// Insert a property, replacing the value of an equal definition in place.
    pub fn insert(&mut self, def: PropertyDef, value: impl Into<AttributeValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(d, _)| *d == def) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((def, value)),
        }
    }

    /// Iterate over all properties in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&PropertyDef, &AttributeValue)> {
        self.entries.iter().map(|(d, v)| (d, v))
    }

    /// Iterate over properties that are not placeholders.
    pub fn defined(&self) -> impl Iterator<Item = (&PropertyDef, &AttributeValue)> {
        self.iter().filter(|(d, _)| !d.undefined)
    }

    /// Find a defined property by name (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.defined().find(|(d, _)| d.is_named(name)).map(|(_, v)| v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
