//! Cards as seen by the picture pipeline.
//!
//! A `Card` knows which container it belongs to, its base image reference,
//! and one property set per alternate. The active alternate decides which
//! property set is displayed and which image variant is looked up.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{CardId, ContainerId};

use super::attributes::AttributeValue;
use super::property::{PropertyDef, PropertySet};

/// Name of the base (non-alternate) property set.
pub const BASE_ALTERNATE: &str = "";

/// A card with its per-alternate properties.
///
/// ## Example
///
/// ```
/// use card_imagery::cards::{Card, PropertySet};
/// use card_imagery::core::{CardId, ContainerId};
///
/// let mut card = Card::new(CardId::random(), ContainerId::random(), "Arya Stark")
///     .with_image_uri("a1b2")
///     .with_properties("", PropertySet::new().with_value("Type", "Hero"))
///     .with_properties("Flipped", PropertySet::new().with_value("Type", "Ghost"));
///
/// assert_eq!(card.image_key(), "a1b2");
/// assert!(card.select_alternate("flipped"));
/// assert_eq!(card.image_key(), "a1b2.Flipped");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier.
    pub id: CardId,

    /// Container (set) the card belongs to.
    pub container_id: ContainerId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Base image reference, usually the card id as text.
    pub image_uri: String,

    /// Active alternate; empty for the base card.
    pub alternate: String,

    /// Property sets keyed by alternate name.
    pub properties: FxHashMap<String, PropertySet>,
}

impl Card {
    #[must_use]
    pub fn new(id: CardId, container_id: ContainerId, name: impl Into<String>) -> Self {
        Self {
            id,
            container_id,
            name: name.into(),
            image_uri: id.raw().to_string(),
            alternate: BASE_ALTERNATE.to_string(),
            properties: FxHashMap::default(),
        }
    }

    /// Set the base image reference (builder pattern).
    #[must_use]
    pub fn with_image_uri(mut self, uri: impl Into<String>) -> Self {
        self.image_uri = uri.into();
        self
    }

    /// Attach the property set for an alternate (builder pattern).
    #[must_use]
    pub fn with_properties(mut self, alternate: impl Into<String>, set: PropertySet) -> Self {
        self.properties.insert(alternate.into(), set);
        self
    }

    /// Key identifying the image variant currently shown.
    ///
    /// The base image reference, suffixed with `.<alternate>` when an
    /// alternate is active. Packaged and proxy lookups both use this key.
    #[must_use]
    pub fn image_key(&self) -> String {
        if self.alternate.trim().is_empty() {
            self.image_uri.clone()
        } else {
            format!("{}.{}", self.image_uri, self.alternate)
        }
    }

    /// Property set of the active alternate, if the card has one.
    #[must_use]
    pub fn active_properties(&self) -> Option<&PropertySet> {
        self.properties.get(&self.alternate)
    }

    /// Defined properties of the active alternate, in declaration order.
    ///
    /// Empty if the active alternate has no property set.
    pub fn property_set(&self) -> impl Iterator<Item = (&PropertyDef, &AttributeValue)> {
        self.active_properties().into_iter().flat_map(|set| set.defined())
    }

    /// Check whether the active alternate defines a property (case-insensitive).
    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        self.property_set().any(|(def, _)| def.is_named(name))
    }

    /// Value of the `name` property of the active alternate.
    #[must_use]
    pub fn property_name(&self) -> Option<&str> {
        self.property_set()
            .find(|(def, _)| def.is_named("name"))
            .and_then(|(_, value)| value.as_text())
    }

    /// Switch to another alternate.
    ///
    /// Matching is case-insensitive and the stored spelling is kept. A blank
    /// name selects the base set. Returns `false` and leaves the card
    /// unchanged if no such property set exists.
    pub fn select_alternate(&mut self, alternate: &str) -> bool {
        let wanted = alternate.trim();
        let found = self
            .properties
            .keys()
            .find(|key| key.eq_ignore_ascii_case(wanted))
            .cloned();
        match found {
            Some(key) => {
                self.alternate = key;
                true
            }
            None => false,
        }
    }
}
