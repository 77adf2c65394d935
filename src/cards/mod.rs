//! Card system: property values, property sets, cards, proxy field mappings.
//!
//! ## Key Types
//!
//! - `AttributeValue`: Typed property value with a canonical text form
//! - `PropertyDef` / `PropertySet`: Declared properties and their values
//! - `Card`: Container membership, image reference, alternates
//! - `FieldMapping`: Flat name → text view built by `proxy_mappings`
//!
//! ## Alternates
//!
//! A card carries one property set per alternate (the base card uses the
//! empty name). The active alternate decides both the displayed values and
//! the image key.

pub mod attributes;
pub mod card;
pub mod mapping;
pub mod property;

pub use attributes::AttributeValue;
pub use card::{Card, BASE_ALTERNATE};
pub use mapping::{proxy_mappings, FieldMapping};
pub use property::{PropertyDef, PropertySet};
