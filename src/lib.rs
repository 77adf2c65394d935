//! # card-imagery
//!
//! Gives every card a picture, fast, while many cards are drawn at once and
//! art packs may be missing or partially installed.
//!
//! ## Design Principles
//!
//! 1. **Best effort**: A picture lookup always yields a path. Missing art is
//!    replaced by a generated proxy; only a broken install is an error.
//!
//! 2. **Resolve once**: Container lookups are memoized for the life of the
//!    process and never invalidated.
//!
//! 3. **Collaborators behind traits**: Set storage (`ContainerSource`), the
//!    file system (`ImageStore`) and proxy drawing (`ProxyRenderer`) are
//!    supplied by the host.
//!
//! ## Modules
//!
//! - `core`: Identities, containers, configuration
//! - `cards`: Card properties, alternates and proxy field mappings
//! - `index`: Container lookup and the resolve-once index
//! - `images`: Packaged → cached proxy → generated proxy resolution
//! - `templates`: Proxy template registration and selection

pub mod cards;
pub mod core;
pub mod images;
pub mod index;
pub mod templates;

// Re-export commonly used types
pub use crate::core::{CardId, Container, ContainerId, GameId, ResolverConfig, TemplateConfig};

pub use crate::cards::{proxy_mappings, AttributeValue, Card, FieldMapping, PropertyDef, PropertySet};

pub use crate::index::{ContainerIndex, ContainerSource};

pub use crate::images::{
    ImageResolver, ImageStore, LocalImageStore, ProxyRenderer, ResolveError, ResolveResult,
};

pub use crate::templates::{
    FieldComparator, FieldMappingRule, MatchCriterion, MatchFieldSet, MultiFieldMatcher,
    TemplateDescriptor, TemplateManager,
};
