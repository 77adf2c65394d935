//! Core types: identities, containers, configuration.
//!
//! Everything else in the crate is keyed by these types. Hosts configure the
//! resolver and template manager via `ResolverConfig` / `TemplateConfig`
//! rather than through global state.

pub mod config;
pub mod container;
pub mod identity;

pub use config::{ResolverConfig, TemplateConfig, INTERNAL_SCHEME, SLOW_RENDER_THRESHOLD_MS};
pub use container::Container;
pub use identity::{CardId, ContainerId, GameId};
