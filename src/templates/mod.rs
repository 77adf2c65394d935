//! Proxy template selection.
//!
//! ## Key Types
//!
//! - `TemplateDescriptor`: Layout id, match criteria, render instructions
//! - `FieldMappingRule`: Field whose value names a template
//! - `MatchFieldSet`: Fields that count for multi-field matching
//! - `MultiFieldMatcher`: Scores templates against field values
//! - `TemplateManager`: Registration and selection with default fallback

pub mod descriptor;
pub mod manager;
pub mod matcher;

pub use descriptor::{FieldMappingRule, MatchCriterion, MatchFieldSet, TemplateDescriptor};
pub use manager::TemplateManager;
pub use matcher::{Exact, FieldComparator, IgnoreCase, MultiFieldMatcher};
