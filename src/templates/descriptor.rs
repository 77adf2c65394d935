//! Template descriptors and the registration rules around them.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A field value a template declares it is meant for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCriterion {
    /// Field name to compare.
    pub field: String,
    /// Expected value.
    pub value: String,
}

impl MatchCriterion {
    #[must_use]
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// A proxy layout template.
///
/// `instructions` is whatever the renderer needs to draw the layout; it is
/// never inspected here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemplateDescriptor<I = ()> {
    /// Unique identifier.
    pub id: String,

    /// Field values this template is meant for (multi-field matching).
    pub matches: SmallVec<[MatchCriterion; 4]>,

    /// Opaque render instructions.
    pub instructions: I,
}

impl<I: Default> TemplateDescriptor<I> {
    /// Create a template with default instructions.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_instructions(id, I::default())
    }
}

impl<I> TemplateDescriptor<I> {
    #[must_use]
    pub fn with_instructions(id: impl Into<String>, instructions: I) -> Self {
        Self {
            id: id.into(),
            matches: SmallVec::new(),
            instructions,
        }
    }

    /// Declare a matching field value (builder pattern).
    #[must_use]
    pub fn with_match(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.matches.push(MatchCriterion::new(field, value));
        self
    }
}

/// Maps a card field to template identifiers (single-field mode).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMappingRule {
    /// Card field whose value names the template.
    pub name: String,

    /// Optional target name for the field.
    pub map_to: Option<String>,
}

impl FieldMappingRule {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            map_to: None,
        }
    }

    /// Set the target name. Empty means none.
    #[must_use]
    pub fn with_target(mut self, map_to: impl Into<String>) -> Self {
        let map_to = map_to.into();
        self.map_to = (!map_to.is_empty()).then_some(map_to);
        self
    }
}

/// Field names that count during multi-field matching.
///
/// Ordered and duplicate-free ignoring ASCII case, like `FieldMapping`.
/// Adding a name that is already present moves it to the end with the new
/// spelling.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchFieldSet {
    fields: IndexSet<String>,
}

impl MatchFieldSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, moving it to the end if already present.
    pub fn add(&mut self, field: impl Into<String>) {
        let field = field.into();
        self.remove(&field);
        self.fields.insert(field);
    }

    /// Remove a field (case-insensitive). Returns `true` if it was present.
    pub fn remove(&mut self, field: &str) -> bool {
        match self.position(field) {
            Some(i) => self.fields.shift_remove_index(i).is_some(),
            None => false,
        }
    }

    /// Check whether a field is significant (case-insensitive).
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.position(field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn position(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.eq_ignore_ascii_case(field))
    }
}

impl<S: Into<String>> FromIterator<S> for MatchFieldSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = MatchFieldSet::new();
        for field in iter {
            set.add(field);
        }
        set
    }
}
