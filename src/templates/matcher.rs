//! Multi-field template matching.
//!
//! Each template declares the field values it is meant for. Only criteria on
//! significant fields are considered: every one of them must hold for the
//! template to be a candidate, and the candidate with the most satisfied
//! criteria wins. Ties go to the template registered first. A template with
//! no significant criteria is never chosen.

use crate::cards::FieldMapping;

use super::descriptor::{MatchFieldSet, TemplateDescriptor};

/// Compares a template's expected value with a card's observed value.
pub trait FieldComparator {
    fn matches(&self, expected: &str, observed: &str) -> bool;
}

/// ASCII case-insensitive equality.
#[derive(Clone, Copy, Debug, Default)]
pub struct IgnoreCase;

impl FieldComparator for IgnoreCase {
    fn matches(&self, expected: &str, observed: &str) -> bool {
        expected.eq_ignore_ascii_case(observed)
    }
}

/// Exact string equality.
#[derive(Clone, Copy, Debug, Default)]
pub struct Exact;

impl FieldComparator for Exact {
    fn matches(&self, expected: &str, observed: &str) -> bool {
        expected == observed
    }
}

/// Picks the best template for a set of field values.
#[derive(Clone, Debug, Default)]
pub struct MultiFieldMatcher<C = IgnoreCase> {
    comparator: C,
}

impl<C: FieldComparator> MultiFieldMatcher<C> {
    #[must_use]
    pub fn new(comparator: C) -> Self {
        Self { comparator }
    }

    /// Find the best matching template, if any qualifies.
    pub fn best_match<'a, I: 'a>(
        &self,
        templates: impl IntoIterator<Item = &'a TemplateDescriptor<I>>,
        fields: &FieldMapping,
        significant: &MatchFieldSet,
    ) -> Option<&'a TemplateDescriptor<I>> {
        let mut best: Option<(&TemplateDescriptor<I>, usize)> = None;
        for template in templates {
            let Some(score) = self.score(template, fields, significant) else {
                continue;
            };
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((template, score));
            }
        }
        best.map(|(template, _)| template)
    }

    /// Number of satisfied significant criteria.
    ///
    /// `None` if any significant criterion fails or none apply.
    pub fn score<I>(
        &self,
        template: &TemplateDescriptor<I>,
        fields: &FieldMapping,
        significant: &MatchFieldSet,
    ) -> Option<usize> {
        let mut score = 0;
        for criterion in template
            .matches
            .iter()
            .filter(|c| significant.contains(&c.field))
        {
            let observed = fields.get(&criterion.field)?;
            if !self.comparator.matches(&criterion.value, observed) {
                return None;
            }
            score += 1;
        }
        (score > 0).then_some(score)
    }
}
