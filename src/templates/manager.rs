//! Template registration and selection.
//!
//! Renderers ask the manager which layout to draw for a card. Selection runs
//! in one of two modes, chosen by `TemplateConfig::use_multi_field_matching`:
//!
//! - **Single-field**: the first registered `FieldMappingRule` names a card
//!   field whose value is the template id.
//! - **Multi-field**: `MultiFieldMatcher` scores every template against the
//!   significant fields.
//!
//! Either way a miss falls back to the default template, which may itself be
//! unregistered (`None`).
//!
//! Registration is configuration-time work and takes `&mut self`; share a
//! manager across threads only behind the caller's own lock.

use indexmap::IndexMap;
use tracing::debug;

use crate::cards::FieldMapping;
use crate::core::TemplateConfig;

use super::descriptor::{FieldMappingRule, MatchFieldSet, TemplateDescriptor};
use super::matcher::{FieldComparator, IgnoreCase, MultiFieldMatcher};

/// Registry of proxy templates.
///
/// `C` compares template criteria with card values in multi-field mode;
/// use `with_matcher` to supply one other than `IgnoreCase`.
///
/// ## Example
///
/// ```
/// use card_imagery::cards::FieldMapping;
/// use card_imagery::core::TemplateConfig;
/// use card_imagery::templates::{TemplateDescriptor, TemplateManager};
///
/// let mut manager = TemplateManager::<()>::new(TemplateConfig::default().with_default("generic"));
/// manager.add_template(TemplateDescriptor::new("generic"));
/// manager.add_template(TemplateDescriptor::new("Hero"));
/// manager.add_mapping("type");
///
/// let fields = FieldMapping::new().with("type", "Hero");
/// assert_eq!(manager.select_by_fields(&fields).unwrap().id, "Hero");
/// ```
#[derive(Clone, Debug)]
pub struct TemplateManager<I = (), C = IgnoreCase> {
    config: TemplateConfig,
    templates: IndexMap<String, TemplateDescriptor<I>>,
    rules: IndexMap<String, FieldMappingRule>,
    significant: MatchFieldSet,
    matcher: MultiFieldMatcher<C>,
}

impl<I> Default for TemplateManager<I> {
    fn default() -> Self {
        Self::new(TemplateConfig::default())
    }
}

impl<I> TemplateManager<I> {
    /// Create a manager comparing values case-insensitively.
    #[must_use]
    pub fn new(config: TemplateConfig) -> Self {
        Self::with_matcher(config, MultiFieldMatcher::default())
    }
}

impl<I, C: FieldComparator> TemplateManager<I, C> {
    /// Create a manager with a custom multi-field matcher.
    #[must_use]
    pub fn with_matcher(config: TemplateConfig, matcher: MultiFieldMatcher<C>) -> Self {
        Self {
            config,
            templates: IndexMap::new(),
            rules: IndexMap::new(),
            significant: MatchFieldSet::new(),
            matcher,
        }
    }

    #[must_use]
    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    /// Change the default template id.
    pub fn set_default_id(&mut self, id: impl Into<String>) {
        self.config.default_id = Some(id.into());
    }

    /// Switch between single-field and multi-field selection.
    pub fn set_multi_field_matching(&mut self, enabled: bool) {
        self.config.use_multi_field_matching = enabled;
    }

    // --- templates ---

    /// Register a template.
    ///
    /// A template with the same id is replaced and the new one moves to the
    /// end of the registration order.
    pub fn add_template(&mut self, template: TemplateDescriptor<I>) {
        if self.templates.shift_remove(&template.id).is_some() {
            debug!("Replacing template {}", template.id);
        }
        self.templates.insert(template.id.clone(), template);
    }

    /// Remove every template.
    pub fn clear_templates(&mut self) {
        self.templates.clear();
    }

    /// Templates in registration order.
    pub fn templates(&self) -> impl Iterator<Item = &TemplateDescriptor<I>> {
        self.templates.values()
    }

    #[must_use]
    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    // --- field mapping rules ---

    /// Register a single-field rule with no target name.
    pub fn add_mapping(&mut self, field: impl Into<String>) {
        self.add_rule(FieldMappingRule::new(field));
    }

    /// Register a single-field rule mapping `field` to `map_to`.
    pub fn add_mapping_to(&mut self, field: impl Into<String>, map_to: impl Into<String>) {
        self.add_rule(FieldMappingRule::new(field).with_target(map_to));
    }

    /// Register a rule, replacing any rule for the same field.
    pub fn add_rule(&mut self, rule: FieldMappingRule) {
        self.rules.shift_remove(&rule.name);
        self.rules.insert(rule.name.clone(), rule);
    }

    #[must_use]
    pub fn contains_mapping(&self, field: &str) -> bool {
        self.rules.contains_key(field)
    }

    /// Rules in registration order.
    pub fn rules(&self) -> impl Iterator<Item = &FieldMappingRule> {
        self.rules.values()
    }

    // --- significant fields ---

    /// Mark a field as significant for multi-field matching.
    pub fn add_match(&mut self, field: impl Into<String>) {
        self.significant.add(field);
    }

    #[must_use]
    pub fn contains_match(&self, field: &str) -> bool {
        self.significant.contains(field)
    }

    /// Unmark a field. Returns `true` if it was marked.
    pub fn remove_match(&mut self, field: &str) -> bool {
        self.significant.remove(field)
    }

    #[must_use]
    pub fn significant_fields(&self) -> &MatchFieldSet {
        &self.significant
    }

    // --- selection ---

    /// The configured default template, if registered.
    #[must_use]
    pub fn default_template(&self) -> Option<&TemplateDescriptor<I>> {
        self.config
            .default_id
            .as_deref()
            .and_then(|id| self.templates.get(id))
    }

    /// Template with the given id, or the default template.
    #[must_use]
    pub fn select_by_id(&self, id: &str) -> Option<&TemplateDescriptor<I>> {
        self.templates.get(id).or_else(|| self.default_template())
    }

    /// Template for a card's field values, or the default template.
    ///
    /// In single-field mode with no rules registered this is always the
    /// default template.
    #[must_use]
    pub fn select_by_fields(&self, fields: &FieldMapping) -> Option<&TemplateDescriptor<I>> {
        if self.config.use_multi_field_matching {
            return self
                .matcher
                .best_match(self.templates.values(), fields, &self.significant)
                .or_else(|| self.default_template());
        }

        match self
            .rules
            .first()
            .and_then(|(_, rule)| fields.get(&rule.name))
        {
            Some(id) => self.select_by_id(id),
            None => self.default_template(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::Exact;
    use proptest::prelude::*;

    fn manager() -> TemplateManager<&'static str> {
        let mut manager = TemplateManager::new(TemplateConfig::default().with_default("generic"));
        manager.add_template(TemplateDescriptor::with_instructions("generic", "generic.xml"));
        manager.add_template(TemplateDescriptor::with_instructions("Hero", "hero.xml"));
        manager
    }

    #[test]
    fn test_single_field_selects_by_value() {
        let mut manager = manager();
        manager.add_mapping_to("type", "");

        let fields = FieldMapping::new().with("type", "Hero");
        assert_eq!(manager.select_by_fields(&fields).unwrap().id, "Hero");
    }

    #[test]
    fn test_unknown_id_falls_back_to_default() {
        let mut manager = manager();
        manager.add_mapping("type");

        let fields = FieldMapping::new().with("type", "Villain");
        assert_eq!(manager.select_by_fields(&fields).unwrap().id, "generic");
        assert_eq!(manager.select_by_id("Villain").unwrap().id, "generic");
    }

    #[test]
    fn test_missing_field_falls_back_to_default() {
        let mut manager = manager();
        manager.add_mapping("type");

        let fields = FieldMapping::new().with("cost", "3");
        assert_eq!(manager.select_by_fields(&fields).unwrap().id, "generic");
    }

    #[test]
    fn test_no_rules_falls_back_to_default() {
        let manager = manager();
        let fields = FieldMapping::new().with("type", "Hero");
        assert_eq!(manager.select_by_fields(&fields).unwrap().id, "generic");
    }

    #[test]
    fn test_only_first_rule_consulted() {
        let mut manager = manager();
        manager.add_mapping("kind");
        manager.add_mapping("type");

        let fields = FieldMapping::new().with("type", "Hero");
        assert_eq!(manager.select_by_fields(&fields).unwrap().id, "generic");
    }

    #[test]
    fn test_unregistered_default_is_none() {
        let mut manager = TemplateManager::<()>::new(TemplateConfig::default().with_default("generic"));
        manager.add_template(TemplateDescriptor::new("Hero"));

        assert!(manager.default_template().is_none());
        assert!(manager.select_by_id("Villain").is_none());
        assert_eq!(manager.select_by_id("Hero").unwrap().id, "Hero");
    }

    #[test]
    fn test_template_readd_replaces_and_moves() {
        let mut manager = manager();
        manager.add_template(TemplateDescriptor::with_instructions("generic", "v2.xml"));

        assert_eq!(manager.template_count(), 2);
        let ids: Vec<_> = manager.templates().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["Hero", "generic"]);
        assert_eq!(manager.default_template().unwrap().instructions, "v2.xml");
    }

    #[test]
    fn test_rule_readd_replaces() {
        let mut manager = manager();
        manager.add_mapping_to("type", "Kind");
        manager.add_mapping("faction");
        manager.add_mapping_to("type", "Class");

        let rules: Vec<_> = manager.rules().collect();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].name, "faction");
        assert_eq!(rules[1].map_to.as_deref(), Some("Class"));
        assert!(manager.contains_mapping("type"));
        assert!(!manager.contains_mapping("cost"));
    }

    #[test]
    fn test_multi_field_mode() {
        let mut manager = manager();
        manager.set_multi_field_matching(true);
        manager.add_template(
            TemplateDescriptor::with_instructions("stark-hero", "stark.xml")
                .with_match("Type", "Hero")
                .with_match("Faction", "Stark"),
        );
        manager.add_match("Type");
        manager.add_match("Faction");

        let stark = FieldMapping::new().with("Type", "Hero").with("Faction", "Stark");
        assert_eq!(manager.select_by_fields(&stark).unwrap().id, "stark-hero");

        let other = FieldMapping::new().with("Type", "Hero").with("Faction", "Greyjoy");
        assert_eq!(manager.select_by_fields(&other).unwrap().id, "generic");
    }

    #[test]
    fn test_multi_field_custom_comparator() {
        let config = TemplateConfig::default()
            .with_default("generic")
            .with_multi_field_matching(true);
        let mut manager =
            TemplateManager::<(), Exact>::with_matcher(config, MultiFieldMatcher::new(Exact));
        manager.add_template(TemplateDescriptor::new("generic"));
        manager.add_template(TemplateDescriptor::new("stark").with_match("Faction", "Stark"));
        manager.add_match("Faction");

        let exact = FieldMapping::new().with("Faction", "Stark");
        assert_eq!(manager.select_by_fields(&exact).unwrap().id, "stark");

        let lowercase = FieldMapping::new().with("Faction", "stark");
        assert_eq!(manager.select_by_fields(&lowercase).unwrap().id, "generic");
    }

    #[test]
    fn test_multi_field_ignores_rules() {
        let mut manager = manager();
        manager.set_multi_field_matching(true);
        manager.add_mapping("type");

        // Rules only apply in single-field mode; nothing declares criteria here.
        let fields = FieldMapping::new().with("type", "Hero");
        assert_eq!(manager.select_by_fields(&fields).unwrap().id, "generic");
    }

    #[test]
    fn test_match_toggle() {
        let mut manager = manager();
        manager.add_match("Type");
        manager.add_match("Type");
        assert_eq!(manager.significant_fields().len(), 1);
        assert!(manager.remove_match("Type"));
        assert!(!manager.contains_match("Type"));
    }

    #[test]
    fn test_clear_templates() {
        let mut manager = manager();
        manager.clear_templates();
        assert_eq!(manager.template_count(), 0);
        assert!(manager.default_template().is_none());
    }

    proptest! {
        #[test]
        fn prop_templates_unique_and_last_registration_wins(
            ids in prop::collection::vec(0u8..6, 0..40)
        ) {
            let mut manager = TemplateManager::<usize>::default();
            for (n, id) in ids.iter().enumerate() {
                manager.add_template(TemplateDescriptor::with_instructions(id.to_string(), n));
            }

            // Expected order: ids by position of their last registration.
            let mut expected: Vec<(String, usize)> = Vec::new();
            for (n, id) in ids.iter().enumerate() {
                let id = id.to_string();
                expected.retain(|(e, _)| *e != id);
                expected.push((id, n));
            }

            let actual: Vec<(String, usize)> = manager
                .templates()
                .map(|t| (t.id.clone(), t.instructions))
                .collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
