//! Template selection integration tests.
//!
//! These drive the manager the way a proxy renderer does: field values come
//! from `proxy_mappings` on a real card.

use card_imagery::cards::{proxy_mappings, Card, FieldMapping, PropertyDef, PropertySet};
use card_imagery::core::{CardId, ContainerId, TemplateConfig};
use card_imagery::templates::{TemplateDescriptor, TemplateManager};

fn hero_card() -> Card {
    Card::new(CardId::random(), ContainerId::random(), "Aragorn").with_properties(
        "",
        PropertySet::new()
            .with_value("type", "Hero")
            .with_value("Sphere", "Leadership")
            .with_value("Cost", 12i32)
            .with(PropertyDef::undefined("Keywords"), ""),
    )
}

fn manager(multi: bool) -> TemplateManager<String> {
    let config = TemplateConfig::default()
        .with_default("generic")
        .with_multi_field_matching(multi);
    let mut manager = TemplateManager::new(config);
    manager.add_template(TemplateDescriptor::with_instructions("generic", "generic".to_string()));
    manager.add_template(
        TemplateDescriptor::with_instructions("Hero", "hero".to_string())
            .with_match("type", "Hero"),
    );
    manager.add_template(
        TemplateDescriptor::with_instructions("leadership-hero", "leadership".to_string())
            .with_match("type", "Hero")
            .with_match("Sphere", "Leadership"),
    );
    manager
}

#[test]
fn test_single_field_mapping_from_card() {
    let mut manager = manager(false);
    manager.add_mapping_to("type", "");

    let fields = proxy_mappings(&hero_card());
    assert_eq!(manager.select_by_fields(&fields).unwrap().id, "Hero");
}

#[test]
fn test_no_matching_id_uses_default() {
    let mut manager = manager(false);
    manager.add_mapping("Sphere");

    let fields = proxy_mappings(&hero_card());
    let selected = manager.select_by_fields(&fields).unwrap();
    assert_eq!(selected.id, "generic");
    assert_eq!(selected.instructions, "generic");
}

#[test]
fn test_multi_field_prefers_most_specific() {
    let mut manager = manager(true);
    manager.add_match("type");
    manager.add_match("Sphere");

    let fields = proxy_mappings(&hero_card());
    assert_eq!(manager.select_by_fields(&fields).unwrap().id, "leadership-hero");
}

#[test]
fn test_multi_field_respects_significant_set() {
    let mut manager = manager(true);
    manager.add_match("type");

    // Sphere is not significant, so both hero templates score one and the
    // earlier registration wins.
    let fields = proxy_mappings(&hero_card());
    assert_eq!(manager.select_by_fields(&fields).unwrap().id, "Hero");

    manager.remove_match("type");
    assert_eq!(manager.select_by_fields(&fields).unwrap().id, "generic");
}

#[test]
fn test_reregistration_replaces() {
    let mut manager = manager(false);
    manager.add_mapping("type");
    manager.add_template(TemplateDescriptor::with_instructions("Hero", "hero-v2".to_string()));
    manager.add_mapping_to("type", "Kind");

    assert_eq!(manager.template_count(), 3);
    assert_eq!(manager.rules().count(), 1);

    let fields = FieldMapping::new().with("type", "Hero");
    let selected = manager.select_by_fields(&fields).unwrap();
    assert_eq!(selected.instructions, "hero-v2");
    assert!(selected.matches.is_empty());
}

#[test]
fn test_missing_default_is_none() {
    let mut manager = TemplateManager::<()>::new(TemplateConfig::default());
    manager.add_mapping("type");
    manager.add_template(TemplateDescriptor::new("Hero"));

    let fields = FieldMapping::new().with("type", "Villain");
    assert!(manager.select_by_fields(&fields).is_none());
}
