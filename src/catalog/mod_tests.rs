use std::collections::HashSet;

use super::*;

fn id_key(id: &str) -> Vec<u32> {
    id.split('.').map(|part| part.parse().unwrap()).collect()
}

#[test]
fn catalog_contains_all_a_and_aa_criteria() {
    let criteria = wcag22_criteria();
    assert_eq!(criteria.len(), 55);
    assert_eq!(criteria.iter().filter(|c| c.level == Level::A).count(), 31);
    assert_eq!(criteria.iter().filter(|c| c.level == Level::AA).count(), 24);
    assert!(criteria.iter().all(|c| c.level != Level::AAA));
}

#[test]
fn ids_are_unique() {
    let ids: HashSet<_> = wcag22_criteria().iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), wcag22_criteria().len());
}

#[test]
fn catalog_is_in_numeric_order() {
    let keys: Vec<_> = wcag22_criteria().iter().map(|c| id_key(c.id)).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn rule_ids_have_no_duplicates_within_a_criterion() {
    for criterion in wcag22_criteria() {
        let unique: HashSet<_> = criterion.rule_ids.iter().collect();
        assert_eq!(
            unique.len(),
            criterion.rule_ids.len(),
            "duplicate rule in {}",
            criterion.id
        );
    }
}

#[test]
fn non_text_content_mapping_is_preserved() {
    let c = criterion_by_id("1.1.1").unwrap();
    assert_eq!(c.name, "Non-text Content");
    assert_eq!(c.level, Level::A);
    assert_eq!(
        c.rule_ids,
        &[
            "image-alt",
            "input-image-alt",
            "area-alt",
            "object-alt",
            "svg-img-alt"
        ]
    );
    assert!(c.can_automate);
}

#[test]
fn info_and_relationships_mapping_is_preserved() {
    let c = criterion_by_id("1.3.1").unwrap();
    for rule in [
        "definition-list",
        "dlitem",
        "list",
        "listitem",
        "table-fake-caption",
        "td-headers-attr",
        "th-has-data-cells",
        "empty-table-header",
        "scope-attr-valid",
        "p-as-heading",
    ] {
        assert!(c.rule_ids.contains(&rule), "missing {rule}");
    }
    assert!(c.can_automate);
}

#[test]
fn single_rule_mappings_are_preserved() {
    let contrast = criterion_by_id("1.4.3").unwrap();
    assert_eq!(contrast.rule_ids, &["color-contrast"]);
    assert_eq!(contrast.level, Level::AA);

    assert_eq!(criterion_by_id("2.4.1").unwrap().rule_ids, &["bypass", "region"]);
    assert_eq!(criterion_by_id("2.4.2").unwrap().rule_ids, &["document-title"]);
    assert_eq!(
        criterion_by_id("3.1.1").unwrap().rule_ids,
        &["html-has-lang", "html-lang-valid"]
    );
}

#[test]
fn name_role_value_covers_aria_rules() {
    let c = criterion_by_id("4.1.2").unwrap();
    assert_eq!(c.rule_ids.len(), 24);
    assert!(c.rule_ids.contains(&"button-name"));
    assert!(c.rule_ids.contains(&"frame-title"));
    assert!(c.rule_ids.contains(&"label"));
    assert!(c.can_automate);
}

#[test]
fn status_messages_is_not_automatable() {
    let c = criterion_by_id("4.1.3").unwrap();
    assert_eq!(c.rule_ids, &["aria-live-region-attr"]);
    assert!(!c.can_automate);
}

#[test]
fn manual_only_criteria_have_no_rules() {
    for id in ["1.2.3", "1.4.10", "2.1.2", "2.4.7", "3.3.1"] {
        let c = criterion_by_id(id).unwrap();
        assert!(!c.has_rules(), "{id} should have no rules");
    }
}

#[test]
fn filter_by_level_preserves_order() {
    let aa = criteria_by_level(&[Level::AA]);
    assert_eq!(aa.len(), 24);
    assert!(aa.iter().all(|c| c.level == Level::AA));
    assert_eq!(aa.first().unwrap().id, "1.2.4");

    let both = criteria_by_level(&[Level::A, Level::AA]);
    assert_eq!(both, wcag22_criteria().to_vec());

    assert!(criteria_by_level(&[Level::AAA]).is_empty());
}

#[test]
fn filter_automatable() {
    let automated = automatable_criteria();
    assert_eq!(automated.len(), 14);
    assert!(automated.iter().all(|c| c.can_automate && c.has_rules()));
    assert_eq!(automated.first().unwrap().id, "1.1.1");
    assert_eq!(automated.last().unwrap().id, "4.1.2");
}

#[test]
fn reverse_rule_lookup() {
    let hits = criteria_for_rule("color-contrast");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "1.4.3");
    assert!(criteria_for_rule("not-a-rule").is_empty());
}

#[test]
fn unknown_id_lookup_returns_none() {
    assert!(criterion_by_id("9.9.9").is_none());
    assert!(criterion_by_id("4.1.1").is_none());
}

#[test]
fn level_parses_case_insensitively() {
    assert_eq!("a".parse::<Level>().unwrap(), Level::A);
    assert_eq!("Aa".parse::<Level>().unwrap(), Level::AA);
    assert_eq!("AAA".parse::<Level>().unwrap(), Level::AAA);
    assert!("B".parse::<Level>().is_err());
}

#[test]
fn level_serializes_as_token() {
    assert_eq!(serde_json::to_string(&Level::AA).unwrap(), "\"AA\"");
    assert_eq!(Level::A.to_string(), "A");
}

#[test]
fn principle_from_id() {
    assert_eq!(Principle::of("1.4.3"), Some(Principle::Perceivable));
    assert_eq!(Principle::of("2.4.1"), Some(Principle::Operable));
    assert_eq!(Principle::of("3.1.1"), Some(Principle::Understandable));
    assert_eq!(Principle::of("4.1.2"), Some(Principle::Robust));
    assert_eq!(Principle::of("5.1.1"), None);
    assert_eq!(Principle::Operable.heading(), "2. Operable");
}

#[test]
fn every_criterion_has_a_principle() {
    assert!(wcag22_criteria().iter().all(|c| c.principle().is_some()));
}
