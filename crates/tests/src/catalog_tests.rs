use pretty_assertions::assert_eq;
use shared_types::event_catalog;
use std::collections::HashSet;

#[test]
fn catalog_has_four_events() {
    assert_eq!(event_catalog().len(), 4);
}

#[test]
fn catalog_titles_are_unique() {
    let catalog = event_catalog();
    let titles: HashSet<&str> = catalog.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles.len(), catalog.len());
}

#[test]
fn catalog_entries_are_fully_populated() {
    for event in event_catalog() {
        assert!(!event.title.is_empty());
        assert!(!event.description.is_empty());
        assert!(!event.image_url.is_empty());
    }
}

#[test]
fn catalog_is_stable_across_calls() {
    assert_eq!(event_catalog(), event_catalog());
}
