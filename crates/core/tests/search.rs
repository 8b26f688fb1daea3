mod common;

use bluescope_api::models::DetailLevel;
use common::sample_project;
use indexmap::IndexMap;

#[test]
fn test_combined_filters_use_and_semantics() {
    let handle = sample_project();

    // Both Enemy and BaseCharacter declare functions; only Enemy matches
    // the name filter as well.
    let mut params = IndexMap::new();
    params.insert("Name".to_string(), "enem".to_string());
    params.insert("Function".to_string(), "damage".to_string());

    let results = handle.search_with_parameters(&params, DetailLevel::Basic);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Enemy");

    // Tightening the function filter to something Enemy lacks empties it.
    params.insert("Function".to_string(), "heal".to_string());
    assert!(handle
        .search_with_parameters(&params, DetailLevel::Basic)
        .is_empty());
}

#[test]
fn test_search_upgrades_matches_to_requested_level() {
    let handle = sample_project();

    let results = handle.search_by_function("TakeDamage", &[], DetailLevel::Full);
    assert_eq!(results.len(), 1);

    // Full projection restores what the Medium scan had stripped.
    let function = &results[0].functions[0];
    assert_eq!(function.description, "Subtracts incoming damage from health");
}

#[test]
fn test_search_by_parent_class_substring() {
    let handle = sample_project();

    let results = handle.search_by_parent_class("basechar", DetailLevel::Basic);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Enemy");
}

#[test]
fn test_function_search_with_positional_param_types() {
    let handle = sample_project();

    let int_param = vec!["int".to_string()];
    let results = handle.search_by_function("TakeDamage", &int_param, DetailLevel::Basic);
    assert_eq!(results.len(), 1);

    let wrong = vec!["vector".to_string()];
    assert!(handle
        .search_by_function("TakeDamage", &wrong, DetailLevel::Basic)
        .is_empty());
}
