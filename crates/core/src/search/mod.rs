//! Linear-scan search over the asset catalog.
//!
//! Scans run at the cheapest detail level the predicate can be answered
//! from: registry tags (Basic) for name/parent/path, a Medium projection
//! when function or variable bodies must be inspected. When the caller
//! wants more detail than the scan used, matches are re-projected in a
//! second pass.

use bluescope_api::models::{BlueprintView, DetailLevel, ExtractOptions, ExtractionMode};
use indexmap::IndexMap;

use crate::asset::AssetStore;
use crate::extract;
use crate::references::ReferenceResolver;

pub fn search_by_name(
    store: &dyn AssetStore,
    resolver: &ReferenceResolver,
    query: &str,
    level: DetailLevel,
) -> Vec<BlueprintView> {
    let mut results: Vec<_> = extract::all_blueprints(store, DetailLevel::Basic)
        .into_iter()
        .filter(|view| contains_ci(&view.name, query))
        .collect();
    upgrade(store, resolver, &mut results, level, DetailLevel::Basic);
    results
}

pub fn search_by_parent_class(
    store: &dyn AssetStore,
    resolver: &ReferenceResolver,
    query: &str,
    level: DetailLevel,
) -> Vec<BlueprintView> {
    let mut results: Vec<_> = extract::all_blueprints(store, DetailLevel::Basic)
        .into_iter()
        .filter(|view| contains_ci(&view.parent_class, query))
        .collect();
    upgrade(store, resolver, &mut results, level, DetailLevel::Basic);
    results
}

pub fn search_by_function(
    store: &dyn AssetStore,
    resolver: &ReferenceResolver,
    name: &str,
    param_types: &[String],
    level: DetailLevel,
) -> Vec<BlueprintView> {
    let mut results: Vec<_> = extract::all_blueprints(store, DetailLevel::Medium)
        .into_iter()
        .filter(|view| {
            view.functions.iter().any(|function| {
                if !contains_ci(&function.name, name) {
                    return false;
                }
                if param_types.is_empty() {
                    return true;
                }
                // Positional check: the candidate needs at least as many
                // params, each containing the requested type text.
                function.params.len() >= param_types.len()
                    && param_types.iter().enumerate().all(|(i, wanted)| {
                        contains_ci(&function.params[i].param_type, wanted)
                    })
            })
        })
        .collect();
    upgrade(store, resolver, &mut results, level, DetailLevel::Medium);
    results
}

pub fn search_by_variable(
    store: &dyn AssetStore,
    resolver: &ReferenceResolver,
    name: &str,
    var_type: Option<&str>,
    level: DetailLevel,
) -> Vec<BlueprintView> {
    let mut results: Vec<_> = extract::all_blueprints(store, DetailLevel::Medium)
        .into_iter()
        .filter(|view| {
            view.variables.iter().any(|variable| {
                contains_ci(&variable.name, name)
                    && var_type.is_none_or(|wanted| contains_ci(&variable.var_type, wanted))
            })
        })
        .collect();
    upgrade(store, resolver, &mut results, level, DetailLevel::Medium);
    results
}

/// Apply the given filters sequentially; each narrows the previous result
/// set (AND semantics). Recognized keys, case-insensitive: Name,
/// ParentClass, Function, Variable, Path. An unrecognized key matches
/// nothing and therefore empties the result set.
pub fn search_with_parameters(
    store: &dyn AssetStore,
    resolver: &ReferenceResolver,
    params: &IndexMap<String, String>,
    level: DetailLevel,
) -> Vec<BlueprintView> {
    let needs_members = params
        .keys()
        .any(|key| key.eq_ignore_ascii_case("Function") || key.eq_ignore_ascii_case("Variable"));
    let scan_level = if needs_members {
        DetailLevel::Medium
    } else {
        DetailLevel::Basic
    };

    let mut results = extract::all_blueprints(store, scan_level);

    for (key, value) in params {
        results = if key.eq_ignore_ascii_case("Name") {
            results
                .into_iter()
                .filter(|view| contains_ci(&view.name, value))
                .collect()
        } else if key.eq_ignore_ascii_case("ParentClass") {
            results
                .into_iter()
                .filter(|view| contains_ci(&view.parent_class, value))
                .collect()
        } else if key.eq_ignore_ascii_case("Function") {
            results
                .into_iter()
                .filter(|view| view.functions.iter().any(|f| contains_ci(&f.name, value)))
                .collect()
        } else if key.eq_ignore_ascii_case("Variable") {
            results
                .into_iter()
                .filter(|view| view.variables.iter().any(|v| contains_ci(&v.name, value)))
                .collect()
        } else if key.eq_ignore_ascii_case("Path") {
            results
                .into_iter()
                .filter(|view| contains_ci(&view.path, value))
                .collect()
        } else {
            Vec::new()
        };
    }

    upgrade(store, resolver, &mut results, level, scan_level);
    results
}

/// Re-project matches when the caller asked for more than the scan used.
fn upgrade(
    store: &dyn AssetStore,
    resolver: &ReferenceResolver,
    results: &mut [BlueprintView],
    requested: DetailLevel,
    used: DetailLevel,
) {
    if requested <= used {
        return;
    }
    for view in results.iter_mut() {
        if let Some(detailed) = extract::blueprint_by_path(
            store,
            resolver,
            &view.path,
            requested,
            ExtractionMode::None,
            &ExtractOptions::default(),
        ) {
            *view = detailed;
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
