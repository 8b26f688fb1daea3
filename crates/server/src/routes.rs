//! HTTP route handlers: query-string parameters in, typed core calls out.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use indexmap::IndexMap;
use serde::Deserialize;

use bluescope_api::models::{
    BlueprintView, DetailLevel, ExtractOptions, ExtractionMode, GraphView, NodeView, ReferenceView,
};
use bluescope_core::AnalyzerHandle;

use crate::docs;
use crate::error::ApiFailure;

#[derive(Clone)]
pub struct AppState {
    pub handle: AnalyzerHandle,
}

pub fn router(handle: AnalyzerHandle) -> Router {
    Router::new()
        .route("/blueprints/all", get(list_all_blueprints))
        .route("/blueprints/search", get(search_blueprints))
        .route("/blueprints/path", get(blueprint_by_path))
        .route("/blueprints/function", get(function_graph))
        .route("/blueprints/nodes", get(nodes_by_type))
        .route("/blueprints/events", get(event_nodes))
        .route("/blueprints/event-graph", get(event_graph))
        .route("/blueprints/references", get(blueprint_references))
        .route("/docs", get(docs::documentation))
        .with_state(AppState { handle })
}

fn parse_detail(
    value: Option<&str>,
    default: (DetailLevel, ExtractionMode),
) -> Result<(DetailLevel, ExtractionMode), ApiFailure> {
    match value {
        None => Ok(default),
        Some(raw) => DetailLevel::parse_request(raw)
            .ok_or_else(|| ApiFailure::bad_request(format!("Unknown detailLevel: {raw}"))),
    }
}

/// Offset/limit windowing for list responses; a zero limit means all.
fn page<T>(items: Vec<T>, offset: usize, limit: usize) -> Vec<T> {
    let iter = items.into_iter().skip(offset);
    if limit > 0 {
        iter.take(limit).collect()
    } else {
        iter.collect()
    }
}

fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    detail_level: Option<String>,
    #[serde(default)]
    limit: usize,
    #[serde(default)]
    offset: usize,
}

async fn list_all_blueprints(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<BlueprintView>>, ApiFailure> {
    let (level, mode) =
        parse_detail(query.detail_level.as_deref(), (DetailLevel::Basic, ExtractionMode::None))?;

    let views = if mode == ExtractionMode::None {
        state.handle.all_blueprints(level)
    } else {
        // Mode payloads need a per-asset projection pass.
        state
            .handle
            .all_blueprints(DetailLevel::Basic)
            .iter()
            .filter_map(|summary| {
                state.handle.blueprint_by_path(
                    &summary.path,
                    level,
                    mode,
                    &ExtractOptions::default(),
                )
            })
            .collect()
    };

    Ok(Json(page(views, query.offset, query.limit)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    query: Option<String>,
    #[serde(rename = "type")]
    search_type: Option<String>,
    detail_level: Option<String>,
    #[serde(default)]
    limit: usize,
    #[serde(default)]
    offset: usize,
    // Dedicated multi-key filters, combined with AND semantics.
    name: Option<String>,
    parent_class: Option<String>,
    function: Option<String>,
    variable: Option<String>,
    path: Option<String>,
}

async fn search_blueprints(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<BlueprintView>>, ApiFailure> {
    let (level, _) =
        parse_detail(query.detail_level.as_deref(), (DetailLevel::Basic, ExtractionMode::None))?;

    let results = if let Some(text) = &query.query {
        let search_type = query.search_type.as_deref().unwrap_or("name");
        match search_type {
            "name" => state.handle.search_by_name(text, level),
            "parentClass" => state.handle.search_by_parent_class(text, level),
            "function" => state.handle.search_by_function(text, &[], level),
            "variable" => state.handle.search_by_variable(text, None, level),
            other => {
                return Err(ApiFailure::bad_request(format!(
                    "Unknown search type: {other}"
                )))
            }
        }
    } else {
        let mut params = IndexMap::new();
        if let Some(value) = &query.name {
            params.insert("Name".to_string(), value.clone());
        }
        if let Some(value) = &query.parent_class {
            params.insert("ParentClass".to_string(), value.clone());
        }
        if let Some(value) = &query.function {
            params.insert("Function".to_string(), value.clone());
        }
        if let Some(value) = &query.variable {
            params.insert("Variable".to_string(), value.clone());
        }
        if let Some(value) = &query.path {
            params.insert("Path".to_string(), value.clone());
        }
        if params.is_empty() {
            return Err(ApiFailure::bad_request("Missing 'query' parameter"));
        }
        state.handle.search_with_parameters(&params, level)
    };

    Ok(Json(page(results, query.offset, query.limit)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathQuery {
    path: Option<String>,
    detail_level: Option<String>,
    graph_name: Option<String>,
    #[serde(default)]
    max_graphs: usize,
    #[serde(default)]
    max_nodes: usize,
}

async fn blueprint_by_path(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<Json<BlueprintView>, ApiFailure> {
    let path = query
        .path
        .as_deref()
        .ok_or_else(|| ApiFailure::bad_request("Missing 'path' query parameter"))?;
    let (level, mode) =
        parse_detail(query.detail_level.as_deref(), (DetailLevel::Full, ExtractionMode::None))?;

    let options = ExtractOptions {
        graph_filter: query.graph_name.clone(),
        max_graphs: query.max_graphs,
        max_nodes: query.max_nodes,
    };

    state
        .handle
        .blueprint_by_path(path, level, mode, &options)
        .map(Json)
        .ok_or_else(|| ApiFailure::not_found(format!("Blueprint not found at path: {path}")))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionQuery {
    path: Option<String>,
    function: Option<String>,
}

async fn function_graph(
    State(state): State<AppState>,
    Query(query): Query<FunctionQuery>,
) -> Result<Json<GraphView>, ApiFailure> {
    let path = query
        .path
        .as_deref()
        .ok_or_else(|| ApiFailure::bad_request("Missing 'path' parameter"))?;
    let function = query
        .function
        .as_deref()
        .ok_or_else(|| ApiFailure::bad_request("Missing 'function' parameter"))?;

    let view = state
        .handle
        .blueprint_by_path(
            path,
            DetailLevel::Full,
            ExtractionMode::Graphs,
            &ExtractOptions::with_graph_filter(function),
        )
        .ok_or_else(|| ApiFailure::not_found(format!("Blueprint not found at path: {path}")))?;

    view.graphs
        .into_iter()
        .next()
        .map(Json)
        .ok_or_else(|| ApiFailure::not_found(format!("Function graph not found: {function}")))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodesQuery {
    path: Option<String>,
    node_type: Option<String>,
}

async fn nodes_by_type(
    State(state): State<AppState>,
    Query(query): Query<NodesQuery>,
) -> Result<Json<Vec<NodeView>>, ApiFailure> {
    let path = query
        .path
        .as_deref()
        .ok_or_else(|| ApiFailure::bad_request("Missing 'path' parameter"))?;
    let node_type = query
        .node_type
        .as_deref()
        .ok_or_else(|| ApiFailure::bad_request("Missing 'nodeType' parameter"))?;

    let view = state
        .handle
        .blueprint_by_path(
            path,
            DetailLevel::Full,
            ExtractionMode::Graphs,
            &ExtractOptions::default(),
        )
        .ok_or_else(|| ApiFailure::not_found(format!("Blueprint not found at path: {path}")))?;

    let nodes = view
        .graphs
        .into_iter()
        .flat_map(|graph| graph.nodes)
        .filter(|node| node.node_type.eq_ignore_ascii_case(node_type))
        .collect();
    Ok(Json(nodes))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsQuery {
    path: Option<String>,
    event_name: Option<String>,
    #[serde(default)]
    max_nodes: usize,
}

async fn event_nodes(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<Vec<NodeView>>, ApiFailure> {
    let path = query
        .path
        .as_deref()
        .ok_or_else(|| ApiFailure::bad_request("Missing 'path' parameter"))?;

    state
        .handle
        .event_nodes(path, query.event_name.as_deref())
        .map(Json)
        .ok_or_else(|| ApiFailure::not_found(format!("Blueprint not found at path: {path}")))
}

async fn event_graph(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<GraphView>, ApiFailure> {
    let path = query
        .path
        .as_deref()
        .ok_or_else(|| ApiFailure::bad_request("Missing 'path' parameter"))?;
    let event_name = query
        .event_name
        .as_deref()
        .ok_or_else(|| ApiFailure::bad_request("Missing 'eventName' parameter"))?;

    state
        .handle
        .event_graph(path, event_name, query.max_nodes)
        .map(Json)
        .ok_or_else(|| {
            ApiFailure::not_found(format!("Event '{event_name}' not found in blueprint: {path}"))
        })
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferencesQuery {
    path: Option<String>,
    include_indirect: Option<String>,
}

async fn blueprint_references(
    State(state): State<AppState>,
    Query(query): Query<ReferencesQuery>,
) -> Result<Json<Vec<ReferenceView>>, ApiFailure> {
    let path = query
        .path
        .as_deref()
        .ok_or_else(|| ApiFailure::bad_request("Missing 'path' parameter"))?;
    let include_indirect = parse_flag(query.include_indirect.as_deref());

    Ok(Json(state.handle.references(path, include_indirect)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detail_defaults_and_rejects() {
        let parsed = parse_detail(None, (DetailLevel::Full, ExtractionMode::None)).unwrap();
        assert_eq!(parsed, (DetailLevel::Full, ExtractionMode::None));

        let parsed = parse_detail(Some("graph"), (DetailLevel::Basic, ExtractionMode::None));
        assert_eq!(parsed.unwrap(), (DetailLevel::Full, ExtractionMode::Graphs));

        assert!(parse_detail(Some("bogus"), (DetailLevel::Basic, ExtractionMode::None)).is_err());
    }

    #[test]
    fn test_paging_window() {
        let items = vec![1, 2, 3, 4, 5];
        assert_eq!(page(items.clone(), 0, 0), vec![1, 2, 3, 4, 5]);
        assert_eq!(page(items.clone(), 2, 2), vec![3, 4]);
        assert_eq!(page(items, 10, 2), Vec::<i32>::new());
    }

    #[test]
    fn test_flag_parsing() {
        assert!(parse_flag(Some("true")));
        assert!(parse_flag(Some("TRUE")));
        assert!(parse_flag(Some("1")));
        assert!(!parse_flag(Some("no")));
        assert!(!parse_flag(None));
    }
}
