//! Machine-readable endpoint catalog served at `/docs`.

use axum::Json;
use serde_json::{json, Value};

pub async fn documentation() -> Json<Value> {
    Json(json!({
        "name": "Bluescope Blueprint Analyzer",
        "endpoints": [
            {
                "path": "/blueprints/all",
                "description": "List every blueprint in the project",
                "params": {
                    "detailLevel": "basic | medium | full | graph | events | references (default basic)",
                    "limit": "maximum number of results (0 = all)",
                    "offset": "number of results to skip"
                }
            },
            {
                "path": "/blueprints/search",
                "description": "Search blueprints by one predicate or combined AND filters",
                "params": {
                    "query": "search text (used with 'type')",
                    "type": "name | parentClass | function | variable (default name)",
                    "name": "filter: blueprint name contains",
                    "parentClass": "filter: parent class contains",
                    "function": "filter: declares a function whose name contains",
                    "variable": "filter: declares a variable whose name contains",
                    "path": "filter: asset path contains",
                    "detailLevel": "projection level for results",
                    "limit": "maximum number of results (0 = all)",
                    "offset": "number of results to skip"
                }
            },
            {
                "path": "/blueprints/path",
                "description": "Project one blueprint by asset path",
                "params": {
                    "path": "(required) asset path",
                    "detailLevel": "basic | medium | full | graph | events | references (default full)",
                    "graphName": "restrict graph extraction to one named graph",
                    "maxGraphs": "graph pagination cap (0 = all)",
                    "maxNodes": "per-graph node pagination cap (0 = all)"
                }
            },
            {
                "path": "/blueprints/function",
                "description": "Extract a single function graph",
                "params": {
                    "path": "(required) asset path",
                    "function": "(required) function graph name"
                }
            },
            {
                "path": "/blueprints/nodes",
                "description": "List nodes of one structural type across all graphs",
                "params": {
                    "path": "(required) asset path",
                    "nodeType": "(required) node type name, e.g. CallFunction"
                }
            },
            {
                "path": "/blueprints/events",
                "description": "Flat list of event nodes",
                "params": {
                    "path": "(required) asset path",
                    "eventName": "restrict to one event (case-insensitive)"
                }
            },
            {
                "path": "/blueprints/event-graph",
                "description": "Execution-flow subgraph reachable from one event",
                "params": {
                    "path": "(required) asset path",
                    "eventName": "(required) event to start from",
                    "maxNodes": "traversal budget (0 = unbounded)"
                }
            },
            {
                "path": "/blueprints/references",
                "description": "References to and from a blueprint",
                "params": {
                    "path": "(required) asset path",
                    "includeIndirect": "true to expand one extra hop"
                }
            }
        ]
    }))
}
