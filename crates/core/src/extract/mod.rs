//! Detail-level projection: turning loaded assets into bounded,
//! serializable [`BlueprintView`]s.

pub mod events;
pub mod graphs;
pub mod members;

pub use events::{event_graph, extract_event_nodes};
pub use graphs::extract_graphs;
pub use members::{extract_functions, extract_variables};

use bluescope_api::models::{
    BlueprintView, DetailLevel, ExtractOptions, ExtractionMode, GraphType, GraphView,
};
use tracing::debug;

use crate::asset::{clean_parent_class_tag, AssetStore, BlueprintAsset};
use crate::references::ReferenceResolver;

/// Project every asset in the store.
///
/// At `Basic` only registry tags are read; higher levels load each asset.
/// Assets that fail to load are omitted rather than failing the sweep.
pub fn all_blueprints(store: &dyn AssetStore, level: DetailLevel) -> Vec<BlueprintView> {
    let mut views = Vec::new();

    for tag in store.list_assets() {
        if level == DetailLevel::Basic {
            views.push(basic_view_from_tag(&tag));
        } else if let Some(asset) = store.load(&tag.path) {
            views.push(project_plain(&asset, level));
        }
    }

    views
}

/// Project one asset by path, or `None` when the path does not resolve.
pub fn blueprint_by_path(
    store: &dyn AssetStore,
    resolver: &ReferenceResolver,
    path: &str,
    level: DetailLevel,
    mode: ExtractionMode,
    options: &ExtractOptions,
) -> Option<BlueprintView> {
    // Basic needs no full load as long as the registry knows the path.
    if level == DetailLevel::Basic && mode == ExtractionMode::None {
        if let Some(tag) = store.list_assets().into_iter().find(|t| t.path == path) {
            return Some(basic_view_from_tag(&tag));
        }
    }

    let asset = store.load(path)?;
    debug!(path, level = level.as_str(), mode = mode.as_str(), "projecting blueprint");
    Some(project(&asset, resolver, level, mode, options))
}

/// Project one loaded asset at the requested level and mode.
///
/// Modes only take effect at `Full`; the boundary layer maps every legacy
/// graph/events/references request to `Full` plus the matching mode.
pub fn project(
    asset: &BlueprintAsset,
    resolver: &ReferenceResolver,
    level: DetailLevel,
    mode: ExtractionMode,
    options: &ExtractOptions,
) -> BlueprintView {
    let mut view = project_plain(asset, level);
    if level != DetailLevel::Full {
        return view;
    }

    match mode {
        ExtractionMode::None => {}
        ExtractionMode::Graphs => {
            view.graphs = extract_graphs(
                asset,
                options.graph_filter.as_deref(),
                options.max_graphs,
                options.max_nodes,
            );
            view.metadata
                .insert("DetailLevel".into(), mode.as_str().into());
            if let Some(filter) = &options.graph_filter {
                view.metadata
                    .insert("FilteredByGraph".into(), filter.clone());
            }
            if options.max_graphs > 0 {
                view.metadata
                    .insert("MaxGraphs".into(), options.max_graphs.to_string());
            }
            if options.max_nodes > 0 {
                view.metadata
                    .insert("MaxNodes".into(), options.max_nodes.to_string());
            }
            debug!(count = view.graphs.len(), path = %view.path, "extracted graphs");
        }
        ExtractionMode::EventsOnly => {
            // The graph-filter slot doubles as the event-name filter here.
            let event_filter = options.graph_filter.as_deref();
            let mut events_graph = GraphView::new("Events", GraphType::EventsList);
            events_graph.nodes = extract_event_nodes(asset, event_filter);

            view.metadata
                .insert("DetailLevel".into(), mode.as_str().into());
            view.metadata
                .insert("EventCount".into(), events_graph.nodes.len().to_string());
            if let Some(filter) = event_filter {
                view.metadata
                    .insert("FilteredByEvent".into(), filter.to_string());
            }
            debug!(count = events_graph.nodes.len(), path = %view.path, "extracted event nodes");
            view.graphs.push(events_graph);
        }
        ExtractionMode::ReferencesOnly => {
            // Direct extraction, bypassing the resolver cache: the cached
            // entry point is the standalone reference lookup, not this mode.
            view.references = resolver.extract_references(asset, true);
            view.metadata
                .insert("DetailLevel".into(), mode.as_str().into());
            view.metadata
                .insert("ReferenceCount".into(), view.references.len().to_string());
            debug!(count = view.references.len(), path = %view.path, "extracted references");
        }
    }

    view
}

/// Level-only projection, no mode payloads.
fn project_plain(asset: &BlueprintAsset, level: DetailLevel) -> BlueprintView {
    let mut view = BlueprintView {
        name: asset.name.clone(),
        path: asset.path.clone(),
        parent_class: asset.parent_class_name().to_string(),
        ..BlueprintView::default()
    };

    if level == DetailLevel::Basic {
        return view;
    }

    view.description = asset.description.clone();
    view.functions = extract_functions(asset);
    view.variables = extract_variables(asset);

    if level == DetailLevel::Medium {
        // Lossy by contract: Medium drops these even when the data has them.
        for function in &mut view.functions {
            function.description.clear();
            for param in &mut function.params {
                param.default_value.clear();
            }
        }
        for variable in &mut view.variables {
            variable.default_value.clear();
            variable.category.clear();
        }
    }

    view
}

fn basic_view_from_tag(tag: &crate::asset::AssetTag) -> BlueprintView {
    BlueprintView {
        name: tag.name.clone(),
        path: tag.path.clone(),
        parent_class: tag
            .parent_class_tag
            .as_deref()
            .map(clean_parent_class_tag)
            .unwrap_or_default(),
        ..BlueprintView::default()
    }
}
