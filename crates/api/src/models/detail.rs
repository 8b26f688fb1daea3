use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Requested richness of an extraction result.
///
/// Levels are strictly ordered: `Basic < Medium < Full`. Graph, event, and
/// reference extraction are not richer levels but orthogonal
/// [`ExtractionMode`]s layered on top of `Full`.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    /// Identity only: name, path, parent class. No asset load required.
    Basic,
    /// Basic plus a lossy overview of functions and variables.
    Medium,
    /// Everything except graph/event/reference payloads.
    Full,
}

/// What additional payload to extract on top of a `Full` projection.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Plain projection at the requested [`DetailLevel`].
    #[default]
    None,
    /// Include per-graph node/pin/connection data.
    Graphs,
    /// Include a single synthetic graph listing the event nodes.
    EventsOnly,
    /// Include the cross-asset reference list.
    ReferencesOnly,
}

impl DetailLevel {
    /// Parse a request value into a level/mode pair.
    ///
    /// Accepts the level names, the mode names, and the legacy numeric codes
    /// 0-5 where graph/events/references occupied ranks above `full`.
    pub fn parse_request(value: &str) -> Option<(DetailLevel, ExtractionMode)> {
        match value.to_ascii_lowercase().as_str() {
            "basic" | "0" => Some((DetailLevel::Basic, ExtractionMode::None)),
            "medium" | "1" => Some((DetailLevel::Medium, ExtractionMode::None)),
            "full" | "2" => Some((DetailLevel::Full, ExtractionMode::None)),
            "graph" | "graphs" | "3" => Some((DetailLevel::Full, ExtractionMode::Graphs)),
            "events" | "4" => Some((DetailLevel::Full, ExtractionMode::EventsOnly)),
            "references" | "5" => Some((DetailLevel::Full, ExtractionMode::ReferencesOnly)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DetailLevel::Basic => "basic",
            DetailLevel::Medium => "medium",
            DetailLevel::Full => "full",
        }
    }
}

impl ExtractionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMode::None => "none",
            ExtractionMode::Graphs => "graphs",
            ExtractionMode::EventsOnly => "events",
            ExtractionMode::ReferencesOnly => "references",
        }
    }
}

/// Pagination and filtering knobs for graph extraction.
///
/// A zero for either limit means unlimited. In `EventsOnly` mode the
/// `graph_filter` slot carries the event-name filter instead.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct ExtractOptions {
    pub graph_filter: Option<String>,
    pub max_graphs: usize,
    pub max_nodes: usize,
}

impl ExtractOptions {
    pub fn with_graph_filter(filter: impl Into<String>) -> Self {
        Self {
            graph_filter: Some(filter.into()),
            ..Self::default()
        }
    }
}
