//! Paper map library - re-exports for testing and external use.
//!
//! This module provides public access to all the application's modules
//! for testing purposes and potential library use.

use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod graph;
pub mod handlers;
pub mod interaction;
pub mod loader;
pub mod models;
pub mod templates;
pub mod topics;
pub mod ws;


// ============================================================================
// Configuration
// ============================================================================

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Directory holding `data.json`, `edges.json`, `selected_papers.json`.
/// Override with `PAPERMAP_DATA`.
pub fn data_dir() -> PathBuf {
    std::env::var("PAPERMAP_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Listen address. Override with `PAPERMAP_BIND`.
pub fn bind_addr() -> String {
    std::env::var("PAPERMAP_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
}

// ============================================================================
// Application State
// ============================================================================

/// Everything derived from one successful load: the topic clusters and the
/// render model built from them. Shared read-only across connections.
#[derive(Debug, Clone, Default)]
pub struct GraphBundle {
    pub topics: topics::TopicMap,
    pub model: models::GraphModel,
}

/// Load outcome, fixed at startup.
#[derive(Clone)]
pub enum GraphState {
    Ready(Arc<GraphBundle>),
    /// Data files could not be read. The page stays quiet about it.
    Unavailable,
    /// Data files were read but did not decode. The page says so.
    Failed,
}

#[derive(Clone)]
pub struct AppState {
    pub graph: GraphState,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Loads the data directory once and freezes the outcome. The two
    /// failure kinds drive different pages, so they are kept apart here.
    pub async fn load(data_dir: &Path) -> Self {
        let graph = match loader::load_paper_data(data_dir).await {
            Ok(data) => {
                let topics = topics::aggregate(data.papers);
                let model = graph::build_graph_model(&topics, &data.selected, data.edges);
                let stats = model.stats();
                tracing::info!(
                    clusters = stats.cluster_nodes,
                    papers = stats.paper_nodes,
                    edges = stats.total_edges,
                    "graph model built"
                );
                GraphState::Ready(Arc::new(GraphBundle { topics, model }))
            }
            Err(err) if err.is_fetch() => {
                tracing::warn!(%err, "data files unavailable, serving empty map");
                GraphState::Unavailable
            }
            Err(err) => {
                tracing::error!(%err, "data files corrupt, serving error page");
                GraphState::Failed
            }
        };

        AppState {
            graph,
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// The loaded bundle, if the data decoded.
    pub fn bundle(&self) -> Option<Arc<GraphBundle>> {
        match &self.graph {
            GraphState::Ready(bundle) => Some(Arc::clone(bundle)),
            _ => None,
        }
    }
}

// Re-export commonly used types
pub use models::{
    GraphModel, GraphNode, GraphStats, NodeColor, NodeFont, NodeShape, PanelItem, PanelState,
    Paper, SelectedPaper, PAPER_NODE_OFFSET,
};

pub use loader::{load_paper_data, LoadError, PaperData};

pub use topics::{aggregate, wrap_label, TopicCluster, TopicMap};

pub use graph::{
    build_graph_model, cluster_node, palette_color, paper_node, CLUSTER_NODE_SIZE, PALETTE,
};

pub use interaction::{
    CursorStyle, InputEvent, PanelController, RevealItem, UiCommand, REVEAL_STEP_MS,
};

pub use templates::{base_html, render_graph_js, render_panel_js, RendererOptions, STYLE};
