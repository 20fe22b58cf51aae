//! Graph model construction.
//!
//! Turns topic clusters and selected papers into the node/edge model the
//! renderer consumes. Clusters become circle nodes styled from a fixed
//! palette; selected papers become box nodes whose ids live in a namespace
//! disjoint from the cluster ids.

use crate::models::{
    GraphModel, GraphNode, NodeColor, NodeFont, NodeShape, SelectedPaper, PAPER_NODE_OFFSET,
};
use crate::topics::{TopicCluster, TopicMap};
use serde_json::Value;

// ============================================================================
// Styling constants
// ============================================================================

/// Border colors cycled across clusters, each on the same dark background.
pub const PALETTE: &[(&str, &str)] = &[
    ("#e83e8c", "#161b22"),
    ("#fd7e14", "#161b22"),
    ("#20c997", "#161b22"),
    ("#6f42c1", "#161b22"),
    ("#007bff", "#161b22"),
    ("#ffc107", "#161b22"),
];

pub const CLUSTER_NODE_SIZE: u32 = 150;

const PAPER_BORDER: &str = "#007bff";
const PAPER_BACKGROUND: &str = "#161b22";
const FONT_COLOR: &str = "white";

/// Color for a cluster node, assigned round-robin by cluster id.
pub fn palette_color(cluster_id: i64) -> NodeColor {
    let slot = cluster_id.rem_euclid(PALETTE.len() as i64) as usize;
    let (border, background) = PALETTE[slot];
    NodeColor {
        border: border.to_string(),
        background: background.to_string(),
    }
}

// ============================================================================
// Node construction
// ============================================================================

pub fn cluster_node(cluster: &TopicCluster) -> GraphNode {
    GraphNode {
        id: cluster.id,
        label: cluster.label.clone(),
        shape: NodeShape::Circle,
        size: Some(CLUSTER_NODE_SIZE),
        color: palette_color(cluster.id),
        font: NodeFont {
            color: FONT_COLOR.to_string(),
            size: 16,
            multi: Some(true),
        },
        width_constraint: None,
        height_constraint: None,
        link: None,
    }
}

pub fn paper_node(paper: &SelectedPaper) -> GraphNode {
    GraphNode {
        id: PAPER_NODE_OFFSET + paper.id,
        label: paper.title.clone(),
        shape: NodeShape::Box,
        size: None,
        color: NodeColor {
            border: PAPER_BORDER.to_string(),
            background: PAPER_BACKGROUND.to_string(),
        },
        font: NodeFont {
            color: FONT_COLOR.to_string(),
            size: 18,
            multi: None,
        },
        width_constraint: Some(180),
        height_constraint: Some(60),
        link: Some(paper.link.clone()),
    }
}

// ============================================================================
// Model assembly
// ============================================================================

/// Builds the full render model: cluster nodes first (in first-appearance
/// order), then one box node per selected paper. Edges pass through exactly
/// as loaded; the renderer resolves their endpoints.
pub fn build_graph_model(
    topics: &TopicMap,
    selected: &[SelectedPaper],
    edges: Vec<Value>,
) -> GraphModel {
    let mut nodes = Vec::with_capacity(topics.len() + selected.len());

    for cluster in topics.iter() {
        if cluster.id >= PAPER_NODE_OFFSET {
            // Such a cluster would collide with the paper id namespace.
            tracing::warn!(cluster = cluster.id, "cluster id overlaps paper node range");
        }
        nodes.push(cluster_node(cluster));
    }

    for paper in selected {
        nodes.push(paper_node(paper));
    }

    GraphModel::new(nodes, edges)
}

// ============================================================================
// Tests
// ============================================================================
