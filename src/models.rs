//! Data models for the paper map.
//!
//! Wire-level structures mirror the JSON files in the data directory
//! (capitalized field names preserved via serde renames). Render-level
//! structures are shaped exactly as the vis-network renderer consumes them,
//! so the page script can embed them without any reshaping.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Paper node ids live at or above this offset; cluster ids stay below it.
/// The offset is the sole guard against id collisions between the two
/// node families.
pub const PAPER_NODE_OFFSET: i64 = 10_000;

// ============================================================================
// Wire Types (as stored in the data directory)
// ============================================================================

/// One row of `data.json`. Field names are capitalized on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paper {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Link")]
    pub link: String,
    #[serde(rename = "Cluster")]
    pub cluster: i64,
    #[serde(rename = "Field_Auto")]
    pub field_auto: String,
}

/// One row of `selected_papers.json`: a paper highlighted with its own
/// box node in addition to whatever cluster it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectedPaper {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Link")]
    pub link: String,
}

// ============================================================================
// Render-Ready Graph Types (shaped for vis-network)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    Circle,
    Box,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeColor {
    pub border: String,
    pub background: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeFont {
    pub color: String,
    pub size: u32,
    /// Cluster labels are two lines; `multi` tells the renderer to honor
    /// the embedded newline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi: Option<bool>,
}

/// A fully styled node. Cluster nodes are circles with a `size`; paper
/// nodes are boxes with width/height constraints and a `link`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphNode {
    pub id: i64,
    pub label: String,
    pub shape: NodeShape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    pub color: NodeColor,
    pub font: NodeFont,
    #[serde(rename = "widthConstraint", skip_serializing_if = "Option::is_none")]
    pub width_constraint: Option<u32>,
    #[serde(rename = "heightConstraint", skip_serializing_if = "Option::is_none")]
    pub height_constraint: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl GraphNode {
    pub fn is_cluster(&self) -> bool {
        self.shape == NodeShape::Circle
    }
}

/// The flat model handed to the page: cluster nodes first (in first-seen
/// order), then highlighted paper nodes, plus the untouched edge records
/// from `edges.json`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GraphModel {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<serde_json::Value>,
    #[serde(skip)]
    index: HashMap<i64, usize>,
}

impl GraphModel {
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<serde_json::Value>) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(pos, node)| (node.id, pos))
            .collect();
        GraphModel {
            nodes,
            edges,
            index,
        }
    }

    /// Looks a node up by its renderer id.
    pub fn node(&self, id: i64) -> Option<&GraphNode> {
        self.index.get(&id).map(|&pos| &self.nodes[pos])
    }

    pub fn stats(&self) -> GraphStats {
        let paper_nodes = self.nodes.iter().filter(|n| !n.is_cluster()).count();
        GraphStats {
            total_nodes: self.nodes.len(),
            cluster_nodes: self.nodes.len() - paper_nodes,
            paper_nodes,
            total_edges: self.edges.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub cluster_nodes: usize,
    pub paper_nodes: usize,
    pub total_edges: usize,
}

// ============================================================================
// Panel State
// ============================================================================

/// One row of the side panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PanelItem {
    pub link: String,
    pub title: String,
    pub tooltip: String,
}

/// The side panel as the server tracks it. Owned and mutated only by the
/// interaction controller; one instance per connection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    pub visible: bool,
    pub title: String,
    pub items: Vec<PanelItem>,
}
