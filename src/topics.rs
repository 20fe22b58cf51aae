//! Grouping papers into topic clusters.
//!
//! Each distinct `Cluster` id in the paper collection becomes one
//! `TopicCluster`, named after the first paper seen for that id. The cluster
//! order is the order of first appearance, which later fixes the node order
//! in the rendered graph.

use crate::models::Paper;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// One topic: the circle node in the graph plus the papers the panel lists
/// when it is clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicCluster {
    pub id: i64,
    /// `Field_Auto` of the first paper seen for this cluster. Later papers
    /// carrying a different value do not rename the cluster.
    pub name: String,
    /// Two-line wrapped form of `name`, cached at creation.
    pub label: String,
    pub papers: Vec<Paper>,
}

/// Insertion-ordered cluster collection with O(1) lookup by cluster id.
#[derive(Debug, Clone, Default)]
pub struct TopicMap {
    order: Vec<i64>,
    clusters: HashMap<i64, TopicCluster>,
}

impl TopicMap {
    pub fn get(&self, id: i64) -> Option<&TopicCluster> {
        self.clusters.get(&id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.clusters.contains_key(&id)
    }

    /// Clusters in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = &TopicCluster> {
        self.order.iter().filter_map(|id| self.clusters.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Groups the papers by cluster id. Every paper lands in its cluster's list,
/// in input order; the cluster itself is created on first sighting.
pub fn aggregate(papers: Vec<Paper>) -> TopicMap {
    let mut order = Vec::new();
    let mut clusters: HashMap<i64, TopicCluster> = HashMap::new();
    let mut max_label_width = 0usize;

    for paper in papers {
        match clusters.entry(paper.cluster) {
            Entry::Vacant(slot) => {
                let label = wrap_label(&paper.field_auto);
                max_label_width = max_label_width.max(widest_line(&label));
                order.push(paper.cluster);
                slot.insert(TopicCluster {
                    id: paper.cluster,
                    name: paper.field_auto.clone(),
                    label,
                    papers: vec![paper],
                });
            }
            Entry::Occupied(mut cluster) => cluster.get_mut().papers.push(paper),
        }
    }

    // The widest label line is tracked but feeds no sizing decision; circle
    // size is a fixed constant.
    tracing::debug!(
        clusters = order.len(),
        max_label_width,
        "aggregated papers into topic clusters"
    );

    TopicMap { order, clusters }
}

/// Splits `name` into a two-line label: the first `ceil(words/2)` words on
/// the first line, the rest on the second. Splitting is on single spaces, so
/// runs of spaces produce empty words rather than collapsing.
pub fn wrap_label(name: &str) -> String {
    let words: Vec<&str> = name.split(' ').collect();
    let half = (words.len() + 1) / 2;
    let first = words[..half].join(" ");
    let second = words[half..].join(" ");
    format!("{first}\n{second}")
}

fn widest_line(label: &str) -> usize {
    label.lines().map(|line| line.chars().count()).max().unwrap_or(0)
}

// ============================================================================
// Tests
// ============================================================================
