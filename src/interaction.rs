//! Interaction state machine.
//!
//! Every connected page gets one [`PanelController`]. Input events arrive
//! over the socket, the controller updates its panel state against the
//! shared graph bundle, and the commands it returns are replayed by the
//! page verbatim. The page itself holds no interaction logic beyond
//! forwarding events and applying commands.

use crate::models::{PanelItem, PanelState};
use crate::GraphBundle;
use serde::Serialize;
use std::sync::Arc;

#[cfg(test)]
#[path = "interaction_test.rs"]
mod interaction_test;

/// Gap between consecutive panel rows in the staggered reveal.
pub const REVEAL_STEP_MS: u64 = 100;

// ============================================================================
// Events and Commands
// ============================================================================

/// A user gesture, already reduced to what the controller cares about.
/// A click on overlapping nodes arrives as the topmost id only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Click on a node, or on the background when `None`.
    Click(Option<i64>),
    Hover(i64),
    Unhover,
    /// Close button or Escape.
    Close,
}

/// An instruction for the page. Serialized form is what goes over the
/// socket, so the tags and field names match the page script.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UiCommand {
    ShowPanel {
        title: String,
        items: Vec<RevealItem>,
    },
    HidePanel,
    OpenLink {
        url: String,
    },
    Cursor {
        style: CursorStyle,
    },
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CursorStyle {
    Pointer,
    Default,
}

/// A panel row plus the delay before it fades in.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RevealItem {
    pub link: String,
    pub title: String,
    pub tooltip: String,
    #[serde(rename = "delayMs")]
    pub delay_ms: u64,
}

// ============================================================================
// Controller
// ============================================================================

pub struct PanelController {
    bundle: Arc<GraphBundle>,
    panel: PanelState,
}

impl PanelController {
    pub fn new(bundle: Arc<GraphBundle>) -> Self {
        PanelController {
            bundle,
            panel: PanelState::default(),
        }
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    /// Advances the state machine by one event.
    pub fn handle(&mut self, event: InputEvent) -> Vec<UiCommand> {
        match event {
            InputEvent::Click(Some(id)) => self.click_node(id),
            InputEvent::Click(None) => self.hide(),
            InputEvent::Hover(_) => vec![UiCommand::Cursor {
                style: CursorStyle::Pointer,
            }],
            InputEvent::Unhover => vec![UiCommand::Cursor {
                style: CursorStyle::Default,
            }],
            InputEvent::Close => self.hide(),
        }
    }

    fn click_node(&mut self, id: i64) -> Vec<UiCommand> {
        let Some(node) = self.bundle.model.node(id) else {
            tracing::debug!(id, "click on unknown node id");
            return Vec::new();
        };

        if node.is_cluster() {
            let Some(cluster) = self.bundle.topics.get(id) else {
                tracing::warn!(id, "cluster node without topic entry");
                return Vec::new();
            };

            self.panel.visible = true;
            self.panel.title = cluster.name.clone();
            self.panel.items = cluster
                .papers
                .iter()
                .map(|paper| PanelItem {
                    link: paper.link.clone(),
                    title: paper.title.clone(),
                    tooltip: format!("ID: {} | click to open", paper.id),
                })
                .collect();

            return vec![UiCommand::ShowPanel {
                title: self.panel.title.clone(),
                items: self
                    .panel
                    .items
                    .iter()
                    .enumerate()
                    .map(|(pos, item)| RevealItem {
                        link: item.link.clone(),
                        title: item.title.clone(),
                        tooltip: item.tooltip.clone(),
                        delay_ms: pos as u64 * REVEAL_STEP_MS,
                    })
                    .collect(),
            }];
        }

        // Box node: open its paper, if it carries a usable link.
        match node.link.as_deref() {
            Some(url) if !url.is_empty() => vec![UiCommand::OpenLink {
                url: url.to_string(),
            }],
            _ => Vec::new(),
        }
    }

    /// Hides the panel. Emitted unconditionally so the page class state
    /// converges even if the two sides disagree about visibility.
    fn hide(&mut self) -> Vec<UiCommand> {
        self.panel.visible = false;
        vec![UiCommand::HidePanel]
    }
}
