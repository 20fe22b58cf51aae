//! Tests for the interaction state machine.
//!
//! Each test drives a fresh controller over a small in-memory bundle and
//! asserts on both the returned commands and the retained panel state.

use super::*;
use crate::graph::build_graph_model;
use crate::models::{Paper, SelectedPaper, PAPER_NODE_OFFSET};
use crate::topics::aggregate;
use crate::GraphBundle;

// ============================================================================
// Helpers
// ============================================================================

fn paper(id: i64, cluster: i64, field: &str) -> Paper {
    Paper {
        id,
        title: format!("Paper {id}"),
        link: format!("https://example.org/{id}"),
        cluster,
        field_auto: field.to_string(),
    }
}

fn selected(id: i64, title: &str, link: &str) -> SelectedPaper {
    SelectedPaper {
        id,
        title: title.to_string(),
        link: link.to_string(),
    }
}

fn bundle(papers: Vec<Paper>, picks: Vec<SelectedPaper>) -> Arc<GraphBundle> {
    let topics = aggregate(papers);
    let model = build_graph_model(&topics, &picks, Vec::new());
    Arc::new(GraphBundle { topics, model })
}

fn scenario_bundle() -> Arc<GraphBundle> {
    bundle(
        vec![
            paper(1, 0, "Graph Theory Basics"),
            paper(2, 0, "Graph Theory Basics"),
        ],
        vec![selected(5, "X", "http://x")],
    )
}

// ============================================================================
// Cluster clicks
// ============================================================================

#[test]
fn test_click_cluster_shows_panel() {
    let mut ctl = PanelController::new(scenario_bundle());
    let commands = ctl.handle(InputEvent::Click(Some(0)));

    assert_eq!(commands.len(), 1);
    let UiCommand::ShowPanel { title, items } = &commands[0] else {
        panic!("expected ShowPanel, got {commands:?}");
    };
    assert_eq!(title, "Graph Theory Basics");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Paper 1");
    assert_eq!(items[0].link, "https://example.org/1");
    assert_eq!(items[0].tooltip, "ID: 1 | click to open");
    assert_eq!(items[1].tooltip, "ID: 2 | click to open");

    assert!(ctl.panel().visible);
    assert_eq!(ctl.panel().title, "Graph Theory Basics");
    assert_eq!(ctl.panel().items.len(), 2);
}

#[test]
fn test_click_cluster_again_is_idempotent() {
    let mut ctl = PanelController::new(scenario_bundle());
    let first = ctl.handle(InputEvent::Click(Some(0)));
    let second = ctl.handle(InputEvent::Click(Some(0)));

    assert_eq!(first, second);
    assert!(ctl.panel().visible);
    assert_eq!(ctl.panel().items.len(), 2);
}

#[test]
fn test_reveal_delays_step_by_100ms() {
    let mut ctl = PanelController::new(bundle(
        vec![
            paper(1, 0, "Topic"),
            paper(2, 0, "Topic"),
            paper(3, 0, "Topic"),
        ],
        Vec::new(),
    ));
    let commands = ctl.handle(InputEvent::Click(Some(0)));

    let UiCommand::ShowPanel { items, .. } = &commands[0] else {
        panic!("expected ShowPanel");
    };
    let delays: Vec<u64> = items.iter().map(|i| i.delay_ms).collect();
    assert_eq!(delays, vec![0, REVEAL_STEP_MS, 2 * REVEAL_STEP_MS]);
}

#[test]
fn test_panel_title_is_first_papers_field() {
    let mut ctl = PanelController::new(bundle(
        vec![paper(1, 3, "First Name"), paper(2, 3, "Second Name")],
        Vec::new(),
    ));
    let commands = ctl.handle(InputEvent::Click(Some(3)));

    let UiCommand::ShowPanel { title, .. } = &commands[0] else {
        panic!("expected ShowPanel");
    };
    assert_eq!(title, "First Name");
}

// ============================================================================
// Paper clicks
// ============================================================================

#[test]
fn test_click_paper_opens_link() {
    let mut ctl = PanelController::new(scenario_bundle());
    let commands = ctl.handle(InputEvent::Click(Some(PAPER_NODE_OFFSET + 5)));

    assert_eq!(
        commands,
        vec![UiCommand::OpenLink {
            url: "http://x".to_string()
        }]
    );
    assert!(!ctl.panel().visible);
}

#[test]
fn test_click_paper_leaves_open_panel_alone() {
    let mut ctl = PanelController::new(scenario_bundle());
    ctl.handle(InputEvent::Click(Some(0)));
    let commands = ctl.handle(InputEvent::Click(Some(PAPER_NODE_OFFSET + 5)));

    assert!(matches!(commands[0], UiCommand::OpenLink { .. }));
    assert!(ctl.panel().visible);
    assert_eq!(ctl.panel().items.len(), 2);
}

#[test]
fn test_click_paper_with_empty_link_is_noop() {
    let mut ctl = PanelController::new(bundle(Vec::new(), vec![selected(9, "No link", "")]));
    let commands = ctl.handle(InputEvent::Click(Some(PAPER_NODE_OFFSET + 9)));
    assert!(commands.is_empty());
}

#[test]
fn test_click_unknown_id_is_noop() {
    let mut ctl = PanelController::new(scenario_bundle());
    ctl.handle(InputEvent::Click(Some(0)));
    let commands = ctl.handle(InputEvent::Click(Some(424_242)));

    assert!(commands.is_empty());
    // state untouched
    assert!(ctl.panel().visible);
}

// ============================================================================
// Hiding
// ============================================================================

#[test]
fn test_background_click_hides_panel() {
    let mut ctl = PanelController::new(scenario_bundle());
    ctl.handle(InputEvent::Click(Some(0)));
    let commands = ctl.handle(InputEvent::Click(None));

    assert_eq!(commands, vec![UiCommand::HidePanel]);
    assert!(!ctl.panel().visible);
}

#[test]
fn test_close_hides_panel() {
    let mut ctl = PanelController::new(scenario_bundle());
    ctl.handle(InputEvent::Click(Some(0)));
    let commands = ctl.handle(InputEvent::Close);

    assert_eq!(commands, vec![UiCommand::HidePanel]);
    assert!(!ctl.panel().visible);
}

#[test]
fn test_hide_when_already_hidden_still_commands() {
    let mut ctl = PanelController::new(scenario_bundle());
    assert_eq!(ctl.handle(InputEvent::Close), vec![UiCommand::HidePanel]);
    assert_eq!(
        ctl.handle(InputEvent::Click(None)),
        vec![UiCommand::HidePanel]
    );
}

#[test]
fn test_hide_retains_panel_content() {
    let mut ctl = PanelController::new(scenario_bundle());
    ctl.handle(InputEvent::Click(Some(0)));
    ctl.handle(InputEvent::Close);

    assert!(!ctl.panel().visible);
    assert_eq!(ctl.panel().title, "Graph Theory Basics");
    assert_eq!(ctl.panel().items.len(), 2);
}

// ============================================================================
// Hover
// ============================================================================

#[test]
fn test_hover_sets_pointer_cursor() {
    let mut ctl = PanelController::new(scenario_bundle());
    assert_eq!(
        ctl.handle(InputEvent::Hover(0)),
        vec![UiCommand::Cursor {
            style: CursorStyle::Pointer
        }]
    );
    assert_eq!(
        ctl.handle(InputEvent::Hover(PAPER_NODE_OFFSET + 5)),
        vec![UiCommand::Cursor {
            style: CursorStyle::Pointer
        }]
    );
}

#[test]
fn test_unhover_restores_default_cursor() {
    let mut ctl = PanelController::new(scenario_bundle());
    assert_eq!(
        ctl.handle(InputEvent::Unhover),
        vec![UiCommand::Cursor {
            style: CursorStyle::Default
        }]
    );
}

#[test]
fn test_hover_does_not_touch_panel() {
    let mut ctl = PanelController::new(scenario_bundle());
    ctl.handle(InputEvent::Click(Some(0)));
    ctl.handle(InputEvent::Hover(0));
    ctl.handle(InputEvent::Unhover);
    assert!(ctl.panel().visible);
}

// ============================================================================
// Empty bundle
// ============================================================================

#[test]
fn test_empty_bundle_clicks_are_noops() {
    let mut ctl = PanelController::new(Arc::new(GraphBundle::default()));
    assert!(ctl.handle(InputEvent::Click(Some(0))).is_empty());
    assert_eq!(ctl.handle(InputEvent::Close), vec![UiCommand::HidePanel]);
}

// ============================================================================
// Wire format
// ============================================================================

#[test]
fn test_show_panel_serialization() {
    let command = UiCommand::ShowPanel {
        title: "Graph Theory Basics".to_string(),
        items: vec![RevealItem {
            link: "https://example.org/1".to_string(),
            title: "Paper 1".to_string(),
            tooltip: "ID: 1 | click to open".to_string(),
            delay_ms: 100,
        }],
    };
    let value = serde_json::to_value(&command).unwrap();
    assert_eq!(value["type"], "showPanel");
    assert_eq!(value["title"], "Graph Theory Basics");
    assert_eq!(value["items"][0]["delayMs"], 100);
    assert_eq!(value["items"][0]["link"], "https://example.org/1");
}

#[test]
fn test_command_serialization_tags() {
    let hide = serde_json::to_value(UiCommand::HidePanel).unwrap();
    assert_eq!(hide["type"], "hidePanel");

    let open = serde_json::to_value(UiCommand::OpenLink {
        url: "http://x".to_string(),
    })
    .unwrap();
    assert_eq!(open["type"], "openLink");
    assert_eq!(open["url"], "http://x");

    let cursor = serde_json::to_value(UiCommand::Cursor {
        style: CursorStyle::Pointer,
    })
    .unwrap();
    assert_eq!(cursor["type"], "cursor");
    assert_eq!(cursor["style"], "pointer");

    let back = serde_json::to_value(UiCommand::Cursor {
        style: CursorStyle::Default,
    })
    .unwrap();
    assert_eq!(back["style"], "default");
}
