//! HTTP route handlers for the paper map.
//!
//! Two routes: the map page itself and a JSON endpoint serving the built
//! graph model. What the page shows depends on how startup loading went;
//! the three outcomes are kept deliberately distinct so a missing data
//! directory and a corrupt file never look the same.

use crate::templates::{
    base_html, error_banner, graph_container, render_graph_js, render_panel_js, sidebar_html,
};
use crate::{AppState, GraphState};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

// ============================================================================
// Map Page
// ============================================================================

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let (banner, script) = match &state.graph {
        GraphState::Ready(bundle) => {
            let model_json =
                serde_json::to_string(&bundle.model).unwrap_or("{}".to_string());
            ("", render_graph_js(&model_json))
        }
        // Data never arrived: an empty canvas, no banner.
        GraphState::Unavailable => ("", render_panel_js()),
        // Data arrived but did not decode: the user sees the failure.
        GraphState::Failed => (error_banner(), render_panel_js()),
    };

    let content = format!(
        "{container}\n    {sidebar}\n    {script}",
        container = graph_container(banner),
        sidebar = sidebar_html(),
        script = script,
    );

    Html(base_html("Paper Map", &content))
}

// ============================================================================
// Graph API
// ============================================================================

pub async fn graph_api(State(state): State<Arc<AppState>>) -> Response {
    match &state.graph {
        GraphState::Ready(bundle) => (
            [("content-type", "application/json")],
            serde_json::to_string(&bundle.model).unwrap_or("{}".to_string()),
        )
            .into_response(),
        _ => (
            StatusCode::SERVICE_UNAVAILABLE,
            [("content-type", "application/json")],
            r#"{"error":"graph data unavailable"}"#,
        )
            .into_response(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph_model;
    use crate::models::{Paper, SelectedPaper};
    use crate::topics::aggregate;
    use crate::GraphBundle;
    use std::path::PathBuf;

    fn ready_state() -> Arc<AppState> {
        let papers = vec![
            Paper {
                id: 1,
                title: "Paper 1".to_string(),
                link: "https://example.org/1".to_string(),
                cluster: 0,
                field_auto: "Graph Theory Basics".to_string(),
            },
            Paper {
                id: 2,
                title: "Paper 2".to_string(),
                link: "https://example.org/2".to_string(),
                cluster: 0,
                field_auto: "Graph Theory Basics".to_string(),
            },
        ];
        let picks = vec![SelectedPaper {
            id: 5,
            title: "X".to_string(),
            link: "http://x".to_string(),
        }];
        let topics = aggregate(papers);
        let model = build_graph_model(&topics, &picks, Vec::new());
        Arc::new(AppState {
            graph: GraphState::Ready(Arc::new(GraphBundle { topics, model })),
            data_dir: PathBuf::from("data"),
        })
    }

    fn state_with(graph: GraphState) -> Arc<AppState> {
        Arc::new(AppState {
            graph,
            data_dir: PathBuf::from("data"),
        })
    }

    #[tokio::test]
    async fn test_index_ready_embeds_model_and_renderer() {
        let Html(page) = index(State(ready_state())).await;
        assert!(page.contains(r#"id="knowledge-graph""#));
        assert!(page.contains(r#"id="sidebar""#));
        assert!(page.contains("vis-network"));
        assert!(page.contains(r#""label":"Graph Theory\nBasics""#));
        assert!(page.contains(r#""id":10005"#));
        assert!(!page.contains(r#"class="error-banner""#));
    }

    #[tokio::test]
    async fn test_index_unavailable_is_silent() {
        let Html(page) = index(State(state_with(GraphState::Unavailable))).await;
        assert!(page.contains(r#"id="knowledge-graph""#));
        assert!(!page.contains(r#"class="error-banner""#));
        assert!(!page.contains("vis.Network"));
        // the bridge still runs so close and navigation work
        assert!(page.contains("new WebSocket"));
    }

    #[tokio::test]
    async fn test_index_failed_shows_banner() {
        let Html(page) = index(State(state_with(GraphState::Failed))).await;
        assert!(page.contains(r#"class="error-banner""#));
        assert!(page.contains("Failed to load data"));
        assert!(!page.contains("vis.Network"));
    }

    #[tokio::test]
    async fn test_graph_api_ready_serves_model() {
        let response = graph_api(State(ready_state())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"].to_str().unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let model: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(model["nodes"][0]["id"], 0);
        assert_eq!(model["nodes"][1]["id"], 10005);
        assert!(model["edges"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_graph_api_degraded_is_503() {
        for graph in [GraphState::Unavailable, GraphState::Failed] {
            let response = graph_api(State(state_with(graph))).await;
            assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let err: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(err["error"], "graph data unavailable");
        }
    }
}
