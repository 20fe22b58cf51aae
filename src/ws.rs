//! WebSocket bridge between the page and the interaction controller.
//!
//! The page forwards raw renderer events as small tagged JSON messages;
//! every command the controller returns goes back over the same socket.
//! Connections are independent: each gets its own controller over the
//! shared graph bundle, so two open tabs keep separate panel state.

use crate::interaction::{InputEvent, PanelController};
use crate::{AppState, GraphBundle};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use std::sync::Arc;

// ============================================================================
// Wire Format
// ============================================================================

/// An event as the page sends it. `click` carries every node id under the
/// pointer; the renderer puts the topmost one first.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientEvent {
    Click {
        #[serde(default)]
        nodes: Vec<i64>,
    },
    Hover {
        node: i64,
    },
    Blur,
    Close,
}

impl From<ClientEvent> for InputEvent {
    fn from(event: ClientEvent) -> Self {
        match event {
            ClientEvent::Click { nodes } => InputEvent::Click(nodes.first().copied()),
            ClientEvent::Hover { node } => InputEvent::Hover(node),
            ClientEvent::Blur => InputEvent::Unhover,
            ClientEvent::Close => InputEvent::Close,
        }
    }
}

// ============================================================================
// Handler
// ============================================================================

pub async fn ws_handler(State(state): State<Arc<AppState>>, ws: WebSocketUpgrade) -> Response {
    // Degraded pages (no data) still connect; their controller just runs
    // over an empty bundle so close events keep working.
    let bundle = state
        .bundle()
        .unwrap_or_else(|| Arc::new(GraphBundle::default()));
    ws.on_upgrade(move |socket| handle_ws(socket, bundle))
}

async fn handle_ws(socket: WebSocket, bundle: Arc<GraphBundle>) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let mut controller = PanelController::new(bundle);

    loop {
        match ws_rx.next().await {
            Some(Ok(Message::Text(text))) => {
                let event = match serde_json::from_str::<ClientEvent>(text.as_str()) {
                    Ok(event) => event,
                    Err(err) => {
                        tracing::debug!(%err, "dropping malformed client event");
                        continue;
                    }
                };

                for command in controller.handle(event.into()) {
                    let json = match serde_json::to_string(&command) {
                        Ok(json) => json,
                        Err(err) => {
                            tracing::error!(%err, "cannot encode ui command");
                            continue;
                        }
                    };
                    if ws_tx.send(Message::Text(json.into())).await.is_err() {
                        return;
                    }
                }
            }
            Some(Ok(Message::Close(_))) | None => break,
            Some(Ok(_)) => {}
            Some(Err(err)) => {
                tracing::debug!(%err, "websocket receive error");
                break;
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
