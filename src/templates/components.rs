//! Shared HTML components for the paper map.
//!
//! Contains the navigation drawer, the paper panel skeleton, the graph
//! container, and the base HTML template.

use super::styles::STYLE;

// ============================================================================
// Navigation Drawer
// ============================================================================

pub fn sidenav_html() -> &'static str {
    r##"<button id="openNavBtn" title="Menu">&#9776;</button>
    <div id="mySidenav">
        <button id="closeNavBtn" title="Close">&times;</button>
        <a href="/">Paper map</a>
        <a href="/api/graph">Graph model (JSON)</a>
        <a href="/data/data.json">Raw paper data</a>
    </div>"##
}

// ============================================================================
// Paper Panel
// ============================================================================

/// The right-hand panel. Empty at load; the interaction bridge fills the
/// title and list when a cluster is clicked.
pub fn sidebar_html() -> &'static str {
    r##"<aside id="sidebar">
        <div class="sidebar-header">
            <h2 id="sidebar-title"></h2>
            <button id="close-sidebar" title="Close">&times;</button>
        </div>
        <ul id="paper-list"></ul>
    </aside>"##
}

// ============================================================================
// Graph Container
// ============================================================================

pub fn graph_container(inner: &str) -> String {
    format!(r#"<div id="knowledge-graph">{inner}</div>"#)
}

pub fn error_banner() -> &'static str {
    r#"<div class="error-banner">
        <h3>&#9888;&#65039; Failed to load data</h3>
        <p>Verify the data.json file or your internet connection</p>
    </div>"#
}

// ============================================================================
// Base HTML Template
// ============================================================================

pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    {nav}
    {content}
</body>
</html>"#,
        title = title,
        STYLE = STYLE,
        nav = sidenav_html(),
        content = content,
    )
}

// ============================================================================
// Tests
// ============================================================================
