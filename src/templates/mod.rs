//! HTML templates and styling for the paper map.
//!
//! This module contains all CSS styles, JavaScript code, and HTML
//! generation functions for the web interface.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constants and theme definitions
//! - `components` - Shared HTML components (nav drawer, panel, base template)
//! - `graph_js` - vis-network bootstrap and the interaction bridge script

mod styles;
mod components;
mod graph_js;

pub use styles::STYLE;
pub use components::{base_html, error_banner, graph_container, sidebar_html, sidenav_html};
pub use graph_js::{
    options_json, render_graph_js, render_panel_js, RendererOptions, VIS_NETWORK_CDN,
};
