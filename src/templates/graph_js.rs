//! vis-network bootstrap and interaction bridge scripts.
//!
//! Generates the `<script>` blocks for the map page. The renderer options
//! are kept as typed structs and serialized into the page, so the physics
//! and scaling knobs live in one auditable place; the two pieces that must
//! be functions (custom scaling, hover growth) are attached in JS right
//! after the options literal.

use serde::Serialize;

pub const VIS_NETWORK_CDN: &str =
    "https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js";

// ============================================================================
// Renderer Options
// ============================================================================

/// The full options object handed to `new vis.Network(...)`.
#[derive(Debug, Clone, Serialize)]
pub struct RendererOptions {
    pub nodes: NodeOptions,
    pub edges: EdgeOptions,
    pub physics: PhysicsOptions,
    pub interaction: InteractionOptions,
    pub layout: LayoutOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeOptions {
    pub border_width: u32,
    pub size: u32,
    pub font: LabelFont,
    pub scaling: ScalingOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelFont {
    pub size: u32,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScalingOptions {
    pub min: u32,
    pub max: u32,
    pub label: LabelScaling,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelScaling {
    pub enabled: bool,
    pub min: u32,
    pub max: u32,
    pub max_visible: u32,
    pub draw_threshold: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct EdgeOptions {
    pub color: String,
    pub arrows: ArrowOptions,
    pub smooth: SmoothOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArrowOptions {
    pub to: ArrowTarget,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArrowTarget {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SmoothOptions {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub mode: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsOptions {
    pub enabled: bool,
    pub solver: String,
    pub barnes_hut: BarnesHutOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarnesHutOptions {
    pub gravitational_constant: i64,
    pub spring_constant: f64,
    pub damping: f64,
    pub spring_length: u32,
    pub avoid_overlap: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionOptions {
    pub hover: bool,
    pub tooltip_delay: u64,
    pub hover_connected_edges: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    pub random_seed: u64,
}

impl Default for RendererOptions {
    fn default() -> Self {
        RendererOptions {
            nodes: NodeOptions {
                border_width: 2,
                size: 40,
                font: LabelFont {
                    size: 14,
                    color: "#ffffff".to_string(),
                },
                scaling: ScalingOptions {
                    min: 10,
                    max: 30,
                    label: LabelScaling {
                        enabled: true,
                        min: 14,
                        max: 30,
                        max_visible: 30,
                        draw_threshold: 5,
                    },
                },
            },
            edges: EdgeOptions {
                color: "#30363d".to_string(),
                arrows: ArrowOptions {
                    to: ArrowTarget { enabled: false },
                },
                smooth: SmoothOptions {
                    enabled: true,
                    mode: "dynamic".to_string(),
                },
            },
            physics: PhysicsOptions {
                enabled: true,
                solver: "barnesHut".to_string(),
                barnes_hut: BarnesHutOptions {
                    gravitational_constant: -10_000,
                    spring_constant: 0.04,
                    damping: 0.17,
                    spring_length: 200,
                    avoid_overlap: 0.01,
                },
            },
            interaction: InteractionOptions {
                hover: true,
                tooltip_delay: 200,
                hover_connected_edges: false,
            },
            layout: LayoutOptions { random_seed: 2 },
        }
    }
}

pub fn options_json(options: &RendererOptions) -> String {
    serde_json::to_string(options).unwrap_or("{}".to_string())
}

// ============================================================================
// Interaction Bridge
// ============================================================================

/// Socket plumbing shared by the full map page and the degraded pages.
/// Forwards close/Escape, replays server commands against the panel DOM.
const BRIDGE_JS: &str = r#"    const graphEl = document.getElementById('knowledge-graph');
    const sidebar = document.getElementById('sidebar');
    const closeBtn = document.getElementById('close-sidebar');
    const sidebarTitle = document.getElementById('sidebar-title');
    const paperList = document.getElementById('paper-list');

    const openNavBtn = document.getElementById('openNavBtn');
    const closeNavBtn = document.getElementById('closeNavBtn');
    const sidenav = document.getElementById('mySidenav');

    openNavBtn.addEventListener('click', () => {
        sidenav.classList.add('open');
    });
    closeNavBtn.addEventListener('click', () => {
        sidenav.classList.remove('open');
    });

    const wsProto = location.protocol === 'https:' ? 'wss:' : 'ws:';
    const socket = new WebSocket(wsProto + '//' + location.host + '/ws');

    function sendEvent(msg) {
        if (socket.readyState === WebSocket.OPEN) {
            socket.send(JSON.stringify(msg));
        }
    }

    function showPanel(cmd) {
        sidebarTitle.innerHTML = '';
        sidebarTitle.appendChild(document.createTextNode('Related research: "'));
        const span = document.createElement('span');
        span.style.color = '#20c997';
        span.textContent = cmd.title;
        sidebarTitle.appendChild(span);
        sidebarTitle.appendChild(document.createTextNode('"'));

        paperList.innerHTML = '';
        cmd.items.forEach((item) => {
            const li = document.createElement('li');
            const a = document.createElement('a');
            a.href = item.link;
            a.target = '_blank';
            a.textContent = item.title;
            a.title = item.tooltip;
            li.appendChild(a);
            paperList.appendChild(li);

            setTimeout(() => {
                li.style.opacity = '1';
                li.style.transform = 'translateX(0)';
            }, item.delayMs);

            li.style.opacity = '0';
            li.style.transform = 'translateX(20px)';
            li.style.transition = 'all 0.3s ease';
        });

        sidebar.classList.add('visible');
    }

    function applyCommand(cmd) {
        if (cmd.type === 'showPanel') {
            showPanel(cmd);
        } else if (cmd.type === 'hidePanel') {
            sidebar.classList.remove('visible');
        } else if (cmd.type === 'openLink') {
            window.open(cmd.url, '_blank');
        } else if (cmd.type === 'cursor' && graphEl) {
            graphEl.style.cursor = cmd.style;
        }
    }

    socket.addEventListener('message', (event) => {
        let cmd;
        try {
            cmd = JSON.parse(event.data);
        } catch (err) {
            console.error('Bad server message:', err);
            return;
        }
        applyCommand(cmd);
    });

    closeBtn.addEventListener('click', () => {
        sendEvent({ type: 'close' });
    });

    document.addEventListener('keydown', (e) => {
        if (e.key === 'Escape') {
            sendEvent({ type: 'close' });
        }
    });"#;

// ============================================================================
// Script Renderers
// ============================================================================

/// The full map page script: loads vis-network, builds the DataSets from the
/// embedded model, attaches the function-valued options, and forwards every
/// renderer event over the bridge.
pub fn render_graph_js(model_json: &str) -> String {
    format!(
        r##"<script src="{cdn}"></script>
<script>
(function() {{
{bridge}

    const model = {model_json};
    const options = {options_json};
    options.nodes.scaling.customScalingFunction = function(min, max, total, value) {{
        if (max === min) {{
            return 0;
        }}
        var scale = 1 / (max - min);
        return Math.max(0, (value - min) * scale);
    }};
    options.nodes.chosen = {{
        node: function(values, id, selected, hovering) {{
            if (hovering) {{
                values.size = values.size * 1.2;
            }}
        }}
    }};

    const data = {{
        nodes: new vis.DataSet(model.nodes),
        edges: new vis.DataSet(model.edges),
    }};
    const network = new vis.Network(graphEl, data, options);

    network.on('click', function (params) {{
        sendEvent({{ type: 'click', nodes: params.nodes }});
    }});
    network.on('hoverNode', function (params) {{
        sendEvent({{ type: 'hover', node: params.node }});
    }});
    network.on('blurNode', function () {{
        sendEvent({{ type: 'blur' }});
    }});
}})();
</script>"##,
        cdn = VIS_NETWORK_CDN,
        bridge = BRIDGE_JS,
        model_json = model_json,
        options_json = options_json(&RendererOptions::default()),
    )
}

/// Bridge-only script for pages without a graph. Close and navigation
/// still work, so a degraded page behaves like the full one minus nodes.
pub fn render_panel_js() -> String {
    format!(
        "<script>\n(function() {{\n{bridge}\n}})();\n</script>",
        bridge = BRIDGE_JS,
    )
}

// ============================================================================
// Tests
// ============================================================================
