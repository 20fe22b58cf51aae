//! CSS styles for the paper map.
//!
//! Contains the main STYLE constant with all CSS for the web interface.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Dark Theme */
:root {
    --bg: #0d1117;
    --surface: #161b22;
    --border: #30363d;
    --fg: #c9d1d9;
    --muted: #8b949e;
    --link: #58a6ff;
    --highlight: #20c997;
    --error: #f85149;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
    overflow: hidden;
}

a { color: var(--link); text-decoration: none; }
a:hover { text-decoration: underline; }

/* Graph canvas fills the viewport; panels float above it */
#knowledge-graph {
    position: fixed;
    inset: 0;
    background: var(--bg);
}

.error-banner {
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    text-align: center;
    color: var(--error);
}
.error-banner h3 { font-size: 1.2rem; margin-bottom: 0.5rem; }
.error-banner p { color: var(--muted); }

/* Right-hand paper panel */
#sidebar {
    position: fixed;
    top: 0;
    right: 0;
    width: 340px;
    max-width: 90vw;
    height: 100vh;
    background: var(--surface);
    border-left: 1px solid var(--border);
    transform: translateX(100%);
    transition: transform 0.3s ease;
    z-index: 150;
    display: flex;
    flex-direction: column;
}
#sidebar.visible { transform: translateX(0); }

.sidebar-header {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    gap: 0.5rem;
    padding: 1rem;
    border-bottom: 1px solid var(--border);
}
#sidebar-title { font-size: 1rem; font-weight: 600; }

#close-sidebar {
    background: none;
    border: none;
    color: var(--muted);
    font-size: 1.4rem;
    line-height: 1;
    cursor: pointer;
}
#close-sidebar:hover { color: var(--fg); }

#paper-list {
    list-style: none;
    overflow-y: auto;
    padding: 0.5rem 1rem;
}
#paper-list li {
    padding: 0.6rem 0;
    border-bottom: 1px solid var(--border);
}
#paper-list li:last-child { border-bottom: none; }
#paper-list a { display: block; font-size: 0.9rem; }

/* Left-hand navigation drawer */
#mySidenav {
    position: fixed;
    top: 0;
    left: 0;
    width: 250px;
    height: 100vh;
    background: var(--surface);
    border-right: 1px solid var(--border);
    transform: translateX(-100%);
    transition: transform 0.3s ease;
    z-index: 200;
    padding-top: 3.5rem;
}
#mySidenav.open { transform: translateX(0); }
#mySidenav a {
    display: block;
    padding: 0.6rem 1.25rem;
    color: var(--muted);
    font-size: 0.95rem;
}
#mySidenav a:hover { color: var(--fg); text-decoration: none; }

#openNavBtn {
    position: fixed;
    top: 0.75rem;
    left: 0.75rem;
    z-index: 190;
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 6px;
    color: var(--fg);
    font-size: 1.1rem;
    padding: 0.25rem 0.6rem;
    cursor: pointer;
}

#closeNavBtn {
    position: absolute;
    top: 0.6rem;
    right: 0.75rem;
    background: none;
    border: none;
    color: var(--muted);
    font-size: 1.4rem;
    cursor: pointer;
}
#closeNavBtn:hover { color: var(--fg); }
"#;
