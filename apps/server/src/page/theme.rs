pub const GLOBAL_CSS: &str = r#"
:root {
  --bg: #ffffff;
  --sidebar-bg: #f0f2f6;
  --panel: #ffffff;
  --border: rgba(49, 51, 63, 0.2);
  --text: #31333f;
  --text-muted: #6b6d7a;
  --accent: #ff4b4b;
  --accent-strong: #e03e3e;
  --error-bg: #ffecec;
  --error-text: #9d1c1c;
  --radius: 8px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --font-body: "Source Sans Pro", system-ui, -apple-system, sans-serif;
}

* { box-sizing: border-box; }
html, body {
  margin: 0;
  padding: 0;
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-body);
}

.layout { display: flex; min-height: 100vh; }

.sidebar {
  width: 280px;
  flex-shrink: 0;
  background: var(--sidebar-bg);
  padding: var(--space-6) var(--space-4);
}
.sidebar h2 { margin-top: 0; font-size: 1.3rem; }
.sidebar .caption { color: var(--text-muted); font-size: 0.85rem; }
.sidebar hr { border: none; border-top: 1px solid var(--border); margin: var(--space-4) 0; }

.main { flex: 1; padding: var(--space-6) 48px; }

details.expander {
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: var(--space-3) var(--space-4);
  margin-bottom: var(--space-4);
}
details.expander summary {
  cursor: pointer;
  font-size: 1.2rem;
  font-weight: bold;
}

.columns { display: grid; grid-template-columns: 1fr 2fr; gap: var(--space-6); }

.field { margin: var(--space-4) 0; }
.field label { display: block; font-weight: 600; margin-bottom: 4px; }
.field .help { color: var(--text-muted); font-size: 0.8rem; }
.field input[type=range] { width: 100%; padding: 0.8rem 0; }
.field input[type=number] { width: 100%; padding: 6px; }
.field output { font-weight: 600; color: var(--accent); }
.choices label { display: inline-block; font-weight: normal; margin-right: var(--space-3); }

button {
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--panel);
  padding: var(--space-2) var(--space-4);
  font-size: 1rem;
  cursor: pointer;
}
button.primary { width: 100%; }
button.primary:hover { border-color: var(--accent); color: var(--accent-strong); }
button:disabled { cursor: not-allowed; opacity: 0.5; }

.error {
  background: var(--error-bg);
  color: var(--error-text);
  border-radius: var(--radius);
  padding: var(--space-3) var(--space-4);
  margin-bottom: var(--space-4);
}

.chart { margin-top: var(--space-6); text-align: center; }
.chart svg { max-width: 100%; height: auto; }
"#;
