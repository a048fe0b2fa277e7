#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-clinic-ui]";

/// Default CSS for the dashboard along with easy-to-override design tokens.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --clinic-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --clinic-bg: #f5f7fa;
  --clinic-card-bg: #ffffff;
  --clinic-card-border: rgba(148, 163, 184, 0.28);
  --clinic-radius: 12px;
  --clinic-text: #1f2933;
  --clinic-muted: #52606d;
  --clinic-primary: #1677ff;
  --clinic-primary-bg: rgba(22, 119, 255, 0.1);
  --clinic-paid: #52c41a;
  --clinic-pending: #1677ff;
  --clinic-tag-bg: rgba(22, 119, 255, 0.12);
  --clinic-sider-width: 232px;
  --clinic-sider-collapsed: 64px;
}

.clinic-root[data-theme="dark"] {
  --clinic-bg: #141414;
  --clinic-card-bg: #1f1f1f;
  --clinic-card-border: rgba(255, 255, 255, 0.12);
  --clinic-text: #e6e6e6;
  --clinic-muted: #a6a6a6;
  --clinic-primary-bg: rgba(22, 119, 255, 0.22);
}

.clinic-root {
  font-family: var(--clinic-font-family);
  background: var(--clinic-bg);
  color: var(--clinic-text);
  display: grid;
  grid-template-columns: var(--clinic-sider-width) 1fr;
  min-height: 100vh;
}

.clinic-root.is-collapsed {
  grid-template-columns: var(--clinic-sider-collapsed) 1fr;
}

.clinic-sider {
  background: var(--clinic-card-bg);
  border-right: 1px solid var(--clinic-card-border);
  padding: 12px 8px;
  display: flex;
  flex-direction: column;
  gap: 4px;
}

.clinic-sider a {
  color: inherit;
  text-decoration: none;
  padding: 8px 12px;
  border-radius: 8px;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.clinic-sider a.is-active {
  background: var(--clinic-primary-bg);
  color: var(--clinic-primary);
  font-weight: 600;
}

.clinic-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 12px 16px;
  border-bottom: 1px solid var(--clinic-card-border);
  background: var(--clinic-card-bg);
}

.clinic-page {
  padding: 16px;
}

.clinic-page h1 {
  font-size: 20px;
  margin: 8px 0 16px;
}

.clinic-columns {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 16px;
}

.clinic-card {
  background: var(--clinic-card-bg);
  border: 1px solid var(--clinic-card-border);
  border-radius: var(--clinic-radius);
  overflow: hidden;
}

.clinic-card > header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 10px 12px;
  font-weight: 600;
  border-bottom: 1px solid var(--clinic-card-border);
}

.clinic-card .card-body {
  padding: 12px;
}

.clinic-list {
  list-style: none;
  margin: 0;
  padding: 0;
  max-height: 700px;
  overflow: auto;
}

.clinic-list li {
  display: flex;
  flex-direction: column;
  gap: 4px;
  padding: 10px 12px;
  border-bottom: 1px solid var(--clinic-card-border);
}

.clinic-list li.is-selectable {
  cursor: pointer;
}

.clinic-list li.is-selected {
  background: var(--clinic-primary-bg);
}

.row-main {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 8px;
}

.row-lead {
  display: flex;
  align-items: center;
  gap: 8px;
}

.row-note {
  color: var(--clinic-muted);
  margin-left: 22px;
}

.status-dot {
  width: 12px;
  height: 12px;
  border-radius: 50%;
  border: 2px solid var(--clinic-pending);
}

.status-dot.is-paid {
  border-color: var(--clinic-paid);
  background: var(--clinic-paid);
}

.price-tag {
  background: var(--clinic-tag-bg);
  color: var(--clinic-primary);
  border-radius: 6px;
  padding: 2px 8px;
  font-variant-numeric: tabular-nums;
}

.group-heading {
  padding: 8px 12px;
  color: var(--clinic-muted);
}

.clinic-empty {
  color: var(--clinic-muted);
  padding: 16px;
  text-align: center;
}

.filter-panel {
  display: flex;
  flex-direction: column;
  gap: 12px;
}

.filter-panel label {
  display: flex;
  flex-direction: column;
  gap: 6px;
  color: var(--clinic-muted);
}

.detail-grid {
  display: grid;
  grid-template-columns: auto 1fr;
  gap: 6px 12px;
}

.detail-grid dt {
  color: var(--clinic-muted);
}

.detail-grid dd {
  margin: 0;
}

.search-box {
  padding: 8px;
}

.search-box input {
  width: 100%;
  box-sizing: border-box;
}

.not-found {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 12px;
  padding: 48px 24px;
}

@media (max-width: 960px) {
  .clinic-columns {
    grid-template-columns: minmax(0, 1fr);
  }

  .clinic-root {
    grid-template-columns: minmax(0, 1fr);
  }

  .clinic-sider {
    flex-direction: row;
    overflow-x: auto;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("В документе нет тега <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-clinic-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
