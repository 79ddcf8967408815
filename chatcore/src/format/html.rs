//! HTML rendering of classified replies.
//!
//! Every interpolated value goes through [`escape_html`]; fixed labels and
//! markup are the only unescaped text.

use serde_json::Value;

use super::block::Block;

/// Escape text for safe insertion into element content or attribute values.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// `<div class="response-list">` with one `response-item` per block.
pub(crate) fn listing(blocks: &[Block]) -> String {
    let mut out = String::from(r#"<div class="response-list">"#);
    for block in blocks {
        push_block(&mut out, "response-item", block);
    }
    out.push_str("</div>");
    out
}

/// `<div class="store-info">` for the single shop record.
pub(crate) fn store_info(block: &Block) -> String {
    let mut out = String::new();
    push_block(&mut out, "store-info", block);
    out
}

/// `<pre>` with the value pretty-printed at a two-space indent.
pub(crate) fn pretty_json(value: &Value) -> String {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    format!("<pre>{}</pre>", escape_html(&pretty))
}

/// Fixed message plus escaped detail for a failed store-info load.
#[must_use]
pub fn error_panel(message: &str, detail: &str) -> String {
    format!(
        r#"<div class="error-message"><p>{}</p><p class="error-details">{}</p></div>"#,
        escape_html(message),
        escape_html(detail)
    )
}

fn push_block(out: &mut String, class: &str, block: &Block) {
    out.push_str(&format!(r#"<div class="{class}"><h4>{}</h4>"#, escape_html(&block.heading)));
    for field in &block.fields {
        out.push_str(&format!("<p><strong>{}:</strong> {}</p>", field.label, escape_html(&field.value)));
    }
    out.push_str("</div>");
}
