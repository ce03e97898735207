use std::fmt;
use std::str::from_utf8;

/// How a captured body is shown. Each variant is one step of the fallback
/// chain: JSON, then UTF-8 text, then an opaque binary notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    Empty,
    Json(String),
    Text(String),
    Binary(Vec<u8>),
}

impl BodyView {

    pub fn interpret(body: &[u8]) -> Self {
        if body.is_empty() {
            return BodyView::Empty;
        }
        pretty_json(body)
            .or_else(|| plain_text(body))
            .unwrap_or_else(|| BodyView::Binary(body.to_vec()))
    }

    /// Form used in saved records, where raw bytes are reduced to a length.
    pub fn summary(&self) -> BodySummary<'_> {
        BodySummary(self)
    }
}

fn pretty_json(body: &[u8]) -> Option<BodyView> {
    let text = from_utf8(body).ok()?;
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    serde_json::to_string_pretty(&value).ok().map(BodyView::Json)
}

fn plain_text(body: &[u8]) -> Option<BodyView> {
    from_utf8(body).ok().map(|text| BodyView::Text(text.to_string()))
}

impl fmt::Display for BodyView {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BodyView::Empty => Ok(()),
            BodyView::Json(text) | BodyView::Text(text) => write!(f, "{}", text),
            BodyView::Binary(bytes) => write!(f, "Binary data: b\"{}\"", bytes.escape_ascii()),
        }
    }
}

pub struct BodySummary<'a>(&'a BodyView);

impl fmt::Display for BodySummary<'_> {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            BodyView::Binary(bytes) => write!(f, "Binary data: {} bytes", bytes.len()),
            other => write!(f, "{}", other),
        }
    }
}
