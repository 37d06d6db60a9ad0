//! Captured response - raw content plus multi-value headers

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Response body as captured: the raw text and the declared content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub raw: String,
    pub content_type: Option<String>,
}

impl Content {
    pub fn new(raw: impl Into<String>, content_type: Option<&str>) -> Self {
        Self {
            raw: raw.into(),
            content_type: content_type.map(str::to_string),
        }
    }
}

/// A captured response: optional content and a header map. A header name may
/// carry several values; their capture order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub content: Option<Content>,
    pub headers: FxHashMap<String, Vec<String>>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(mut self, raw: impl Into<String>, content_type: Option<&str>) -> Self {
        self.content = Some(Content::new(raw, content_type));
        self
    }

    /// Append one header value, keeping earlier values for the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }
}
