//! Centralized constants for content-type validation
//!
//! Response-side selectors validate the captured content type against these
//! values: JSON by prefix (parameters like `charset` may follow), XML by
//! exact match.

/// Content type prefix required by the `$` selector on a response body
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Exact content type required by the `//` selector on a response body
pub const CONTENT_TYPE_XML: &str = "application/xml";
