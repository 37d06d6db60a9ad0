//! Named request resolution - the path dispatch entry point
//!
//! A `NamedRequest` binds a request node to its captured response at
//! request-completion time and is immutable afterwards, so resolving many
//! expressions against the same instance is safe without locking.

use serde_json::Value;
use tracing::debug;

use crate::ast::{ExpressionNode, RequestNode};
use crate::error::ReqwireError;
use crate::store::Response;
use crate::util::constants::{CONTENT_TYPE_JSON, CONTENT_TYPE_XML};

use super::header;
use super::json;
use super::path::{BodySelector, HeaderSelector, RequestPath, Source, Target};
use super::result::BindingResult;
use super::xml;

/// A previously executed request, identified by its trailing name comment,
/// together with the captured response.
#[derive(Debug, Clone)]
pub struct NamedRequest {
    name: Option<String>,
    request: RequestNode,
    response: Response,
}

impl NamedRequest {
    /// Capture a completed request. The name is derived from the trailing
    /// comment; without one the request cannot be referenced by expressions.
    pub fn new(request: RequestNode, response: Response) -> Self {
        let name = request.name().map(str::to_string);
        Self {
            name,
            request,
            response,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    /// Resolve a dotted path against this request or its response.
    ///
    /// `expression` is the node the caller wants attributed in diagnostics.
    pub fn resolve_path(
        &self,
        segments: &[&str],
        expression: &ExpressionNode,
    ) -> BindingResult<String> {
        let invalid_path = || {
            BindingResult::failure(ReqwireError::InvalidNamedRequestPath {
                expression: expression.text().to_string(),
            })
        };

        let Some(path) = RequestPath::parse(segments) else {
            return invalid_path();
        };
        if self.name.as_deref() != Some(path.request_name.as_str()) {
            return invalid_path();
        }

        let full_path = segments.join(".");
        debug!(name = %path.request_name, source = ?path.source, "resolving named request path");

        match (&path.source, &path.target) {
            (Source::Request, Target::Body(selector)) => {
                self.resolve_request_body(selector, &path.request_name, &full_path)
            }
            (Source::Request, Target::Headers(selector)) => {
                self.resolve_request_headers(selector, &path.request_name)
            }
            (Source::Response, Target::Body(selector)) => {
                self.resolve_response_body(selector, &full_path)
            }
            (Source::Response, Target::Headers(selector)) => {
                header::resolve_response_header(&self.response.headers, selector)
            }
        }
    }

    /// Request-side body. The body is authored script text, so no content
    /// type exists to validate; selectors parse it unconditionally.
    fn resolve_request_body(
        &self,
        selector: &BodySelector,
        name: &str,
        full_path: &str,
    ) -> BindingResult<String> {
        let Some(body) = &self.request.body else {
            return BindingResult::failure(ReqwireError::InvalidBodyInNamedRequest {
                name: name.to_string(),
            });
        };

        match selector {
            BodySelector::Raw => BindingResult::success(body.text.clone()),
            BodySelector::Json(segments) => resolve_json_text(&body.text, segments, full_path),
            BodySelector::Xml(query) => xml::resolve_query(&body.text, query, full_path),
        }
    }

    /// Request-side headers. A required exact value only applies on the
    /// response side and is ignored here.
    fn resolve_request_headers(
        &self,
        selector: &HeaderSelector,
        name: &str,
    ) -> BindingResult<String> {
        let Some(headers) = &self.request.headers else {
            return BindingResult::failure(ReqwireError::InvalidHeadersInNamedRequest {
                name: name.to_string(),
            });
        };
        header::resolve_request_header(headers, &selector.name)
    }

    /// Response-side body. JSON selectors require an `application/json`
    /// content type prefix, XML selectors exactly `application/xml`.
    fn resolve_response_body(
        &self,
        selector: &BodySelector,
        full_path: &str,
    ) -> BindingResult<String> {
        let Some(content) = &self.response.content else {
            return BindingResult::failure(ReqwireError::InvalidContentInNamedRequest {
                path: full_path.to_string(),
            });
        };

        match selector {
            BodySelector::Raw => BindingResult::success(content.raw.clone()),
            BodySelector::Json(segments) => {
                let is_json = content
                    .content_type
                    .as_deref()
                    .is_some_and(|ct| ct.starts_with(CONTENT_TYPE_JSON));
                if !is_json {
                    return content_type_failure(content.content_type.as_deref(), CONTENT_TYPE_JSON);
                }
                resolve_json_text(&content.raw, segments, full_path)
            }
            BodySelector::Xml(query) => {
                if content.content_type.as_deref() != Some(CONTENT_TYPE_XML) {
                    return content_type_failure(content.content_type.as_deref(), CONTENT_TYPE_XML);
                }
                xml::resolve_query(&content.raw, query, full_path)
            }
        }
    }
}

fn content_type_failure(actual: Option<&str>, expected: &str) -> BindingResult<String> {
    BindingResult::failure(ReqwireError::InvalidContentType {
        actual: actual.unwrap_or("null").to_string(),
        expected: expected.to_string(),
    })
}

/// Parse `text` as JSON and walk the member segments. Both a parse failure
/// and an unmatched path surface as the content diagnostic.
fn resolve_json_text(text: &str, segments: &[String], full_path: &str) -> BindingResult<String> {
    let document: Value = match serde_json::from_str(text) {
        Ok(document) => document,
        Err(_) => {
            return BindingResult::failure(ReqwireError::InvalidContentInNamedRequest {
                path: full_path.to_string(),
            });
        }
    };

    match json::resolve_segments(&document, segments) {
        Some(value) => BindingResult::success(value),
        None => BindingResult::failure(ReqwireError::InvalidContentInNamedRequest {
            path: full_path.to_string(),
        }),
    }
}
