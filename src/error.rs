//! Reqwire error types with error codes
//!
//! Error code ranges:
//! - REQWIRE-001-009: Expression/render errors
//! - REQWIRE-041-047: Named request path binding diagnostics
//!
//! The 041-047 range is the closed taxonomy observed by expression-rendering
//! callers: every recoverable resolution failure maps onto one of those seven
//! variants, never onto a panic or a foreign error type.

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReqwireError>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// All error variants are part of the public API.
///
/// Implements both `thiserror::Error` for std error compatibility
/// and `miette::Diagnostic` for terminal error display in host tools.
#[derive(Error, Debug, Diagnostic)]
pub enum ReqwireError {
    // ═══════════════════════════════════════════
    // EXPRESSION / RENDER ERRORS (001-009)
    // ═══════════════════════════════════════════
    #[error("[REQWIRE-001] Unknown named request '{name}'")]
    #[diagnostic(
        code(reqwire::unknown_named_request),
        help("Name a prior request with a trailing name comment before referencing it")
    )]
    UnknownNamedRequest { name: String },

    // ═══════════════════════════════════════════
    // PATH BINDING DIAGNOSTICS (041-047)
    // ═══════════════════════════════════════════
    #[error("[REQWIRE-041] Invalid named request path in expression '{expression}'")]
    #[diagnostic(
        code(reqwire::invalid_named_request_path),
        help("Use <name>.<request|response>.<body|headers>.<selector>")
    )]
    InvalidNamedRequestPath { expression: String },

    #[error("[REQWIRE-042] Named request '{name}' has no body")]
    InvalidBodyInNamedRequest { name: String },

    #[error("[REQWIRE-043] Named request '{name}' has no headers")]
    InvalidHeadersInNamedRequest { name: String },

    #[error("[REQWIRE-044] Header '{header}' not found in named request")]
    InvalidHeaderNameInNamedRequest { header: String },

    #[error("[REQWIRE-045] Content could not be resolved for path '{path}'")]
    #[diagnostic(
        code(reqwire::invalid_content),
        help("Check that the captured content parses and the selector matches it")
    )]
    InvalidContentInNamedRequest { path: String },

    #[error("[REQWIRE-046] Content type '{actual}' does not match expected '{expected}'")]
    InvalidContentType { actual: String, expected: String },

    #[error("[REQWIRE-047] XPath query '{query}' did not match exactly one node")]
    InvalidXmlNodeInNamedRequest { query: String },
}

impl ReqwireError {
    /// Get the error code (e.g., "REQWIRE-041")
    pub fn code(&self) -> &'static str {
        match self {
            // Expression/render errors
            Self::UnknownNamedRequest { .. } => "REQWIRE-001",
            // Path binding diagnostics
            Self::InvalidNamedRequestPath { .. } => "REQWIRE-041",
            Self::InvalidBodyInNamedRequest { .. } => "REQWIRE-042",
            Self::InvalidHeadersInNamedRequest { .. } => "REQWIRE-043",
            Self::InvalidHeaderNameInNamedRequest { .. } => "REQWIRE-044",
            Self::InvalidContentInNamedRequest { .. } => "REQWIRE-045",
            Self::InvalidContentType { .. } => "REQWIRE-046",
            Self::InvalidXmlNodeInNamedRequest { .. } => "REQWIRE-047",
        }
    }
}

impl FixSuggestion for ReqwireError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            ReqwireError::UnknownNamedRequest { .. } => {
                Some("Add a trailing name comment to the request you want to reference")
            }
            ReqwireError::InvalidNamedRequestPath { .. } => {
                Some("Use format: name.request|response.body|headers.selector")
            }
            ReqwireError::InvalidBodyInNamedRequest { .. } => {
                Some("Reference a request that was sent with a body")
            }
            ReqwireError::InvalidHeadersInNamedRequest { .. } => {
                Some("Reference a request that was sent with headers")
            }
            ReqwireError::InvalidHeaderNameInNamedRequest { .. } => {
                Some("Check the header name (and required value) against the captured request")
            }
            ReqwireError::InvalidContentInNamedRequest { .. } => {
                Some("Check that the body is well-formed and the selector path exists in it")
            }
            ReqwireError::InvalidContentType { .. } => {
                Some("JSON selectors need application/json content, XML selectors application/xml")
            }
            ReqwireError::InvalidXmlNodeInNamedRequest { .. } => {
                Some("Narrow the query so it selects a single node")
            }
        }
    }
}
