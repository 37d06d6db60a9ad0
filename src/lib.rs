//! Reqwire - expression binding engine for .http request scripts
//!
//! Replaces embedded `{{ }}` expressions in request text with values
//! extracted from previously executed named requests:
//!
//! ```text
//! GET /orders/{{ order1.response.body.$.id }}
//! ```
//!
//! ## Module Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        DOMAIN MODEL                          │
//! │  ast/       parse-tree slice (ExpressionNode, RequestNode)   │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      APPLICATION LAYER                       │
//! │  binding/   path grammar, NamedRequest dispatch, sub-        │
//! │             resolvers (raw/JSON/XML/header), render          │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    INFRASTRUCTURE LAYER                      │
//! │  store/     captured responses, named-request registry       │
//! │  util/      content-type constants                           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Responsibilities
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`ast`] | Parse-tree node types the engine reads |
//! | [`binding`] | Path parsing, resolution dispatch, `{{ }}` rendering |
//! | [`store`] | Captured `Response`s and the `RequestRegistry` |
//! | [`error`] | Error types with stable codes and fix suggestions |
//!
//! Resolution is synchronous and side-effect free: a `NamedRequest` is
//! immutable once captured, so expressions may be resolved against the same
//! registry concurrently without locking.

// ═══════════════════════════════════════════════════════════════
// DOMAIN MODEL - parse-tree types
// ═══════════════════════════════════════════════════════════════
pub mod ast;

// ═══════════════════════════════════════════════════════════════
// APPLICATION LAYER - resolution logic
// ═══════════════════════════════════════════════════════════════
pub mod binding;

// ═══════════════════════════════════════════════════════════════
// INFRASTRUCTURE LAYER - captured data
// ═══════════════════════════════════════════════════════════════
pub mod store;
pub mod util;

// ═══════════════════════════════════════════════════════════════
// CROSS-CUTTING - error handling
// ═══════════════════════════════════════════════════════════════
pub mod error;

// ═══════════════════════════════════════════════════════════════
// PUBLIC API RE-EXPORTS
// ═══════════════════════════════════════════════════════════════

// Error types
pub use error::{FixSuggestion, ReqwireError, Result};

// AST types (Domain Model)
pub use ast::{
    BodyNode, CommentNode, EscapedExpressionNode, ExpressionNode, HeaderNode, HeadersNode,
    RequestNode,
};

// Binding types (Application Layer)
pub use binding::{
    expressions, render, BindingResult, BodySelector, HeaderSelector, NamedRequest, RequestPath,
    Source, Target,
};

// Store types
pub use store::{Content, RequestRegistry, Response};
