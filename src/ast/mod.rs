//! AST Module - the slice of the request-script parse tree the engine reads
//!
//! Contains the already-parsed node types handed over by the script parser:
//! - `node`: ExpressionNode, EscapedExpressionNode
//! - `request`: RequestNode, BodyNode, HeadersNode, HeaderNode, CommentNode
//!
//! These types represent the "what" - static structure produced by the
//! parser. Resolution against captured responses lives in the `binding`
//! module.

mod node;
mod request;

// Re-export all public types
pub use node::{EscapedExpressionNode, ExpressionNode};
pub use request::{BodyNode, CommentNode, HeaderNode, HeadersNode, RequestNode};
