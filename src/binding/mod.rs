//! Binding Module - named request path resolution
//!
//! Resolves the dotted paths inside embedded `{{ }}` expressions against
//! previously executed named requests:
//! - `result`: BindingResult success/failure contract
//! - `path`: positional path grammar -> tagged RequestPath
//! - `resolve`: NamedRequest dispatch over the sub-resolvers
//! - `json` / `xml` / `header`: body and header sub-resolvers
//! - `template`: render-time `{{ }}` substitution over request text
//!
//! Path grammar:
//! ```text
//! <name>.<request|response>.<body|headers>.<selector>[.<value>]
//! ```
//! where selector is `*` (raw body), `$` plus dotted member segments (JSON),
//! `//...` (single-node XML query), or a header name.
//!
//! Data flow:
//! ```text
//! request text -> template (scan {{ }})
//!                     |
//!              ExpressionNode segments
//!                     |
//!               path (RequestPath)
//!                     |
//!        resolve (NamedRequest dispatch)
//!              /      |        \
//!           json     xml     header
//! ```

mod header;
mod json;
mod path;
mod resolve;
mod result;
mod template;
mod xml;

// Re-export public types
pub use path::{BodySelector, HeaderSelector, RequestPath, Source, Target};
pub use resolve::NamedRequest;
pub use result::BindingResult;
pub use template::{expressions, render};
