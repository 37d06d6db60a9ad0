//! Store Module - captured exchanges and the named-request table
//!
//! - `response`: Response/Content captured at request-completion time
//! - `registry`: name -> NamedRequest table supplied to the binder
//!
//! Everything here is immutable once captured; resolution only reads.

mod registry;
mod response;

// Re-export public types
pub use registry::RequestRegistry;
pub use response::{Content, Response};
