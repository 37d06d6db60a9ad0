//! Header sub-resolver - name (and optional exact value) lookup
//!
//! Request side reads the authored header nodes in order; response side
//! reads the captured multi-value header map. Name comparison is exact on
//! both sides.

use rustc_hash::FxHashMap;

use crate::ast::HeadersNode;
use crate::error::ReqwireError;

use super::path::HeaderSelector;
use super::result::BindingResult;

/// First header node whose name matches; the header must carry a value.
pub(crate) fn resolve_request_header(headers: &HeadersNode, name: &str) -> BindingResult<String> {
    let header = headers.headers.iter().find(|header| header.name == name);
    match header.and_then(|header| header.value.as_deref()) {
        Some(value) => BindingResult::success(value.to_string()),
        None => BindingResult::failure(ReqwireError::InvalidHeaderNameInNamedRequest {
            header: name.to_string(),
        }),
    }
}

/// Captured-response lookup: first value by default, or the value exactly
/// equal to the selector's fifth segment when one is required.
pub(crate) fn resolve_response_header(
    headers: &FxHashMap<String, Vec<String>>,
    selector: &HeaderSelector,
) -> BindingResult<String> {
    let miss = || {
        BindingResult::failure(ReqwireError::InvalidHeaderNameInNamedRequest {
            header: selector.name.clone(),
        })
    };

    let Some(values) = headers.get(&selector.name) else {
        return miss();
    };

    let value = match &selector.exact_value {
        None => values.first(),
        Some(required) => values.iter().find(|value| *value == required),
    };

    match value {
        Some(value) => BindingResult::success(value.clone()),
        None => miss(),
    }
}
