//! Binding Result - the success/failure contract of every resolver
//!
//! Every resolver entry point returns `BindingResult`; recoverable failures
//! travel as data and no parser error crosses the module boundary.

use crate::error::ReqwireError;

/// Outcome of resolving one path against captured data.
#[derive(Debug)]
pub enum BindingResult<T> {
    /// Resolution produced a value.
    Success(T),
    /// Resolution failed with a diagnostic.
    Failure(ReqwireError),
}

impl<T> BindingResult<T> {
    pub fn success(value: T) -> Self {
        BindingResult::Success(value)
    }

    pub fn failure(error: ReqwireError) -> Self {
        BindingResult::Failure(error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BindingResult::Success(_))
    }

    /// Get the resolved value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            BindingResult::Success(value) => Some(value),
            BindingResult::Failure(_) => None,
        }
    }

    /// Get the diagnostic, if resolution failed.
    pub fn diagnostic(&self) -> Option<&ReqwireError> {
        match self {
            BindingResult::Success(_) => None,
            BindingResult::Failure(error) => Some(error),
        }
    }

    /// Map the success value, passing failures through.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> BindingResult<U> {
        match self {
            BindingResult::Success(value) => BindingResult::Success(f(value)),
            BindingResult::Failure(error) => BindingResult::Failure(error),
        }
    }

    /// Convert into a plain `Result` for `?` propagation at the render layer.
    pub fn into_result(self) -> Result<T, ReqwireError> {
        match self {
            BindingResult::Success(value) => Ok(value),
            BindingResult::Failure(error) => Err(error),
        }
    }
}
