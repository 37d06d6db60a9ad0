//! Request registry - the named-request table the binder resolves against
//!
//! Built by the executing session as requests complete; read-only during
//! expression resolution. Only requests with a name comment register.

use rustc_hash::FxHashMap;

use crate::binding::NamedRequest;

#[derive(Debug, Clone, Default)]
pub struct RequestRegistry {
    requests: FxHashMap<String, NamedRequest>,
}

impl RequestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a completed request under its name. Returns `false` when the
    /// request is unnamed (and therefore not referenceable). A later request
    /// with the same name replaces the earlier one.
    pub fn insert(&mut self, request: NamedRequest) -> bool {
        match request.name() {
            Some(name) => {
                self.requests.insert(name.to_string(), request);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&NamedRequest> {
        self.requests.get(name)
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Names currently registered, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.requests.keys().map(String::as_str)
    }
}
