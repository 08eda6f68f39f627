//! Environment lookup sources
//!
//! The accessors in this module read through an `EnvSource` rather
//! than `std::env` directly, so callers can substitute an in-memory
//! source in tests without touching process-wide state.

use std::cell::RefCell;
use std::collections::HashMap;

/// Read-only lookup of a named environment variable.
pub trait EnvSource {
    /// Returns the variable's value, or `None` when it is unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// Production source backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory source for tests and embedding.
///
/// Never touches the process environment. Uses `RefCell` for interior
/// mutability so all methods take `&self`; not `Sync`.
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RefCell<HashMap<String, String>>,
}

impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.borrow_mut().insert(name.into(), value.into());
    }

    pub fn remove(&self, name: &str) {
        self.vars.borrow_mut().remove(name);
    }

    pub fn clear(&self) {
        self.vars.borrow_mut().clear();
    }
}

impl EnvSource for InMemoryEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.borrow().get(name).cloned()
    }
}
