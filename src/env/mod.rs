//! Environment variable access module
//!
//! This module provides typed accessors for process environment
//! variables with per-accessor fallback policies, behind an injectable
//! lookup source so tests never have to mutate real process state.

pub mod accessors;
pub mod source;

pub use accessors::*;
pub use source::*;
