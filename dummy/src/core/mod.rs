//! Deterministic, pure logic.
//!
//! Core modules must be free of I/O side effects. Every function here returns
//! the same output for the same input and never touches shared state.

pub mod lookup;
pub mod util;
