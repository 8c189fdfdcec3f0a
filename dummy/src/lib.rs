//! Stateless arithmetic and lookup helpers for demo hosts.
//!
//! - **[`core`]**: Pure functions and the built-in lookup tables.
//!   No I/O, safe to call from any number of threads.
//! - **[`logging`]**: Opt-in tracing subscriber setup.
//!
//! The five contract functions are re-exported at the crate root.

pub mod core;
pub mod logging;

pub use crate::core::lookup::{NOT_FOUND, lookup_int, lookup_string};
pub use crate::core::util::{MULTIPLY_FACTOR, add, multiply, same};
