//! Arithmetic group.
//!
//! All arithmetic wraps on overflow (two's complement), so every `i64` input
//! is valid and no call can panic.

/// Constant factor applied by [`multiply`].
pub const MULTIPLY_FACTOR: i64 = 2;

/// Return `param` unchanged.
pub fn same(param: i64) -> i64 {
    param
}

/// Return `param * MULTIPLY_FACTOR`, wrapping on overflow.
pub fn multiply(param: i64) -> i64 {
    param.wrapping_mul(MULTIPLY_FACTOR)
}

/// Return `param1 + param2`, wrapping on overflow.
pub fn add(param1: i64, param2: i64) -> i64 {
    param1.wrapping_add(param2)
}
