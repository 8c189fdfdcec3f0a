//! Lookup group: fixed exact-match tables with a sentinel for misses.
//!
//! The built-in tables are part of the public contract. Lookups scan them
//! linearly, so every call is bounded by the table size and allocates nothing.

/// Returned by every lookup when no entry matches.
pub const NOT_FOUND: i64 = -1;

/// Built-in string table. Matching is exact and case-sensitive.
pub const STRING_TABLE: &[(&str, i64)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

/// Built-in integer table.
pub const INT_TABLE: &[(i64, i64)] = &[(1, 10), (2, 20), (3, 30), (4, 40), (5, 50), (42, 4200)];

/// Look `param` up in the built-in string table, or return [`NOT_FOUND`].
pub fn lookup_string(param: &str) -> i64 {
    match STRING_TABLE.iter().find(|(key, _)| *key == param) {
        Some((_, value)) => *value,
        None => {
            tracing::trace!(key = param, "string lookup miss");
            NOT_FOUND
        }
    }
}

/// Look `param` up in the built-in integer table, or return [`NOT_FOUND`].
pub fn lookup_int(param: i64) -> i64 {
    match INT_TABLE.iter().find(|(key, _)| *key == param) {
        Some((_, value)) => *value,
        None => {
            tracing::trace!(key = param, "int lookup miss");
            NOT_FOUND
        }
    }
}
