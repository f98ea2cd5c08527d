/// Operator dispatch.
pub mod core;

/// Arithmetic and string concatenation.
///
/// The helpers are shared with the `add`, `subtract`, `multiply` and `divide`
/// builtins so both spellings behave the same.
pub mod arithmetic;

/// Ordering comparisons between numbers or between strings.
pub mod comparison;

/// Logical `and` / `or`.
pub mod logic;
