/// Built-in function implementations.
///
/// Arithmetic helpers, `length`, `type`, parity checks and case conversion.
pub mod builtin;

/// The builtin table and call dispatch for builtins and intentions.
pub mod core;
