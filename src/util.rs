/// Numeric conversion and formatting helpers.
///
/// This module provides safe functions for converting integers and lengths to
/// `f64` without silent precision loss, and the canonical rendering of numbers
/// used by `express`, `show` and string concatenation.
pub mod num;
