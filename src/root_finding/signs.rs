//! Sign utilities for bracketing algorithms.
//! - `straddles` : `true` if `u * v < 0`
//! - `same_side` : `true` if `u * v > 0`
//!
//! Both test the product, so an exact zero on either side is neither.

/// Returns `true` if `u * v < 0`.
#[inline]
pub(crate) fn straddles(u: f64, v: f64) -> bool {
    u * v < 0.0
}


/// Returns `true` if `u * v > 0`.
#[inline]
pub(crate) fn same_side(u: f64, v: f64) -> bool {
    u * v > 0.0
}
