//! Tolerance and interaction defaults (internal).
//!
//! Policy
//! - Predicates never consult these; they run on raw `f64` arithmetic.
//! - Only the brute-force circumcircle checker and the pick box read them.

/// Half-width of the square pick box around a press position.
pub(crate) const PICK_RADIUS: f64 = 5.0;
/// Relative slack for the brute-force empty-circumcircle checker.
pub(crate) const CIRCLE_REL_EPS: f64 = 1e-9;
