//! Studio Standard Room Dimensions
//!
//! A small recording or mixing room is expected to measure between three
//! and five meters across. The estimator compares its diameter estimate
//! against this range.

/// Smallest enclosure accepted as studio standard (meters).
///
/// Below this, low-frequency modes crowd the listening position.
pub const STUDIO_MIN_SIZE_M: f64 = 3.0;

/// Largest enclosure accepted as studio standard (meters).
///
/// Above this, the room behaves more like a live hall than a control room.
pub const STUDIO_MAX_SIZE_M: f64 = 5.0;
