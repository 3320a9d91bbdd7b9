//! Treatment Severity Model
//!
//! Severity is a heuristic 0-100 score of how much acoustic trouble remains
//! at a point. Treatments subtract from it with diminishing returns until a
//! floor is reached, after which the point is locked.

/// Severity assigned to a point the first time it is treated.
pub const INITIAL_SEVERITY: u8 = 70;

/// Lowest reachable severity. Reaching it locks the point.
pub const SEVERITY_FLOOR: u8 = 20;

/// Upper clamp for severity.
pub const MAX_SEVERITY: u8 = 100;

/// Effectiveness of each repeat of the same treatment on the same point,
/// relative to the previous application.
pub const REPEAT_FACTOR: f64 = 0.7;

/// Severity at or below which the treatment intensity reads LOW.
pub const INTENSITY_LOW_MAX: u8 = 20;

/// Severity at or below which the treatment intensity reads MEDIUM.
pub const INTENSITY_MEDIUM_MAX: u8 = 50;
