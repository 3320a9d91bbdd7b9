//! Distance Unit Conversions
//!
//! Ultrasonic rangefinders report in centimeters by default; some rigs log
//! millimeters or meters with an explicit suffix.

/// Millimeters per meter.
pub const MM_PER_M: f64 = 1000.0;

/// Centimeters per meter.
pub const CM_PER_M: f64 = 100.0;
