//! Zone Base Colors
//!
//! sRGB triples shared by the 3D view and the recommendation panel so both
//! surfaces agree on what a zone looks like.

/// Firebrick red for excess energy.
pub const HOTSPOT_COLOR: [u8; 3] = [0xb2, 0x22, 0x22];

/// Steel blue for insufficient energy.
pub const DEADSPOT_COLOR: [u8; 3] = [0x42, 0x92, 0xc6];

/// White for neutral zones; also the target of a fully treated point.
pub const NEUTRAL_COLOR: [u8; 3] = [0xff, 0xff, 0xff];
