//! Before/after colors for treated points
//!
//! A point's "before" color is its zone color. Its "after" color blends from
//! neutral white toward the zone color by the remaining severity:
//!
//! ```text
//! severity 100 ─▶ zone color
//! severity  50 ─▶ halfway
//! severity   0 ─▶ neutral
//! ```
//!
//! Points that have never been treated keep their zone color in both views.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::constants::colors::{DEADSPOT_COLOR, HOTSPOT_COLOR, NEUTRAL_COLOR};
use crate::treatment::TreatmentEffectState;
use crate::zone::ZoneKind;

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb {
    /// Color from channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Color from a `[r, g, b]` triple
    pub const fn from_array(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }

    /// Parse `#rrggbb` or `rrggbb`; trailing alpha digits are ignored
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let digits = digits.get(..6)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: core::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgb(r, g, b)`
    pub fn to_css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Per-channel linear blend from `self` toward `to`, rounded.
    ///
    /// `t` is clamped to `[0, 1]`.
    pub fn lerp(&self, to: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |from: u8, to: u8| {
            let from = f64::from(from);
            libm::round(from + (f64::from(to) - from) * t) as u8
        };
        Rgb::new(mix(self.r, to.r), mix(self.g, to.g), mix(self.b, to.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Zone base colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Palette {
    /// Hotspot color
    pub hotspot: Rgb,
    /// Deadspot color
    pub deadspot: Rgb,
    /// Neutral color, also the fully-treated target
    pub neutral: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            hotspot: Rgb::from_array(HOTSPOT_COLOR),
            deadspot: Rgb::from_array(DEADSPOT_COLOR),
            neutral: Rgb::from_array(NEUTRAL_COLOR),
        }
    }
}

impl Palette {
    /// Base color of a zone
    pub const fn zone_color(&self, zone: ZoneKind) -> Rgb {
        match zone {
            ZoneKind::Hotspot => self.hotspot,
            ZoneKind::Deadspot => self.deadspot,
            ZoneKind::Neutral => self.neutral,
        }
    }

    /// Before and after colors for a point
    pub fn resolve(&self, zone: ZoneKind, effect: Option<&TreatmentEffectState>) -> ColorPair {
        let before = self.zone_color(zone);
        let after = match effect {
            Some(state) if state.has_applied() => {
                let t = f64::from(state.severity) / 100.0;
                self.neutral.lerp(before, t)
            }
            _ => before,
        };
        ColorPair { before, after }
    }
}

/// Which color the view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ViewMode {
    /// Untreated zone colors
    Before,
    /// Colors after simulated treatment
    #[default]
    After,
}

/// Colors for both view modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorPair {
    /// Zone color
    pub before: Rgb,
    /// Treated color
    pub after: Rgb,
}

impl ColorPair {
    /// Color for a view mode
    pub const fn for_view(&self, mode: ViewMode) -> Rgb {
        match mode {
            ViewMode::Before => self.before,
            ViewMode::After => self.after,
        }
    }
}

/// Resolve with the default palette
pub fn resolve_colors(zone: ZoneKind, effect: Option<&TreatmentEffectState>) -> ColorPair {
    Palette::default().resolve(zone, effect)
}
