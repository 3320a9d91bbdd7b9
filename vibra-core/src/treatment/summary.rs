//! Human-readable summaries of a point's treatment history

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::constants::treatment::{INTENSITY_LOW_MAX, INTENSITY_MEDIUM_MAX};

use super::{TreatmentCatalog, TreatmentEffectState, TreatmentId};

/// Coarse severity band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intensity {
    /// Severity <= 20
    Low,
    /// Severity <= 50
    Medium,
    /// Anything higher
    High,
}

impl Intensity {
    /// Band for a severity value
    pub const fn from_severity(severity: u8) -> Self {
        if severity <= INTENSITY_LOW_MAX {
            Intensity::Low
        } else if severity <= INTENSITY_MEDIUM_MAX {
            Intensity::Medium
        } else {
            Intensity::High
        }
    }

    /// Upper-case label
    pub const fn label(&self) -> &'static str {
        match self {
            Intensity::Low => "LOW",
            Intensity::Medium => "MEDIUM",
            Intensity::High => "HIGH",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Count per treatment, in order of first application
pub fn applied_counts(state: &TreatmentEffectState) -> Vec<(&TreatmentId, usize)> {
    let mut counts: Vec<(&TreatmentId, usize)> = Vec::new();
    for id in &state.applied {
        match counts.iter_mut().find(|(seen, _)| *seen == id) {
            Some((_, count)) => *count += 1,
            None => counts.push((id, 1)),
        }
    }
    counts
}

/// "Bass Trap ×2" style entries, in order of first application
pub fn format_applied(state: &TreatmentEffectState, catalog: &TreatmentCatalog) -> Vec<String> {
    applied_counts(state)
        .into_iter()
        .map(|(id, count)| format!("{} ×{}", catalog.display_name(id.as_str()), count))
        .collect()
}

/// Most-applied treatment; ties go to the one applied first
pub fn dominant_treatment(state: &TreatmentEffectState) -> Option<&TreatmentId> {
    let mut best: Option<(&TreatmentId, usize)> = None;
    for (id, count) in applied_counts(state) {
        match best {
            Some((_, top)) if count <= top => {}
            _ => best = Some((id, count)),
        }
    }
    best.map(|(id, _)| id)
}
