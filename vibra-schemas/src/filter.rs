//! Search and filters over raw batches
//!
//! Filters work on rows before normalization, so a filtered batch can be
//! exported or deployed as-is.

use vibra_core::zone::label_is_exactly;
use vibra_core::{RawReading, ZoneKind};

/// Rows to keep from a batch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BatchFilter {
    /// Every row
    #[default]
    All,
    /// Rows whose label is exactly this zone ("Hot Spot", "hotspot")
    Zone(ZoneKind),
    /// Rows with this exact layer label
    Layer(String),
}

impl BatchFilter {
    /// Filter from a picker value: `HOTSPOT`, `DEADSPOT`, `NEUTRAL`, or a
    /// label starting with `Layer`. Anything else keeps every row.
    pub fn parse(value: &str) -> Self {
        match value {
            "HOTSPOT" => BatchFilter::Zone(ZoneKind::Hotspot),
            "DEADSPOT" => BatchFilter::Zone(ZoneKind::Deadspot),
            "NEUTRAL" => BatchFilter::Zone(ZoneKind::Neutral),
            layer if layer.starts_with("Layer") => BatchFilter::Layer(layer.to_string()),
            _ => BatchFilter::All,
        }
    }

    /// Whether a row passes
    pub fn matches(&self, row: &RawReading) -> bool {
        match self {
            BatchFilter::All => true,
            BatchFilter::Zone(zone) => row
                .classification_label()
                .is_some_and(|label| label_is_exactly(label, *zone)),
            BatchFilter::Layer(layer) => row.layer_label() == Some(layer.as_str()),
        }
    }

    /// Matching rows, in order
    pub fn apply(&self, rows: &[RawReading]) -> Vec<RawReading> {
        rows.iter().filter(|row| self.matches(row)).cloned().collect()
    }
}

/// Rows where any column contains `query`, ignoring case.
///
/// An empty query keeps every row.
pub fn search(rows: &[RawReading], query: &str) -> Vec<RawReading> {
    if query.is_empty() {
        return rows.to_vec();
    }

    let needle = query.to_lowercase();
    rows.iter()
        .filter(|row| {
            [
                row.angle.to_text(),
                row.level.to_text(),
                row.distance.to_text(),
                row.reverberation.to_text(),
                row.classification_label().unwrap_or_default().to_string(),
                row.layer_label().unwrap_or_default().to_string(),
            ]
            .iter()
            .any(|text| text.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
