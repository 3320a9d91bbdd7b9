//! Zone classification from free-text labels
//!
//! Field crews label readings by hand ("Hot Spot", "hotspot", "DEAD SPOT",
//! "dead-ish"). Matching is fuzzy: lower-case, drop whitespace,
//! then look for a keyword. Anything unrecognized is `Neutral`.

use core::fmt;

/// Acoustic category of a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ZoneKind {
    /// Excess energy (standing wave peak, flutter echo)
    Hotspot,
    /// Insufficient energy (cancellation null)
    Deadspot,
    /// Nothing notable
    Neutral,
}

impl ZoneKind {
    /// Every zone, in catalog column order
    pub const ALL: [ZoneKind; 3] = [ZoneKind::Hotspot, ZoneKind::Deadspot, ZoneKind::Neutral];

    /// Upper-case name shown in the recommendation panel
    pub const fn display_name(&self) -> &'static str {
        match self {
            ZoneKind::Hotspot => "HOTSPOT",
            ZoneKind::Deadspot => "DEADSPOT",
            ZoneKind::Neutral => "NEUTRAL",
        }
    }

    /// Lower-case identifier used in catalogs and exports
    pub const fn as_str(&self) -> &'static str {
        match self {
            ZoneKind::Hotspot => "hotspot",
            ZoneKind::Deadspot => "deadspot",
            ZoneKind::Neutral => "neutral",
        }
    }
}

impl Default for ZoneKind {
    fn default() -> Self {
        ZoneKind::Neutral
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Classify a label. Total: `None` and unknown text give `Neutral`.
///
/// "hot" wins over "dead" when both appear.
pub fn classify(label: Option<&str>) -> ZoneKind {
    let Some(label) = label else {
        return ZoneKind::Neutral;
    };

    let folded: alloc::string::String = label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    if folded.contains("hot") {
        ZoneKind::Hotspot
    } else if folded.contains("dead") {
        ZoneKind::Deadspot
    } else {
        ZoneKind::Neutral
    }
}

/// Strict match used by batch filters: the whitespace-stripped, lower-cased
/// label must equal the zone identifier exactly.
pub fn label_is_exactly(label: &str, zone: ZoneKind) -> bool {
    let mut folded = label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase);
    let mut expected = zone.as_str().chars();

    loop {
        match (folded.next(), expected.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a == b => continue,
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_labels() {
        assert_eq!(classify(Some("Hot Spot")), ZoneKind::Hotspot);
        assert_eq!(classify(Some("dead spot")), ZoneKind::Deadspot);
        assert_eq!(classify(Some("HOTSPOT")), ZoneKind::Hotspot);
        assert_eq!(classify(Some("Neutral")), ZoneKind::Neutral);
    }

    #[test]
    fn empty_and_missing_are_neutral() {
        assert_eq!(classify(Some("")), ZoneKind::Neutral);
        assert_eq!(classify(Some("   ")), ZoneKind::Neutral);
        assert_eq!(classify(None), ZoneKind::Neutral);
    }

    #[test]
    fn whitespace_inside_keyword_is_ignored() {
        assert_eq!(classify(Some("h o t")), ZoneKind::Hotspot);
        assert_eq!(classify(Some("De Ad zone")), ZoneKind::Deadspot);
    }

    #[test]
    fn hot_takes_precedence() {
        assert_eq!(classify(Some("dead or hot?")), ZoneKind::Hotspot);
    }

    #[test]
    fn exact_label_match() {
        assert!(label_is_exactly("Hot Spot", ZoneKind::Hotspot));
        assert!(label_is_exactly(" dead spot ", ZoneKind::Deadspot));
        assert!(!label_is_exactly("hotspots", ZoneKind::Hotspot));
        assert!(!label_is_exactly("hot", ZoneKind::Hotspot));
    }

    #[test]
    fn display_names() {
        assert_eq!(ZoneKind::Deadspot.display_name(), "DEADSPOT");
        assert_eq!(ZoneKind::default(), ZoneKind::Neutral);
    }
}
