//! Common fixtures and data generators for integration tests
//!
//! This module provides:
//! - Hand-written sweeps with known outcomes
//! - A deterministic generator for larger, noisy sweeps
//! - Assertion helpers for session state

#![allow(dead_code)]

use vibra_core::{RawField, RawReading, StudioSession, ZoneKind};

/// Four-angle sweep over two layers in a 4 m room
pub fn studio_sweep() -> Vec<RawReading> {
    vec![
        RawReading::new("0", "84", "200", "0.7", "Hot Spot", "Layer 1"),
        RawReading::new("90", "62", "150", "0.3", "Dead Spot", "Layer 1"),
        RawReading::new("180", "71", "180", "0.5", "", "Layer 1"),
        RawReading::new("270", "83", "160", "0.6", "hotspot", "Layer 1"),
        RawReading::new("0", "60", "190", "0.2", "deadspot", "Layer 2"),
        RawReading::new("90", "72", "140", "0.4", "ok", "Layer 2"),
    ]
}

/// Sweep whose farthest echo puts the room at 9 m
pub fn warehouse_sweep() -> Vec<RawReading> {
    vec![
        RawReading::new("0", "84", "4.5m", "1.9", "Hot Spot", "Layer 1"),
        RawReading::new("180", "66", "3.1m", "1.7", "", "Layer 1"),
    ]
}

/// Rows the normalizer must drop
pub fn broken_rows() -> Vec<RawReading> {
    vec![
        RawReading::new("", "70", "120", "0.4", "", "Layer 1"),
        RawReading::new("north", "70", "120", "0.4", "", "Layer 1"),
        RawReading::new("45", "70", "", "0.4", "", "Layer 1"),
        RawReading::new("45", "70", "0", "0.4", "", "Layer 1"),
        RawReading::new("45", "70", "-20cm", "0.4", "", "Layer 1"),
    ]
}

/// First point key of a zone
pub fn key_for(session: &StudioSession, zone: ZoneKind) -> String {
    session
        .points()
        .iter()
        .find(|point| point.zone == zone)
        .map(|point| point.key.clone())
        .unwrap_or_else(|| panic!("no {} point deployed", zone))
}

/// Deterministic sweep generator
///
/// Produces full-circle sweeps with a share of noisy rows, the way a rig
/// behaves next to open doors and soft furnishings.
pub struct SweepGenerator {
    seed: u32,
}

impl SweepGenerator {
    /// Generator with a fixed seed
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// `layers` full sweeps at `step_deg` resolution.
    ///
    /// About one row in ten has no echo.
    pub fn sweep(&mut self, layers: u32, step_deg: u32, max_distance_cm: f64) -> Vec<RawReading> {
        let mut rows = Vec::new();
        for layer in 0..layers {
            let mut angle = 0;
            while angle < 360 {
                let distance = if self.random_float() < 0.1 {
                    RawField::from("")
                } else {
                    RawField::from(format!("{:.0}", 20.0 + self.random_float() * (max_distance_cm - 20.0)))
                };
                let label = match self.random_int(0, 3) {
                    0 => "Hot Spot",
                    1 => "Dead Spot",
                    _ => "",
                };
                rows.push(RawReading {
                    angle: RawField::Number(f64::from(angle)),
                    level: RawField::Number(55.0 + self.random_float() * 30.0),
                    distance,
                    reverberation: RawField::Number(0.2 + self.random_float()),
                    classification: Some(label.to_string()),
                    layer: Some(format!("Layer {}", layer + 1)),
                });
                angle += step_deg;
            }
        }
        rows
    }

    fn random_float(&mut self) -> f64 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        f64::from(self.seed) / f64::from(u32::MAX)
    }

    fn random_int(&mut self, min: u32, max: u32) -> u32 {
        let range = max - min;
        min + (self.random_float() * f64::from(range)) as u32
    }
}
