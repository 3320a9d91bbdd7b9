//! JSON loading of settings, catalogs and batches
//!
//! Everything loaded here is validated before it is returned, so a session
//! built from it cannot start in an inconsistent state.
//!
//! Catalog documents look like:
//!
//! ```json
//! {
//!   "treatments": [
//!     { "id": "bass_trap", "name": "Bass Trap", "icon": "🟥",
//!       "impact": { "hotspot": 35, "deadspot": 5, "neutral": 0 } }
//!   ]
//! }
//! ```
//!
//! A bare array of treatments is accepted too.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use vibra_core::{RawReading, StudioConfig, TreatmentCatalog, TreatmentDefinition};

use crate::SchemaResult;

/// On-disk catalog layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Treatments in recommendation order
    pub treatments: Vec<TreatmentDefinition>,
}

impl From<&TreatmentCatalog> for CatalogDocument {
    fn from(catalog: &TreatmentCatalog) -> Self {
        Self {
            treatments: catalog.iter().cloned().collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogInput {
    Document(CatalogDocument),
    List(Vec<TreatmentDefinition>),
}

/// Parse and validate a studio configuration
pub fn load_config_str(json: &str) -> SchemaResult<StudioConfig> {
    let config: StudioConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Read, parse and validate a studio configuration file
pub fn load_config_file(path: impl AsRef<Path>) -> SchemaResult<StudioConfig> {
    let text = fs::read_to_string(path.as_ref())?;
    let config = load_config_str(&text)?;
    log::info!("Loaded studio configuration from {}", path.as_ref().display());
    Ok(config)
}

/// Parse and validate a treatment catalog
pub fn load_catalog_str(json: &str) -> SchemaResult<TreatmentCatalog> {
    let treatments = match serde_json::from_str(json)? {
        CatalogInput::Document(doc) => doc.treatments,
        CatalogInput::List(list) => list,
    };
    Ok(TreatmentCatalog::new(treatments)?)
}

/// Read, parse and validate a treatment catalog file
pub fn load_catalog_file(path: impl AsRef<Path>) -> SchemaResult<TreatmentCatalog> {
    let text = fs::read_to_string(path.as_ref())?;
    let catalog = load_catalog_str(&text)?;
    log::info!(
        "Loaded {} treatments from {}",
        catalog.len(),
        path.as_ref().display()
    );
    Ok(catalog)
}

/// Parse a JSON array of raw rows.
///
/// Columns may be numbers or strings, as a spreadsheet export produces.
pub fn load_batch_str(json: &str) -> SchemaResult<Vec<RawReading>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of raw rows from a file
pub fn load_batch_file(path: impl AsRef<Path>) -> SchemaResult<Vec<RawReading>> {
    let text = fs::read_to_string(path.as_ref())?;
    load_batch_str(&text)
}
