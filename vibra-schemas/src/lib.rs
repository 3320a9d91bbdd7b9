//! Interchange Formats for Vibra
//!
//! ## Overview
//!
//! `vibra-core` knows nothing about files, spreadsheets or JSON. This crate
//! moves reading batches and settings in and out of those formats:
//!
//! | Module      | Format                                                 |
//! |-------------|--------------------------------------------------------|
//! | [`record`]  | CSV export/import with a fixed column order            |
//! | [`sheet`]   | Spreadsheet rows, one tab per layer                    |
//! | [`filter`]  | Search and zone/layer filters over raw batches         |
//! | [`loader`]  | JSON configuration, treatment catalogs and batches     |
//!
//! ## Column Order Contract
//!
//! Exported files always use this header and column order:
//!
//! ```text
//! Angle,dB,Ultrasonic,RT60,Classification,Layer
//! ```
//!
//! "Ultrasonic" is the distance column. Re-importing an export and
//! deploying it yields the same points (same keys, positions and zones) as
//! deploying the original rows, as long as the original had no blank rows.
//!
//! ## Usage Example
//!
//! ```rust
//! use vibra_core::{RawReading, StudioSession};
//! use vibra_schemas::record::{export_batch, import_batch};
//!
//! let rows = vec![RawReading::new("0", "82", "150", "0.6", "Hot Spot", "Layer 1")];
//! let csv = export_batch(&rows);
//!
//! let mut session = StudioSession::default();
//! session.deploy(&import_batch(&csv));
//! assert_eq!(session.points().len(), 1);
//! ```

use vibra_core::{CatalogError, ConfigError};

pub mod filter;
pub mod loader;
pub mod record;
pub mod sheet;

pub use filter::{search, BatchFilter};
pub use loader::{
    load_batch_file, load_batch_str, load_catalog_file, load_catalog_str, load_config_file,
    load_config_str, CatalogDocument,
};
pub use record::{export_batch, import_batch, ExportRecord, EXPORT_HEADER};
pub use sheet::{parse_gviz_response, SheetRow, SheetTab};

/// Interchange errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    /// JSON could not be parsed or did not match the expected shape
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration parsed but is not valid
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Catalog parsed but is not valid
    #[error("Invalid treatment catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Spreadsheet response without a table
    #[error("Malformed spreadsheet response: {0}")]
    Sheet(String),
}

/// Result type for interchange operations
pub type SchemaResult<T> = Result<T, SchemaError>;
