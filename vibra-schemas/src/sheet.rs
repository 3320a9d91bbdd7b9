//! Spreadsheet rows
//!
//! Field teams log sweeps in a shared spreadsheet with one tab per layer.
//! Each tab has the columns
//!
//! ```text
//! A: angle   B: dB   C: RT60   D: ultrasonic distance   E: classification
//! ```
//!
//! and the tab itself names the layer. Fetching a tab is the caller's job;
//! this module builds the query URL and turns the response into rows.

use serde::Deserialize;
use serde_json::Value;

use vibra_core::{RawField, RawReading};

use crate::{SchemaError, SchemaResult};

/// A sheet tab holding one layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTab {
    /// Layer label given to every row of the tab
    pub layer: String,
    /// Tab identifier within the spreadsheet
    pub gid: u64,
}

impl SheetTab {
    /// Tab for a layer
    pub fn new(layer: impl Into<String>, gid: u64) -> Self {
        Self { layer: layer.into(), gid }
    }

    /// Four-layer template used by the field spreadsheet
    pub fn defaults() -> Vec<SheetTab> {
        vec![
            SheetTab::new("Layer 1", 0),
            SheetTab::new("Layer 2", 540_291_160),
            SheetTab::new("Layer 3", 1_597_351_297),
            SheetTab::new("Layer 4", 1_962_364_642),
        ]
    }

    /// JSON query URL for this tab
    pub fn query_url(&self, spreadsheet_id: &str) -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{}/gviz/tq?tqx=out:json&gid={}",
            spreadsheet_id, self.gid
        )
    }
}

/// One data row in sheet column order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRow {
    /// Column A
    pub angle: RawField,
    /// Column B
    pub db: RawField,
    /// Column C
    pub rt60: RawField,
    /// Column D
    pub ultrasonic: RawField,
    /// Column E
    pub classification: Option<String>,
}

impl SheetRow {
    /// Row from cells in sheet order; missing cells stay missing
    pub fn from_cells(cells: &[RawField]) -> Self {
        let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();
        Self {
            angle: cell(0),
            db: cell(1),
            rt60: cell(2),
            ultrasonic: cell(3),
            classification: match cell(4) {
                RawField::Missing => None,
                other => Some(other.to_text()),
            },
        }
    }

    /// Raw row tagged with the tab's layer
    pub fn into_raw(self, layer: &str) -> RawReading {
        RawReading {
            angle: self.angle,
            level: self.db,
            distance: self.ultrasonic,
            reverberation: self.rt60,
            classification: self.classification,
            layer: Some(layer.to_string()),
        }
    }
}

#[derive(Deserialize)]
struct GvizResponse {
    table: GvizTable,
}

#[derive(Deserialize)]
struct GvizTable {
    #[serde(default)]
    rows: Vec<GvizRow>,
}

#[derive(Deserialize)]
struct GvizRow {
    #[serde(default)]
    c: Option<Vec<Option<GvizCell>>>,
}

#[derive(Deserialize)]
struct GvizCell {
    #[serde(default)]
    v: Value,
}

fn cell_field(value: &Value) -> RawField {
    match value {
        Value::Null => RawField::Missing,
        Value::Number(n) => n.as_f64().map_or(RawField::Missing, RawField::Number),
        Value::String(s) => RawField::Text(s.clone()),
        other => RawField::Text(other.to_string()),
    }
}

/// Parse a JSON query response for one tab.
///
/// The payload may be wrapped in a JavaScript callback; only the outermost
/// `{ ... }` is read. Rows without cells are skipped.
pub fn parse_gviz_response(text: &str, layer: &str) -> SchemaResult<Vec<RawReading>> {
    let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) else {
        return Err(SchemaError::Sheet("no JSON object in response".into()));
    };
    if end < start {
        return Err(SchemaError::Sheet("no JSON object in response".into()));
    }

    let response: GvizResponse = serde_json::from_str(&text[start..=end])?;
    let rows: Vec<RawReading> = response
        .table
        .rows
        .into_iter()
        .filter_map(|row| row.c)
        .map(|cells| {
            let fields: Vec<RawField> = cells
                .iter()
                .map(|cell| cell.as_ref().map_or(RawField::Missing, |c| cell_field(&c.v)))
                .collect();
            SheetRow::from_cells(&fields).into_raw(layer)
        })
        .collect();

    log::debug!("Parsed {} rows for {}", rows.len(), layer);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"/*O_o*/
google.visualization.Query.setResponse({"version":"0.6","status":"ok","table":{"cols":[],"rows":[
{"c":[{"v":0.0},{"v":82.5},{"v":0.6},{"v":150.0},{"v":"Hot Spot"}]},
{"c":null},
{"c":[{"v":90.0},null,{"v":0.3},{"v":"1.2m"},{"v":"Dead Spot"}]},
{"c":[{"v":180.0},{"v":70.0}]}
]}});"#;

    #[test]
    fn maps_cells_in_sheet_order() {
        let rows = parse_gviz_response(RESPONSE, "Layer 2").unwrap();
        assert_eq!(rows.len(), 3);

        let first = &rows[0];
        assert_eq!(first.angle, RawField::Number(0.0));
        assert_eq!(first.level, RawField::Number(82.5));
        assert_eq!(first.reverberation, RawField::Number(0.6));
        assert_eq!(first.distance, RawField::Number(150.0));
        assert_eq!(first.classification.as_deref(), Some("Hot Spot"));
        assert_eq!(first.layer.as_deref(), Some("Layer 2"));

        assert_eq!(rows[1].level, RawField::Missing);
        assert_eq!(rows[1].distance, RawField::Text("1.2m".into()));
        assert_eq!(rows[2].distance, RawField::Missing);
        assert_eq!(rows[2].classification, None);
    }

    #[test]
    fn rejects_non_json() {
        assert!(matches!(parse_gviz_response("<html>", "Layer 1"), Err(SchemaError::Sheet(_))));
        assert!(matches!(parse_gviz_response("{oops}", "Layer 1"), Err(SchemaError::Json(_))));
    }

    #[test]
    fn tab_urls() {
        let tabs = SheetTab::defaults();
        assert_eq!(tabs.len(), 4);
        assert_eq!(
            tabs[1].query_url("abc"),
            "https://docs.google.com/spreadsheets/d/abc/gviz/tq?tqx=out:json&gid=540291160"
        );
    }

    #[test]
    fn numeric_classification_becomes_text() {
        let row = SheetRow::from_cells(&[
            RawField::Number(10.0),
            RawField::Number(80.0),
            RawField::Missing,
            RawField::Number(100.0),
            RawField::Number(3.0),
        ]);
        assert_eq!(row.classification.as_deref(), Some("3"));
    }
}
