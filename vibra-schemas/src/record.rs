//! CSV export and import of reading batches

use std::fs;
use std::io::Write;
use std::path::Path;

use vibra_core::{RawField, RawReading};

use crate::SchemaResult;

/// Header line of every export
pub const EXPORT_HEADER: &str = "Angle,dB,Ultrasonic,RT60,Classification,Layer";

/// One exported row, every column as text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRecord {
    /// Angle column
    pub angle: String,
    /// Level column
    pub db: String,
    /// Distance column
    pub ultrasonic: String,
    /// Reverberation column
    pub rt60: String,
    /// Classification label, original text
    pub classification: String,
    /// Layer label
    pub layer: String,
}

impl ExportRecord {
    /// Comma-joined line without a trailing newline.
    ///
    /// The format has no quoting, so commas and line breaks inside a field
    /// become spaces.
    pub fn to_line(&self) -> String {
        [
            &self.angle,
            &self.db,
            &self.ultrasonic,
            &self.rt60,
            &self.classification,
            &self.layer,
        ]
        .iter()
        .map(|field| field.replace([',', '\r', '\n'], " "))
        .collect::<Vec<_>>()
        .join(",")
    }

    /// Parse a line; `None` for a blank line.
    ///
    /// Fields are trimmed and missing trailing columns are left empty.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let mut fields = line.split(',').map(|field| field.trim().to_string());
        let mut next = || fields.next().unwrap_or_default();
        Some(Self {
            angle: next(),
            db: next(),
            ultrasonic: next(),
            rt60: next(),
            classification: next(),
            layer: next(),
        })
    }

    /// Back to a raw row; empty columns become missing
    pub fn into_raw(self) -> RawReading {
        fn field(text: String) -> RawField {
            if text.is_empty() {
                RawField::Missing
            } else {
                RawField::Text(text)
            }
        }
        fn label(text: String) -> Option<String> {
            (!text.is_empty()).then_some(text)
        }

        RawReading {
            angle: field(self.angle),
            level: field(self.db),
            distance: field(self.ultrasonic),
            reverberation: field(self.rt60),
            classification: label(self.classification),
            layer: label(self.layer),
        }
    }
}

impl From<&RawReading> for ExportRecord {
    fn from(raw: &RawReading) -> Self {
        Self {
            angle: raw.angle.to_text(),
            db: raw.level.to_text(),
            ultrasonic: raw.distance.to_text(),
            rt60: raw.reverberation.to_text(),
            classification: raw.classification_label().unwrap_or_default().to_string(),
            layer: raw.layer_label().unwrap_or_default().to_string(),
        }
    }
}

/// Export a batch as CSV text, skipping blank rows
pub fn export_batch(rows: &[RawReading]) -> String {
    let mut out = String::from(EXPORT_HEADER);
    for raw in rows.iter().filter(|raw| !raw.is_blank()) {
        out.push('\n');
        out.push_str(&ExportRecord::from(raw).to_line());
    }
    out
}

/// Import CSV text. The first line is the header and is skipped.
pub fn import_batch(text: &str) -> Vec<RawReading> {
    text.lines()
        .skip(1)
        .filter_map(ExportRecord::parse_line)
        .map(ExportRecord::into_raw)
        .collect()
}

/// Stream an export into a writer
pub fn write_batch<W: Write>(mut writer: W, rows: &[RawReading]) -> SchemaResult<usize> {
    writeln!(writer, "{}", EXPORT_HEADER)?;
    let mut written = 0;
    for raw in rows.iter().filter(|raw| !raw.is_blank()) {
        writeln!(writer, "{}", ExportRecord::from(raw).to_line())?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Export a batch to a file
pub fn export_to_file(path: impl AsRef<Path>, rows: &[RawReading]) -> SchemaResult<usize> {
    let file = fs::File::create(path.as_ref())?;
    let written = write_batch(std::io::BufWriter::new(file), rows)?;
    log::debug!("Exported {} rows to {}", written, path.as_ref().display());
    Ok(written)
}

/// Import a batch from a file
pub fn import_from_file(path: impl AsRef<Path>) -> SchemaResult<Vec<RawReading>> {
    let text = fs::read_to_string(path.as_ref())?;
    let rows = import_batch(&text);
    log::debug!("Imported {} rows from {}", rows.len(), path.as_ref().display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibra_core::StudioSession;

    fn rows() -> Vec<RawReading> {
        vec![
            RawReading::new(0.0, 84.0, 200.0, 0.7, "Hot Spot", "Layer 1"),
            RawReading::new("90", "62", "1.5m", "0.3", "Dead Spot", "Layer 1"),
            RawReading::new("180", "71", "180cm", "", "", "Layer 2"),
        ]
    }

    #[test]
    fn exports_header_and_rows() {
        let csv = export_batch(&rows());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], EXPORT_HEADER);
        assert_eq!(lines[1], "0,84,200,0.7,Hot Spot,Layer 1");
        assert_eq!(lines[3], "180,71,180cm,,,Layer 2");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn blank_rows_are_not_exported() {
        let mut batch = rows();
        batch.push(RawReading::default());
        batch.push(RawReading::new("", "", "120", "0.4", "hot", "Layer 1"));
        assert_eq!(export_batch(&batch).lines().count(), 4);
    }

    #[test]
    fn import_pads_short_lines() {
        let text = "Angle,dB,Ultrasonic,RT60,Classification,Layer\n\n 45 , 80 ,150\n";
        let imported = import_batch(text);
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].angle, RawField::Text("45".into()));
        assert_eq!(imported[0].distance, RawField::Text("150".into()));
        assert_eq!(imported[0].reverberation, RawField::Missing);
        assert_eq!(imported[0].layer, None);
    }

    #[test]
    fn commas_inside_fields_do_not_shift_columns() {
        let raw = RawReading::new("10", "80", "120", "0.4", "Hot, bass heavy", "Layer 1");
        let back = import_batch(&export_batch(&[raw]));
        assert_eq!(back[0].classification.as_deref(), Some("Hot  bass heavy"));
        assert_eq!(back[0].layer.as_deref(), Some("Layer 1"));
    }

    #[test]
    fn line_breaks_inside_fields_stay_on_one_row() {
        let raw = RawReading::new("90", "62", "150", "0.3", "dead\r\nspot", "Layer 3");
        let csv = export_batch(&[raw.clone()]);
        assert_eq!(csv.lines().count(), 2);

        let back = import_batch(&csv);
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].classification.as_deref(), Some("dead  spot"));
        assert_eq!(back[0].layer.as_deref(), Some("Layer 3"));

        let mut original = StudioSession::default();
        original.deploy(&[raw]);
        let mut reloaded = StudioSession::default();
        reloaded.deploy(&back);
        let (a, b) = (&original.points()[0], &reloaded.points()[0]);
        assert_eq!(a.key, b.key);
        assert_eq!(a.zone, b.zone);
        assert!((a.position.y - b.position.y).abs() < 1e-9);
    }

    #[test]
    fn round_trip_deploys_the_same_points() {
        let mut original = StudioSession::default();
        original.deploy(&rows());

        let mut reloaded = StudioSession::default();
        reloaded.deploy(&import_batch(&export_batch(&rows())));

        assert_eq!(original.points().len(), reloaded.points().len());
        for (a, b) in original.points().iter().zip(reloaded.points()) {
            assert_eq!(a.key, b.key);
            assert_eq!(a.zone, b.zone);
            assert!((a.position.x - b.position.x).abs() < 1e-9);
            assert!((a.position.y - b.position.y).abs() < 1e-9);
            assert!((a.position.z - b.position.z).abs() < 1e-9);
        }
        assert_eq!(original.room_status(), reloaded.room_status());
    }

    #[test]
    fn writer_counts_rows() {
        let mut buf = Vec::new();
        assert_eq!(write_batch(&mut buf, &rows()).unwrap(), 3);
        assert!(String::from_utf8(buf).unwrap().starts_with(EXPORT_HEADER));
    }
}
