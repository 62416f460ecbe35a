//! CSV serialization of inventory records.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::inventory::record::InventoryRecord;

/// Column names, in output order.
pub const HEADER: [&str; 6] = ["Group", "Subgroup", "Name", "Shape", "Type", "Size"];

#[derive(Serialize)]
struct CsvRow<'a> {
    group: &'a str,
    subgroup: &'a str,
    name: &'a str,
    shape: String,
    #[serde(rename = "type")]
    element_type: &'a str,
    size: usize,
}

impl<'a> From<&'a InventoryRecord> for CsvRow<'a> {
    fn from(record: &'a InventoryRecord) -> Self {
        Self {
            group: &record.group,
            subgroup: &record.subgroup,
            name: &record.name,
            shape: record.shape_text(),
            element_type: record.element_type.as_str(),
            size: record.size,
        }
    }
}

/// Streams inventory records to CSV, one row per call.
///
/// The header is written on construction, so an empty inventory still
/// yields a header-only file.
pub struct InventoryWriter<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl InventoryWriter<File> {
    /// Create (or truncate) a CSV file.
    pub fn create(path: &Path) -> Result<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> InventoryWriter<W> {
    /// Wrap a writer and emit the header row.
    pub fn new(inner: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);
        writer.write_record(HEADER)?;

        Ok(Self { writer, rows: 0 })
    }

    /// Append one record.
    pub fn write(&mut self, record: &InventoryRecord) -> Result<()> {
        log::trace!("CSV row: {}/{}", record.subgroup, record.name);
        self.writer.serialize(CsvRow::from(record))?;
        self.rows += 1;
        Ok(())
    }

    /// Data rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ElementType;

    fn record(subgroup: &str, name: &str, shape: Vec<usize>, dtype: ElementType) -> InventoryRecord {
        let size = shape.iter().product();
        InventoryRecord {
            group: subgroup.split('/').next().unwrap_or_default().to_string(),
            subgroup: subgroup.to_string(),
            name: name.to_string(),
            shape,
            element_type: dtype,
            size,
        }
    }

    fn to_text(records: &[InventoryRecord]) -> String {
        let mut writer = InventoryWriter::new(Vec::new()).unwrap();
        for r in records {
            writer.write(r).unwrap();
        }
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_header_only() {
        assert_eq!(to_text(&[]), "Group,Subgroup,Name,Shape,Type,Size\n");
    }

    #[test]
    fn test_tuple_shape_is_quoted() {
        let text = to_text(&[record(
            "A/B",
            "x",
            vec![2, 3],
            ElementType::Resolved("int32".into()),
        )]);

        assert_eq!(
            text,
            "Group,Subgroup,Name,Shape,Type,Size\nA,A/B,x,\"(2, 3)\",int32,6\n"
        );
    }

    #[test]
    fn test_one_dimensional_and_unresolved() {
        let text = to_text(&[record(
            "A",
            "ref",
            vec![4],
            ElementType::Unresolved("opaque (8 bytes)".into()),
        )]);

        assert!(text.ends_with("A,A,ref,\"(4,)\",opaque (8 bytes),4\n"));
    }

    #[test]
    fn test_row_count() {
        let mut writer = InventoryWriter::new(Vec::new()).unwrap();
        for i in 0..3 {
            writer
                .write(&record("G", &format!("d{}", i), vec![1], ElementType::Resolved("int8".into())))
                .unwrap();
        }
        assert_eq!(writer.rows(), 3);
    }
}
