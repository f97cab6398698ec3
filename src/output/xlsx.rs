//! XLSX report writer
//!
//! Projects the accumulated course records onto a fixed 9-column layout
//! and writes them to a single worksheet. Absent fields become empty
//! cells, so the sheet is uniform regardless of how much each page parse
//! recovered.

use crate::crawler::CourseDetail;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Column order of the generated sheet. Headers keep the original French
/// field names the guide publishes.
pub const COLUMNS: [&str; 9] = [
    "region",
    "nom",
    "adresse",
    "code_postal",
    "ville",
    "telephone",
    "email",
    "site_web",
    "url_ffgolf",
];

/// Projects one record onto the fixed column order
fn project(record: &CourseDetail) -> [&str; 9] {
    fn field(f: &Option<String>) -> &str {
        f.as_deref().unwrap_or("")
    }
    [
        &record.region_name,
        field(&record.name),
        field(&record.street_address),
        field(&record.postal_code),
        field(&record.city),
        field(&record.phone),
        field(&record.email),
        field(&record.website),
        &record.source_url,
    ]
}

/// Writes the records to a single-sheet workbook at `path`
///
/// An empty record set is reported and skipped: no file is written and
/// the call still succeeds, so a crawl that found nothing exits cleanly.
pub fn write_workbook(records: &[CourseDetail], path: &Path) -> crate::Result<()> {
    if records.is_empty() {
        tracing::warn!("no records to save, skipping {}", path.display());
        return Ok(());
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new().set_bold();
    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (row, record) in records.iter().enumerate() {
        for (col, value) in project(record).iter().enumerate() {
            worksheet.write_string((row + 1) as u32, col as u16, *value)?;
        }
    }

    workbook.save(path)?;
    tracing::info!("saved {} records to {}", records.len(), path.display());
    Ok(())
}
