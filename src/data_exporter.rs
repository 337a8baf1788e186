use crate::datatable::DomainTable;
use crate::reporter::Reporter;
use anyhow::{Context, Result};
use chrono::Local;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Default workbook name, written to the current working directory.
pub const DEFAULT_EXPORT_FILE: &str = "data_domain_bps.xlsx";

/// Writes a domain table out to tabular file formats.
pub struct DataExporter;

impl DataExporter {
    /// Export the table if there is one.
    ///
    /// Absence is a silent no-op. A write failure is reported and swallowed;
    /// this is the terminal step of the pipeline.
    pub fn export(table: Option<&DomainTable>, filename: &str, reporter: &dyn Reporter) {
        let Some(table) = table else { return };

        match Self::export_to_xlsx(table, filename) {
            Ok(summary) => reporter.report(&summary),
            Err(e) => {
                tracing::warn!(target: "export", "export failed: {:#}", e);
                reporter.report(&format!("Failed to export data to Excel: {:#}", e));
            }
        }
    }

    /// Write the table to an xlsx workbook: header row, one row per record,
    /// no index column.
    pub fn export_to_xlsx<P: AsRef<Path>>(table: &DomainTable, path: P) -> Result<String> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col, name) in DomainTable::COLUMNS.iter().enumerate() {
            worksheet.write_string(0, col as u16, *name)?;
        }

        for (row, record) in table.records().iter().enumerate() {
            let row = row as u32 + 1;
            worksheet.write_string(row, 0, record.domain_id.as_str())?;
            worksheet.write_string(row, 1, record.domain_nama.as_str())?;
            worksheet.write_string(row, 2, record.domain_url.as_str())?;
        }

        workbook
            .save(path.as_ref())
            .with_context(|| format!("failed to write workbook {}", path.as_ref().display()))?;

        Ok(format!(
            "Exported {} rows to {}",
            table.row_count(),
            path.as_ref().display()
        ))
    }

    /// Write the table as CSV with the same header and row order.
    pub fn export_to_csv<P: AsRef<Path>>(table: &DomainTable, path: P) -> Result<String> {
        let mut wtr = csv::Writer::from_path(path.as_ref())
            .with_context(|| format!("failed to create {}", path.as_ref().display()))?;

        wtr.write_record(DomainTable::COLUMNS)?;
        for record in table.records() {
            wtr.write_record([&record.domain_id, &record.domain_nama, &record.domain_url])?;
        }
        wtr.flush()?;

        Ok(format!(
            "Exported {} rows to {}",
            table.row_count(),
            path.as_ref().display()
        ))
    }

    /// Generate a filename with timestamp, e.g. `domain_records_20250807_101500.csv`
    pub fn timestamped_filename(extension: &str) -> String {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        format!("domain_records_{}.{}", timestamp, extension)
    }
}
