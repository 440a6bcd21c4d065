//! Append-only CSV sink for canonical records.
//!
//! The header is written exactly once per sink lifetime; a sink that
//! already holds data from a prior run suppresses it. Any failure
//! during flatten-and-append disables the exporter for the remainder of
//! the process instead of raising past this boundary.

use crate::domain::entities::export_row::{flatten_record, ExportRow, EXPORT_HEADER};
use crate::domain::entities::record::CanonicalRecord;
use crate::domain::error::DomainError;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use tracing::{error, info};

pub struct CsvExporter {
    path: PathBuf,
    header_written: bool,
    disabled: bool,
}

impl CsvExporter {
    /// Open (or prepare to create) the sink at `path`, creating its
    /// parent directory if absent. Idempotent: an existing non-empty
    /// sink suppresses header re-emission.
    pub fn new(path: PathBuf) -> Self {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    error!(path = %path.display(), error = %e, "error initializing CSV export");
                    return Self {
                        path,
                        header_written: false,
                        disabled: true,
                    };
                }
            }
        }

        let has_data = fs::metadata(&path).map(|m| m.len() > 0).unwrap_or(false);
        if has_data {
            info!(path = %path.display(), "CSV export file already exists, appending");
        } else {
            info!(path = %path.display(), "initializing CSV export file");
        }

        Self {
            path,
            header_written: has_data,
            disabled: false,
        }
    }

    /// Flatten a record into rows and append them. Failures are logged
    /// and disable the sink; subsequent calls become no-ops.
    pub fn export(&mut self, metric: &str, record: &CanonicalRecord) {
        if self.disabled {
            return;
        }

        let retrieval_time = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let rows = flatten_record(metric, record, &retrieval_time);

        match self.append_rows(&rows) {
            Ok(()) => {
                info!(metric, rows = rows.len(), "exported record to CSV");
            }
            Err(e) => {
                error!(metric, error = %e, "error exporting to CSV, disabling export");
                self.disabled = true;
            }
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn append_rows(&mut self, rows: &[ExportRow]) -> Result<(), DomainError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| DomainError::Export(e.to_string()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if !self.header_written {
            writer
                .write_record(EXPORT_HEADER)
                .map_err(|e| DomainError::Export(e.to_string()))?;
            self.header_written = true;
        }

        for row in rows {
            let value = row.value.map(|v| v.to_string()).unwrap_or_default();
            writer
                .write_record([
                    row.metric.as_str(),
                    row.sub_metric.as_str(),
                    value.as_str(),
                    row.timestamp.as_str(),
                    row.source.as_str(),
                    row.retrieval_time.as_str(),
                ])
                .map_err(|e| DomainError::Export(e.to_string()))?;
        }

        writer
            .flush()
            .map_err(|e| DomainError::Export(e.to_string()))?;

        Ok(())
    }
}
