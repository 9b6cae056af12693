use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::SweepError;
use crate::sweep::ExperimentRow;

/// Streaming CSV sink for the result table.
///
/// The destination is truncated once when the sink is created — a sweep is a
/// full rerun, never an append across runs. Rows are written as they become
/// available and never rewritten. Absent measurements serialize as empty
/// fields, not as `0` or a `None` literal. The buffer also flushes on drop,
/// so rows written before a mid-sweep fatal error stay on disk.
pub struct CsvSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl CsvSink {
    pub fn create(path: &Path) -> Result<Self, SweepError> {
        let file = File::create(path).map_err(|source| SweepError::SinkCreate {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub fn write_row(&mut self, row: &ExperimentRow) -> Result<(), SweepError> {
        let mut line = row.label.clone();
        for outcome in &row.outcomes {
            line.push(',');
            if let Some(nanos) = outcome {
                line.push_str(&nanos.to_string());
            }
        }
        writeln!(self.writer, "{line}").map_err(|source| SweepError::SinkWrite {
            path: self.path.clone(),
            source,
        })
    }

    /// Flush and release the sink, surfacing any buffered write error.
    pub fn finish(mut self) -> Result<(), SweepError> {
        self.writer.flush().map_err(|source| SweepError::SinkWrite {
            path: self.path.clone(),
            source,
        })
    }
}
