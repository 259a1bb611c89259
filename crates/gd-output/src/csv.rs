//! CSV output backend.
//!
//! Creates `trajectory.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OutputResult, TrajectoryRow};
use crate::writer::OutputWriter;

pub const TRAJECTORY_FILE: &str = "trajectory.csv";

const HEADER: [&str; 9] = [
    "frame", "elapsed_secs", "x", "y", "z", "heading", "segment_index", "progress", "phase",
];

/// Writes trajectory rows to one CSV file.
pub struct CsvWriter {
    rows:     Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open `trajectory.csv` in it, and write the
    /// header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let mut rows = Writer::from_path(dir.join(TRAJECTORY_FILE))?;
        rows.write_record(HEADER)?;
        Ok(Self { rows, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_rows(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()> {
        for row in rows {
            self.rows.write_record(&[
                row.frame.to_string(),
                format!("{:.3}", row.elapsed_secs),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                format!("{:.3}", row.z),
                format!("{:.4}", row.heading),
                row.segment_index.to_string(),
                format!("{:.4}", row.progress),
                row.phase.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
