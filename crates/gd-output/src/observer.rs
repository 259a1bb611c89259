//! `TrajectoryObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use gd_core::FrameId;
use gd_motion::{AgentState, TraversalPhase};
use gd_sim::{FrameOutput, SimObserver};

use crate::row::TrajectoryRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that samples the agent every `interval` frames and on
/// every phase change (so arrival is always recorded).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, check with
/// [`take_error`][Self::take_error].
pub struct TrajectoryObserver<W: OutputWriter> {
    writer:       W,
    interval:     u64,
    elapsed_secs: f64,
    phase:        Option<TraversalPhase>,
    rows_written: u64,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> TrajectoryObserver<W> {
    /// Record through `writer` every `interval` frames (`0` is treated as 1).
    pub fn new(writer: W, interval: u64) -> Self {
        Self {
            writer,
            interval:     interval.max(1),
            elapsed_secs: 0.0,
            phase:        None,
            rows_written: 0,
            last_error:   None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TrajectoryObserver<W> {
    fn on_frame_end(&mut self, output: &FrameOutput, state: &AgentState) {
        self.elapsed_secs += output.delta_secs;

        let phase_changed = self.phase != Some(output.phase);
        self.phase = Some(output.phase);
        if !(phase_changed || output.frame.every(self.interval)) {
            return;
        }

        let position = output.pose.position;
        let row = TrajectoryRow {
            frame:         output.frame.0,
            elapsed_secs:  self.elapsed_secs,
            x:             position.x,
            y:             position.y,
            z:             position.z,
            heading:       output.pose.heading,
            segment_index: state.segment_index,
            progress:      state.progress,
            phase:         output.phase.as_str(),
        };
        let result = self.writer.write_rows(&[row]);
        if result.is_ok() {
            self.rows_written += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_frame: FrameId) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
