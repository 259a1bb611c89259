//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, TrajectoryRow};

/// Trait implemented by trajectory writers.
///
/// Errors are stored by the observer and retrieved with
/// [`TrajectoryObserver::take_error`][crate::TrajectoryObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of trajectory rows.
    fn write_rows(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
