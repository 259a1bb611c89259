//! Plain data row type written by output backends.

/// The agent's pose and traversal state at one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRow {
    pub frame:         u64,
    /// Simulated seconds since the first frame.
    pub elapsed_secs:  f64,
    /// Local-frame position, metres.
    pub x:             f64,
    pub y:             f64,
    pub z:             f64,
    /// Radians, offset included.
    pub heading:       f64,
    pub segment_index: usize,
    pub progress:      f64,
    /// `TraversalPhase::as_str()`.
    pub phase:         &'static str,
}
