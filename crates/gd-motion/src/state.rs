//! Per-agent traversal state.

use std::fmt;

/// Where the agent stands in the traversal state machine.
///
/// ```text
///            install_path (≥2 pts)
///   Inactive ─────────────────────▶ Moving ◀──toggle_pause──▶ Paused
///       ▲                             │                          │
///       │ clear_path                  │ last vertex reached      │ reverse
///       │                             ▼                          ▼
///       └──────────────────────── Arrived ───reverse──▶ Moving (default speed)
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TraversalPhase {
    /// No usable path (fewer than two points).
    Inactive,
    /// On a segment with `speed > 0`.
    Moving,
    /// On a segment with `speed == 0`.
    Paused,
    /// Final vertex reached; absorbing until a new path or a reversal.
    Arrived,
}

impl TraversalPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            TraversalPhase::Inactive => "inactive",
            TraversalPhase::Moving   => "moving",
            TraversalPhase::Paused   => "paused",
            TraversalPhase::Arrived  => "arrived",
        }
    }
}

impl fmt::Display for TraversalPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The simulation state of a single agent.
///
/// Owned exclusively by [`TraversalEngine`][crate::TraversalEngine]; other
/// components get a shared reference.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentState {
    /// Index of the segment being traversed (`path[i] → path[i + 1]`).
    /// Equals `path.len() − 1` once arrived.
    pub segment_index: usize,

    /// Fraction of the current segment already covered, in `[0, 1]`.
    pub progress: f64,

    /// Current speed, metres per second, `>= 0`.  `0` means paused.
    pub speed: f64,

    /// Last non-zero speed, restored by resume.
    pub resume_speed: f64,

    /// Fixed yaw correction for the rendered model's forward axis, radians.
    pub heading_offset: f64,

    /// Fixed height of the agent above the ground plane, metres.
    pub height_offset: f64,
}

impl AgentState {
    /// State at the start of a path, driving at `speed`.
    pub fn new(speed: f64, heading_offset: f64, height_offset: f64) -> Self {
        let speed = clamp_speed(speed);
        Self {
            segment_index: 0,
            progress:      0.0,
            speed,
            resume_speed:  speed,
            heading_offset,
            height_offset,
        }
    }

    /// Back to the first segment; speed is left alone.
    #[inline]
    pub fn rewind(&mut self) {
        self.segment_index = 0;
        self.progress = 0.0;
    }
}

/// Negative and non-finite speeds become 0: a forward-only traversal index
/// cannot move backwards.
#[inline]
pub(crate) fn clamp_speed(speed: f64) -> f64 {
    if speed.is_finite() { speed.max(0.0) } else { 0.0 }
}
