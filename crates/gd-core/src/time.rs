//! Frame time model.
//!
//! # Design
//!
//! The host renderer calls the simulation once per frame with a wall-clock
//! timestamp in milliseconds (e.g. `performance.now()`).  The simulation
//! never reads a clock itself: `FrameClock` turns consecutive timestamps into
//! the elapsed seconds that drive the traversal engine.
//!
//!   delta_secs = (now_ms - last_ms) / 1000
//!
//! Frames are counted with a monotonically increasing `FrameId` so that
//! observers and output writers can label rows without floating-point keys.

use std::fmt;

// ── FrameId ───────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameId(pub u64);

impl FrameId {
    pub const ZERO: FrameId = FrameId(0);

    /// The frame after `self`.
    #[inline]
    pub fn next(self) -> FrameId {
        FrameId(self.0 + 1)
    }

    /// `true` every `n` frames, starting with frame 0.  `n == 0` never fires.
    #[inline]
    pub fn every(self, n: u64) -> bool {
        n > 0 && self.0.is_multiple_of(n)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Derives per-frame elapsed time from host timestamps.
///
/// The first call to [`tick`][FrameClock::tick] only records the timestamp and
/// reports zero elapsed time, so a simulation created long before its first
/// frame does not jump forward.  A timestamp that goes backwards (or is not
/// finite) also reports zero; the traversal engine treats that as a no-op.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    /// Simulated seconds accumulated over all ticks so far.
    elapsed_secs: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock at `now_ms` without reporting elapsed time.
    pub fn starting_at(now_ms: f64) -> Self {
        Self { last_ms: Some(now_ms), elapsed_secs: 0.0 }
    }

    /// Record `now_ms` and return the seconds elapsed since the previous call.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        if !now_ms.is_finite() {
            return 0.0;
        }
        let delta = match self.last_ms {
            Some(last) if now_ms > last => (now_ms - last) / 1000.0,
            _ => 0.0,
        };
        // Keep the latest timestamp even when it went backwards, so a host
        // clock reset does not freeze the simulation until it catches up.
        self.last_ms = Some(now_ms);
        self.elapsed_secs += delta;
        delta
    }

    /// Timestamp of the most recent tick, if any.
    #[inline]
    pub fn last_ms(&self) -> Option<f64> {
        self.last_ms
    }

    /// Total seconds reported by [`tick`][FrameClock::tick] so far.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }
}
