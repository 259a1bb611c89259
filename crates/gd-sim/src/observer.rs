//! Simulation observer trait for progress reporting and data collection.

use gd_core::FrameId;
use gd_motion::{AgentState, TraversalPhase};
use gd_spatial::Path;

use crate::FrameOutput;

/// Callbacks invoked by [`Sim::frame`][crate::Sim::frame] at key points of
/// the frame hook.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — arrival logger
///
/// ```rust,ignore
/// struct ArrivalLogger;
///
/// impl SimObserver for ArrivalLogger {
///     fn on_phase_change(&mut self, frame: FrameId, _from: TraversalPhase, to: TraversalPhase) {
///         if to == TraversalPhase::Arrived {
///             println!("{frame}: arrived");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each frame, before any processing.
    fn on_frame_start(&mut self, _frame: FrameId) {}

    /// Called on the first frame after a route was installed, with the new
    /// local path.
    fn on_route_loaded(&mut self, _frame: FrameId, _path: &Path) {}

    /// Called when the traversal phase differs from the one seen at the end
    /// of the previous frame (arrival, pause, a new route, …).
    fn on_phase_change(&mut self, _frame: FrameId, _from: TraversalPhase, _to: TraversalPhase) {}

    /// Called at the end of each frame with everything handed to the host,
    /// plus read-only access to the agent's simulation state.
    fn on_frame_end(&mut self, _output: &FrameOutput, _state: &AgentState) {}

    /// Called once by [`Sim::finish`][crate::Sim::finish].
    fn on_sim_end(&mut self, _final_frame: FrameId) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `frame` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
