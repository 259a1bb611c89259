//! The traversal engine: moves one agent along a [`Path`] at constant speed.

use glam::DVec3;

use gd_core::DriveConfig;
use gd_spatial::{MIN_SEGMENT_LENGTH, Path, Pose, heading};

use crate::state::clamp_speed;
use crate::{AgentState, TraversalPhase};

/// Owns the active path, the agent's [`AgentState`], and the pose derived from
/// them.
///
/// The pose is updated only by the engine's own transitions; callers read it
/// after each [`advance`][TraversalEngine::advance] and hand it to the
/// renderer.
#[derive(Clone, Debug)]
pub struct TraversalEngine {
    path:          Path,
    state:         AgentState,
    pose:          Pose,
    default_speed: f64,
}

impl TraversalEngine {
    /// An inactive engine (no path) that will drive at `default_speed`.
    pub fn new(default_speed: f64, heading_offset: f64, height_offset: f64) -> Self {
        let default_speed = clamp_speed(default_speed);
        let path = Path::empty();
        let pose = path.start_pose(heading_offset, height_offset);
        Self {
            path,
            state: AgentState::new(default_speed, heading_offset, height_offset),
            pose,
            default_speed,
        }
    }

    pub fn from_config(config: &DriveConfig) -> Self {
        Self::new(config.default_speed_mps, config.heading_offset_rad, config.height_offset_m)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn phase(&self) -> TraversalPhase {
        if !self.path.is_active() {
            TraversalPhase::Inactive
        } else if self.state.segment_index >= self.path.len() - 1 {
            TraversalPhase::Arrived
        } else if self.state.speed > 0.0 {
            TraversalPhase::Moving
        } else {
            TraversalPhase::Paused
        }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn state(&self) -> &AgentState {
        &self.state
    }

    #[inline]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    #[inline]
    pub fn default_speed(&self) -> f64 {
        self.default_speed
    }

    /// Arc length covered from the start of the path, metres.
    pub fn distance_traveled(&self) -> f64 {
        let i = self.state.segment_index;
        let completed: f64 = (0..i).map(|j| self.path.segment_length(j)).sum();
        completed + self.state.progress * self.path.segment_length(i)
    }

    // ── Path lifecycle ────────────────────────────────────────────────────

    /// Replace the path, rewind to its start, and return the start pose.
    ///
    /// Speed is left untouched; a paused agent stays paused on the new path.
    pub fn install_path(&mut self, path: Path) -> Pose {
        self.path = path;
        self.state.rewind();
        self.pose = self.path.start_pose(self.state.heading_offset, self.state.height_offset);
        self.pose
    }

    /// Drop the path.  The pose is kept so the agent stays where it was
    /// drawn until something places it.
    pub fn clear_path(&mut self) {
        self.path = Path::empty();
        self.state.rewind();
    }

    /// Put the agent at `pose` without touching the path or progress.
    pub fn place(&mut self, pose: Pose) {
        self.pose = pose;
    }

    // ── Speed control ─────────────────────────────────────────────────────

    /// Set the speed, clamped to `>= 0`.  A non-zero speed also becomes the
    /// resume speed.
    pub fn set_speed(&mut self, speed: f64) {
        let speed = clamp_speed(speed);
        self.state.speed = speed;
        if speed > 0.0 {
            self.state.resume_speed = speed;
        }
    }

    /// Back to the configured default speed (drive and resume).
    pub fn reset_speed(&mut self) {
        self.state.speed = self.default_speed;
        self.state.resume_speed = self.default_speed;
    }

    /// Stop if moving, resume at the last non-zero speed if stopped.
    ///
    /// Segment index and progress are not touched.  Returns `true` when the
    /// agent is now driving.
    pub fn toggle_pause(&mut self) -> bool {
        if self.state.speed > 0.0 {
            self.state.resume_speed = self.state.speed;
            self.state.speed = 0.0;
            false
        } else {
            self.state.speed = if self.state.resume_speed > 0.0 {
                self.state.resume_speed
            } else {
                self.default_speed
            };
            self.state.speed > 0.0
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Drive back the way the path came.
    ///
    /// Reverses the path in place, rewinds to its (new) start and faces the
    /// first segment.  A paused agent resumes at the default speed.  Returns
    /// `false` and does nothing when the path is inactive.
    pub fn reverse(&mut self) -> bool {
        if !self.path.is_active() {
            return false;
        }
        self.path.reverse();
        self.state.rewind();
        self.pose = self.path.start_pose(self.state.heading_offset, self.state.height_offset);
        if self.state.speed == 0.0 {
            self.reset_speed();
        }
        true
    }

    /// Consume `delta_secs` of simulated time and return the resulting phase.
    ///
    /// Time is spent segment by segment: when the distance left on the
    /// current segment is shorter than what the agent would cover, the agent
    /// is moved to the segment's end, the time that took is deducted, and the
    /// next segment is processed with the rest.  Zero-length segments are
    /// skipped without spending time.  Time left over once the final vertex
    /// is reached is discarded.
    ///
    /// No-op for inactive or arrived paths and for `delta_secs` that is not
    /// a positive finite number.
    pub fn advance(&mut self, delta_secs: f64) -> TraversalPhase {
        if !(delta_secs.is_finite() && delta_secs > 0.0) || !self.path.is_active() {
            return self.phase();
        }

        let last = self.path.len() - 1;
        let mut remaining = delta_secs;

        while remaining > 0.0 && self.state.segment_index < last {
            let i = self.state.segment_index;
            let Some((start, end)) = self.path.segment(i) else { break };
            let direction = end - start;
            let seg_len = direction.length();

            if seg_len < MIN_SEGMENT_LENGTH {
                self.enter_next_segment(end);
                continue;
            }

            let traveled = self.state.progress * seg_len;
            let remain = (seg_len - traveled).max(0.0);
            let move_dist = self.state.speed * remaining;

            if move_dist < remain {
                let t = (traveled + move_dist) / seg_len;
                self.state.progress = t;
                self.pose.position = self.grounded(start.lerp(end, t));
                self.pose.heading = heading(direction, self.state.heading_offset);
                remaining = 0.0;
            } else {
                // speed == 0 only reaches here with remain == 0, which costs no time.
                if self.state.speed > 0.0 {
                    remaining -= remain / self.state.speed;
                }
                self.enter_next_segment(end);
            }
        }

        self.phase()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn enter_next_segment(&mut self, reached: DVec3) {
        self.state.segment_index += 1;
        self.state.progress = 0.0;
        self.pose.position = self.grounded(reached);
        if let Some(direction) = self.path.direction_from(self.state.segment_index) {
            self.pose.heading = heading(direction, self.state.heading_offset);
        }
        log::trace!(
            "entered segment {} of {}",
            self.state.segment_index,
            self.path.segment_count()
        );
    }

    #[inline]
    fn grounded(&self, p: DVec3) -> DVec3 {
        DVec3::new(p.x, self.state.height_offset, p.z)
    }
}
