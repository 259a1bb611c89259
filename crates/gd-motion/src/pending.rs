//! Start pose held back until the agent can be placed.

use gd_spatial::Pose;

/// A pose computed before the agent's renderable object exists (for
/// instance while its model is still loading).
///
/// Setting replaces any earlier pose; [`take`][PendingPose::take] hands it
/// out exactly once.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PendingPose(Option<Pose>);

impl PendingPose {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn set(&mut self, pose: Pose) {
        self.0 = Some(pose);
    }

    /// Consume the pending pose, if any.
    #[inline]
    pub fn take(&mut self) -> Option<Pose> {
        self.0.take()
    }

    #[inline]
    pub fn peek(&self) -> Option<&Pose> {
        self.0.as_ref()
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }
}
