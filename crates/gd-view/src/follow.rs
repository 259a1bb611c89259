//! Camera-follow projector.

use glam::DVec3;

use gd_core::{GeoPoint, Projection};
use gd_spatial::{AnchorTransform, local_to_world};

/// Camera gestures that suspend auto-centering while in progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    Drag,
    Rotate,
    Zoom,
}

impl Gesture {
    #[inline]
    fn bit(self) -> u8 {
        match self {
            Gesture::Drag   => 1 << 0,
            Gesture::Rotate => 1 << 1,
            Gesture::Zoom   => 1 << 2,
        }
    }
}

/// Camera-follow flag plus the set of camera gestures currently in progress.
///
/// Gestures are tracked individually so that a zoom ending in the middle of a
/// drag does not hand the camera back while the user is still dragging.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CameraFollow {
    follow:   bool,
    gestures: u8,
}

impl CameraFollow {
    pub fn new(follow: bool) -> Self {
        Self { follow, gestures: 0 }
    }

    #[inline]
    pub fn is_following(&self) -> bool {
        self.follow
    }

    /// `true` while any gesture is in progress.
    #[inline]
    pub fn is_interacting(&self) -> bool {
        self.gestures != 0
    }

    /// Flip camera-follow; returns the new state.
    pub fn toggle_follow(&mut self) -> bool {
        self.follow = !self.follow;
        self.follow
    }

    pub fn set_follow(&mut self, follow: bool) {
        self.follow = follow;
    }

    pub fn begin_interaction(&mut self, gesture: Gesture) {
        self.gestures |= gesture.bit();
    }

    pub fn end_interaction(&mut self, gesture: Gesture) {
        self.gestures &= !gesture.bit();
    }

    /// Follow is on and the user is not steering the camera.
    #[inline]
    pub fn should_recenter(&self) -> bool {
        self.follow && !self.is_interacting()
    }

    /// Geographic point the map should center on, or `None` when the camera
    /// is not following.
    ///
    /// `local` is the agent position in the anchor's frame; it is mapped
    /// with [`local_to_world`], the exact inverse of the path builder's
    /// mapping, then unprojected.
    pub fn maybe_recenter<P: Projection>(
        &self,
        local:      DVec3,
        anchor:     &AnchorTransform,
        projection: &P,
    ) -> Option<GeoPoint> {
        if !self.should_recenter() {
            return None;
        }
        Some(projection.unproject(local_to_world(anchor, local)))
    }
}
