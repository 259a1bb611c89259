//! The single definition of the local ↔ world axis mapping and the heading
//! sign convention.

use glam::DVec3;

use crate::AnchorTransform;

/// Express a world-frame point in the anchor's local frame.
///
/// World `x`/`y` map to local `x`/`z`; the result lies on the ground plane
/// (`y = 0`).  World `z` (altitude) is dropped.
#[inline]
pub fn world_to_local(anchor: &AnchorTransform, world: DVec3) -> DVec3 {
    DVec3::new(
        (world.x - anchor.translation.x) / anchor.scale,
        0.0,
        (world.y - anchor.translation.y) / anchor.scale,
    )
}

/// Inverse of [`world_to_local`].  The local `y` (height above ground) is not
/// part of the horizontal mapping; the result sits at the anchor's altitude.
#[inline]
pub fn local_to_world(anchor: &AnchorTransform, local: DVec3) -> DVec3 {
    DVec3::new(
        anchor.translation.x + local.x * anchor.scale,
        anchor.translation.y + local.z * anchor.scale,
        anchor.translation.z,
    )
}

/// Yaw (rotation about local +Y) that points the model along `direction`.
///
/// `atan2(−dz, dx)`: local +Z points south, so it is negated to get a
/// counter-clockwise angle from east.  `offset` corrects for the model's own
/// forward axis.
#[inline]
pub fn heading(direction: DVec3, offset: f64) -> f64 {
    (-direction.z).atan2(direction.x) + offset
}
