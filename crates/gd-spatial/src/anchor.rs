//! The coordinate anchor: where the local frame sits in the world.

use glam::DVec3;

use gd_core::{GeoPoint, Projection};

/// Mapping from the local simulation frame to the host's world frame.
///
/// `rotation` is fixed when the transform is created; only `translation` and
/// `scale` change when the anchor is relocated.  `scale` is always `> 0`
/// for points inside the projection's domain.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnchorTransform {
    /// World-frame position of the local origin.
    pub translation: DVec3,
    /// Fixed rotation of the local scene (x, y, z), radians.
    rotation: DVec3,
    /// World units per local unit (per metre at the anchor).
    pub scale: f64,
    /// The geographic point the local origin currently sits on.
    origin: GeoPoint,
}

impl AnchorTransform {
    /// Anchor the local frame at `geo`, projected at `altitude_m`.
    pub fn at<P: Projection>(projection: &P, geo: GeoPoint, altitude_m: f64, rotation: DVec3) -> Self {
        let projected = projection.project(geo, altitude_m);
        Self {
            translation: projected.world,
            rotation,
            scale: projected.units_per_meter,
            origin: geo,
        }
    }

    /// Move the local origin to `geo`.
    ///
    /// Projection scale depends on latitude, so it is recomputed here; the
    /// rotation is left untouched.
    pub fn relocate<P: Projection>(&mut self, projection: &P, geo: GeoPoint, altitude_m: f64) {
        let projected = projection.project(geo, altitude_m);
        self.translation = projected.world;
        self.scale = projected.units_per_meter;
        self.origin = geo;
    }

    #[inline]
    pub fn rotation(&self) -> DVec3 {
        self.rotation
    }

    #[inline]
    pub fn origin(&self) -> GeoPoint {
        self.origin
    }
}
