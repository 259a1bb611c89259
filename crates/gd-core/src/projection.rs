//! Map projection primitive supplied by the host mapping engine.
//!
//! The simulation never talks to a map library directly.  It asks a
//! [`Projection`] to turn a geographic point into the host's world frame and
//! back.  [`WebMercator`] reproduces the normalised Mercator space used by
//! MapLibre / Mapbox custom layers, where the whole world spans `[0, 1]` on
//! both horizontal axes and `y` grows southward.

use std::f64::consts::PI;

use glam::DVec3;

use crate::GeoPoint;

/// Mean Earth radius used by MapLibre, metres.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Equatorial circumference of the sphere above, metres.
pub const EARTH_CIRCUMFERENCE_M: f64 = 2.0 * PI * EARTH_RADIUS_M;

/// Result of projecting a geographic point into the world frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projected {
    /// World-frame position.  `z` carries the altitude in world units.
    pub world: DVec3,
    /// World units spanned by one metre at this point.  Always `> 0` inside
    /// the projection's domain.
    pub units_per_meter: f64,
}

/// Forward and inverse projection between geographic and world coordinates.
///
/// Implementations must be exact inverses of each other on the horizontal
/// axes; camera-follow drifts visibly otherwise.
pub trait Projection {
    /// Project `geo` at `altitude_m` metres above the ellipsoid.
    fn project(&self, geo: GeoPoint, altitude_m: f64) -> Projected;

    /// Inverse of [`project`][Projection::project] on the horizontal axes.
    /// The world `z` component is ignored.
    fn unproject(&self, world: DVec3) -> GeoPoint;

    /// `true` when `geo` can be projected to a finite world point with a
    /// positive scale.
    fn in_domain(&self, geo: GeoPoint) -> bool {
        geo.is_finite()
    }
}

/// Normalised spherical Web Mercator, matching `maplibregl.MercatorCoordinate`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WebMercator;

impl WebMercator {
    /// Latitude at which the square Web Mercator world ends, degrees.
    pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

    /// Circumference of the parallel through `lat` (degrees), metres.
    #[inline]
    fn circumference_at_latitude(lat: f64) -> f64 {
        EARTH_CIRCUMFERENCE_M * (lat * PI / 180.0).cos()
    }
}

impl Projection for WebMercator {
    fn project(&self, geo: GeoPoint, altitude_m: f64) -> Projected {
        let x = (180.0 + geo.lon) / 360.0;
        let y = (180.0 - (180.0 / PI) * (PI / 4.0 + geo.lat * PI / 360.0).tan().ln()) / 360.0;
        let z = altitude_m / Self::circumference_at_latitude(geo.lat);

        Projected {
            world: DVec3::new(x, y, z),
            units_per_meter: 1.0 / Self::circumference_at_latitude(geo.lat),
        }
    }

    fn unproject(&self, world: DVec3) -> GeoPoint {
        let lon = world.x * 360.0 - 180.0;
        let y2 = 180.0 - world.y * 360.0;
        let lat = 360.0 / PI * (y2 * PI / 180.0).exp().atan() - 90.0;
        GeoPoint::new(lon, lat)
    }

    fn in_domain(&self, geo: GeoPoint) -> bool {
        geo.is_finite() && geo.lat.abs() <= Self::MAX_LATITUDE
    }
}
