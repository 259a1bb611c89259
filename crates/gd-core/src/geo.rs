//! Geographic coordinate types and spatial utilities.
//!
//! `GeoPoint` uses `f64` longitude/latitude.  Route geometry is handed to the
//! projection, where single precision would lose the sub-metre detail that
//! keeps a vehicle glued to the road at street-level zoom.

/// A WGS-84 geographic coordinate, stored in GeoJSON order (`lon`, `lat`).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// `true` when both components are finite numbers.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_008.8; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }
}

impl From<[f64; 2]> for GeoPoint {
    /// GeoJSON position order: `[lon, lat]`.
    #[inline]
    fn from(p: [f64; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

// ── GeoBounds ─────────────────────────────────────────────────────────────────

/// Axis-aligned lon/lat rectangle, used to ask the host map to fit a route
/// into view.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoBounds {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl GeoBounds {
    /// Degenerate bounds covering a single point.
    #[inline]
    pub fn from_point(p: GeoPoint) -> Self {
        Self { south_west: p, north_east: p }
    }

    /// Smallest bounds containing every point, or `None` for an empty slice.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(Self::from_point(*first), |b, &p| b.extend(p)))
    }

    /// Grow the bounds to include `p`.
    pub fn extend(self, p: GeoPoint) -> Self {
        Self {
            south_west: GeoPoint::new(self.south_west.lon.min(p.lon), self.south_west.lat.min(p.lat)),
            north_east: GeoPoint::new(self.north_east.lon.max(p.lon), self.north_east.lat.max(p.lat)),
        }
    }

    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lon >= self.south_west.lon
            && p.lon <= self.north_east.lon
            && p.lat >= self.south_west.lat
            && p.lat <= self.north_east.lat
    }

    /// Midpoint of the rectangle in lon/lat space.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south_west.lon + self.north_east.lon) * 0.5,
            (self.south_west.lat + self.north_east.lat) * 0.5,
        )
    }
}
