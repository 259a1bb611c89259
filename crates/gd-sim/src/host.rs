//! Requests the simulation makes of the host map.

use gd_core::{GeoBounds, GeoPoint};

/// The host map engine, as seen from the simulation.
///
/// Only requests flow this way; the host's camera reaches the simulation as
/// a [`CameraFrame`][gd_view::CameraFrame] argument to each frame.
pub trait MapHost {
    /// Center the map camera on `center`.  Called at most once per frame.
    fn recenter(&mut self, center: GeoPoint);

    /// Fit `bounds` into view with `padding_px` of screen margin.  Called on
    /// the first frame after a route is loaded.
    fn fit_bounds(&mut self, _bounds: GeoBounds, _padding_px: f64) {}
}

/// A [`MapHost`] that ignores every request.
pub struct NoopHost;

impl MapHost for NoopHost {
    fn recenter(&mut self, _center: GeoPoint) {}
}
