//! Discrete user actions.

use gd_core::GeoPoint;
use gd_view::Gesture;

/// A user action delivered by the host's UI or input wiring.
#[derive(Clone, Debug, PartialEq)]
pub enum UserEvent {
    /// Flip camera-follow on or off.
    ToggleFollow,
    /// A camera gesture began; auto-centering is suspended until it ends.
    InteractionStart(Gesture),
    InteractionEnd(Gesture),
    /// Drive the current route backwards from its far end.
    Reverse,
    /// Stop the agent, or resume at its last speed.
    StopResume,
    /// Replace the route and start over at the default speed.
    StartNewRoute(Vec<GeoPoint>),
    /// Jump the local frame to a new region, dropping the current route.
    RelocateAnchor(GeoPoint),
}
