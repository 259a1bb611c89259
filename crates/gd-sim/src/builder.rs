//! Fluent builder for constructing a [`Sim`].

use glam::DVec3;

use gd_core::{DriveConfig, FrameClock, FrameId, GeoPoint, Projection};
use gd_motion::{PendingPose, TraversalEngine};
use gd_spatial::AnchorTransform;
use gd_view::CameraFollow;

use crate::inbox::RouteInbox;
use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`DriveConfig`]: speeds, offsets, model rotation, initial anchor, …
/// - `P: Projection`: the host's world projection (e.g. [`gd_core::WebMercator`])
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                        |
/// |-------------------------|--------------------------------|
/// | `.initial_anchor(geo)`  | `config.initial_anchor`        |
/// | `.agent_ready(b)`       | `false` (model still loading)  |
/// | `.start_clock_at(ms)`   | First frame has `delta = 0`    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, WebMercator)
///     .initial_anchor(GeoPoint::new(13.405, 52.52))
///     .build()?;
/// ```
pub struct SimBuilder<P: Projection> {
    config:         DriveConfig,
    projection:     P,
    initial_anchor: Option<GeoPoint>,
    agent_ready:    bool,
    start_ms:       Option<f64>,
}

impl<P: Projection> SimBuilder<P> {
    pub fn new(config: DriveConfig, projection: P) -> Self {
        Self {
            config,
            projection,
            initial_anchor: None,
            agent_ready:    false,
            start_ms:       None,
        }
    }

    /// Anchor the local frame somewhere other than `config.initial_anchor`.
    pub fn initial_anchor(mut self, geo: GeoPoint) -> Self {
        self.initial_anchor = Some(geo);
        self
    }

    /// Whether the agent's renderable object already exists.
    ///
    /// Headless runs have nothing to load and usually pass `true`.
    pub fn agent_ready(mut self, ready: bool) -> Self {
        self.agent_ready = ready;
        self
    }

    /// Treat `ms` as the previous frame timestamp, so the first frame already
    /// advances by `now_ms - ms`.
    pub fn start_clock_at(mut self, ms: f64) -> Self {
        self.start_ms = Some(ms);
        self
    }

    /// Validate the configuration, place the anchor, and return a
    /// ready-to-run [`Sim`] with no route.
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate().map_err(SimError::Config)?;

        let origin = self.initial_anchor.unwrap_or(self.config.initial_anchor);
        if !self.projection.in_domain(origin) {
            return Err(SimError::AnchorOutOfDomain(origin));
        }

        let anchor = AnchorTransform::at(
            &self.projection,
            origin,
            self.config.model_altitude_m,
            DVec3::from_array(self.config.model_rotation_rad),
        );
        let engine = TraversalEngine::from_config(&self.config);

        let mut pending_pose = PendingPose::new();
        if !self.agent_ready {
            pending_pose.set(engine.pose());
        }

        let clock = match self.start_ms {
            Some(ms) => FrameClock::starting_at(ms),
            None => FrameClock::new(),
        };

        log::debug!("sim built: anchor {origin}, agent ready: {}", self.agent_ready);

        Ok(Sim {
            follow:          CameraFollow::new(self.config.follow_camera),
            last_phase:      engine.phase(),
            engine,
            anchor,
            clock,
            frame:           FrameId::ZERO,
            pending_pose,
            agent_ready:     self.agent_ready,
            pending_fit:     None,
            routes_loaded:   0,
            notified_routes: 0,
            inbox:           RouteInbox::new(),
            projection:      self.projection,
            config:          self.config,
        })
    }
}
