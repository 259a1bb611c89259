//! The `Sim` struct and its frame hook.

use glam::{DMat4, DVec3};

use gd_core::{DriveConfig, FrameClock, FrameId, GeoBounds, GeoPoint, Projection};
use gd_motion::{AgentState, PendingPose, TraversalEngine, TraversalPhase};
use gd_spatial::{AnchorTransform, Pose, build_path, heading};
use gd_view::{CameraFollow, CameraFrame, scene_matrix};

use crate::inbox::RouteInbox;
use crate::{MapHost, RouteSender, SimError, SimObserver, SimResult, UserEvent};

// ── FrameOutput ───────────────────────────────────────────────────────────────

/// Everything one frame hands back to the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameOutput {
    pub frame: FrameId,
    /// Seconds of simulated time this frame covered.
    pub delta_secs: f64,
    /// Local scene → host clip space, for the renderer.
    pub scene_matrix: DMat4,
    /// Agent pose in the local frame.
    pub pose: Pose,
    pub phase: TraversalPhase,
    /// Where the map was asked to recenter this frame, if it was.
    pub recenter: Option<GeoPoint>,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<P>` owns the anchor, the traversal engine, and the camera-follow
/// flags, and drives them from the host's per-frame hook (see the crate docs
/// for the frame order).
///
/// The agent's renderable object may not exist yet when a route arrives (its
/// model is loaded asynchronously).  Until [`agent_ready`][Sim::agent_ready]
/// is called the agent does not advance, and the pose it should start at is
/// held as a [`PendingPose`].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: Projection> {
    /// Configuration the simulation was built with.
    pub config: DriveConfig,

    pub(crate) projection:   P,
    pub(crate) anchor:       AnchorTransform,
    pub(crate) engine:       TraversalEngine,
    pub(crate) follow:       CameraFollow,
    pub(crate) clock:        FrameClock,
    pub(crate) frame:        FrameId,
    pub(crate) pending_pose: PendingPose,
    pub(crate) agent_ready:  bool,
    /// Bounds of the last loaded route, sent to the host on the next frame.
    pub(crate) pending_fit:  Option<GeoBounds>,
    /// Bumped on every route install; compared against `notified_routes` to
    /// fire `on_route_loaded` once per install.
    pub(crate) routes_loaded:   u64,
    pub(crate) notified_routes: u64,
    pub(crate) last_phase:      TraversalPhase,
    pub(crate) inbox:           RouteInbox,
}

impl<P: Projection> Sim<P> {
    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn anchor(&self) -> &AnchorTransform {
        &self.anchor
    }

    #[inline]
    pub fn engine(&self) -> &TraversalEngine {
        &self.engine
    }

    #[inline]
    pub fn follow(&self) -> &CameraFollow {
        &self.follow
    }

    #[inline]
    pub fn projection(&self) -> &P {
        &self.projection
    }

    #[inline]
    pub fn pose(&self) -> Pose {
        self.engine.pose()
    }

    #[inline]
    pub fn phase(&self) -> TraversalPhase {
        self.engine.phase()
    }

    /// The frame the next call to [`frame`][Sim::frame] will run.
    #[inline]
    pub fn current_frame(&self) -> FrameId {
        self.frame
    }

    #[inline]
    pub fn is_agent_ready(&self) -> bool {
        self.agent_ready
    }

    /// Agent state, for callers that inspect it between frames.
    #[inline]
    pub fn agent_state(&self) -> &AgentState {
        self.engine.state()
    }

    #[inline]
    pub fn pending_pose(&self) -> Option<&Pose> {
        self.pending_pose.peek()
    }

    /// Agent position as a geographic point, regardless of camera-follow.
    pub fn agent_geo(&self) -> GeoPoint {
        let world = gd_spatial::local_to_world(&self.anchor, self.engine.pose().position);
        self.projection.unproject(world)
    }

    /// Handle for loaders running off the frame loop.
    pub fn route_sender(&self) -> RouteSender {
        self.inbox.sender()
    }

    // ── Frame hook ────────────────────────────────────────────────────────

    /// Run one frame at host time `now_ms`.
    pub fn frame<H: MapHost, O: SimObserver>(
        &mut self,
        now_ms:   f64,
        camera:   &CameraFrame,
        host:     &mut H,
        observer: &mut O,
    ) -> FrameOutput {
        let frame = self.frame;
        observer.on_frame_start(frame);

        // ── ① Routes delivered since the last frame ───────────────────────
        if let Some(coords) = self.inbox.latest() {
            if let Err(e) = self.load_route(&coords) {
                log::warn!("{frame}: dropped delivered route: {e}");
            }
        }
        if self.notified_routes != self.routes_loaded {
            self.notified_routes = self.routes_loaded;
            observer.on_route_loaded(frame, self.engine.path());
        }

        // ── ② Fit a new route into view ───────────────────────────────────
        if let Some(bounds) = self.pending_fit.take() {
            host.fit_bounds(bounds, self.config.fit_bounds_padding_px);
        }

        // ── ③④ Clock and traversal ────────────────────────────────────────
        let delta_secs = self.clock.tick(now_ms);
        if self.agent_ready {
            self.engine.advance(delta_secs);
        }

        let phase = self.engine.phase();
        if phase != self.last_phase {
            self.log_phase_change(frame, phase);
            observer.on_phase_change(frame, self.last_phase, phase);
            self.last_phase = phase;
        }

        // ── ⑤ Camera follow ───────────────────────────────────────────────
        let pose = self.engine.pose();
        let recenter = if self.agent_ready && self.engine.path().is_active() {
            self.follow.maybe_recenter(pose.position, &self.anchor, &self.projection)
        } else {
            None
        };
        if let Some(center) = recenter {
            host.recenter(center);
        }

        // ── ⑥ Scene projection ────────────────────────────────────────────
        let output = FrameOutput {
            frame,
            delta_secs,
            scene_matrix: scene_matrix(camera, &self.anchor),
            pose,
            phase,
            recenter,
        };

        observer.on_frame_end(&output, self.engine.state());
        self.frame = frame.next();
        output
    }

    /// Run `n` frames spaced `frame_ms` apart, continuing from the last host
    /// timestamp (or 0).  Returns the output of the final frame.
    ///
    /// Useful for tests and headless runs.
    pub fn run_frames<H: MapHost, O: SimObserver>(
        &mut self,
        n:        u64,
        frame_ms: f64,
        camera:   &CameraFrame,
        host:     &mut H,
        observer: &mut O,
    ) -> Option<FrameOutput> {
        let mut last = None;
        for _ in 0..n {
            let now_ms = self.clock.last_ms().unwrap_or(0.0) + frame_ms;
            last = Some(self.frame(now_ms, camera, host, observer));
        }
        last
    }

    /// Notify `observer` that the run is over.
    pub fn finish<O: SimObserver>(&mut self, observer: &mut O) {
        observer.on_sim_end(self.frame);
    }

    // ── Route and anchor ──────────────────────────────────────────────────

    /// Install `coords` as the agent's route.
    ///
    /// The anchor re-centres on the first coordinate, the path is rebuilt in
    /// the new frame, the agent goes back to the start at the default speed,
    /// and the host is asked to fit the route into view on the next frame.
    /// An empty route leaves the anchor where it is and installs an inactive
    /// path.
    ///
    /// # Errors
    ///
    /// [`SimError::Route`] for non-finite coordinates and
    /// [`SimError::AnchorOutOfDomain`] when the first coordinate cannot be an
    /// anchor.  Nothing changes on error.
    pub fn load_route(&mut self, coords: &[GeoPoint]) -> SimResult<()> {
        let mut anchor = self.anchor;
        if let Some(&first) = coords.first().filter(|p| p.is_finite()) {
            if !self.projection.in_domain(first) {
                return Err(SimError::AnchorOutOfDomain(first));
            }
            anchor.relocate(&self.projection, first, self.config.model_altitude_m);
        }
        let path = build_path(coords, &anchor, &self.projection, self.config.model_altitude_m)
            .map_err(SimError::Route)?;

        let length_m = path.total_length();
        self.anchor = anchor;
        let pose = self.engine.install_path(path);
        self.engine.reset_speed();
        self.pending_fit = GeoBounds::from_points(coords);
        self.routes_loaded += 1;
        if !self.agent_ready {
            self.pending_pose.set(pose);
        }

        log::info!(
            "loaded route: {} points, {:.0} m, anchor {}",
            coords.len(),
            length_m,
            self.anchor.origin()
        );
        Ok(())
    }

    /// Move the local frame to `geo` (e.g. jumping to another city).
    ///
    /// The current path was expressed in the old frame, so it is dropped.
    /// The agent is placed at `(0, height_offset, 0)` facing
    /// `heading(+X, heading_offset)`, the same convention every other pose
    /// uses.  Hosts that expect the model at the bare origin with zero yaw
    /// must account for both offsets.
    pub fn relocate_anchor(&mut self, geo: GeoPoint) -> SimResult<Pose> {
        if !self.projection.in_domain(geo) {
            return Err(SimError::AnchorOutOfDomain(geo));
        }
        self.anchor.relocate(&self.projection, geo, self.config.model_altitude_m);
        self.engine.clear_path();

        let state = self.engine.state();
        let pose = Pose::new(
            DVec3::new(0.0, state.height_offset, 0.0),
            heading(DVec3::X, state.heading_offset),
        );
        self.engine.place(pose);
        if !self.agent_ready {
            self.pending_pose.set(pose);
        }

        log::info!("anchor relocated to {geo}");
        Ok(pose)
    }

    /// The agent's renderable object now exists.
    ///
    /// Returns the pose to place it at if one was computed while it was
    /// missing.  The pose is handed out once; later calls return `None`.
    pub fn agent_ready(&mut self) -> Option<Pose> {
        self.agent_ready = true;
        self.pending_pose.take()
    }

    // ── User events ───────────────────────────────────────────────────────

    /// Apply a discrete user action.
    ///
    /// Only route and anchor changes can fail; see
    /// [`load_route`][Sim::load_route] and
    /// [`relocate_anchor`][Sim::relocate_anchor].
    pub fn handle(&mut self, event: UserEvent) -> SimResult<()> {
        log::debug!("{}: user event {event:?}", self.frame);
        match event {
            UserEvent::ToggleFollow => {
                let on = self.follow.toggle_follow();
                log::debug!("camera follow {}", if on { "on" } else { "off" });
            }
            UserEvent::InteractionStart(gesture) => self.follow.begin_interaction(gesture),
            UserEvent::InteractionEnd(gesture) => self.follow.end_interaction(gesture),
            UserEvent::Reverse => {
                if !self.engine.reverse() {
                    log::debug!("reverse ignored: no active path");
                } else if !self.agent_ready {
                    self.pending_pose.set(self.engine.pose());
                }
            }
            UserEvent::StopResume => {
                self.engine.toggle_pause();
            }
            UserEvent::StartNewRoute(coords) => self.load_route(&coords)?,
            UserEvent::RelocateAnchor(geo) => {
                self.relocate_anchor(geo)?;
            }
        }
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn log_phase_change(&self, frame: FrameId, to: TraversalPhase) {
        match to {
            TraversalPhase::Arrived => log::info!(
                "{frame}: arrived after {:.1} m",
                self.engine.distance_traveled()
            ),
            _ => log::debug!("{frame}: {} -> {to}", self.last_phase),
        }
    }
}
