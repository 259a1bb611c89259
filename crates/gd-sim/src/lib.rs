//! `gd-sim` — per-frame orchestrator for the geodrive framework.
//!
//! # Frame hook
//!
//! ```text
//! Sim::frame(now_ms, camera, host, observer):
//!   ① Routes    — install the latest route delivered through a RouteSender
//!                 (the only place a path is swapped mid-run).
//!   ② Fit       — ask the host to frame a freshly loaded route.
//!   ③ Clock     — delta_secs from consecutive host timestamps.
//!   ④ Traverse  — advance the agent (only once it is renderable).
//!   ⑤ Follow    — at most one recenter request to the host.
//!   ⑥ Project   — combined scene matrix for the renderer.
//! ```
//!
//! Discrete user actions (stop/resume, reverse, follow toggle, camera
//! gestures, new route, anchor jumps) go through [`Sim::handle`] between
//! frames.  Everything runs on the host's frame/event thread.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gd_core::{DriveConfig, WebMercator};
//! use gd_sim::{NoopObserver, SimBuilder};
//! use gd_view::CameraFrame;
//!
//! let mut sim = SimBuilder::new(DriveConfig::default(), WebMercator)
//!     .agent_ready(true)
//!     .build()?;
//! sim.load_route(&route)?;
//! let out = sim.frame(now_ms, &CameraFrame::default(), &mut map, &mut NoopObserver);
//! renderer.draw(out.scene_matrix, out.pose);
//! ```

pub mod builder;
pub mod error;
pub mod events;
pub mod host;
pub mod inbox;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use events::UserEvent;
pub use host::{MapHost, NoopHost};
pub use inbox::RouteSender;
pub use observer::{NoopObserver, SimObserver};
pub use sim::{FrameOutput, Sim};
