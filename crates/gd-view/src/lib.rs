//! `gd-view` — the two seams between the simulation and the host renderer.
//!
//! | Module     | Contents                                                           |
//! |------------|--------------------------------------------------------------------|
//! | [`follow`] | `CameraFollow`, `Gesture` — when and where to recenter the map     |
//! | [`scene`]  | `CameraFrame`, `scene_matrix` — per-frame render transform         |
//!
//! Both are pure with respect to simulation state: they read the anchor and
//! the agent pose and never write to either.

pub mod follow;
pub mod scene;


pub use follow::{CameraFollow, Gesture};
pub use scene::{CameraFrame, scene_matrix};
