//! `gd-motion` — agent traversal state and path following.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`state`]   | `AgentState`, `TraversalPhase` — per-agent simulation state       |
//! | [`engine`]  | `TraversalEngine` — advances the agent along a `Path` each frame  |
//! | [`pending`] | `PendingPose` — start pose deferred until the agent is renderable |
//!
//! # Movement model (constant speed, per-frame integration)
//!
//! The agent moves along straight segments at `speed` metres per second:
//!
//! 1. `TraversalEngine::install_path` resets the agent to the start of a new
//!    path and points it along the first segment.
//! 2. `TraversalEngine::advance(delta)` consumes `delta` seconds segment by
//!    segment, so a long frame can cross several path vertices.
//! 3. When the last vertex is reached the agent is **arrived**: it never
//!    moves again on that path, and time left over in the arrival frame is
//!    dropped rather than wrapped back to the start.
//!
//! Degenerate situations (no path, one-point path, zero speed, zero or
//! negative `delta`) are no-ops, never errors.

pub mod engine;
pub mod pending;
pub mod state;


pub use engine::TraversalEngine;
pub use pending::PendingPose;
pub use state::{AgentState, TraversalPhase};
