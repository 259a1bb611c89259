//! `gd-spatial` — the local simulation frame and the paths expressed in it.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`anchor`] | `AnchorTransform` — local frame ↔ world frame mapping        |
//! | [`frame`]  | `local_to_world`, `world_to_local`, `heading`                |
//! | [`path`]   | `Path`, `Pose`, `build_path`                                 |
//!
//! # Local frame
//!
//! The local frame is a right-handed scene space centred on the anchor,
//! scaled so one unit is one metre at the anchor's latitude:
//!
//! ```text
//!   local +X  →  world +X (east)
//!   local +Z  →  world +Y (south, Mercator y grows southward)
//!   local +Y  →  up (ground plane at y = 0)
//! ```
//!
//! Every crate that crosses between the frames goes through [`frame`], so the
//! axis mapping and the heading sign convention are defined exactly once.

pub mod anchor;
pub mod frame;
pub mod path;

#[cfg(test)]
mod tests;

pub use anchor::AnchorTransform;
pub use frame::{heading, local_to_world, world_to_local};
pub use path::{MIN_SEGMENT_LENGTH, Path, Pose, build_path};
