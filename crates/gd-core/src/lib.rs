//! `gd-core` — foundational types for the `geodrive` framework.
//!
//! This crate is a dependency of every other `gd-*` crate.  It intentionally
//! has no `gd-*` dependencies and minimal external ones (only `glam` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, `GeoBounds`, haversine distance           |
//! | [`projection`]  | `Projection` trait, `Projected`, `WebMercator`        |
//! | [`time`]        | `FrameId`, `FrameClock`                               |
//! | [`config`]      | `DriveConfig`                                         |
//! | [`error`]       | `GdError`, `GdResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `GeoPoint`, `GeoBounds`, |
//!           | `FrameId` and `DriveConfig`.                               |
//!           | Required to load `DriveConfig` from a file.                |

pub mod config;
pub mod error;
pub mod geo;
pub mod projection;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::DriveConfig;
pub use error::{GdError, GdResult};
pub use geo::{GeoBounds, GeoPoint};
pub use projection::{Projected, Projection, WebMercator};
pub use time::{FrameClock, FrameId};
