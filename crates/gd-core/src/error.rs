//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into `GdError`
//! via `From` impls, or keep them separate and wrap `GdError` as one variant.

use thiserror::Error;

use crate::GeoPoint;

/// The top-level error type for `gd-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum GdError {
    #[error("coordinate {index} is not finite: {point}")]
    NonFiniteCoordinate { index: usize, point: GeoPoint },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `gd-*` crates.
pub type GdResult<T> = Result<T, GdError>;
