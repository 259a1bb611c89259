use gd_core::{GdError, GeoPoint};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(GdError),

    #[error("route rejected: {0}")]
    Route(GdError),

    #[error("anchor {0} is outside the projection domain")]
    AnchorOutOfDomain(GeoPoint),
}

pub type SimResult<T> = Result<T, SimError>;
