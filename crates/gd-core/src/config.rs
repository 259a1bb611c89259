//! Top-level simulation configuration.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and passed to `gd_sim::SimBuilder`.  Every field has a
//! default matching the reference vehicle: a ~3 m car model whose forward
//! axis points along local −Z, driving at 15 m/s.

use std::f64::consts::FRAC_PI_2;

use crate::{GdError, GdResult, GeoPoint};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DriveConfig {
    /// Cruise speed in metres (local units) per second.  Also the speed the
    /// agent resumes at after a reversal from a paused state.
    pub default_speed_mps: f64,

    /// Fixed yaw added to every computed heading, correcting for the rendered
    /// model's forward axis.  Default: −π/2.
    pub heading_offset_rad: f64,

    /// Vertical offset keeping the model above the ground plane, metres.
    pub height_offset_m: f64,

    /// Reference altitude used for every projection, metres.
    pub model_altitude_m: f64,

    /// Fixed rotation of the local scene relative to the world frame
    /// (x, y, z), radians.  Default tilts local "up" (+Y) onto world +Z.
    pub model_rotation_rad: [f64; 3],

    /// Anchor used before any route is loaded.
    pub initial_anchor: GeoPoint,

    /// Start with camera-follow enabled.
    pub follow_camera: bool,

    /// Screen padding requested when fitting a freshly loaded route into
    /// view, pixels.
    pub fit_bounds_padding_px: f64,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            default_speed_mps:     15.0,
            heading_offset_rad:    -FRAC_PI_2,
            height_offset_m:       0.3,
            model_altitude_m:      0.0,
            model_rotation_rad:    [FRAC_PI_2, 0.0, 0.0],
            initial_anchor:        GeoPoint::new(148.9819, -35.39847),
            follow_camera:         false,
            fit_bounds_padding_px: 60.0,
        }
    }
}

impl DriveConfig {
    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> GdResult<()> {
        if !self.default_speed_mps.is_finite() || self.default_speed_mps < 0.0 {
            return Err(GdError::Config(format!(
                "default_speed_mps must be finite and >= 0, got {}",
                self.default_speed_mps
            )));
        }
        let finite = [
            ("heading_offset_rad", self.heading_offset_rad),
            ("height_offset_m", self.height_offset_m),
            ("model_altitude_m", self.model_altitude_m),
            ("model_rotation_rad[0]", self.model_rotation_rad[0]),
            ("model_rotation_rad[1]", self.model_rotation_rad[1]),
            ("model_rotation_rad[2]", self.model_rotation_rad[2]),
        ];
        if let Some((name, v)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(GdError::Config(format!("{name} must be finite, got {v}")));
        }
        if !self.initial_anchor.is_finite() || self.initial_anchor.lat.abs() >= 90.0 {
            return Err(GdError::Config(format!(
                "initial_anchor {} is outside the projection domain",
                self.initial_anchor
            )));
        }
        if !self.fit_bounds_padding_px.is_finite() || self.fit_bounds_padding_px < 0.0 {
            return Err(GdError::Config(format!(
                "fit_bounds_padding_px must be finite and >= 0, got {}",
                self.fit_bounds_padding_px
            )));
        }
        Ok(())
    }
}
