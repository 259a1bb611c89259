//! Scene projection adapter.

use glam::{DMat4, DVec3};

use gd_spatial::AnchorTransform;

/// The host map's camera for the current frame.
///
/// Wraps the host's main view-projection matrix, supplied as 16 numbers in
/// column-major order (the layout WebGL hosts hand to custom layers).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraFrame {
    pub main_matrix: DMat4,
}

impl CameraFrame {
    pub fn new(main_matrix: DMat4) -> Self {
        Self { main_matrix }
    }

    pub fn from_cols_array(cols: &[f64; 16]) -> Self {
        Self::new(DMat4::from_cols_array(cols))
    }
}

impl Default for CameraFrame {
    fn default() -> Self {
        Self::new(DMat4::IDENTITY)
    }
}

/// Combined transform taking local scene coordinates to the host's clip
/// space for this frame:
///
/// ```text
///   camera · T(translation) · S(s, −s, s) · Rx · Ry · Rz
/// ```
///
/// The negative `y` scale flips the scene's up axis to match the world
/// frame.  Must be recomputed every frame: the camera moves even when the
/// anchor and the agent do not.
pub fn scene_matrix(camera: &CameraFrame, anchor: &AnchorTransform) -> DMat4 {
    let rotation = anchor.rotation();
    let model = DMat4::from_translation(anchor.translation)
        * DMat4::from_scale(DVec3::new(anchor.scale, -anchor.scale, anchor.scale))
        * DMat4::from_rotation_x(rotation.x)
        * DMat4::from_rotation_y(rotation.y)
        * DMat4::from_rotation_z(rotation.z);
    camera.main_matrix * model
}
