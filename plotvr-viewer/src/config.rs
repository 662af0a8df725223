//! Rendering configuration

use nalgebra::Vector4;

/// Per-frame rendering parameters
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub z_near: f32,
    pub z_far: f32,
    /// Distance of the floor plane below the origin
    pub floor_depth: f32,
    /// Light position in world space
    pub light_position: Vector4<f32>,
    pub background_color: [f32; 4],
    /// Vertical field of view in degrees
    pub field_of_view: f32,
    pub aspect_ratio: f32,
    pub interpupillary_distance: f32,
    /// Draw one view per eye rather than a single centered view
    pub stereo: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            z_near: 0.1,
            z_far: 100.0,
            floor_depth: 20.0,
            light_position: Vector4::new(0.0, 2.0, 0.0, 1.0),
            background_color: [0.1, 0.1, 0.1, 0.5],
            field_of_view: 90.0,
            aspect_ratio: 1.0,
            interpupillary_distance: 0.064,
            stereo: true,
        }
    }
}
