//! Navigation parameters

/// Tunable constants for camera navigation
#[derive(Debug, Clone)]
pub struct NavigationConfig {
    /// Distance walked per frame while walking is on (a fixed time delta)
    pub walk_step: f32,
    /// Distance covered by one manual move command
    pub move_step: f32,
    /// Eye offset from the origin of the initial look-at camera
    pub camera_z: f32,
    /// Initial distance of the focus object straight ahead
    pub object_distance: f32,
    /// Yaw tolerance in radians for the gaze test
    pub yaw_limit: f32,
    /// Pitch tolerance in radians for the gaze test
    pub pitch_limit: f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            walk_step: 0.02,
            move_step: 1.0,
            camera_z: 0.01,
            object_distance: 12.0,
            yaw_limit: 0.12,
            pitch_limit: 0.12,
        }
    }
}
