//! Eyes, their fixed offsets and the cached per-eye views

use crate::config::RenderConfig;
use nalgebra::{Matrix4, Perspective3, Vector3};
use plotvr_core::Transform3D;

/// Which view is being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eye {
    Monocular,
    Left,
    Right,
}

impl Eye {
    pub const STEREO: [Eye; 2] = [Eye::Left, Eye::Right];

    pub fn index(self) -> usize {
        match self {
            Eye::Monocular => 0,
            Eye::Left => 1,
            Eye::Right => 2,
        }
    }

    /// Horizontal position of the eye relative to the head center, in units of half the IPD
    fn side(self) -> f32 {
        match self {
            Eye::Monocular => 0.0,
            Eye::Left => -1.0,
            Eye::Right => 1.0,
        }
    }
}

/// Fixed transforms for one eye
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeParams {
    pub eye: Eye,
    /// Head space to eye space
    pub offset: Transform3D,
    pub projection: Matrix4<f32>,
}

impl EyeParams {
    pub fn new(eye: Eye, config: &RenderConfig) -> Self {
        let half_ipd = config.interpupillary_distance * 0.5;
        let offset = Transform3D::translation(Vector3::new(-eye.side() * half_ipd, 0.0, 0.0));
        let projection = Perspective3::new(
            config.aspect_ratio,
            config.field_of_view.to_radians(),
            config.z_near,
            config.z_far,
        )
        .into_inner();
        Self {
            eye,
            offset,
            projection,
        }
    }

    /// The eyes drawn each frame
    pub fn for_config(config: &RenderConfig) -> Vec<EyeParams> {
        if config.stereo {
            Eye::STEREO.iter().map(|&eye| Self::new(eye, config)).collect()
        } else {
            vec![Self::new(Eye::Monocular, config)]
        }
    }
}

/// One cached view per eye.
///
/// While the head is tracked the cache follows the head every frame; while
/// it is not, the last tracked view of each eye is held.
#[derive(Debug, Clone, PartialEq)]
pub struct EyeViews {
    views: [Transform3D; 3],
}

impl EyeViews {
    pub fn new() -> Self {
        Self {
            views: [Transform3D::identity(); 3],
        }
    }

    /// The view to use for `params`, refreshing the cache when tracking
    pub fn resolve(&mut self, params: &EyeParams, head_view: &Transform3D, tracking: bool) -> Transform3D {
        let slot = &mut self.views[params.eye.index()];
        if tracking {
            *slot = params.offset * *head_view;
        }
        *slot
    }

    pub fn get(&self, eye: Eye) -> Transform3D {
        self.views[eye.index()]
    }
}

impl Default for EyeViews {
    fn default() -> Self {
        Self::new()
    }
}
