//! Camera, head and pre-view matrices with the tracking state machine

use crate::config::NavigationConfig;
use crate::head::{Axis, Direction, HeadBasis, HeadTransform};
use log::{debug, info, warn};
use nalgebra::{Point3, Vector3};
use plotvr_core::{Error, Result, Transform3D};

/// Whether the view follows the physical head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingMode {
    /// Camera follows the head pose
    Tracking,
    /// Head pose is frozen, camera is steered manually
    Free,
}

/// Navigation state of one viewing session.
///
/// Invariant: switching between [`TrackingMode::Tracking`] and
/// [`TrackingMode::Free`] leaves [`NavigationState::effective_view`]
/// unchanged at the instant of the switch.
#[derive(Debug, Clone)]
pub struct NavigationState {
    pub(crate) config: NavigationConfig,
    camera: Transform3D,
    head_view: Transform3D,
    head_pre_view: Transform3D,
    last_ok_head_view: Transform3D,
    basis: HeadBasis,
    mode: TrackingMode,
    walking: bool,
    draw_floor: bool,
    pub(crate) object_distance: f32,
    pub(crate) focus_model: Transform3D,
}

impl NavigationState {
    /// Create the initial state: tracking, not walking, floor visible
    pub fn new(config: NavigationConfig) -> Self {
        let camera = Transform3D::look_at(
            &Point3::new(0.0, 0.0, config.camera_z),
            &Point3::origin(),
            &Vector3::y(),
        );
        let focus_model = Transform3D::translation(Vector3::new(0.0, 0.0, -config.object_distance));

        Self {
            object_distance: config.object_distance,
            config,
            camera,
            head_view: Transform3D::identity(),
            head_pre_view: Transform3D::identity(),
            last_ok_head_view: Transform3D::identity(),
            basis: HeadBasis::identity(),
            mode: TrackingMode::Tracking,
            walking: false,
            draw_floor: true,
            focus_model,
        }
    }

    /// Record the latest head pose and advance walking by one frame.
    ///
    /// The walking step uses the head axes from the previous update; the axes
    /// are refreshed from `pose` afterwards.
    pub fn update_head(&mut self, pose: &HeadTransform) {
        self.head_view = pose.head_view();

        if self.walking && self.is_tracking() {
            let forward = self.basis.axis(Axis::Forward) * self.config.walk_step;
            self.camera
                .translate_local(&Vector3::new(forward.x, forward.y, -forward.z));
        }

        self.basis = HeadBasis::from_pose(pose, &self.head_pre_view);
    }

    /// Switch between tracking and free mode.
    ///
    /// Re-entering tracking needs the inverse of the current head view. If it
    /// is singular the switch is aborted, the state stays free and
    /// [`Error::SingularMatrix`] is returned.
    pub fn toggle_track_head(&mut self) -> Result<TrackingMode> {
        match self.mode {
            TrackingMode::Tracking => {
                self.last_ok_head_view = self.head_view;
                self.mode = TrackingMode::Free;
            }
            TrackingMode::Free => {
                let Some(inverse_head) = self.head_view.inverse() else {
                    warn!("head view is not invertible, staying in free mode");
                    return Err(Error::SingularMatrix("head view".to_string()));
                };
                self.head_pre_view = inverse_head * self.last_ok_head_view;
                self.camera = self.head_pre_view * self.camera;
                self.mode = TrackingMode::Tracking;
            }
        }
        info!("head tracking mode now {:?}", self.mode);
        Ok(self.mode)
    }

    /// Move the camera one step along a head-relative axis.
    ///
    /// Right and up moves are mirrored relative to forward because the camera
    /// looks down -Z.
    pub fn manual_move(&mut self, axis: Axis, direction: Direction) {
        let mut scale = self.config.move_step * direction.sign();
        if axis != Axis::Forward {
            scale = -scale;
        }
        let v = self.basis.axis(axis);
        self.camera
            .translate_local(&Vector3::new(v.x * scale, v.y * scale, -v.z * scale));
        debug!("camera now at {:?}", self.camera.translation_part());
    }

    pub fn toggle_walking(&mut self) -> bool {
        self.walking = !self.walking;
        self.walking
    }

    pub fn toggle_floor(&mut self) -> bool {
        self.draw_floor = !self.draw_floor;
        self.draw_floor
    }

    /// The view the user currently sees: the live head view while tracking,
    /// the frozen one while free, composed with the camera.
    pub fn effective_view(&self) -> Transform3D {
        match self.mode {
            TrackingMode::Tracking => self.head_view * self.camera,
            TrackingMode::Free => self.last_ok_head_view * self.camera,
        }
    }

    pub fn camera(&self) -> Transform3D {
        self.camera
    }

    pub fn head_view(&self) -> Transform3D {
        self.head_view
    }

    pub fn head_pre_view(&self) -> Transform3D {
        self.head_pre_view
    }

    pub fn last_ok_head_view(&self) -> Transform3D {
        self.last_ok_head_view
    }

    pub fn basis(&self) -> &HeadBasis {
        &self.basis
    }

    pub fn mode(&self) -> TrackingMode {
        self.mode
    }

    pub fn is_tracking(&self) -> bool {
        self.mode == TrackingMode::Tracking
    }

    pub fn is_walking(&self) -> bool {
        self.walking
    }

    pub fn draws_floor(&self) -> bool {
        self.draw_floor
    }

    /// Model matrix of the focus object, applied to the cube batch
    pub fn focus_model(&self) -> Transform3D {
        self.focus_model
    }

    pub fn object_focus_distance(&self) -> f32 {
        self.object_distance
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(NavigationConfig::default())
    }
}
