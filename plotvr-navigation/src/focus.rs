//! Focus object relocation and gaze test

use crate::state::NavigationState;
use nalgebra::{Point3, Vector3, Vector4};
use plotvr_core::Transform3D;
use rand::Rng;
use std::ops::Range;

/// Azimuth range in degrees around the vertical axis, away from straight ahead
pub const RELOCATE_AZIMUTH_DEG: Range<f32> = 90.0..270.0;

/// Radial distance range of a relocated focus object
pub const RELOCATE_DISTANCE: Range<f32> = 5.0..20.0;

/// Elevation range in degrees of a relocated focus object
pub const RELOCATE_ELEVATION_DEG: Range<f32> = -40.0..40.0;

/// The random draws and resulting position of one relocation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relocation {
    pub azimuth_deg: f32,
    pub distance: f32,
    pub elevation_deg: f32,
    pub position: Point3<f32>,
}

impl NavigationState {
    /// Move the focus object to a random spot out of the forward view.
    ///
    /// The current position is rotated about +Y and scaled by the ratio of
    /// new to old distance, then its height is replaced by
    /// `tan(elevation) * distance`.
    pub fn relocate_focus_object<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Relocation {
        let azimuth_deg = rng.gen_range(RELOCATE_AZIMUTH_DEG);
        let distance = rng.gen_range(RELOCATE_DISTANCE);
        let elevation_deg = rng.gen_range(RELOCATE_ELEVATION_DEG);

        let rotation = Transform3D::rotation(&Vector3::y(), azimuth_deg.to_radians());
        let moved = if self.object_distance > 0.0 {
            let scaling = Transform3D::uniform_scaling(distance / self.object_distance);
            let current = self.focus_model.matrix.column(3).into_owned();
            (rotation * scaling).transform_homogeneous(&current)
        } else {
            // no usable previous distance, start from straight ahead
            rotation.transform_homogeneous(&Vector4::new(0.0, 0.0, -distance, 1.0))
        };
        let height = elevation_deg.to_radians().tan() * distance;

        let position = Point3::new(moved.x, height, moved.z);
        self.object_distance = distance;
        self.focus_model = Transform3D::translation(position.coords);

        Relocation {
            azimuth_deg,
            distance,
            elevation_deg,
            position,
        }
    }

    /// Whether the focus object sits within the yaw and pitch limits of the
    /// current head direction
    pub fn is_looking_at_focus(&self) -> bool {
        let model_view = self.head_view() * self.focus_model;
        let origin = model_view.transform_point(&Point3::origin());

        let pitch = origin.y.atan2(-origin.z);
        let yaw = origin.x.atan2(-origin.z);

        pitch.abs() < self.config.pitch_limit && yaw.abs() < self.config.yaw_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavigationConfig;
    use crate::head::HeadTransform;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_same_seed_same_relocation() {
        let mut a = NavigationState::default();
        let mut b = NavigationState::default();
        let first = a.relocate_focus_object(&mut StdRng::seed_from_u64(7));
        let second = b.relocate_focus_object(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
        assert_eq!(a.focus_model(), b.focus_model());
    }

    #[test]
    fn test_relocation_keeps_horizontal_radius_at_distance() {
        let mut nav = NavigationState::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let relocation = nav.relocate_focus_object(&mut rng);
            let p = relocation.position;
            assert_relative_eq!(
                (p.x * p.x + p.z * p.z).sqrt(),
                relocation.distance,
                epsilon = 1e-3
            );
            assert_relative_eq!(
                p.y,
                relocation.elevation_deg.to_radians().tan() * relocation.distance,
                epsilon = 1e-4
            );
            assert_eq!(nav.object_focus_distance(), relocation.distance);
        }
    }

    #[test]
    fn test_first_relocation_leaves_forward_view() {
        for seed in 0..50 {
            let mut nav = NavigationState::default();
            let relocation = nav.relocate_focus_object(&mut StdRng::seed_from_u64(seed));
            // starting straight ahead on -Z, any azimuth in [90, 270) lands at z >= 0
            assert!(relocation.position.z >= -1e-4, "seed {seed}: {relocation:?}");
        }
    }

    #[test]
    fn test_relocation_from_zero_distance_stays_finite() {
        for object_distance in [0.0, -3.0, f32::NAN] {
            let config = NavigationConfig {
                object_distance,
                ..NavigationConfig::default()
            };
            let mut nav = NavigationState::new(config);
            let relocation = nav.relocate_focus_object(&mut StdRng::seed_from_u64(11));
            let p = relocation.position;
            assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite(), "{relocation:?}");
            assert_relative_eq!(
                (p.x * p.x + p.z * p.z).sqrt(),
                relocation.distance,
                epsilon = 1e-3
            );
            assert!(nav.focus_model().matrix.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_gaze_at_initial_focus() {
        let mut nav = NavigationState::default();
        assert!(nav.is_looking_at_focus());

        let turned = Transform3D::rotation(&Vector3::y(), 0.5);
        nav.update_head(&HeadTransform::new(turned));
        assert!(!nav.is_looking_at_focus());
    }
}
