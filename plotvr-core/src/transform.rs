//! 4x4 transform utilities used for camera and head matrices

use nalgebra::{Matrix4, Point3, Rotation3, Vector3, Vector4};
use serde::{Deserialize, Serialize};

/// A homogeneous 3D transformation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    pub matrix: Matrix4<f32>,
}

impl Transform3D {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a translation transformation
    pub fn translation(translation: Vector3<f32>) -> Self {
        Self {
            matrix: Matrix4::new_translation(&translation),
        }
    }

    /// Create a rotation of `angle` radians around `axis`
    pub fn rotation(axis: &Vector3<f32>, angle: f32) -> Self {
        let rotation = match nalgebra::Unit::try_new(*axis, f32::EPSILON) {
            Some(unit) => Rotation3::from_axis_angle(&unit, angle),
            None => Rotation3::identity(),
        };
        Self {
            matrix: rotation.to_homogeneous(),
        }
    }

    /// Create a uniform scaling transformation
    pub fn uniform_scaling(scale: f32) -> Self {
        Self {
            matrix: Matrix4::new_scaling(scale),
        }
    }

    /// Right-handed view matrix looking from `eye` at `target`
    pub fn look_at(eye: &Point3<f32>, target: &Point3<f32>, up: &Vector3<f32>) -> Self {
        Self {
            matrix: Matrix4::look_at_rh(eye, target, up),
        }
    }

    /// Translate in the local frame, i.e. `self * T(offset)`
    pub fn translate_local(&mut self, offset: &Vector3<f32>) {
        self.matrix *= Matrix4::new_translation(offset);
    }

    /// Apply the transformation to a point
    pub fn transform_point(&self, point: &Point3<f32>) -> Point3<f32> {
        let homogeneous = self.matrix * point.to_homogeneous();
        Point3::from_homogeneous(homogeneous).unwrap_or(*point)
    }

    /// Apply the linear part of the transformation to a vector
    pub fn transform_vector(&self, vector: &Vector3<f32>) -> Vector3<f32> {
        self.matrix.fixed_view::<3, 3>(0, 0) * vector
    }

    /// Apply the full matrix to a homogeneous 4-vector
    pub fn transform_homogeneous(&self, vector: &Vector4<f32>) -> Vector4<f32> {
        self.matrix * vector
    }

    /// Translation column
    pub fn translation_part(&self) -> Vector3<f32> {
        self.matrix.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// Compose this transformation with another
    pub fn compose(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Get the inverse transformation
    pub fn inverse(self) -> Option<Self> {
        self.matrix
            .try_inverse()
            .map(|inv_matrix| Self { matrix: inv_matrix })
    }

    /// Check if two transforms agree within `epsilon` (Frobenius norm)
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.matrix - other.matrix).norm() < epsilon
    }

    /// Check if this is approximately the identity transformation
    pub fn is_identity(&self, epsilon: f32) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Transform3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl From<Matrix4<f32>> for Transform3D {
    fn from(matrix: Matrix4<f32>) -> Self {
        Self { matrix }
    }
}

impl From<Transform3D> for [[f32; 4]; 4] {
    fn from(transform: Transform3D) -> Self {
        transform.matrix.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_translate_local_is_post_multiplied() {
        let mut transform = Transform3D::rotation(&Vector3::y(), std::f32::consts::FRAC_PI_2);
        transform.translate_local(&Vector3::new(1.0, 0.0, 0.0));
        // x maps to -z under a +90 degree yaw
        assert_relative_eq!(
            transform.translation_part(),
            Vector3::new(0.0, 0.0, -1.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_singular_inverse_is_none() {
        let transform = Transform3D::from(Matrix4::zeros());
        assert!(transform.inverse().is_none());
    }

    #[test]
    fn test_inverse_round_trip() {
        let transform = Transform3D::rotation(&Vector3::new(1.0, 1.0, 0.0), 0.7)
            * Transform3D::translation(Vector3::new(1.0, -2.0, 3.0));
        let inverse = transform.inverse().unwrap();
        assert!((transform * inverse).is_identity(1e-5));
    }
}
