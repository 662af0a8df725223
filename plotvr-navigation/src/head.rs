//! Head pose input and head-relative axes

use nalgebra::Vector3;
use plotvr_core::Transform3D;

/// One of the three head-relative movement axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Right,
    Up,
    Forward,
}

impl Axis {
    /// Index into a right/up/forward triple
    pub fn index(self) -> usize {
        match self {
            Axis::Right => 0,
            Axis::Up => 1,
            Axis::Forward => 2,
        }
    }
}

/// Sign of a movement along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Positive => 1.0,
            Direction::Negative => -1.0,
        }
    }
}

/// A head pose sample as delivered by the display runtime.
///
/// `head_view` maps world space into head space. The axis accessors follow
/// the headset runtime convention: they read the columns of the head view,
/// with forward negated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadTransform {
    head_view: Transform3D,
}

impl HeadTransform {
    pub fn new(head_view: Transform3D) -> Self {
        Self { head_view }
    }

    /// Pose used when head tracking is unavailable
    pub fn identity() -> Self {
        Self::new(Transform3D::identity())
    }

    pub fn head_view(&self) -> Transform3D {
        self.head_view
    }

    pub fn right_vector(&self) -> Vector3<f32> {
        self.column(0)
    }

    pub fn up_vector(&self) -> Vector3<f32> {
        self.column(1)
    }

    pub fn forward_vector(&self) -> Vector3<f32> {
        -self.column(2)
    }

    fn column(&self, index: usize) -> Vector3<f32> {
        self.head_view.matrix.fixed_view::<3, 1>(0, index).into_owned()
    }
}

impl Default for HeadTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Transform3D> for HeadTransform {
    fn from(head_view: Transform3D) -> Self {
        Self::new(head_view)
    }
}

/// Right, up and forward vectors of the head, carried through the pre-view
/// correction so they stay meaningful after a tracking switch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadBasis {
    axes: [Vector3<f32>; 3],
}

impl HeadBasis {
    /// Axes of an untransformed head
    pub fn identity() -> Self {
        Self::from_pose(&HeadTransform::identity(), &Transform3D::identity())
    }

    pub fn from_pose(pose: &HeadTransform, pre_view: &Transform3D) -> Self {
        Self {
            axes: [
                pre_view.transform_vector(&pose.right_vector()),
                pre_view.transform_vector(&pose.up_vector()),
                pre_view.transform_vector(&pose.forward_vector()),
            ],
        }
    }

    pub fn axis(&self, axis: Axis) -> Vector3<f32> {
        self.axes[axis.index()]
    }
}

impl Default for HeadBasis {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_pose_axes() {
        let basis = HeadBasis::identity();
        assert_eq!(basis.axis(Axis::Right), Vector3::x());
        assert_eq!(basis.axis(Axis::Up), Vector3::y());
        assert_eq!(basis.axis(Axis::Forward), -Vector3::z());
    }

    #[test]
    fn test_pre_view_rotates_axes() {
        let pose = HeadTransform::identity();
        let quarter = Transform3D::rotation(&Vector3::y(), std::f32::consts::FRAC_PI_2);
        let basis = HeadBasis::from_pose(&pose, &quarter);
        assert_relative_eq!(basis.axis(Axis::Right), -Vector3::z(), epsilon = 1e-6);
        assert_relative_eq!(basis.axis(Axis::Up), Vector3::y(), epsilon = 1e-6);
    }

    #[test]
    fn test_pre_view_translation_does_not_leak_into_axes() {
        let pose = HeadTransform::identity();
        let shifted = Transform3D::translation(Vector3::new(3.0, 4.0, 5.0));
        let basis = HeadBasis::from_pose(&pose, &shifted);
        assert_eq!(basis.axis(Axis::Forward), -Vector3::z());
    }
}
