//! Sample types and related functionality

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// One data point: a position and a palette color index.
///
/// On the wire a sample is a numeric array `[x, y, z, color]`. Missing
/// trailing components read as `0.0`, extra ones are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<f32>", into = "[f32; 4]")]
pub struct Sample {
    pub position: Point3f,
    pub color_index: f32,
}

impl Sample {
    /// Create a sample from a position and a color index
    pub fn new(x: f32, y: f32, z: f32, color_index: f32) -> Self {
        Self {
            position: Point3f::new(x, y, z),
            color_index,
        }
    }

    /// Color index truncated toward zero.
    ///
    /// Negative and NaN indices saturate to 0.
    pub fn color_slot(&self) -> usize {
        self.color_index as usize
    }
}

impl Default for Sample {
    fn default() -> Self {
        Self {
            position: Point3f::origin(),
            color_index: 0.0,
        }
    }
}

impl From<[f32; 4]> for Sample {
    fn from(raw: [f32; 4]) -> Self {
        Self::new(raw[0], raw[1], raw[2], raw[3])
    }
}

impl From<Vec<f32>> for Sample {
    fn from(raw: Vec<f32>) -> Self {
        let mut padded = [0.0f32; 4];
        for (slot, value) in padded.iter_mut().zip(raw) {
            *slot = value;
        }
        Self::from(padded)
    }
}

impl From<Sample> for [f32; 4] {
    fn from(sample: Sample) -> Self {
        [
            sample.position.x,
            sample.position.y,
            sample.position.z,
            sample.color_index,
        ]
    }
}
