//! Core data structures for plotvr
//!
//! This crate provides the fundamental types for rendering a point-cloud
//! dataset as colored cubes, including samples, datasets, the color
//! palette, static geometry templates and the cube mesh builder.

pub mod point;
pub mod dataset;
pub mod palette;
pub mod layout;
pub mod mesh;
pub mod transform;
pub mod error;

pub use point::*;
pub use dataset::*;
pub use palette::*;
pub use layout::*;
pub use mesh::*;
pub use transform::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point3, Vector3, Vector4};
