//! Static geometry templates for the unit cube and the floor

use std::sync::OnceLock;

/// Vertices in one cube instance: 6 faces, 2 triangles each
pub const CUBE_VERTEX_COUNT: usize = 36;

/// Vertices in the floor quad
pub const FLOOR_VERTEX_COUNT: usize = 6;

/// Half extent of the floor quad
pub const FLOOR_EXTENT: f32 = 200.0;

/// Floor color (RGBA)
pub const FLOOR_COLOR: [f32; 4] = [0.0, 0.3398, 0.9023, 1.0];

/// Face normal followed by corners `a, b, c, d`; triangles are `abc` and `bdc`.
const CUBE_FACES: [([f32; 3], [[f32; 3]; 4]); 6] = [
    // front
    ([0.0, 0.0, 1.0], [[-1.0, 1.0, 1.0], [-1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0]]),
    // right
    ([1.0, 0.0, 0.0], [[1.0, 1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0]]),
    // back
    ([0.0, 0.0, -1.0], [[1.0, 1.0, -1.0], [1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [-1.0, -1.0, -1.0]]),
    // left
    ([-1.0, 0.0, 0.0], [[-1.0, 1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, 1.0], [-1.0, -1.0, 1.0]]),
    // top
    ([0.0, 1.0, 0.0], [[-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0]]),
    // bottom
    ([0.0, -1.0, 0.0], [[1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0]]),
];

/// Per-vertex positions and normals of a triangle list
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryTemplate {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
}

impl GeometryTemplate {
    /// Number of vertices in the template
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// The unit cube spanning `[-1, 1]` on every axis, as 36 triangle vertices
pub fn cube_template() -> &'static GeometryTemplate {
    static CUBE: OnceLock<GeometryTemplate> = OnceLock::new();
    CUBE.get_or_init(|| {
        let mut positions = Vec::with_capacity(CUBE_VERTEX_COUNT);
        let mut normals = Vec::with_capacity(CUBE_VERTEX_COUNT);
        for (normal, [a, b, c, d]) in CUBE_FACES {
            positions.extend_from_slice(&[a, b, c, b, d, c]);
            normals.extend_from_slice(&[normal; 6]);
        }
        GeometryTemplate { positions, normals }
    })
}

/// The floor quad in the `y = 0` plane
pub fn floor_template() -> &'static GeometryTemplate {
    static FLOOR: OnceLock<GeometryTemplate> = OnceLock::new();
    FLOOR.get_or_init(|| {
        let e = FLOOR_EXTENT;
        GeometryTemplate {
            positions: vec![
                [e, 0.0, -e],
                [-e, 0.0, -e],
                [-e, 0.0, e],
                [e, 0.0, -e],
                [-e, 0.0, e],
                [e, 0.0, e],
            ],
            normals: vec![[0.0, 1.0, 0.0]; FLOOR_VERTEX_COUNT],
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn test_cube_template_shape() {
        let cube = cube_template();
        assert_eq!(cube.vertex_count(), CUBE_VERTEX_COUNT);
        assert_eq!(cube.normals.len(), CUBE_VERTEX_COUNT);
        assert!(cube
            .positions
            .iter()
            .flatten()
            .all(|c| c.abs() == 1.0));
    }

    #[test]
    fn test_cube_triangles_face_outward() {
        let cube = cube_template();
        for (tri, normals) in cube.positions.chunks(3).zip(cube.normals.chunks(3)) {
            let a = Vector3::from(tri[0]);
            let b = Vector3::from(tri[1]);
            let c = Vector3::from(tri[2]);
            let winding = (b - a).cross(&(c - a)).normalize();
            assert_eq!(winding, Vector3::from(normals[0]));
        }
    }

    #[test]
    fn test_floor_template_shape() {
        let floor = floor_template();
        assert_eq!(floor.vertex_count(), FLOOR_VERTEX_COUNT);
        assert!(floor.positions.iter().all(|p| p[1] == 0.0));
    }
}
