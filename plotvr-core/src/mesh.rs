//! Cube batch and floor mesh generation

use crate::dataset::Dataset;
use crate::layout::{cube_template, floor_template, FLOOR_COLOR};
use crate::palette::Palette;

/// Scale applied to the unit cube template for every sample
pub const CUBE_SCALE: f32 = 0.1;

/// Flat vertex, color and normal buffers ready for upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
    pub normals: Vec<[f32; 3]>,
}

impl MeshBuffers {
    /// Create empty buffers with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            colors: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
        }
    }

    /// Number of triangle vertices to draw
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Check if there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions as raw bytes
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Colors as raw bytes
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Normals as raw bytes
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }
}

/// Turns datasets into instanced cube geometry
#[derive(Debug, Clone, Default)]
pub struct MeshBuilder {
    palette: Palette,
}

impl MeshBuilder {
    /// Create a builder using the given palette
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// The palette used for coloring
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Build one scaled, translated cube per sample.
    ///
    /// Normals are copied from the template unchanged.
    pub fn build(&self, dataset: &Dataset) -> MeshBuffers {
        let template = cube_template();
        let mut buffers = MeshBuffers::with_capacity(dataset.len() * template.vertex_count());

        for sample in dataset {
            let p = sample.position;
            buffers.positions.extend(
                template
                    .positions
                    .iter()
                    .map(|v| [
                        CUBE_SCALE * v[0] + p.x,
                        CUBE_SCALE * v[1] + p.y,
                        CUBE_SCALE * v[2] + p.z,
                    ]),
            );
            buffers
                .colors
                .extend_from_slice(self.palette.fragment(sample.color_slot()));
            buffers.normals.extend_from_slice(&template.normals);
        }

        buffers
    }

    /// Build the static floor geometry
    pub fn build_floor() -> MeshBuffers {
        let template = floor_template();
        MeshBuffers {
            positions: template.positions.clone(),
            colors: vec![FLOOR_COLOR; template.vertex_count()],
            normals: template.normals.clone(),
        }
    }
}
