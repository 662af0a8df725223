//! The dataset currently on screen and its cached geometry

use log::info;
use plotvr_core::{Dataset, MeshBuffers, MeshBuilder, CUBE_VERTEX_COUNT, FLOOR_VERTEX_COUNT};
use std::sync::Arc;

/// Current dataset plus the mesh built from it.
///
/// The cube mesh is rebuilt once per [`Scene::set_dataset`] and reused by
/// every frame after that.
#[derive(Debug, Clone)]
pub struct Scene {
    builder: MeshBuilder,
    dataset: Arc<Dataset>,
    cubes: MeshBuffers,
    floor: MeshBuffers,
    generation: u64,
}

impl Scene {
    pub fn new(builder: MeshBuilder) -> Self {
        Self {
            builder,
            dataset: Arc::new(Dataset::new()),
            cubes: MeshBuffers::default(),
            floor: MeshBuilder::build_floor(),
            generation: 0,
        }
    }

    /// Replace the dataset and rebuild the cube mesh
    pub fn set_dataset(&mut self, dataset: Arc<Dataset>) {
        self.cubes = self.builder.build(&dataset);
        self.dataset = dataset;
        self.generation += 1;
        info!(
            "dataset applied: {} ({} vertices)",
            self.dataset,
            self.cubes.vertex_count()
        );
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn cubes(&self) -> &MeshBuffers {
        &self.cubes
    }

    pub fn floor(&self) -> &MeshBuffers {
        &self.floor
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// Vertices drawn by the cube pass
    pub fn cube_vertex_count(&self) -> usize {
        CUBE_VERTEX_COUNT * self.dataset.len()
    }

    pub fn floor_vertex_count(&self) -> usize {
        FLOOR_VERTEX_COUNT
    }

    /// Number of datasets applied so far
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(MeshBuilder::default())
    }
}
