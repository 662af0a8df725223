//! Graphics API seam
//!
//! The frame renderer computes matrices and picks buffers; a backend turns
//! each [`DrawCall`] into real API calls. [`RecordingBackend`] keeps the
//! calls instead and is used by the headless binary and the tests.

use crate::eye::Eye;
use bytemuck::{Pod, Zeroable};
use plotvr_core::{Error, MeshBuffers, Result, Transform3D};

/// Which batch a draw call renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawKind {
    Cubes,
    Floor,
}

/// Uniform block shared by the cube and floor programs
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct DrawUniforms {
    pub model: [[f32; 4]; 4],
    pub model_view: [[f32; 4]; 4],
    pub model_view_projection: [[f32; 4]; 4],
    /// Light position in eye space
    pub light_position: [f32; 3],
    pub _padding: f32,
}

impl DrawUniforms {
    pub fn new(
        model: Transform3D,
        model_view: Transform3D,
        model_view_projection: Transform3D,
        light_position: [f32; 3],
    ) -> Self {
        Self {
            model: model.into(),
            model_view: model_view.into(),
            model_view_projection: model_view_projection.into(),
            light_position,
            _padding: 0.0,
        }
    }
}

/// Everything a backend needs to issue one draw
#[derive(Debug, Clone, Copy)]
pub struct DrawCall<'a> {
    pub kind: DrawKind,
    pub eye: Eye,
    pub uniforms: DrawUniforms,
    pub vertex_count: usize,
    pub buffers: &'a MeshBuffers,
}

/// A graphics API able to draw the two batches
pub trait GraphicsBackend {
    /// Clear color and depth before an eye is drawn
    fn clear(&mut self, eye: Eye, color: [f32; 4]) -> Result<()>;

    /// Issue one triangle draw
    fn draw(&mut self, call: &DrawCall<'_>) -> Result<()>;
}

/// What a [`RecordingBackend`] kept of a draw call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDraw {
    pub kind: DrawKind,
    pub eye: Eye,
    pub uniforms: DrawUniforms,
    pub vertex_count: usize,
    pub buffer_vertices: usize,
}

/// Backend that records calls instead of drawing
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub clears: Vec<Eye>,
    pub draws: Vec<RecordedDraw>,
    fail_draws: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose draws fail, as a lost graphics context would
    pub fn failing() -> Self {
        Self {
            fail_draws: true,
            ..Self::default()
        }
    }

    pub fn draws_of(&self, kind: DrawKind) -> impl Iterator<Item = &RecordedDraw> + '_ {
        self.draws.iter().filter(move |draw| draw.kind == kind)
    }

    pub fn clear_log(&mut self) {
        self.clears.clear();
        self.draws.clear();
    }
}

impl GraphicsBackend for RecordingBackend {
    fn clear(&mut self, eye: Eye, _color: [f32; 4]) -> Result<()> {
        self.clears.push(eye);
        Ok(())
    }

    fn draw(&mut self, call: &DrawCall<'_>) -> Result<()> {
        if self.fail_draws {
            return Err(Error::Graphics(format!("cannot draw {:?} batch", call.kind)));
        }
        if call.vertex_count > call.buffers.vertex_count() {
            return Err(Error::Graphics(format!(
                "{:?} draw of {} vertices exceeds buffer of {}",
                call.kind,
                call.vertex_count,
                call.buffers.vertex_count()
            )));
        }
        self.draws.push(RecordedDraw {
            kind: call.kind,
            eye: call.eye,
            uniforms: call.uniforms,
            vertex_count: call.vertex_count,
            buffer_vertices: call.buffers.vertex_count(),
        });
        Ok(())
    }
}
