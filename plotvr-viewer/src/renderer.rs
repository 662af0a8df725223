//! Per-frame update and stereo draw passes

use crate::backend::{DrawCall, DrawKind, DrawUniforms, GraphicsBackend};
use crate::config::RenderConfig;
use crate::eye::{EyeParams, EyeViews};
use crate::scene::Scene;
use nalgebra::Vector3;
use plotvr_core::{Result, Transform3D};
use plotvr_navigation::{HeadTransform, NavigationState};

/// Counts of what one frame drew
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub eyes: usize,
    pub cube_draws: usize,
    pub floor_draws: usize,
}

/// Drives one frame: head update, per-eye views, cube and floor passes
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    config: RenderConfig,
    eyes: Vec<EyeParams>,
    eye_views: EyeViews,
    floor_model: Transform3D,
}

impl FrameRenderer {
    pub fn new(config: RenderConfig) -> Self {
        let eyes = EyeParams::for_config(&config);
        let floor_model = Transform3D::translation(Vector3::new(0.0, -config.floor_depth, 0.0));
        Self {
            config,
            eyes,
            eye_views: EyeViews::new(),
            floor_model,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn eye_views(&self) -> &EyeViews {
        &self.eye_views
    }

    pub fn floor_model(&self) -> Transform3D {
        self.floor_model
    }

    /// Render one frame.
    ///
    /// The cube pass is skipped when the scene is empty; the floor pass
    /// still runs when enabled. Backend failures end the frame with an error.
    pub fn draw_frame<B: GraphicsBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        nav: &mut NavigationState,
        head: &HeadTransform,
        scene: &Scene,
    ) -> Result<FrameStats> {
        nav.update_head(head);

        let mut stats = FrameStats::default();
        let head_view = nav.head_view();
        let tracking = nav.is_tracking();

        for params in &self.eyes {
            backend.clear(params.eye, self.config.background_color)?;
            stats.eyes += 1;

            let eye_view = self.eye_views.resolve(params, &head_view, tracking);
            let view = eye_view * nav.camera();
            let light = view.transform_homogeneous(&self.config.light_position);
            let light_position = [light.x, light.y, light.z];
            let projection = Transform3D::from(params.projection);

            if !scene.is_empty() {
                let model = nav.focus_model();
                let model_view = view * model;
                backend.draw(&DrawCall {
                    kind: DrawKind::Cubes,
                    eye: params.eye,
                    uniforms: DrawUniforms::new(
                        model,
                        model_view,
                        projection * model_view,
                        light_position,
                    ),
                    vertex_count: scene.cube_vertex_count(),
                    buffers: scene.cubes(),
                })?;
                stats.cube_draws += 1;
            }

            if nav.draws_floor() {
                let model_view = view * self.floor_model;
                backend.draw(&DrawCall {
                    kind: DrawKind::Floor,
                    eye: params.eye,
                    uniforms: DrawUniforms::new(
                        self.floor_model,
                        model_view,
                        projection * model_view,
                        light_position,
                    ),
                    vertex_count: scene.floor_vertex_count(),
                    buffers: scene.floor(),
                })?;
                stats.floor_draws += 1;
            }
        }

        Ok(stats)
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;
    use crate::eye::Eye;
    use plotvr_core::{Dataset, Sample};
    use std::sync::Arc;

    fn scene_with(samples: usize) -> Scene {
        let mut scene = Scene::default();
        scene.set_dataset(Arc::new(Dataset::from_samples(
            vec![Sample::new(0.0, 0.0, -5.0, 1.0); samples],
            1.0,
        )));
        scene
    }

    #[test]
    fn test_two_eyes_two_passes() {
        let mut renderer = FrameRenderer::default();
        let mut backend = RecordingBackend::new();
        let mut nav = NavigationState::default();
        let stats = renderer
            .draw_frame(&mut backend, &mut nav, &HeadTransform::identity(), &scene_with(3))
            .unwrap();

        assert_eq!(stats, FrameStats { eyes: 2, cube_draws: 2, floor_draws: 2 });
        assert_eq!(backend.clears, vec![Eye::Left, Eye::Right]);
        for draw in backend.draws_of(DrawKind::Cubes) {
            assert_eq!(draw.vertex_count, 108);
        }
        for draw in backend.draws_of(DrawKind::Floor) {
            assert_eq!(draw.vertex_count, 6);
        }
    }

    #[test]
    fn test_empty_scene_draws_floor_only() {
        let mut renderer = FrameRenderer::default();
        let mut backend = RecordingBackend::new();
        let mut nav = NavigationState::default();
        let stats = renderer
            .draw_frame(&mut backend, &mut nav, &HeadTransform::identity(), &Scene::default())
            .unwrap();
        assert_eq!(stats.cube_draws, 0);
        assert_eq!(stats.floor_draws, 2);

        nav.toggle_floor();
        backend.clear_log();
        let stats = renderer
            .draw_frame(&mut backend, &mut nav, &HeadTransform::identity(), &Scene::default())
            .unwrap();
        assert_eq!(stats, FrameStats { eyes: 2, cube_draws: 0, floor_draws: 0 });
        assert!(backend.draws.is_empty());
    }

    #[test]
    fn test_backend_failure_propagates() {
        let mut renderer = FrameRenderer::default();
        let mut backend = RecordingBackend::failing();
        let mut nav = NavigationState::default();
        let result =
            renderer.draw_frame(&mut backend, &mut nav, &HeadTransform::identity(), &scene_with(1));
        assert!(matches!(result, Err(plotvr_core::Error::Graphics(_))));
    }

    #[test]
    fn test_uniforms_compose_eye_camera_and_model() {
        let mut renderer = FrameRenderer::default();
        let mut backend = RecordingBackend::new();
        let mut nav = NavigationState::default();
        renderer
            .draw_frame(&mut backend, &mut nav, &HeadTransform::identity(), &scene_with(1))
            .unwrap();

        let left = EyeParams::new(Eye::Left, renderer.config());
        let expected_view = left.offset * nav.camera();
        let cube = backend.draws_of(DrawKind::Cubes).next().unwrap();
        let model_view: [[f32; 4]; 4] = (expected_view * nav.focus_model()).into();
        assert_eq!(cube.uniforms.model_view, model_view);
        let model: [[f32; 4]; 4] = nav.focus_model().into();
        assert_eq!(cube.uniforms.model, model);

        let floor = backend.draws_of(DrawKind::Floor).next().unwrap();
        let floor_model: [[f32; 4]; 4] = renderer.floor_model().into();
        assert_eq!(floor.uniforms.model, floor_model);
    }
}
