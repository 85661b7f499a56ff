//! The triangle demo: one program, one vertex buffer, one draw per tick.

use anyhow::{Context, Result};

use crate::coords::AspectLock;
use crate::core::{App, AppControl, FrameCtx};
use crate::device::Gpu;
use crate::geometry::{AttributeBinding, VertexBuffer, POSITION_ATTRIBUTE, TRIANGLE_VERTICES};
use crate::render::{FramePlan, PipelineState, Program, RenderState};
use crate::shader::{self, StageKind, TRIANGLE_FRAGMENT_WGSL, TRIANGLE_VERTEX_WGSL};

/// GPU resources created once during setup and kept for the process lifetime.
struct TriangleResources {
    program: Program,
    vertices: VertexBuffer,
    binding: AttributeBinding,
}

/// Draws a static orange triangle into a 4:3 viewport.
///
/// Only the viewport is aspect-locked. The clear covers the whole window, so
/// the area outside the 4:3 rectangle shows the clear color; there is no
/// letterboxing.
pub struct TriangleApp {
    state: PipelineState,
    aspect: AspectLock,
    resources: Option<TriangleResources>,
}

impl TriangleApp {
    pub fn new(aspect: f32) -> Self {
        Self {
            state: PipelineState::default(),
            aspect: AspectLock::new(aspect),
            resources: None,
        }
    }

    pub fn pipeline_state(&self) -> &PipelineState {
        &self.state
    }
}

impl Default for TriangleApp {
    fn default() -> Self {
        Self::new(AspectLock::FOUR_BY_THREE)
    }
}

impl App for TriangleApp {
    fn setup(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let vertex = shader::compile(StageKind::Vertex, "triangle.vert", TRIANGLE_VERTEX_WGSL);
        let fragment =
            shader::compile(StageKind::Fragment, "triangle.frag", TRIANGLE_FRAGMENT_WGSL);
        let linked = shader::link(vertex, fragment).context("failed to build triangle program")?;

        let vertices = VertexBuffer::upload(
            gpu.device(),
            "prism triangle vbo",
            &TRIANGLE_VERTICES,
            AttributeBinding::COMPONENTS,
        );

        let binding = AttributeBinding::resolve(&linked, POSITION_ATTRIBUTE)
            .context("failed to bind triangle positions")?;

        // The attribute layout is part of the wgpu pipeline, so the pipeline is built last.
        let program = Program::create(
            gpu.device(),
            &linked,
            &binding,
            &self.state,
            gpu.surface_format(),
            gpu.targets(),
        );

        self.resources = Some(TriangleResources {
            program,
            vertices,
            binding,
        });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let size = ctx.gpu.size();
        self.aspect.update(size.width, size.height);

        let Some(res) = self.resources.as_ref() else {
            return AppControl::Continue;
        };

        let viewport = self
            .aspect
            .current()
            .unwrap_or_else(|| PipelineState::initial_viewport(size.width, size.height));
        if !viewport.is_valid() {
            // Minimized; nothing to draw into.
            return AppControl::Continue;
        }

        let plan = FramePlan::single_draw(viewport, &self.state, res.vertices.vertex_count());
        ctx.render(
            &plan,
            RenderState {
                program: &res.program,
                vertices: &res.vertices,
                binding: &res.binding,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::ViewportRect;

    #[test]
    fn default_locks_four_by_three() {
        let app = TriangleApp::default();
        assert_eq!(app.aspect.aspect(), 4.0 / 3.0);
        assert!(app.resources.is_none());
    }

    #[test]
    fn triangle_plan_draws_every_uploaded_vertex_once() {
        let app = TriangleApp::default();
        let vertex_count = (TRIANGLE_VERTICES.len() / AttributeBinding::COMPONENTS) as u32;
        let plan = FramePlan::single_draw(
            PipelineState::initial_viewport(800, 600),
            app.pipeline_state(),
            vertex_count,
        );

        assert_eq!(plan.draws.len(), 1);
        assert_eq!(plan.draws[0].vertices, 0..3);
        assert!(plan.clear.color.is_some());
        assert!(plan.clear.depth.is_some());
    }

    #[test]
    fn wide_window_narrows_viewport_but_still_clears() {
        let mut app = TriangleApp::default();
        let viewport = app.aspect.update(1600, 900).unwrap();
        let plan = FramePlan::single_draw(viewport, app.pipeline_state(), 3);

        assert_eq!(plan.viewport, ViewportRect::new(0.0, 0.0, 1200.0, 900.0));
        // The clear is a load op on the whole surface, not limited to the viewport.
        assert_eq!(plan.clear.color, Some(app.pipeline_state().clear_color));
    }
}
