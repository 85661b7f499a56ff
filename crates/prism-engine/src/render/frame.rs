use std::ops::Range;

use crate::coords::{ColorRgba, ViewportRect};
use crate::device::FrameTargets;
use crate::geometry::{AttributeBinding, VertexBuffer};

use super::{PipelineState, Program};

/// Buffers cleared at the start of a frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClearOps {
    pub color: Option<ColorRgba>,
    pub depth: Option<f32>,
}

/// One non-indexed draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCall {
    pub vertices: Range<u32>,
    pub instances: Range<u32>,
}

/// Everything one tick does to the frame, decided before touching the GPU.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub viewport: ViewportRect,
    pub clear: ClearOps,
    pub draws: Vec<DrawCall>,
}

impl FramePlan {
    /// Clear color and depth, then draw `vertex_count` vertices once.
    pub fn single_draw(viewport: ViewportRect, state: &PipelineState, vertex_count: u32) -> Self {
        Self {
            viewport,
            clear: ClearOps {
                color: Some(state.clear_color),
                depth: Some(state.clear_depth),
            },
            draws: vec![DrawCall {
                vertices: 0..vertex_count,
                instances: 0..1,
            }],
        }
    }
}

/// The program, vertex buffer and attribute binding a frame draws with.
///
/// Passed explicitly to [`encode`]; nothing is read from implicitly bound state.
/// `binding` must be the one `program` was created with.
#[derive(Clone, Copy)]
pub struct RenderState<'a> {
    pub program: &'a Program,
    pub vertices: &'a VertexBuffer,
    pub binding: &'a AttributeBinding,
}

/// Records `plan` into `encoder` as a single render pass.
pub fn encode(
    encoder: &mut wgpu::CommandEncoder,
    surface_view: &wgpu::TextureView,
    targets: &FrameTargets,
    plan: &FramePlan,
    state: RenderState<'_>,
) {
    check_inputs(
        state.program.binding(),
        state.binding,
        state.vertices.byte_len(),
        &plan.draws,
    );

    let (color_view, resolve_target) = targets.color(surface_view);

    let color_load = match plan.clear.color {
        Some(c) => wgpu::LoadOp::Clear(c.to_wgpu()),
        None => wgpu::LoadOp::Load,
    };

    let depth_attachment = targets.depth_view().map(|view| {
        let has_stencil = targets
            .depth_format()
            .is_some_and(|f| f.has_stencil_aspect());

        wgpu::RenderPassDepthStencilAttachment {
            view,
            depth_ops: Some(wgpu::Operations {
                load: plan.clear.depth.map_or(wgpu::LoadOp::Load, wgpu::LoadOp::Clear),
                store: wgpu::StoreOp::Discard,
            }),
            stencil_ops: has_stencil.then_some(wgpu::Operations {
                load: wgpu::LoadOp::Clear(0),
                store: wgpu::StoreOp::Discard,
            }),
        }
    });

    let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("prism frame pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: color_view,
            resolve_target,
            ops: wgpu::Operations {
                load: color_load,
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: depth_attachment,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    });

    let vp = plan.viewport;
    rpass.set_viewport(vp.x, vp.y, vp.width, vp.height, 0.0, 1.0);

    rpass.set_pipeline(state.program.pipeline());
    rpass.set_vertex_buffer(0, state.vertices.slice());

    for draw in &plan.draws {
        rpass.draw(draw.vertices.clone(), draw.instances.clone());
    }
}

/// Debug-only consistency checks between the pipeline's vertex layout, the
/// binding passed for this frame and the size of the bound buffer.
fn check_inputs(
    baked: &AttributeBinding,
    bound: &AttributeBinding,
    byte_len: u64,
    draws: &[DrawCall],
) {
    debug_assert_eq!(
        baked, bound,
        "attribute binding differs from the one baked into the pipeline"
    );
    for draw in draws {
        debug_assert!(
            u64::from(draw.vertices.end) * AttributeBinding::STRIDE <= byte_len,
            "draw of {:?} reads past the {byte_len}-byte vertex buffer",
            draw.vertices
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> FramePlan {
        FramePlan::single_draw(
            ViewportRect::new(0.0, 0.0, 1200.0, 900.0),
            &PipelineState::default(),
            3,
        )
    }

    #[test]
    fn clears_color_and_depth() {
        let plan = plan();
        assert_eq!(plan.clear.color, Some(ColorRgba::gray(0.1)));
        assert_eq!(plan.clear.depth, Some(1.0));
    }

    #[test]
    fn exactly_one_three_vertex_draw() {
        let plan = plan();
        assert_eq!(
            plan.draws,
            vec![DrawCall {
                vertices: 0..3,
                instances: 0..1,
            }]
        );
    }

    #[test]
    fn viewport_is_carried_unchanged() {
        assert_eq!(plan().viewport, ViewportRect::new(0.0, 0.0, 1200.0, 900.0));
    }

    #[test]
    fn matching_inputs_pass() {
        let binding = AttributeBinding::at_location("aPos", 0);
        check_inputs(&binding, &binding.clone(), 36, &plan().draws);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "baked into the pipeline")]
    fn binding_at_another_location_is_rejected() {
        let baked = AttributeBinding::at_location("aPos", 0);
        let bound = AttributeBinding::at_location("aPos", 1);
        check_inputs(&baked, &bound, 36, &plan().draws);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "reads past")]
    fn draw_beyond_buffer_is_rejected() {
        let binding = AttributeBinding::at_location("aPos", 0);
        // Two vertices' worth of bytes for a three-vertex draw.
        check_inputs(&binding, &binding, 24, &plan().draws);
    }
}
