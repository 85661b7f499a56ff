use crate::coords::{ColorRgba, ViewportRect};

/// Fixed-function state shared by every draw.
///
/// Plain value; converted into the wgpu descriptor pieces when the pipeline is built.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PipelineState {
    /// Depth test comparison. Incoming fragments pass when this holds against the stored depth.
    pub depth_compare: wgpu::CompareFunction,
    pub depth_write: bool,

    pub front_face: wgpu::FrontFace,

    /// Faces discarded by culling; `None` disables culling.
    pub cull_mode: Option<wgpu::Face>,

    pub topology: wgpu::PrimitiveTopology,

    pub clear_color: ColorRgba,
    pub clear_depth: f32,
}

impl PipelineState {
    /// Viewport covering the whole surface, used until a locked viewport exists.
    pub fn initial_viewport(width: u32, height: u32) -> ViewportRect {
        ViewportRect::from_size(width, height)
    }

    pub fn primitive(&self) -> wgpu::PrimitiveState {
        wgpu::PrimitiveState {
            topology: self.topology,
            strip_index_format: None,
            front_face: self.front_face,
            cull_mode: self.cull_mode,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        }
    }

    /// Depth state for a context with the given depth format; `None` without depth.
    pub fn depth_stencil(
        &self,
        format: Option<wgpu::TextureFormat>,
    ) -> Option<wgpu::DepthStencilState> {
        format.map(|format| wgpu::DepthStencilState {
            format,
            depth_write_enabled: self.depth_write,
            depth_compare: self.depth_compare,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        })
    }

    pub fn multisample(&self, sample_count: u32) -> wgpu::MultisampleState {
        wgpu::MultisampleState {
            count: sample_count,
            mask: !0,
            alpha_to_coverage_enabled: false,
        }
    }
}

impl Default for PipelineState {
    fn default() -> Self {
        Self {
            depth_compare: wgpu::CompareFunction::LessEqual,
            depth_write: true,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            topology: wgpu::PrimitiveTopology::TriangleList,
            clear_color: ColorRgba::gray(0.1),
            clear_depth: 1.0,
        }
    }
}
