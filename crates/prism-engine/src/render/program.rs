use std::borrow::Cow;

use crate::device::FrameTargets;
use crate::geometry::AttributeBinding;
use crate::shader::{CompiledStage, LinkedProgram};

use super::PipelineState;

/// A linked program turned into a GPU render pipeline.
///
/// Built once after linking and used for every draw; never rebuilt.
pub struct Program {
    pipeline: wgpu::RenderPipeline,
    /// Vertex layout baked into `pipeline`.
    binding: AttributeBinding,
}

impl Program {
    pub fn create(
        device: &wgpu::Device,
        linked: &LinkedProgram,
        binding: &AttributeBinding,
        state: &PipelineState,
        color_format: wgpu::TextureFormat,
        targets: &FrameTargets,
    ) -> Self {
        let label = format!(
            "{}+{}",
            linked.vertex().label(),
            linked.fragment().label()
        );

        let vs = create_module(device, linked.vertex());
        let fs = create_module(device, linked.fragment());

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("prism pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&label),
            layout: Some(&layout),

            vertex: wgpu::VertexState {
                module: &vs,
                entry_point: Some(linked.vertex().entry_point()),
                compilation_options: Default::default(),
                buffers: &[binding.layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fs,
                entry_point: Some(linked.fragment().entry_point()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: state.primitive(),
            depth_stencil: state.depth_stencil(targets.depth_format()),
            multisample: state.multisample(targets.sample_count()),

            multiview_mask: None,
            cache: None,
        });

        log::info!("render pipeline `{label}` created");

        Self {
            pipeline,
            binding: binding.clone(),
        }
    }

    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    /// The attribute binding the pipeline was created with.
    pub fn binding(&self) -> &AttributeBinding {
        &self.binding
    }
}

fn create_module(device: &wgpu::Device, stage: &CompiledStage) -> wgpu::ShaderModule {
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(stage.label()),
        source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(stage.source())),
    });

    // The source was validated up front; anything the driver adds is informational.
    let info = pollster::block_on(module.get_compilation_info());
    for msg in &info.messages {
        log::warn!(
            "{} shader `{}`: {:?}: {}",
            stage.kind(),
            stage.label(),
            msg.message_type,
            msg.message
        );
    }

    module
}
