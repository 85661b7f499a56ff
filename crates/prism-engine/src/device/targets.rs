/// Size-dependent attachments that accompany the surface.
///
/// Recreated whenever the surface is reconfigured to a new size.
pub struct FrameTargets {
    sample_count: u32,
    depth_format: Option<wgpu::TextureFormat>,

    /// Multisampled color target; `None` when rendering directly into the surface.
    msaa_view: Option<wgpu::TextureView>,

    /// Depth attachment; `None` when the context was requested without depth.
    depth_view: Option<wgpu::TextureView>,
}

impl FrameTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        sample_count: u32,
        depth_format: Option<wgpu::TextureFormat>,
    ) -> Self {
        let msaa_view = (sample_count > 1).then(|| {
            create_attachment(
                device,
                "prism msaa color",
                config.format,
                config.width,
                config.height,
                sample_count,
            )
        });

        let depth_view = depth_format.map(|format| {
            create_attachment(
                device,
                "prism depth",
                format,
                config.width,
                config.height,
                sample_count,
            )
        });

        Self {
            sample_count,
            depth_format,
            msaa_view,
            depth_view,
        }
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn depth_format(&self) -> Option<wgpu::TextureFormat> {
        self.depth_format
    }

    /// Returns `(render view, resolve target)` for a frame whose surface view is `surface_view`.
    pub fn color<'a>(
        &'a self,
        surface_view: &'a wgpu::TextureView,
    ) -> (&'a wgpu::TextureView, Option<&'a wgpu::TextureView>) {
        match &self.msaa_view {
            Some(msaa) => (msaa, Some(surface_view)),
            None => (surface_view, None),
        }
    }

    pub fn depth_view(&self) -> Option<&wgpu::TextureView> {
        self.depth_view.as_ref()
    }
}

fn create_attachment(
    device: &wgpu::Device,
    label: &str,
    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
    sample_count: u32,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });

    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
