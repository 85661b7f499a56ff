/// Drawing-context request.
///
/// The buffer flags mirror what is asked of the window system: antialiasing,
/// a depth buffer and a stencil buffer. The remaining fields tune the wgpu
/// surface and device.
#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// Render through a multisampled color target resolved into the surface.
    pub antialias: bool,

    /// Allocate a depth attachment.
    pub depth: bool,

    /// Allocate a stencil aspect alongside depth.
    pub stencil: bool,

    /// Prefer an sRGB surface format when available.
    ///
    /// Off by default so color constants reach the screen unconverted.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    ///
    /// FIFO paces the render loop to the display refresh.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    pub desired_maximum_frame_latency: u32,
}

impl ContextConfig {
    /// Sample count requested when `antialias` is set.
    pub const MSAA_SAMPLES: u32 = 4;

    /// Depth attachment format implied by the buffer flags.
    pub fn depth_format(&self) -> Option<wgpu::TextureFormat> {
        match (self.depth, self.stencil) {
            (false, false) => None,
            (true, false) => Some(wgpu::TextureFormat::Depth32Float),
            (_, true) => Some(wgpu::TextureFormat::Depth24PlusStencil8),
        }
    }

    /// Sample count to use given what the adapter supports for the color format.
    ///
    /// Falls back to single sampling when multisampling was requested but is unsupported.
    pub fn sample_count(&self, supported: impl Fn(u32) -> bool) -> u32 {
        if !self.antialias {
            return 1;
        }
        if supported(Self::MSAA_SAMPLES) {
            Self::MSAA_SAMPLES
        } else {
            log::warn!(
                "{}x multisampling unsupported for the surface format; antialiasing disabled",
                Self::MSAA_SAMPLES
            );
            1
        }
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            antialias: true,
            depth: true,
            stencil: false,
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
