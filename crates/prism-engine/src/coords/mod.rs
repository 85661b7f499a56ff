//! Screen-space value types.
//!
//! Viewports are in physical pixels with the origin at the top-left of the
//! surface, matching `wgpu::RenderPass::set_viewport`.

mod color;
mod viewport;

pub use color::ColorRgba;
pub use viewport::{fit_aspect, AspectLock, ViewportRect};
