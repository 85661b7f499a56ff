//! Drawing-context acquisition.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue for a window
//! - creating & configuring the Surface (swapchain)
//! - allocating the multisample and depth attachments the context was requested with
//! - acquiring frames and providing encoders/views for rendering

mod context;
mod init;
mod surface;
mod targets;

pub use context::{Gpu, GpuFrame, SurfaceErrorAction};
pub use init::ContextConfig;
pub use targets::FrameTargets;
