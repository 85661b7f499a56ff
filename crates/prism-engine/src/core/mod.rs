//! Engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the application: the [`App`] callbacks, the per-tick [`FrameCtx`], context
//! acquisition at startup and the loop's [`CancelToken`].

mod app;
mod cancel;
mod ctx;
mod startup;

pub use app::{App, AppControl};
pub use cancel::CancelToken;
pub use ctx::{FrameCtx, WindowCtx};
pub use startup::{Startup, CONTEXT_UNAVAILABLE};
