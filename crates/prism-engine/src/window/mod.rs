//! Window + render loop.
//!
//! Owns the `winit` EventLoop and Window, acquires the drawing context for the
//! window and drives one tick per redraw request.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
