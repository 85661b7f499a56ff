//! Prism engine crate.
//!
//! Drawing-context acquisition, a small shader program builder, static
//! geometry upload and an aspect-locked render loop on top of wgpu + winit.

pub mod alert;
pub mod coords;
pub mod core;
pub mod device;
pub mod geometry;
pub mod logging;
pub mod render;
pub mod shader;
pub mod triangle;
pub mod window;
