//! Shader program builder.
//!
//! Stages are compiled one at a time into [`CompiledStage`]s (or a
//! [`ShaderError`] carrying the diagnostic), then [`link`]ed into a
//! [`LinkedProgram`] after checking that the stage interfaces agree. GPU
//! pipeline creation from a linked program lives in `render`.

mod error;
mod program;
mod stage;

pub use error::{ProgramError, ShaderError};
pub use program::{link, LinkedProgram};
pub use stage::{compile, CompiledStage, LocationSlot, StageInterface, StageKind};

/// Passes a 3-component position straight through to clip space.
pub const TRIANGLE_VERTEX_WGSL: &str = include_str!("shaders/triangle.vert.wgsl");

/// Fills every covered pixel with a constant opaque orange.
pub const TRIANGLE_FRAGMENT_WGSL: &str = include_str!("shaders/triangle.frag.wgsl");
