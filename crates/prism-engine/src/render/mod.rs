//! GPU rendering.
//!
//! - [`PipelineState`]: depth test, culling and clear values
//! - [`Program`]: the render pipeline built from a linked shader program
//! - [`FramePlan`] + [`encode`]: what one tick draws, and recording it into a pass

mod frame;
mod program;
mod state;

pub use frame::{encode, ClearOps, DrawCall, FramePlan, RenderState};
pub use program::Program;
pub use state::PipelineState;
