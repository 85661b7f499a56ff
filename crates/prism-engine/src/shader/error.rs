use thiserror::Error;

use super::StageKind;

/// Failure to compile a single shader stage.
///
/// Carries the diagnostic text produced by the shader front-end or validator.
#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("{stage} shader `{label}` failed to parse:\n{diagnostic}")]
    Parse {
        stage: StageKind,
        label: String,
        diagnostic: String,
    },

    #[error("{stage} shader `{label}` failed validation:\n{diagnostic}")]
    Validation {
        stage: StageKind,
        label: String,
        diagnostic: String,
    },

    #[error("{stage} shader `{label}` must declare exactly one {stage} entry point, found {found}")]
    EntryPoint {
        stage: StageKind,
        label: String,
        found: usize,
    },
}

impl ShaderError {
    pub fn stage(&self) -> StageKind {
        match self {
            Self::Parse { stage, .. }
            | Self::Validation { stage, .. }
            | Self::EntryPoint { stage, .. } => *stage,
        }
    }
}

/// Failure to build a program out of two stages.
#[derive(Debug, Error)]
pub enum ProgramError {
    /// One or both stages did not compile; nothing was linked.
    #[error("program not linked: {} stage(s) failed to compile", .failures.len())]
    Stage { failures: Vec<ShaderError> },

    /// The stages compiled but their interfaces do not fit together.
    #[error("program link failed: {0}")]
    Interface(String),

    /// The vertex stage has no input with the requested name.
    #[error("vertex input `{0}` not found in program")]
    MissingAttribute(String),
}
