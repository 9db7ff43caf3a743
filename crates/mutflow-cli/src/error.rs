use mutflow::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Scripts directory not found: {path}", path = path.display())]
    ScriptsDirMissing { path: PathBuf },

    #[error("Could not create output directory '{path}': {source}", path = path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this failure.
    ///
    /// Scripting consumers rely on every listed condition keeping its own
    /// code: 1-3 pre-flight validation, 4-6 generation/layout, 7-9 the three
    /// analyzers, 10 uncategorized I/O during orchestration.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Argument(_) | CliError::Config(_) => 1,
            CliError::ScriptsDirMissing { .. } => 2,
            CliError::OutputDir { .. } => 3,
            CliError::Engine(e) => match e {
                EngineError::Generation { .. } => 4,
                EngineError::SequenceDirMissing { .. } => 5,
                EngineError::NoCandidates { .. } => 6,
                EngineError::StructurePrediction { .. } => 7,
                EngineError::FrequencyCalculation { .. } => 8,
                EngineError::MutationPrediction { .. } => 9,
                EngineError::Io(_) => 10,
            },
            CliError::Io(_) => 10,
        }
    }
}
