use super::invoke::InvokeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Sequence generation stage failed: {source}")]
    Generation {
        #[source]
        source: InvokeError,
    },

    #[error("Sequence output directory not found after generation: {path}", path = path.display())]
    SequenceDirMissing { path: PathBuf },

    #[error("No candidate-set files produced in {path}", path = path.display())]
    NoCandidates { path: PathBuf },

    #[error("Secondary-structure prediction failed for '{stem}': {source}")]
    StructurePrediction {
        stem: String,
        #[source]
        source: InvokeError,
    },

    #[error("Residue-frequency calculation failed for '{stem}': {source}")]
    FrequencyCalculation {
        stem: String,
        #[source]
        source: InvokeError,
    },

    #[error("Mutation prediction failed for '{stem}': {source}")]
    MutationPrediction {
        stem: String,
        #[source]
        source: InvokeError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
