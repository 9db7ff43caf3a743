use crate::core::artifacts::{ArtifactPaths, CANDIDATE_EXT, SEQUENCE_SUBDIR, STRUCTURE_EXT};
use crate::core::io::fasta;
use crate::engine::config::PipelineConfig;
use crate::engine::error::EngineError;
use crate::engine::tools::ToolSet;
use tracing::{debug, warn};

/// Terminal state of one candidate set.
///
/// The only tolerated early exit is a missing structure file, which ends the
/// item in `Skipped`. Every other failure propagates and is fatal to the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    /// All three analyzers ran to completion.
    Processed,
    /// No structure file matched the stem; analysis was not attempted.
    Skipped,
}

/// Runs the per-item portion of the pipeline for one stem.
///
/// The raw candidate set from the generator is renumbered into the output
/// directory first, so even a skipped stem keeps its normalized `.fa`. The
/// three analyzers then run strictly in order, each failure mapped to its
/// stage-specific error carrying the stem.
pub fn process_item(
    stem: &str,
    config: &PipelineConfig,
    tools: &ToolSet<'_>,
) -> Result<ItemOutcome, EngineError> {
    let raw_set = config
        .output_dir
        .join(SEQUENCE_SUBDIR)
        .join(format!("{}.{}", stem, CANDIDATE_EXT));
    let paths = ArtifactPaths::new(&config.output_dir, stem);

    fasta::renumber_headers(&raw_set, &paths.candidate_set())?;
    debug!("Normalized candidate set for '{}'", stem);

    let structure = config
        .input_dir
        .join(format!("{}.{}", stem, STRUCTURE_EXT));
    if !structure.is_file() {
        warn!(
            "No structure file for '{}' at {}; skipping analysis",
            stem,
            structure.display()
        );
        return Ok(ItemOutcome::Skipped);
    }

    tools
        .predict_secondary_structure(&structure, &paths)
        .run()
        .map_err(|source| EngineError::StructurePrediction {
            stem: stem.to_string(),
            source,
        })?;

    tools
        .compute_frequencies(&paths)
        .run()
        .map_err(|source| EngineError::FrequencyCalculation {
            stem: stem.to_string(),
            source,
        })?;

    tools
        .predict_mutations(&paths)
        .run()
        .map_err(|source| EngineError::MutationPrediction {
            stem: stem.to_string(),
            source,
        })?;

    Ok(ItemOutcome::Processed)
}
