use super::config::{PipelineConfig, ThresholdMode};
use super::invoke::ToolCommand;
use crate::core::artifacts::{ArtifactPaths, PARSED_STRUCTURES_FILE};
use std::path::{Path, PathBuf};

/// Builds the command line for each external collaborator from the pipeline
/// configuration.
///
/// Construction is pure: no process is spawned until the returned
/// [`ToolCommand`] is run, so the exact argv of every stage can be inspected
/// and tested in isolation.
pub struct ToolSet<'a> {
    config: &'a PipelineConfig,
}

impl<'a> ToolSet<'a> {
    pub fn new(config: &'a PipelineConfig) -> Self {
        Self { config }
    }

    /// Path of the consolidated structure record the preprocessor writes and
    /// the generator consumes.
    pub fn parsed_structures_path(&self) -> PathBuf {
        self.config.output_dir.join(PARSED_STRUCTURES_FILE)
    }

    /// Structure preprocessor: consolidates every structure file in the input
    /// directory into one record file.
    pub fn parse_structures(&self) -> ToolCommand {
        self.script(&self.config.tools.parse_structures)
            .arg_path("--input-path", &self.config.input_dir)
            .arg_path("--output-path", &self.parsed_structures_path())
    }

    /// Sequence generator: emits one candidate set per structure under
    /// `<output_dir>/seqs/`.
    pub fn generate_sequences(&self) -> ToolCommand {
        let generation = &self.config.generation;
        self.script(&self.config.tools.generate_sequences)
            .arg_path("--structures", &self.parsed_structures_path())
            .arg_path("--out-folder", &self.config.output_dir)
            .arg("--num-sequences")
            .arg(generation.num_sequences.to_string())
            .arg("--sampling-temperature")
            .arg(generation.sampling_temperature.to_string())
            .arg("--seed")
            .arg(generation.seed.to_string())
            .arg("--batch-size")
            .arg(generation.batch_size.to_string())
    }

    /// Secondary-structure predictor for one structure file.
    pub fn predict_secondary_structure(
        &self,
        structure: &Path,
        paths: &ArtifactPaths,
    ) -> ToolCommand {
        self.script(&self.config.tools.predict_secondary_structure)
            .arg_path("--structure", structure)
            .arg_path("--out", &paths.secondary_structure())
    }

    /// Residue-frequency calculator over a normalized candidate set.
    ///
    /// The counts file is both produced and consumed within this single
    /// invocation; the caller only supplies its (not yet existing) path.
    pub fn compute_frequencies(&self, paths: &ArtifactPaths) -> ToolCommand {
        self.script(&self.config.tools.compute_frequencies)
            .arg_path("--alignment", &paths.candidate_set())
            .arg_path("--counts", &paths.raw_frequency())
            .arg_path("--out", &paths.normalized_frequency())
    }

    /// Mutation predictor, combining the frequency and secondary-structure
    /// tables. Threshold flags are emitted only in manual mode; the default
    /// call shape leaves threshold selection to the tool.
    pub fn predict_mutations(&self, paths: &ArtifactPaths) -> ToolCommand {
        let cmd = self
            .script(&self.config.tools.predict_mutations)
            .arg_path("--frequencies", &paths.normalized_frequency())
            .arg_path("--secondary-structure", &paths.secondary_structure())
            .arg_path("--model-dir", &self.config.scripts_dir)
            .arg_path("--combined-out", &paths.combined_features())
            .arg_path("--mutations-out", &paths.mutations());

        match self.config.thresholds {
            ThresholdMode::Automatic => cmd,
            ThresholdMode::Manual { beta, gamma } => cmd
                .arg("--beta")
                .arg(beta.to_string())
                .arg("--gamma")
                .arg(gamma.to_string()),
        }
    }

    fn script(&self, name: &str) -> ToolCommand {
        ToolCommand::new(&self.config.tools.interpreter).arg(self.config.scripts_dir.join(name))
    }
}
