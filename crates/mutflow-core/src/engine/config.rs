use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Fixed parameters forwarded to the sequence generator.
///
/// These are configuration constants for a run, never derived at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub num_sequences: usize,
    pub sampling_temperature: f64,
    pub seed: u64,
    pub batch_size: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            num_sequences: 32,
            sampling_temperature: 0.2,
            seed: 37,
            batch_size: 8,
        }
    }
}

/// Threshold selection for the mutation predictor.
///
/// `Automatic` lets the predictor derive both frequency thresholds from the
/// data and is the default call shape. `Manual` passes explicit cutoffs:
/// `beta` applies to structured positions, `gamma` to coil positions.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ThresholdMode {
    #[default]
    Automatic,
    Manual { beta: f64, gamma: f64 },
}

/// Names of the external tool scripts, resolved under the scripts directory,
/// and the interpreter used to run them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolScripts {
    pub interpreter: PathBuf,
    pub parse_structures: String,
    pub generate_sequences: String,
    pub predict_secondary_structure: String,
    pub compute_frequencies: String,
    pub predict_mutations: String,
}

impl Default for ToolScripts {
    fn default() -> Self {
        Self {
            interpreter: PathBuf::from("python3"),
            parse_structures: "parse_structures.py".to_string(),
            generate_sequences: "generate_sequences.py".to_string(),
            predict_secondary_structure: "predict_ss.py".to_string(),
            compute_frequencies: "residue_frequency.py".to_string(),
            predict_mutations: "predict_mutations.py".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub scripts_dir: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub generation: GenerationConfig,
    pub thresholds: ThresholdMode,
    pub tools: ToolScripts,
    /// Continue with the remaining stems after a per-item analyzer failure
    /// instead of aborting the run. Off by default.
    pub keep_going: bool,
    /// Leave the consolidated structure record and the raw sequence output
    /// directory in place at the end of the run.
    pub keep_intermediates: bool,
}

#[derive(Default)]
pub struct PipelineConfigBuilder {
    scripts_dir: Option<PathBuf>,
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    generation: Option<GenerationConfig>,
    thresholds: Option<ThresholdMode>,
    tools: Option<ToolScripts>,
    keep_going: bool,
    keep_intermediates: bool,
}

impl PipelineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scripts_dir(mut self, path: PathBuf) -> Self {
        self.scripts_dir = Some(path);
        self
    }
    pub fn input_dir(mut self, path: PathBuf) -> Self {
        self.input_dir = Some(path);
        self
    }
    pub fn output_dir(mut self, path: PathBuf) -> Self {
        self.output_dir = Some(path);
        self
    }
    pub fn generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = Some(generation);
        self
    }
    pub fn thresholds(mut self, thresholds: ThresholdMode) -> Self {
        self.thresholds = Some(thresholds);
        self
    }
    pub fn tools(mut self, tools: ToolScripts) -> Self {
        self.tools = Some(tools);
        self
    }
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }
    pub fn keep_intermediates(mut self, keep_intermediates: bool) -> Self {
        self.keep_intermediates = keep_intermediates;
        self
    }

    pub fn build(self) -> Result<PipelineConfig, ConfigError> {
        Ok(PipelineConfig {
            scripts_dir: self
                .scripts_dir
                .ok_or(ConfigError::MissingParameter("scripts_dir"))?,
            input_dir: self
                .input_dir
                .ok_or(ConfigError::MissingParameter("input_dir"))?,
            output_dir: self
                .output_dir
                .ok_or(ConfigError::MissingParameter("output_dir"))?,
            generation: self.generation.unwrap_or_default(),
            thresholds: self.thresholds.unwrap_or_default(),
            tools: self.tools.unwrap_or_default(),
            keep_going: self.keep_going,
            keep_intermediates: self.keep_intermediates,
        })
    }
}
