use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileGenerationConfig {
    pub num_sequences: Option<usize>,
    pub sampling_temperature: Option<f64>,
    pub seed: Option<u64>,
    pub batch_size: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileThresholdConfig {
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileToolsConfig {
    pub interpreter: Option<PathBuf>,
    pub parse_structures: Option<String>,
    pub generate_sequences: Option<String>,
    pub predict_secondary_structure: Option<String>,
    pub compute_frequencies: Option<String>,
    pub predict_mutations: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub generation: Option<FileGenerationConfig>,
    pub thresholds: Option<FileThresholdConfig>,
    pub tools: Option<FileToolsConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            CliError::Config(format!("failed to parse '{}': {}", path.display(), e))
        })
    }
}
