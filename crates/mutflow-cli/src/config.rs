pub mod file;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use file::{FileConfig, FileThresholdConfig, FileToolsConfig};
use mutflow::engine::config::{
    GenerationConfig, PipelineConfig, PipelineConfigBuilder, ThresholdMode, ToolScripts,
};

/// Assembles the final pipeline configuration from CLI arguments, the
/// optional TOML config file, and built-in defaults, in that precedence
/// order.
pub fn build_config(args: &Cli) -> Result<PipelineConfig> {
    let mut file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    let generation_file = file_config.generation.take().unwrap_or_default();
    let defaults = GenerationConfig::default();
    let generation = GenerationConfig {
        num_sequences: args
            .num_sequences
            .or(generation_file.num_sequences)
            .unwrap_or(defaults.num_sequences),
        sampling_temperature: args
            .sampling_temperature
            .or(generation_file.sampling_temperature)
            .unwrap_or(defaults.sampling_temperature),
        seed: args.seed.or(generation_file.seed).unwrap_or(defaults.seed),
        batch_size: args
            .batch_size
            .or(generation_file.batch_size)
            .unwrap_or(defaults.batch_size),
    };

    let thresholds = merge_thresholds(args, file_config.thresholds.take())?;
    let tools = merge_tools(file_config.tools.take());

    PipelineConfigBuilder::new()
        .scripts_dir(args.scripts_dir.clone())
        .input_dir(args.input_dir.clone())
        .output_dir(args.output_dir.clone())
        .generation(generation)
        .thresholds(thresholds)
        .tools(tools)
        .keep_going(args.keep_going)
        .keep_intermediates(args.keep_intermediates)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn merge_thresholds(args: &Cli, file_val: Option<FileThresholdConfig>) -> Result<ThresholdMode> {
    // clap already guarantees --beta and --gamma arrive together.
    if let (Some(beta), Some(gamma)) = (args.beta, args.gamma) {
        return Ok(ThresholdMode::Manual { beta, gamma });
    }
    match file_val {
        Some(t) => match (t.beta, t.gamma) {
            (Some(beta), Some(gamma)) => Ok(ThresholdMode::Manual { beta, gamma }),
            (None, None) => Ok(ThresholdMode::Automatic),
            _ => Err(CliError::Config(
                "`thresholds` requires both `beta` and `gamma`".to_string(),
            )),
        },
        None => Ok(ThresholdMode::Automatic),
    }
}

fn merge_tools(file_val: Option<FileToolsConfig>) -> ToolScripts {
    let file_val = file_val.unwrap_or_default();
    let mut tools = ToolScripts::default();
    if let Some(v) = file_val.interpreter {
        tools.interpreter = v;
    }
    if let Some(v) = file_val.parse_structures {
        tools.parse_structures = v;
    }
    if let Some(v) = file_val.generate_sequences {
        tools.generate_sequences = v;
    }
    if let Some(v) = file_val.predict_secondary_structure {
        tools.predict_secondary_structure = v;
    }
    if let Some(v) = file_val.compute_frequencies {
        tools.compute_frequencies = v;
    }
    if let Some(v) = file_val.predict_mutations {
        tools.predict_mutations = v;
    }
    tools
}
