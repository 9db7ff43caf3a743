use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "mutflow",
    version,
    about = "mutflow - A sequential pipeline driving inverse-folding sequence design and per-structure mutation analysis over a folder of protein structures.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Directory containing the external tool scripts and model artifacts.
    #[arg(value_name = "SCRIPTS_DIR")]
    pub scripts_dir: PathBuf,

    /// Directory of input structure files (.pdb).
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Directory receiving every derived artifact (created if absent).
    #[arg(value_name = "OUTPUT_DIR", default_value = "../output")]
    pub output_dir: PathBuf,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Generation Overrides ---
    /// Override the number of candidate sequences generated per structure.
    #[arg(long, value_name = "INT")]
    pub num_sequences: Option<usize>,

    /// Override the generator's sampling temperature.
    #[arg(long, value_name = "FLOAT")]
    pub sampling_temperature: Option<f64>,

    /// Override the generator's random seed.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Override the generator's batch size.
    #[arg(long, value_name = "INT")]
    pub batch_size: Option<usize>,

    // --- Threshold Overrides ---
    /// Frequency threshold for structured positions. Enables manual threshold
    /// mode for the mutation predictor; must be given together with --gamma.
    #[arg(long, value_name = "FLOAT", requires = "gamma")]
    pub beta: Option<f64>,

    /// Frequency threshold for coil positions. Enables manual threshold mode
    /// for the mutation predictor; must be given together with --beta.
    #[arg(long, value_name = "FLOAT", requires = "beta")]
    pub gamma: Option<f64>,

    // --- Run Policy ---
    /// Continue with the remaining structures after a per-structure analysis
    /// failure instead of aborting the whole run.
    #[arg(long)]
    pub keep_going: bool,

    /// Keep the consolidated structure record and the raw generator output
    /// instead of deleting them at the end of the run.
    #[arg(long)]
    pub keep_intermediates: bool,
}
