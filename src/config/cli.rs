//! CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// imgtrain: image classifier training and evaluation
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "imgtrain")]
#[command(version)]
#[command(about = "Train and evaluate image classifiers on IDX datasets")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Train a model and save it to the configured path
    Train(TrainArgs),

    /// Evaluate a saved model on the test set
    Test(TestArgs),

    /// Classify randomly chosen test images
    Predict(PredictArgs),

    /// Validate a configuration file without training
    Validate(ValidateArgs),
}

/// Arguments for the train command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct TrainArgs {
    /// Path to YAML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override number of epochs
    #[arg(short, long)]
    pub epochs: Option<usize>,

    /// Override batch size
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Override learning rate
    #[arg(short, long)]
    pub lr: Option<f32>,

    /// Override the cap on training batches
    #[arg(long)]
    pub max_batches: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Dry run (validate config but don't train)
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the test command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct TestArgs {
    /// Path to YAML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override evaluation batch size
    #[arg(short, long)]
    pub batch_size: Option<usize>,
}

/// Arguments for the predict command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PredictArgs {
    /// Path to YAML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    pub config: PathBuf,

    /// Number of test images to classify
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,

    /// Threshold pixels at 127 before classifying
    #[arg(long)]
    pub binarize: bool,

    /// Random seed for picking images
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed validation report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a RunSpec
pub fn apply_overrides(spec: &mut crate::config::RunSpec, args: &TrainArgs) {
    if let Some(epochs) = args.epochs {
        spec.training.max_epochs = epochs;
    }
    if let Some(batch_size) = args.batch_size {
        spec.training.batch_size = batch_size;
    }
    if let Some(lr) = args.lr {
        spec.training.learning_rate = lr;
    }
    if let Some(max_batches) = args.max_batches {
        spec.training.max_batches = max_batches;
    }
    if let Some(seed) = args.seed {
        spec.training.seed = Some(seed);
    }
}
