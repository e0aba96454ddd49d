//! imgtrain CLI
//!
//! Train, test, and query an image classifier from one YAML run spec.
//!
//! # Usage
//!
//! ```bash
//! # Train and save the model
//! imgtrain train --config run.yaml
//!
//! # Train with overrides
//! imgtrain train --config run.yaml --epochs 10 --lr 0.05 --seed 42
//!
//! # Evaluate the saved model on the test set
//! imgtrain test --config run.yaml
//!
//! # Classify 20 random test images after thresholding
//! imgtrain predict --config run.yaml --count 20 --binarize
//!
//! # Validate config
//! imgtrain validate --config run.yaml
//! ```

use clap::Parser;
use imgtrain::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
