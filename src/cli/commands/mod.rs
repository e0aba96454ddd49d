//! CLI command implementations

mod predict;
mod test_set;
mod train;
mod validate;


use crate::cli::{init_logging, LogLevel};
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    init_logging(LogLevel::from_flags(cli.verbose, cli.quiet));

    match cli.command {
        Command::Train(args) => train::run_train(args),
        Command::Test(args) => test_set::run_test(args),
        Command::Predict(args) => predict::run_predict(args),
        Command::Validate(args) => validate::run_validate(args),
    }
}
