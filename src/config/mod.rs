//! Declarative run configuration
//!
//! A run is described by one YAML file ([`RunSpec`]) naming the IDX data
//! files, the model path, and the training hyperparameters. Command-line
//! overrides are applied on top before validation.

mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{
    apply_overrides, parse_args, Cli, Command, PredictArgs, TestArgs, TrainArgs, ValidateArgs,
};
pub use loader::{load_config, parse_config};
pub use schema::{DataPaths, ModelRef, RunSpec, TestSpec};
pub use validate::{validate_config, ValidationError};
