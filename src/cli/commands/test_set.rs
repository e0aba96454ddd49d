//! Test-set evaluation command

use crate::config::{load_config, TestArgs};
use crate::run::test_from_spec;
use tracing::info;

pub fn run_test(args: TestArgs) -> Result<(), String> {
    let spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;
    let batch_size = args.batch_size.unwrap_or(spec.test.batch_size);

    let result = test_from_spec(&spec, batch_size).map_err(|e| format!("Test error: {e}"))?;
    info!(
        "test accuracy: {:.4}% ({} samples, loss {:.6})",
        result.accuracy * 100.0,
        result.samples,
        result.loss
    );
    Ok(())
}
