//! Train command implementation

use crate::config::{apply_overrides, load_config, validate_config, TrainArgs};
use crate::run::train_from_spec;
use tracing::info;

pub fn run_train(args: TrainArgs) -> Result<(), String> {
    info!("imgtrain: training from {}", args.config.display());

    let mut spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    // Overrides go in before validation so they are checked too
    apply_overrides(&mut spec, &args);
    validate_config(&spec).map_err(|e| format!("Validation failed: {e}"))?;

    if args.dry_run {
        info!("Dry run - config validated successfully");
        info!(
            epochs = spec.training.max_epochs,
            batch_size = spec.training.batch_size,
            lr = spec.training.learning_rate,
            model = %spec.model.path.display(),
            "would train"
        );
        return Ok(());
    }

    let result = train_from_spec(&spec).map_err(|e| format!("Training error: {e}"))?;
    info!(
        "Training complete: {} epochs, {} batches, {}",
        result.epochs, result.global_batches, result.final_validation
    );
    Ok(())
}
