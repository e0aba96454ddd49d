//! Validate command implementation

use crate::config::{load_config, validate_config, RunSpec, ValidateArgs};
use tracing::info;

/// Format data configuration as a string
pub fn format_data_info(spec: &RunSpec) -> String {
    [
        format!("  Train images: {}", spec.data.train_images.display()),
        format!("  Train labels: {}", spec.data.train_labels.display()),
        format!("  Test images: {}", spec.data.test_images.display()),
        format!("  Test labels: {}", spec.data.test_labels.display()),
    ]
    .join("\n")
}

/// Format training configuration as a string
pub fn format_training_info(spec: &RunSpec) -> String {
    let t = &spec.training;
    let mut lines = vec![
        format!("  Epochs: {} (cap {} batches)", t.max_epochs, t.max_batches),
        format!("  Batch size: {} (eval {})", t.batch_size, t.eval_batch_size),
        format!(
            "  Learning rate: {} (decay {}, floor {})",
            t.learning_rate, t.decay_rate, t.min_learning_rate
        ),
        format!("  Validate every: {} batches", t.test_after_batches),
        format!("  Train fraction: {}", t.train_fraction),
        format!("  Classes: {}", t.num_classes),
    ];
    if let Some(seed) = t.seed {
        lines.push(format!("  Seed: {seed}"));
    }
    lines.join("\n")
}

/// Detailed configuration summary
pub fn detailed_summary(spec: &RunSpec) -> String {
    format!(
        "Configuration Summary:\n  Model path: {}\n\n{}\n\n{}\n\n  Test batch size: {}",
        spec.model.path.display(),
        format_data_info(spec),
        format_training_info(spec),
        spec.test.batch_size
    )
}

pub fn run_validate(args: ValidateArgs) -> Result<(), String> {
    info!("Validating config: {}", args.config.display());

    let spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;
    validate_config(&spec).map_err(|e| format!("Validation failed: {e}"))?;

    info!("Configuration is valid");
    if args.detailed {
        info!("\n{}", detailed_summary(&spec));
    }
    Ok(())
}
