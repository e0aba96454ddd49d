//! Predict command implementation

use crate::config::{load_config, PredictArgs};
use crate::run::{predict_from_spec, Prediction};
use tracing::info;

/// One line per prediction
pub fn format_prediction(p: &Prediction) -> String {
    let mark = if p.is_correct() { "ok" } else { "MISS" };
    format!(
        "image {:>6}: predicted {} actual {} [{}]",
        p.index, p.predicted, p.actual, mark
    )
}

pub fn run_predict(args: PredictArgs) -> Result<(), String> {
    let spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    let predictions = predict_from_spec(&spec, args.count, args.binarize, args.seed)
        .map_err(|e| format!("Predict error: {e}"))?;

    for p in &predictions {
        info!("{}", format_prediction(p));
    }
    let correct = predictions.iter().filter(|p| p.is_correct()).count();
    info!("{correct}/{} correct", predictions.len());
    Ok(())
}
