//! Softmax regression engine
//!
//! Flattened pixels -> dense layer -> softmax, cross-entropy loss, plain SGD.
//! Parameters start at zero, so two runs over the same batches produce the
//! same model.

use super::ModelEngine;
use crate::data::Geometry;
use crate::error::{Error, Result};
use ndarray::{Array1, Array2, Array4, Axis};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Architecture tag stored in saved models
pub const ARCHITECTURE: &str = "softmax-regression";

/// Clamp applied to probabilities before taking the log
const PROB_EPS: f32 = 1e-7;

/// Serialized form of a [`SoftmaxRegression`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelState {
    /// Architecture type
    pub architecture: String,
    /// Input geometry the weights were trained for
    pub geometry: Geometry,
    /// Number of output classes
    pub num_classes: usize,
    /// Learning rate at save time
    pub learning_rate: f32,
    /// Weight matrix, shape `[features, num_classes]`
    pub weights: Array2<f32>,
    /// Bias, length `num_classes`
    pub bias: Array1<f32>,
}

impl ModelState {
    fn check(&self) -> Result<()> {
        if self.architecture != ARCHITECTURE {
            return Err(Error::Persistence(format!(
                "unsupported architecture '{}', expected '{ARCHITECTURE}'",
                self.architecture
            )));
        }
        let expected = (self.geometry.len(), self.num_classes);
        if self.weights.dim() != expected || self.bias.len() != self.num_classes {
            return Err(Error::Persistence(format!(
                "parameter shapes {:?}/{} do not match geometry {} with {} classes",
                self.weights.dim(),
                self.bias.len(),
                self.geometry,
                self.num_classes
            )));
        }
        Ok(())
    }
}

/// Single-layer softmax classifier
#[derive(Debug, Clone)]
pub struct SoftmaxRegression {
    geometry: Geometry,
    num_classes: usize,
    lr: f32,
    weights: Array2<f32>,
    bias: Array1<f32>,
}

impl SoftmaxRegression {
    /// Create a zero-initialized model
    pub fn new(geometry: Geometry, num_classes: usize, lr: f32) -> Self {
        Self {
            geometry,
            num_classes,
            lr,
            weights: Array2::zeros((geometry.len(), num_classes)),
            bias: Array1::zeros(num_classes),
        }
    }

    /// Build a model from a file written by [`ModelEngine::save`]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let state = read_state(path.as_ref())?;
        Ok(Self::from_state(state))
    }

    fn from_state(state: ModelState) -> Self {
        Self {
            geometry: state.geometry,
            num_classes: state.num_classes,
            lr: state.learning_rate,
            weights: state.weights,
            bias: state.bias,
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    pub fn weights(&self) -> &Array2<f32> {
        &self.weights
    }

    pub fn bias(&self) -> &Array1<f32> {
        &self.bias
    }

    /// Snapshot parameters into their serializable form
    pub fn to_state(&self) -> ModelState {
        ModelState {
            architecture: ARCHITECTURE.to_string(),
            geometry: self.geometry,
            num_classes: self.num_classes,
            learning_rate: self.lr,
            weights: self.weights.clone(),
            bias: self.bias.clone(),
        }
    }

    /// Reshape `[n, c, h, w]` inputs into `[n, features]`
    fn flatten(&self, inputs: &Array4<f32>) -> Result<Array2<f32>> {
        let (n, c, h, w) = inputs.dim();
        let found = Geometry::new(c, h, w);
        if found != self.geometry {
            return Err(Error::Engine(format!(
                "input geometry {found} does not match model geometry {}",
                self.geometry
            )));
        }
        inputs
            .to_shape((n, self.geometry.len()))
            .map(|view| view.into_owned())
            .map_err(|e| Error::Engine(format!("cannot flatten inputs: {e}")))
    }

    fn forward(&self, features: &Array2<f32>) -> Array2<f32> {
        let logits = features.dot(&self.weights) + &self.bias;
        softmax_rows(logits)
    }

    fn check_targets(&self, targets: &Array2<f32>, rows: usize) -> Result<()> {
        if targets.dim() != (rows, self.num_classes) {
            return Err(Error::Engine(format!(
                "targets have shape {:?}, expected ({rows}, {})",
                targets.dim(),
                self.num_classes
            )));
        }
        Ok(())
    }
}

/// Row-wise softmax, shifted by the row maximum for stability
fn softmax_rows(mut logits: Array2<f32>) -> Array2<f32> {
    for mut row in logits.rows_mut() {
        let max = row.fold(f32::NEG_INFINITY, |m, &v| m.max(v));
        row.mapv_inplace(|v| (v - max).exp());
        let sum = row.sum();
        row /= sum;
    }
    logits
}

/// Mean cross-entropy of `predictions` against one-hot `targets`
fn cross_entropy(targets: &Array2<f32>, predictions: &Array2<f32>) -> f32 {
    let rows = targets.nrows();
    if rows == 0 {
        return 0.0;
    }
    let total: f32 = targets
        .iter()
        .zip(predictions.iter())
        .filter(|(t, _)| **t != 0.0)
        .map(|(t, p)| -t * p.max(PROB_EPS).ln())
        .sum();
    total / rows as f32
}

fn read_state(path: &Path) -> Result<ModelState> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Persistence(format!("cannot read {}: {e}", path.display())))?;
    let state: ModelState = serde_json::from_str(&content)
        .map_err(|e| Error::Persistence(format!("cannot parse {}: {e}", path.display())))?;
    state.check()?;
    Ok(state)
}

impl ModelEngine for SoftmaxRegression {
    fn train_step(&mut self, inputs: &Array4<f32>, targets: &Array2<f32>) -> Result<f32> {
        let features = self.flatten(inputs)?;
        let rows = features.nrows();
        self.check_targets(targets, rows)?;
        if rows == 0 {
            return Err(Error::Engine("empty batch".to_string()));
        }

        let probs = self.forward(&features);
        let loss = cross_entropy(targets, &probs);
        if !loss.is_finite() {
            return Err(Error::Engine(format!("loss diverged ({loss})")));
        }

        // d(loss)/d(logits) = (p - y) / n
        let delta = (&probs - targets) / rows as f32;
        let grad_w = features.t().dot(&delta);
        let grad_b = delta.sum_axis(Axis(0));
        self.weights.scaled_add(-self.lr, &grad_w);
        self.bias.scaled_add(-self.lr, &grad_b);

        Ok(loss)
    }

    fn predict(&self, inputs: &Array4<f32>) -> Result<Array2<f32>> {
        let features = self.flatten(inputs)?;
        Ok(self.forward(&features))
    }

    fn loss(&self, targets: &Array2<f32>, predictions: &Array2<f32>) -> Result<f32> {
        if targets.dim() != predictions.dim() {
            return Err(Error::Engine(format!(
                "targets {:?} and predictions {:?} differ in shape",
                targets.dim(),
                predictions.dim()
            )));
        }
        Ok(cross_entropy(targets, predictions))
    }

    fn learning_rate(&self) -> f32 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f32) {
        self.lr = lr;
    }

    fn save(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let persist_err =
            |e: &dyn std::fmt::Display| Error::Persistence(format!("cannot save {}: {e}", path.display()));

        // Write next to the destination, then rename over it
        let file = NamedTempFile::new_in(dir).map_err(|e| persist_err(&e))?;
        {
            let mut writer = BufWriter::new(file.as_file());
            serde_json::to_writer(&mut writer, &self.to_state()).map_err(|e| persist_err(&e))?;
            writer.flush().map_err(|e| persist_err(&e))?;
        }
        file.persist(path).map_err(|e| persist_err(&e.error))?;
        Ok(())
    }

    fn load(&mut self, path: &Path) -> Result<()> {
        let state = read_state(path)?;
        *self = Self::from_state(state);
        Ok(())
    }
}
