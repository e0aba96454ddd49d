//! Batch data structure and encoder
//!
//! The encoder is a pure function of `(dataset, offset, length)`: every call
//! allocates tensors sized to the samples actually present, so a ragged last
//! batch comes back with a shorter leading dimension instead of a padded buffer.

use crate::data::{Dataset, Sample};
use crate::error::{Error, Result};
use ndarray::{Array2, Array4};

/// A training batch containing inputs and targets
#[derive(Clone, Debug)]
pub struct Batch {
    /// Pixel inputs, shape `[n, channels, height, width]`, values in `[0, 1]`
    pub inputs: Array4<f32>,
    /// One-hot targets, shape `[n, num_classes]`
    pub targets: Array2<f32>,
    /// Integer class of each row
    pub labels: Vec<usize>,
}

impl Batch {
    /// Get batch size (leading dimension of inputs)
    pub fn size(&self) -> usize {
        self.inputs.shape()[0]
    }
}

/// Rescale a byte to `[0, 1]`
///
/// Division rather than multiplication by `1/255` keeps both ends exact.
#[inline]
pub fn scale_pixel(value: u8) -> f32 {
    f32::from(value) / 255.0
}

/// One-hot encode `label` over `num_classes` classes
pub fn one_hot(label: usize, num_classes: usize) -> Result<Vec<f32>> {
    if label >= num_classes {
        return Err(Error::LabelOutOfRange { label, num_classes });
    }
    let mut row = vec![0.0; num_classes];
    row[label] = 1.0;
    Ok(row)
}

/// Converts dataset slices into batches
#[derive(Clone, Copy, Debug)]
pub struct BatchEncoder {
    num_classes: usize,
}

impl BatchEncoder {
    pub fn new(num_classes: usize) -> Self {
        Self { num_classes }
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Encode `dataset[offset..offset + length]`
    ///
    /// Returns `Ok(None)` once `offset` is past the end of the dataset. A
    /// request running past the end is clamped to the remaining samples.
    pub fn encode(&self, dataset: &Dataset, offset: usize, length: usize) -> Result<Option<Batch>> {
        if length == 0 {
            return Err(Error::InvalidBatchSize(length));
        }
        if offset >= dataset.len() {
            return Ok(None);
        }
        let end = offset.saturating_add(length).min(dataset.len());
        self.encode_samples(&dataset.samples()[offset..end]).map(Some)
    }

    /// Encode an arbitrary non-empty run of same-geometry samples
    pub fn encode_samples(&self, samples: &[Sample]) -> Result<Batch> {
        let first = samples.first().ok_or(Error::EmptyDataset)?;
        let geometry = first.image.geometry();
        let n = samples.len();

        let mut pixels = Vec::with_capacity(n * geometry.len());
        let mut targets = Vec::with_capacity(n * self.num_classes);
        let mut labels = Vec::with_capacity(n);

        for sample in samples {
            pixels.extend(sample.image.pixels().iter().copied().map(scale_pixel));
            targets.extend(one_hot(sample.label, self.num_classes)?);
            labels.push(sample.label);
        }

        let inputs = Array4::from_shape_vec(
            (n, geometry.channels, geometry.height, geometry.width),
            pixels,
        )
        .map_err(|e| Error::Format(format!("batch input shape: {e}")))?;
        let targets = Array2::from_shape_vec((n, self.num_classes), targets)
            .map_err(|e| Error::Format(format!("batch target shape: {e}")))?;

        Ok(Batch {
            inputs,
            targets,
            labels,
        })
    }

    /// Iterate consecutive non-overlapping batches from offset 0
    pub fn batches<'a>(&self, dataset: &'a Dataset, batch_size: usize) -> Batches<'a> {
        Batches {
            encoder: *self,
            dataset,
            batch_size,
            offset: 0,
            done: false,
        }
    }
}

/// Iterator over the batches of one pass through a dataset
pub struct Batches<'a> {
    encoder: BatchEncoder,
    dataset: &'a Dataset,
    batch_size: usize,
    offset: usize,
    done: bool,
}

impl Iterator for Batches<'_> {
    type Item = Result<Batch>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.encoder.encode(self.dataset, self.offset, self.batch_size) {
            Ok(Some(batch)) => {
                self.offset += batch.size();
                Some(Ok(batch))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
