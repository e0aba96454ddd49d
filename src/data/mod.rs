//! In-memory labeled image datasets
//!
//! A [`Dataset`] owns its samples; labels live inside each [`Sample`], so any
//! reordering keeps every image paired with its label.
//!
//! # Example
//!
//! ```
//! use imgtrain::data::{Dataset, Geometry, Image};
//!
//! let geometry = Geometry::new(1, 2, 2);
//! let images = vec![
//!     Image::new(vec![0, 64, 128, 255], geometry).unwrap(),
//!     Image::new(vec![255, 128, 64, 0], geometry).unwrap(),
//! ];
//! let dataset = Dataset::from_parts(images, vec![3, 7]).unwrap();
//! assert_eq!(dataset.len(), 2);
//! assert_eq!(dataset.geometry(), Some(geometry));
//! ```

mod idx;


pub use idx::{DatasetLoader, IdxLoader, IMAGES_MAGIC, LABELS_MAGIC};

use crate::error::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Image dimensions in channel-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Geometry {
    pub channels: usize,
    pub height: usize,
    pub width: usize,
}

impl Geometry {
    pub fn new(channels: usize, height: usize, width: usize) -> Self {
        Self {
            channels,
            height,
            width,
        }
    }

    /// Number of bytes (and input features) per image
    pub fn len(&self) -> usize {
        self.channels * self.height * self.width
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.channels, self.height, self.width)
    }
}

/// Raw 8-bit image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pixels: Vec<u8>,
    geometry: Geometry,
}

impl Image {
    /// Wrap raw pixels; the pixel count must match the geometry
    pub fn new(pixels: Vec<u8>, geometry: Geometry) -> Result<Self> {
        if pixels.len() != geometry.len() {
            return Err(Error::Format(format!(
                "image has {} pixels, geometry {geometry} needs {}",
                pixels.len(),
                geometry.len()
            )));
        }
        Ok(Self { pixels, geometry })
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Threshold every pixel: values above `threshold` become 255, the rest 0
    pub fn binarized(&self, threshold: u8) -> Self {
        Self {
            pixels: self
                .pixels
                .iter()
                .map(|&p| if p > threshold { 255 } else { 0 })
                .collect(),
            geometry: self.geometry,
        }
    }
}

/// One (image, label) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub image: Image,
    pub label: usize,
}

impl Sample {
    pub fn new(image: Image, label: usize) -> Self {
        Self { image, label }
    }
}

/// Ordered collection of samples sharing one geometry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    /// Build a dataset, checking that every sample shares the first one's geometry
    ///
    /// An empty sample list is allowed here; it is what a validation split of
    /// a tiny dataset looks like. Loaders go through [`Dataset::from_parts`].
    pub fn new(samples: Vec<Sample>) -> Result<Self> {
        if let Some(first) = samples.first() {
            let expected = first.image.geometry();
            for (index, sample) in samples.iter().enumerate() {
                let found = sample.image.geometry();
                if found != expected {
                    return Err(Error::GeometryMismatch {
                        index,
                        expected,
                        found,
                    });
                }
            }
        }
        Ok(Self { samples })
    }

    /// Pair loader output into a dataset
    ///
    /// Fails if either side is empty or their counts disagree.
    pub fn from_parts(images: Vec<Image>, labels: Vec<u8>) -> Result<Self> {
        if images.len() != labels.len() {
            return Err(Error::SizeMismatch {
                images: images.len(),
                labels: labels.len(),
            });
        }
        if images.is_empty() {
            return Err(Error::EmptyDataset);
        }
        let samples = images
            .into_iter()
            .zip(labels)
            .map(|(image, label)| Sample::new(image, usize::from(label)))
            .collect();
        Self::new(samples)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Geometry shared by all samples, `None` when empty
    pub fn geometry(&self) -> Option<Geometry> {
        self.samples.first().map(|s| s.image.geometry())
    }

    /// Reorder samples by a uniformly random permutation
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        if self.samples.is_empty() {
            return Err(Error::EmptyDataset);
        }
        self.samples.shuffle(rng);
        Ok(())
    }

    /// Split into `(train, validation)` at `floor(len * train_fraction)`
    pub fn split(mut self, train_fraction: f64) -> (Dataset, Dataset) {
        let fraction = train_fraction.clamp(0.0, 1.0);
        let cut = ((self.samples.len() as f64) * fraction).floor() as usize;
        let validation = self.samples.split_off(cut.min(self.samples.len()));
        (self, Dataset { samples: validation })
    }
}
