//! IDX (MNIST) dataset loader
//!
//! Image files: big-endian `u32` magic `0x00000803`, image count, rows, cols,
//! then `count * rows * cols` bytes. Label files: magic `0x00000801`, count,
//! then one byte per label.

use super::{Dataset, Geometry, Image};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Magic number of an IDX3 unsigned-byte image file
pub const IMAGES_MAGIC: u32 = 0x0000_0803;

/// Magic number of an IDX1 unsigned-byte label file
pub const LABELS_MAGIC: u32 = 0x0000_0801;

/// Source of raw images and labels
pub trait DatasetLoader {
    /// Load every image stored at `path`
    fn load_images(&self, path: &Path) -> Result<Vec<Image>>;

    /// Load every label stored at `path`
    fn load_labels(&self, path: &Path) -> Result<Vec<u8>>;

    /// Load both files and pair them, failing on a count mismatch
    fn load_dataset(&self, images: &Path, labels: &Path) -> Result<Dataset> {
        let images = self.load_images(images)?;
        let labels = self.load_labels(labels)?;
        Dataset::from_parts(images, labels)
    }
}

/// Loader for IDX files on disk
#[derive(Debug, Clone, Copy, Default)]
pub struct IdxLoader;

impl IdxLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse an in-memory IDX3 image file
    pub fn parse_images(bytes: &[u8]) -> Result<Vec<Image>> {
        let mut header = Header::new(bytes, "image");
        header.expect_magic(IMAGES_MAGIC)?;
        let count = header.next_u32()? as usize;
        let rows = header.next_u32()? as usize;
        let cols = header.next_u32()? as usize;

        let geometry = Geometry::new(1, rows, cols);
        let payload = header.payload(count, geometry.len())?;
        if geometry.is_empty() {
            return Err(Error::Format(format!(
                "image file declares empty {rows}x{cols} images"
            )));
        }

        payload
            .chunks_exact(geometry.len())
            .map(|chunk| Image::new(chunk.to_vec(), geometry))
            .collect()
    }

    /// Parse an in-memory IDX1 label file
    pub fn parse_labels(bytes: &[u8]) -> Result<Vec<u8>> {
        let mut header = Header::new(bytes, "label");
        header.expect_magic(LABELS_MAGIC)?;
        let count = header.next_u32()? as usize;
        Ok(header.payload(count, 1)?.to_vec())
    }
}

impl DatasetLoader for IdxLoader {
    fn load_images(&self, path: &Path) -> Result<Vec<Image>> {
        let bytes = fs::read(path)?;
        Self::parse_images(&bytes)
            .map_err(|e| Error::Format(format!("{}: {e}", path.display())))
    }

    fn load_labels(&self, path: &Path) -> Result<Vec<u8>> {
        let bytes = fs::read(path)?;
        Self::parse_labels(&bytes)
            .map_err(|e| Error::Format(format!("{}: {e}", path.display())))
    }
}

/// Cursor over the big-endian header words of an IDX file
struct Header<'a> {
    bytes: &'a [u8],
    offset: usize,
    kind: &'static str,
}

impl<'a> Header<'a> {
    fn new(bytes: &'a [u8], kind: &'static str) -> Self {
        Self {
            bytes,
            offset: 0,
            kind,
        }
    }

    fn next_u32(&mut self) -> Result<u32> {
        let end = self.offset + 4;
        let word = self.bytes.get(self.offset..end).ok_or_else(|| {
            Error::Format(format!(
                "{} file truncated in header ({} bytes)",
                self.kind,
                self.bytes.len()
            ))
        })?;
        self.offset = end;
        Ok(u32::from_be_bytes([word[0], word[1], word[2], word[3]]))
    }

    fn expect_magic(&mut self, magic: u32) -> Result<()> {
        let found = self.next_u32()?;
        if found != magic {
            return Err(Error::Format(format!(
                "{} file has magic {found:#010x}, expected {magic:#010x}",
                self.kind
            )));
        }
        Ok(())
    }

    /// Remaining bytes, checked to hold `count` items of `item_len` bytes
    fn payload(&self, count: usize, item_len: usize) -> Result<&'a [u8]> {
        let needed = count.checked_mul(item_len).ok_or_else(|| {
            Error::Format(format!("{} file size overflows", self.kind))
        })?;
        let available = self.bytes.len() - self.offset;
        if available < needed {
            return Err(Error::Format(format!(
                "{} file truncated: {count} items need {needed} bytes, found {available}",
                self.kind
            )));
        }
        Ok(&self.bytes[self.offset..self.offset + needed])
    }
}
