// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! I/O utilities for tracked-body frames and annotated images.

use std::fs;
use std::path::Path;

use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::body::Body2D;
use crate::error::Result;

/// Tracking results for one frame, as stored on disk.
///
/// ```json
/// {"bodies": [{"id": 1, "joints": [{"position": [412.0, 233.5], "confidence": "medium"}, ...]}]}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyFrame {
    /// Bodies in draw order.
    pub bodies: Vec<Body2D>,
}

impl BodyFrame {
    /// Read a frame from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or a
    /// body does not have exactly one entry per skeleton joint.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Write the frame as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

/// Save an image, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the image cannot be
/// encoded in the format implied by the extension.
pub fn save_image<P: AsRef<Path>>(image: &DynamicImage, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    image.save(path)?;
    Ok(())
}
