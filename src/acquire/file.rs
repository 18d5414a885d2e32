use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::acquire::ImageSource;
use crate::image::{ImageInput, Origin};

/// File-pick source: reads one image from a path (the "upload" origin).
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSource for FileSource {
    fn acquire(&mut self) -> Result<Option<ImageInput>> {
        let bytes = std::fs::read(&self.path)
            .with_context(|| format!("reading image from {}", self.path.display()))?;
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        let mut input = ImageInput::new(bytes, Origin::Upload)
            .with_context(|| format!("loading image from {}", self.path.display()))?;
        if let Some(name) = name {
            input = input.with_name(name);
        }
        log::info!("FileSource: acquired {} ({} bytes)", self.path.display(), input.len());
        Ok(Some(input))
    }
}
