use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::acquire::ImageSource;
use crate::image::{ImageInput, Origin};

/// Gallery source: picks from a preset directory of sample images.
///
/// With no selection configured, `acquire` reports a cancelled pick rather
/// than guessing an image.
pub struct GallerySource {
    dir: PathBuf,
    selection: Option<String>,
}

impl GallerySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            selection: None,
        }
    }

    pub fn with_selection(mut self, name: impl Into<String>) -> Self {
        self.selection = Some(name.into());
        self
    }

    /// File names available in the gallery, sorted for stable listings.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.dir)
            .with_context(|| format!("reading gallery directory {}", self.dir.display()))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Load one gallery image by file name.
    pub fn pick(&self, name: &str) -> Result<ImageInput> {
        if name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(anyhow!("gallery pick must be a plain file name"));
        }
        let path = self.dir.join(name);
        let bytes = std::fs::read(&path)
            .with_context(|| format!("reading gallery image {}", path.display()))?;
        let input = ImageInput::new(bytes, Origin::Gallery)
            .with_context(|| format!("loading gallery image {}", path.display()))?
            .with_name(name);
        log::info!("GallerySource: picked {} ({} bytes)", name, input.len());
        Ok(input)
    }
}

impl ImageSource for GallerySource {
    fn acquire(&mut self) -> Result<Option<ImageInput>> {
        match self.selection.clone() {
            Some(name) => Ok(Some(self.pick(&name)?)),
            None => Ok(None),
        }
    }
}
