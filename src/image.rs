//! Image payload handed to the classifier.
//!
//! An `ImageInput` is an opaque binary payload plus its MIME type. It is
//! created by an image source (file pick, camera capture, gallery pick),
//! consumed exactly once per classification attempt, and not retained after
//! the attempt completes or is reset.
//!
//! Construction validates only the raw blob (non-empty, recognizable image
//! container); pixel-level acceptance is the inference service's job.

use anyhow::{anyhow, Result};

/// Where an image payload came from. All origins are treated identically
/// once the blob exists; the origin only informs the default file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Upload,
    Camera,
    Gallery,
}

/// An image payload ready for one classification attempt.
#[derive(Clone, Debug)]
pub struct ImageInput {
    bytes: Vec<u8>,
    mime: &'static str,
    origin: Origin,
    name: Option<String>,
}

impl ImageInput {
    /// Wrap raw bytes, sniffing the format from magic bytes.
    ///
    /// Rejects empty payloads and blobs that are not a recognizable image
    /// container.
    pub fn new(bytes: Vec<u8>, origin: Origin) -> Result<Self> {
        if bytes.is_empty() {
            return Err(anyhow!("image payload is empty"));
        }
        let format = image::guess_format(&bytes)
            .map_err(|_| anyhow!("payload is not a recognizable image format"))?;
        Ok(Self {
            bytes,
            mime: format.to_mime_type(),
            origin,
            name: None,
        })
    }

    /// Attach the original file name, used as the multipart filename.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// File name carried in the multipart upload. Camera captures default to
    /// `camera.jpg`, matching what the capture path always produced.
    pub fn file_name(&self) -> &str {
        match (&self.name, self.origin) {
            (Some(name), _) => name,
            (None, Origin::Camera) => "camera.jpg",
            (None, _) => "image",
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
