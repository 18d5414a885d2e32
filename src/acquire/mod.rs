//! Image acquisition sources.
//!
//! Three origins feed the workflow: a user file selection, a live camera
//! capture, and a preset gallery pick. The workflow treats them identically
//! once a blob exists; sources only differ in how the blob is obtained.
//!
//! Live camera hardware is not driven here; capture paths hand their blobs
//! to `ImageInput` directly with `Origin::Camera`.

mod file;
mod gallery;

pub use file::FileSource;
pub use gallery::GallerySource;

use anyhow::Result;

use crate::image::ImageInput;

/// A producer of image payloads.
///
/// `Ok(None)` means the user cancelled the pick; it is not an error.
pub trait ImageSource {
    fn acquire(&mut self) -> Result<Option<ImageInput>>;
}
