use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use ::image::imageops::FilterType;
use ::image::RgbaImage;

use crate::coords::Vec2;

/// Error returned by [`ImageStore::load_scaled`].
#[derive(Debug, Clone)]
pub struct ImageLoadError {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image load error: {}: {}", self.path.display(), self.reason)
    }
}

impl std::error::Error for ImageLoadError {}

/// Opaque handle to an image held by an [`ImageStore`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ImageId(pub(crate) usize);

/// Owns decoded, already-scaled RGBA images.
///
/// Every `(path, width, height)` variant is decoded and resampled once;
/// later requests for the same variant return the cached handle.
#[derive(Default)]
pub struct ImageStore {
    images: Vec<RgbaImage>,
    scaled: HashMap<(PathBuf, u32, u32), ImageId>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the image at `path` and scales it to exactly `size` (rounded to
    /// whole pixels, at least 1×1).
    pub fn load_scaled(&mut self, path: impl AsRef<Path>, size: Vec2) -> Result<ImageId, ImageLoadError> {
        let path = path.as_ref();
        let w = size.x.round().max(1.0) as u32;
        let h = size.y.round().max(1.0) as u32;

        let key = (path.to_path_buf(), w, h);
        if let Some(&id) = self.scaled.get(&key) {
            return Ok(id);
        }

        let decoded = ::image::open(path).map_err(|e| ImageLoadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let pixels = decoded.resize_exact(w, h, FilterType::Triangle).to_rgba8();

        let id = self.insert(pixels);
        self.scaled.insert(key, id);
        log::debug!("loaded image {} at {}x{} as {:?}", path.display(), w, h, id);
        Ok(id)
    }

    /// Stores an in-memory image as-is.
    pub fn insert(&mut self, pixels: RgbaImage) -> ImageId {
        let id = ImageId(self.images.len());
        self.images.push(pixels);
        id
    }

    /// Returns the pixels behind `id`, if `id` came from this store.
    pub fn get(&self, id: ImageId) -> Option<&RgbaImage> {
        self.images.get(id.0)
    }

    /// Pixel size of the image behind `id`.
    pub fn size_of(&self, id: ImageId) -> Option<Vec2> {
        self.get(id).map(|px| Vec2::new(px.width() as f32, px.height() as f32))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
