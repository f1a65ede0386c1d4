mod canvas;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::domain::{SlotCount, SlotIndex};

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("Failed to prepare gallery directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write gallery image: {0}")]
    Image(#[from] image::ImageError),
}

/// The on-disk gallery of numbered placeholder images.
///
/// Materialization is idempotent: existing files are never rewritten, even
/// if the drawing code has changed since they were created.
pub struct ImageGallery {
    dir: PathBuf,
    count: SlotCount,
}

impl ImageGallery {
    pub fn new(dir: impl Into<PathBuf>, count: SlotCount) -> Self {
        Self {
            dir: dir.into(),
            count,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn count(&self) -> SlotCount {
        self.count
    }

    /// Deterministic path of a slot's image file.
    pub fn image_path(&self, slot: SlotIndex) -> PathBuf {
        self.dir.join(slot.file_name(self.count))
    }

    /// Fill in every missing slot image and return how many were created.
    ///
    /// Any filesystem or encoding failure aborts the run; slots written
    /// before the failure stay on disk and are picked up next time.
    pub fn ensure(&self) -> Result<usize, GalleryError> {
        fs::create_dir_all(&self.dir)?;

        let mut created = 0;
        for slot in self.count.slots() {
            let path = self.image_path(slot);
            if path.exists() {
                continue;
            }
            let img = canvas::render_slot_image(slot.get());
            img.save(&path)?;
            debug!(path = %path.display(), "created gallery image");
            created += 1;
        }

        Ok(created)
    }
}
