use std::fmt;

use super::SlotCount;

/// File extension of every generated gallery image.
pub const IMAGE_EXT: &str = "png";

/// A single 1-based slot in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SlotIndex(u32);

impl SlotIndex {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Gallery file name for this slot: the index zero-padded to the
    /// digit width of the total, e.g. slot 1 of 1000 -> "0001.png".
    pub fn file_name(&self, count: SlotCount) -> String {
        format!("{:0width$}.{IMAGE_EXT}", self.0, width = count.digits())
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
