mod port;
mod site_origin;
mod slot_count;
mod slot_index;

pub use port::{Port, PortError};
pub use site_origin::{SiteOrigin, SiteOriginError};
pub use slot_count::{SlotCount, SlotCountError};
pub use slot_index::{IMAGE_EXT, SlotIndex};
