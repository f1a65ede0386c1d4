mod selection;
pub mod value_objects;

pub use selection::select_slot;
pub use value_objects::{
    IMAGE_EXT, Port, PortError, SiteOrigin, SiteOriginError, SlotCount, SlotCountError, SlotIndex,
};
