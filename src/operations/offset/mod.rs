mod profile;

pub use profile::{OffsetProfile, OffsetSide};
