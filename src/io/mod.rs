//! Loading road networks and attraction lookups from CSV.
//!
//! Both formats carry a header row, which is skipped.

mod attractions;
mod roads;

pub use attractions::AttractionIndex;
pub use roads::{load_roads, load_roads_from_path};
