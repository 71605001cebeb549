//! Per-location reorder levels of one item, saved as independent updates.

mod view;

pub use view::ReorderLevelsPage;
