pub mod levels;

pub use levels::{changed_levels, FanOutReport};

use crate::usecases::common::UseCaseMetadata;

pub struct ReorderLevels;

impl UseCaseMetadata for ReorderLevels {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "reorder_levels"
    }

    fn display_name() -> &'static str {
        "Reorder Levels"
    }

    fn description() -> &'static str {
        "Edit per-location reorder levels of an item"
    }
}
