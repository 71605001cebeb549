pub mod sidebar;

pub use sidebar::{menu_group_for_key, Sidebar};
