//! Tabs of the center area.
//!
//! - `page`: wrapper that shows or hides one tab's content
//! - `registry`: tab key -> view
//! - `tab_labels`: tab key -> title, detail-key helpers

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{
    detail_tab_key, detail_tab_label, parse_detail_key, split_detail_key, tab_label_for_key,
};
