//! Sales order details, opened as a tab.
//!
//! - view_model.rs: `SalesOrderDetailsVm`, header signals and editable lines
//! - view.rs: `SalesOrderDetails` component

mod view;
mod view_model;

pub use view::SalesOrderDetails;
pub use view_model::SalesOrderDetailsVm;
