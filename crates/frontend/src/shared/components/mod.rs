pub mod breadcrumb;
pub mod date_input;
pub mod details_shell;
pub mod form_field;
pub mod list_toolbar;
pub mod page_header;
pub mod pagination_controls;
pub mod select_options;
pub mod table;
pub mod table_totals_row;

pub use breadcrumb::Breadcrumb;
pub use date_input::{DateInput, OptionalDateInput};
pub use details_shell::DetailsShell;
pub use form_field::{FieldError, FormField};
pub use list_toolbar::{InactiveToggle, ListToolbar};
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use select_options::select_options;
pub use table::{SortableHeaderCell, TableCellMoney};
pub use table_totals_row::TableTotalsRow;
