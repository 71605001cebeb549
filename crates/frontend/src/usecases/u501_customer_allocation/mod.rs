//! Customer payment allocation: one payment spread over the customer's
//! outstanding sales orders.

mod view;

pub use view::CustomerAllocationPage;
