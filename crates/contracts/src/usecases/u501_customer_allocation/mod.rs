pub mod allocation;
pub mod request;

pub use allocation::{auto_allocate, total_allocated, unallocated, validate_allocation, AllocationLine};
pub use request::{AllocationItem, AllocationRequest};

use crate::usecases::common::UseCaseMetadata;

pub struct CustomerAllocation;

impl UseCaseMetadata for CustomerAllocation {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "customer_allocation"
    }

    fn display_name() -> &'static str {
        "Customer Payment Allocation"
    }

    fn description() -> &'static str {
        "Record a customer payment and allocate it to outstanding sales orders"
    }
}
