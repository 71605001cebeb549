pub mod u501_customer_allocation;
pub mod u502_reorder_levels;
