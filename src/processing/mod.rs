//! Allocation logic and input validation.
//!
//! This module contains the planner's business logic:
//! - [`allocator`] - the VLSM allocation core
//! - [`validate`] - boundary validation ahead of allocation

mod allocator;
mod validate;

// Re-export public functions
pub use allocator::{allocate, AllocationFailure};
pub use validate::{parse_host_list, split_host_values, validate_input};
