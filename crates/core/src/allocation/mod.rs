//! Household allocation module - profile model, formula and cached service.

mod allocation_calculator;
mod allocation_model;
mod allocation_service;

pub use allocation_calculator::compute_allocation;
pub use allocation_model::*;
pub use allocation_service::*;
