//! Household Core - Domain entities, services, and traits.
//!
//! This crate contains the allocation logic for the household planner:
//! the household profile, the bucket formula, a TTL plan cache and the
//! donut chart that visualizes a plan. It knows nothing about HTTP.

pub mod allocation;
pub mod chart;
pub mod constants;
pub mod errors;

pub use allocation::*;
pub use chart::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
