//! Installation budget estimates.

pub mod labor_days;
