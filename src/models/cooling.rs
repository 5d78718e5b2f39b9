//! Cooling-load models.

pub mod sizing;
