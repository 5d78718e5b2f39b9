//! Supporting utilities shared by the models.
//!
//! These modules are public because callers find them useful when building
//! inputs or reading results, but their APIs are not yet stable.

pub mod constraint;
pub mod units;
