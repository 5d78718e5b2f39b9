//! # HVAC Sizing
//!
//! Cooling-load estimation for a single room, following a simplified
//! ASHRAE-style procedure, and the nominal air-conditioner size it implies.
//!
//! ## Crate layout
//!
//! - [`models`]: The sizing model and its input and output types.
//! - [`support`]: Numeric constraints and unit conversions used by the model.
//!
//! All figures are US customary: feet, °F, CFM, BTU/hr and tons of
//! refrigeration. Helpers in [`support::units`] convert to and from [`uom`]
//! quantities.

pub mod models;
pub mod support;
