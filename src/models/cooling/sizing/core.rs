//! Room cooling-load estimation.
//!
//! A calculation runs in one linear pass:
//!
//! 1. [`normalize`] resolves tier presets and validates the input.
//! 2. [`DesignConditions`] fixes the quantities several stages share
//!    (ΔT, Δgrains, ventilation rate).
//! 3. [`breakdown::assemble`] runs each stage and totals the results.
//!
//! Only step 1 can fail. Everything after it is a total function.

mod breakdown;
mod constants;
mod derivation;
mod error;
mod input;
mod normalize;
mod reference;
mod stages;

pub use breakdown::{GrandTotal, HeatBreakdown, OutsideAir, RoomLatent, RoomSensible};
pub use constants::{DesignConstants, UFactors};
pub use derivation::Derivation;
pub use error::ValidationError;
pub use input::{
    Appliance, ApplianceLoad, CalculatorInput, DifficultyTier, Direction, ElementKind,
    EnvelopeElement, RoofCondition, RoomGeometry, UnknownAppliance,
};
pub use reference::{ClimateRecord, cities, city};
pub use stages::{Ventilation, VentilationBasis};

use normalize::normalize;
use stages::DesignConditions;

/// Computes the itemized cooling load for `input`.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the input cannot be normalized.
pub(crate) fn calculate(
    input: &CalculatorInput,
    constants: &DesignConstants,
) -> Result<HeatBreakdown, ValidationError> {
    let normalized = normalize(input)?;
    let conditions = DesignConditions::new(&normalized, constants);
    Ok(breakdown::assemble(&normalized, &conditions, constants))
}

/// Computes the intermediate quantities for `input`.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the input cannot be normalized.
pub(crate) fn derive(
    input: &CalculatorInput,
    constants: &DesignConstants,
) -> Result<Derivation, ValidationError> {
    let normalized = normalize(input)?;
    let conditions = DesignConditions::new(&normalized, constants);
    Ok(Derivation::new(&normalized, &conditions, constants))
}
