//! Air-conditioner sizing for a single room.
//!
//! [`compute`] turns a [`CalculatorInput`] into an itemized [`HeatBreakdown`]
//! using the published [`DesignConstants`]. [`SizingModel`] does the same
//! with caller-supplied constants and implements [`twine_core::Model`].
//!
//! ```
//! use hvac_sizing::models::cooling::sizing::{CalculatorInput, RoomGeometry, compute};
//!
//! let input = CalculatorInput::new(RoomGeometry::new(15.0, 12.0, 10.0), "Mumbai");
//! let breakdown = compute(&input)?;
//!
//! assert_eq!(breakdown.room_sensible.glass, 153.0);
//! assert_eq!(breakdown.recommended_tons(), 1.0);
//! # Ok::<(), hvac_sizing::models::cooling::sizing::ValidationError>(())
//! ```

pub(crate) mod core;

pub use self::core::{
    Appliance, ApplianceLoad, CalculatorInput, ClimateRecord, Derivation, DesignConstants,
    DifficultyTier, Direction, ElementKind, EnvelopeElement, GrandTotal, HeatBreakdown,
    OutsideAir, RoofCondition, RoomGeometry, RoomLatent, RoomSensible, UFactors, UnknownAppliance,
    ValidationError, Ventilation, VentilationBasis, cities, city,
};

use twine_core::Model;

/// Sizes a room with the published design constants.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the input is incomplete or out of range.
pub fn compute(input: &CalculatorInput) -> Result<HeatBreakdown, ValidationError> {
    core::calculate(input, &DesignConstants::default())
}

/// Reports the intermediate quantities behind [`compute`].
///
/// # Errors
///
/// Returns a [`ValidationError`] under the same conditions as [`compute`].
pub fn explain(input: &CalculatorInput) -> Result<Derivation, ValidationError> {
    core::derive(input, &DesignConstants::default())
}

/// Sizing calculator bound to a validated set of design constants.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizingModel {
    constants: DesignConstants,
}

impl SizingModel {
    /// Creates a model after checking the constants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidConstant`] if a constant is out of range.
    pub fn new(constants: DesignConstants) -> Result<Self, ValidationError> {
        constants.validate()?;
        Ok(Self { constants })
    }

    #[must_use]
    pub fn constants(&self) -> &DesignConstants {
        &self.constants
    }

    /// Sizes a room.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the input is incomplete or out of range.
    pub fn compute(&self, input: &CalculatorInput) -> Result<HeatBreakdown, ValidationError> {
        core::calculate(input, &self.constants)
    }

    /// Reports the intermediate quantities behind [`SizingModel::compute`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the input is incomplete or out of range.
    pub fn explain(&self, input: &CalculatorInput) -> Result<Derivation, ValidationError> {
        core::derive(input, &self.constants)
    }
}

impl Model for SizingModel {
    type Input = CalculatorInput;
    type Output = HeatBreakdown;
    type Error = ValidationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.compute(input)
    }
}
