use serde::{Deserialize, Serialize};

use crate::support::constraint::{ConstraintError, NonNegative, StrictlyPositive};

use super::{RoofCondition, ValidationError};

/// Heat-transfer coefficients, BTU/hr·ft²·°F.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UFactors {
    pub glass: f64,
    pub wall: f64,
    pub floor: f64,
    pub roof_exposed: f64,
    pub roof_insulated: f64,
    pub roof_shaded: f64,
    pub roof_water_covered: f64,
}

impl UFactors {
    /// Roof coefficient for the given construction.
    #[must_use]
    pub fn roof(&self, condition: RoofCondition) -> f64 {
        match condition {
            RoofCondition::Exposed => self.roof_exposed,
            RoofCondition::Insulated => self.roof_insulated,
            RoofCondition::Shaded => self.roof_shaded,
            RoofCondition::WaterCovered => self.roof_water_covered,
        }
    }
}

impl Default for UFactors {
    fn default() -> Self {
        Self {
            glass: 0.30,
            wall: 0.16,
            floor: 0.02,
            roof_exposed: 0.46,
            roof_insulated: 0.135,
            roof_shaded: 0.15,
            roof_water_covered: 0.10,
        }
    }
}

/// Physical constants and allowances used by the load stages.
///
/// [`Default`] holds the published constant set. A JSON file may override
/// any subset of fields; missing fields keep their default value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesignConstants {
    pub u_factors: UFactors,

    /// Sensible heat per occupant, BTU/hr.
    pub person_sensible: f64,
    /// Latent heat per occupant, BTU/hr.
    pub person_latent: f64,
    /// BTU/hr per kW of appliance rating.
    pub equipment_factor: f64,
    pub lighting_load_factor: f64,
    pub lighting_constant: f64,

    /// Air changes per hour assumed for the volume-based ventilation rate.
    pub ventilation_factor: f64,
    /// Outside air per occupant, CFM.
    pub cfm_per_person: f64,
    pub bypass_factor: f64,
    /// Sensible heat of air, BTU/hr per CFM·°F.
    pub sensible_constant: f64,
    /// Latent heat of air, BTU/hr per CFM·gr/lb.
    pub latent_constant: f64,

    /// Indoor design dry bulb, °F.
    pub indoor_temp_f: f64,
    /// Indoor humidity ratio, gr/lb.
    pub indoor_grains: f64,

    pub duct_gain_fraction: f64,
    pub fan_heat_fraction: f64,
    pub safety_fraction: f64,
    /// BTU/hr in one ton of refrigeration.
    pub ton_conversion: f64,
}

impl Default for DesignConstants {
    fn default() -> Self {
        Self {
            u_factors: UFactors::default(),
            person_sensible: 255.0,
            person_latent: 245.0,
            equipment_factor: 3410.0,
            lighting_load_factor: 1.2,
            lighting_constant: 3.4,
            ventilation_factor: 0.42,
            cfm_per_person: 10.0,
            bypass_factor: 0.12,
            sensible_constant: 1.08,
            latent_constant: 0.68,
            indoor_temp_f: 75.0,
            indoor_grains: 60.0,
            duct_gain_fraction: 0.02,
            fan_heat_fraction: 0.05,
            safety_fraction: 0.03,
            ton_conversion: 12_000.0,
        }
    }
}

impl DesignConstants {
    /// Checks that every constant is a finite, non-negative number and that
    /// the ton conversion is positive.
    ///
    /// The indoor temperature is only required to be finite.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidConstant`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let u = &self.u_factors;
        let non_negative = [
            ("uFactors.glass", u.glass),
            ("uFactors.wall", u.wall),
            ("uFactors.floor", u.floor),
            ("uFactors.roofExposed", u.roof_exposed),
            ("uFactors.roofInsulated", u.roof_insulated),
            ("uFactors.roofShaded", u.roof_shaded),
            ("uFactors.roofWaterCovered", u.roof_water_covered),
            ("personSensible", self.person_sensible),
            ("personLatent", self.person_latent),
            ("equipmentFactor", self.equipment_factor),
            ("lightingLoadFactor", self.lighting_load_factor),
            ("lightingConstant", self.lighting_constant),
            ("ventilationFactor", self.ventilation_factor),
            ("cfmPerPerson", self.cfm_per_person),
            ("bypassFactor", self.bypass_factor),
            ("sensibleConstant", self.sensible_constant),
            ("latentConstant", self.latent_constant),
            ("indoorGrains", self.indoor_grains),
            ("ductGainFraction", self.duct_gain_fraction),
            ("fanHeatFraction", self.fan_heat_fraction),
            ("safetyFraction", self.safety_fraction),
        ];
        for (name, value) in non_negative {
            NonNegative::new(value)
                .map_err(|source| ValidationError::InvalidConstant { name, source })?;
        }

        if !self.indoor_temp_f.is_finite() {
            return Err(ValidationError::InvalidConstant {
                name: "indoorTempF",
                source: ConstraintError::NotFinite,
            });
        }

        StrictlyPositive::new(self.ton_conversion).map_err(|source| {
            ValidationError::InvalidConstant {
                name: "tonConversion",
                source,
            }
        })?;

        Ok(())
    }
}
