//! Individual load stages.
//!
//! Each stage is a pure function of the normalized input, the design
//! constants and the shared [`DesignConditions`]. All results are BTU/hr.

use serde::Serialize;
use uom::si::f64::VolumeRate;

use crate::support::units::airflow_from_cfm;

use super::{
    ApplianceLoad, DesignConstants, EnvelopeElement, RoomGeometry,
    normalize::{NormalizedInput, PRESET_WINDOW_AREA},
};

/// Which rule produced the outside-air rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VentilationBasis {
    /// The caller supplied the rate.
    Override,
    /// Air changes applied to the room volume.
    RoomVolume,
    /// Fresh air per occupant.
    Occupancy,
}

/// Outside air brought into the room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ventilation {
    pub cfm: f64,
    pub basis: VentilationBasis,
}

impl Ventilation {
    /// The rate as a [`VolumeRate`].
    #[must_use]
    pub fn airflow(&self) -> VolumeRate {
        airflow_from_cfm(self.cfm)
    }
}

/// Quantities shared by several stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DesignConditions {
    pub(crate) floor_area: f64,
    pub(crate) volume: f64,
    /// Outdoor minus indoor dry bulb, °F.
    pub(crate) delta_t: f64,
    /// Outdoor minus indoor humidity ratio, gr/lb.
    pub(crate) delta_grains: f64,
    pub(crate) ventilation: Ventilation,
}

impl DesignConditions {
    pub(crate) fn new(input: &NormalizedInput, constants: &DesignConstants) -> Self {
        let floor_area = input.room.floor_area();
        let volume = input.room.volume();
        Self {
            floor_area,
            volume,
            delta_t: input.climate.dry_bulb_f - constants.indoor_temp_f,
            delta_grains: input.climate.grains_per_pound - constants.indoor_grains,
            ventilation: ventilation(
                volume,
                input.occupants,
                input.ventilation_override,
                constants,
            ),
        }
    }
}

/// Override if given, else the larger of the volume and occupancy rates.
pub(crate) fn ventilation(
    volume: f64,
    occupants: u32,
    override_cfm: Option<f64>,
    constants: &DesignConstants,
) -> Ventilation {
    if let Some(cfm) = override_cfm {
        return Ventilation {
            cfm,
            basis: VentilationBasis::Override,
        };
    }

    let by_volume = volume * constants.ventilation_factor / 60.0;
    let by_occupancy = f64::from(occupants) * constants.cfm_per_person;
    if by_volume >= by_occupancy {
        Ventilation {
            cfm: by_volume,
            basis: VentilationBasis::RoomVolume,
        }
    } else {
        Ventilation {
            cfm: by_occupancy,
            basis: VentilationBasis::Occupancy,
        }
    }
}

/// Σ area × ΔT × U over the windows.
///
/// With no windows listed, two preset-sized windows are assumed.
pub(crate) fn glass(windows: &[EnvelopeElement], delta_t: f64, u_glass: f64) -> f64 {
    if windows.is_empty() {
        return 2.0 * (PRESET_WINDOW_AREA * delta_t * u_glass);
    }
    conduction(windows, delta_t, u_glass)
}

/// Σ area × ΔT × U over the walls.
///
/// With no walls listed, the full perimeter wall area is used.
pub(crate) fn wall(
    walls: &[EnvelopeElement],
    room: &RoomGeometry,
    delta_t: f64,
    u_wall: f64,
) -> f64 {
    if walls.is_empty() {
        return room.perimeter_wall_area() * delta_t * u_wall;
    }
    conduction(walls, delta_t, u_wall)
}

fn conduction(elements: &[EnvelopeElement], delta_t: f64, u: f64) -> f64 {
    elements
        .iter()
        .fold(0.0, |total, element| total + element.area * delta_t * u)
}

/// Floor area × ΔT × U. Also used for the roof, which spans the floor.
pub(crate) fn slab(floor_area: f64, delta_t: f64, u: f64) -> f64 {
    floor_area * delta_t * u
}

pub(crate) fn people_sensible(occupants: u32, constants: &DesignConstants) -> f64 {
    f64::from(occupants) * constants.person_sensible
}

/// Σ kW × count × equipment factor.
pub(crate) fn equipment(appliances: &ApplianceLoad, constants: &DesignConstants) -> f64 {
    appliances.iter().fold(0.0, |total, (appliance, count)| {
        total + appliance.kilowatts() * f64::from(count) * constants.equipment_factor
    })
}

pub(crate) fn lighting(floor_area: f64, constants: &DesignConstants) -> f64 {
    constants.lighting_load_factor * floor_area * constants.lighting_constant
}

pub(crate) fn people_latent(occupants: u32, constants: &DesignConstants) -> f64 {
    f64::from(occupants) * constants.person_latent
}

/// Moisture from the share of outside air that bypasses the coil.
pub(crate) fn infiltration_latent(conditions: &DesignConditions, constants: &DesignConstants) -> f64 {
    conditions.ventilation.cfm
        * conditions.delta_grains
        * constants.bypass_factor
        * constants.latent_constant
}

/// Sensible heat of the outside air the coil conditions.
pub(crate) fn outside_air_sensible(
    conditions: &DesignConditions,
    constants: &DesignConstants,
) -> f64 {
    conditions.ventilation.cfm
        * conditions.delta_t
        * (1.0 - constants.bypass_factor)
        * constants.sensible_constant
}

/// Latent heat of the outside air the coil conditions.
pub(crate) fn outside_air_latent(
    conditions: &DesignConditions,
    constants: &DesignConstants,
) -> f64 {
    conditions.ventilation.cfm
        * conditions.delta_grains
        * (1.0 - constants.bypass_factor)
        * constants.latent_constant
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::volume_rate::cubic_foot_per_minute;

    use crate::models::cooling::sizing::core::{Appliance, Direction};

    #[test]
    fn glass_over_listed_windows() {
        let windows = [
            EnvelopeElement::new(15.0, Direction::West),
            EnvelopeElement::new(15.0, Direction::East),
        ];
        assert_eq!(glass(&windows, 17.0, 0.30), 153.0);
    }

    #[test]
    fn glass_fallback_matches_two_preset_windows() {
        assert_eq!(glass(&[], 17.0, 0.30), 153.0);
    }

    #[test]
    fn wall_fallback_uses_perimeter() {
        let room = RoomGeometry::new(15.0, 12.0, 10.0);
        assert_relative_eq!(wall(&[], &room, 17.0, 0.16), 540.0 * 17.0 * 0.16);

        let walls = [EnvelopeElement::new(100.0, Direction::North)];
        assert_relative_eq!(wall(&walls, &room, 17.0, 0.16), 272.0, epsilon = 1e-9);
    }

    #[test]
    fn equipment_sums_catalog_ratings() {
        let constants = DesignConstants::default();
        let load = ApplianceLoad::new()
            .with(Appliance::Lights, 2)
            .with(Appliance::Fridge, 1);
        assert_relative_eq!(
            equipment(&load, &constants),
            (2.0 * 0.05 + 0.20) * 3410.0,
            epsilon = 1e-9
        );
        assert_eq!(equipment(&ApplianceLoad::new(), &constants), 0.0);
    }

    #[test]
    fn unrecognized_appliances_contribute_nothing() {
        let constants = DesignConstants::default();
        let load = ApplianceLoad::from_named([("Hot tub", 1)]);
        assert_eq!(equipment(&load, &constants), 0.0);
    }

    #[test]
    fn lighting_scales_with_floor_area() {
        let constants = DesignConstants::default();
        assert_relative_eq!(lighting(180.0, &constants), 734.4, epsilon = 1e-9);
    }

    #[test]
    fn ventilation_takes_the_larger_rule() {
        let constants = DesignConstants::default();

        let small = ventilation(1800.0, 2, None, &constants);
        assert_eq!(small.basis, VentilationBasis::Occupancy);
        assert_relative_eq!(small.cfm, 20.0);

        let large = ventilation(6000.0, 2, None, &constants);
        assert_eq!(large.basis, VentilationBasis::RoomVolume);
        assert_relative_eq!(large.cfm, 42.0, epsilon = 1e-12);

        assert_relative_eq!(
            large.airflow().get::<cubic_foot_per_minute>(),
            42.0,
            epsilon = 1e-9
        );

        let forced = ventilation(6000.0, 2, Some(5.0), &constants);
        assert_eq!(
            forced,
            Ventilation {
                cfm: 5.0,
                basis: VentilationBasis::Override
            }
        );
    }

    #[test]
    fn bypass_factor_splits_outside_air_moisture() {
        let constants = DesignConstants::default();
        let conditions = DesignConditions {
            floor_area: 180.0,
            volume: 1800.0,
            delta_t: 17.0,
            delta_grains: 86.0,
            ventilation: Ventilation {
                cfm: 20.0,
                basis: VentilationBasis::Occupancy,
            },
        };
        let bypassed = infiltration_latent(&conditions, &constants);
        let conditioned = outside_air_latent(&conditions, &constants);
        assert_relative_eq!(bypassed + conditioned, 20.0 * 86.0 * 0.68, epsilon = 1e-9);
        assert_relative_eq!(
            outside_air_sensible(&conditions, &constants),
            20.0 * 17.0 * 0.88 * 1.08,
            epsilon = 1e-9
        );
    }
}
