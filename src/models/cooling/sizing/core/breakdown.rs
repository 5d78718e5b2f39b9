//! The itemized result of a sizing calculation and how it is assembled.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uom::si::f64::Power;

use crate::support::units::power_from_btu_per_hour;

use super::{
    DesignConstants,
    normalize::NormalizedInput,
    stages::{self, DesignConditions},
};

/// Sensible gains inside the room, BTU/hr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSensible {
    pub glass: f64,
    pub wall: f64,
    pub floor: f64,
    pub roof: f64,
    pub people: f64,
    pub equipment: f64,
    pub lighting: f64,
    pub duct_gain: f64,
    pub fan_heat: f64,
    /// Sum of the seven gains, raised by the duct and fan allowances.
    pub total: f64,
}

impl RoomSensible {
    /// Sum of the seven gains before duct and fan allowances.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.glass
            + self.wall
            + self.floor
            + self.roof
            + self.people
            + self.equipment
            + self.lighting
    }
}

/// Latent gains inside the room, BTU/hr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomLatent {
    pub people: f64,
    /// Moisture carried by outside air that bypasses the coil.
    pub infiltration: f64,
    pub total: f64,
}

/// Load of the outside air the coil conditions, BTU/hr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutsideAir {
    pub sensible: f64,
    pub latent: f64,
    pub total: f64,
}

/// Grand total with the overall safety allowance, BTU/hr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrandTotal {
    pub subtotal: f64,
    pub safety_margin: f64,
    #[serde(rename = "final")]
    pub final_total: f64,
}

impl GrandTotal {
    /// The final load as a [`Power`].
    #[must_use]
    pub fn final_power(&self) -> Power {
        power_from_btu_per_hour(self.final_total)
    }
}

/// Itemized cooling load for one room.
///
/// All fields are BTU/hr except [`tonnage`](Self::tonnage), which is in tons
/// of refrigeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatBreakdown {
    pub room_sensible: RoomSensible,
    pub room_latent: RoomLatent,
    pub outside_air: OutsideAir,
    pub grand_total: GrandTotal,
    pub tonnage: f64,
}

impl HeatBreakdown {
    /// Room sensible plus room latent load.
    #[must_use]
    pub fn effective_room_total(&self) -> f64 {
        self.room_sensible.total + self.room_latent.total
    }

    /// Nominal unit size: the tonnage rounded up to the next half ton.
    ///
    /// ```
    /// use hvac_sizing::models::cooling::sizing::HeatBreakdown;
    ///
    /// let breakdown = HeatBreakdown { tonnage: 1.2, ..HeatBreakdown::default() };
    /// assert_eq!(breakdown.recommended_tons(), 1.5);
    /// ```
    #[must_use]
    pub fn recommended_tons(&self) -> f64 {
        (self.tonnage * 2.0).ceil() / 2.0
    }

    /// The final load as a [`Power`].
    #[must_use]
    pub fn final_load(&self) -> Power {
        self.grand_total.final_power()
    }
}

/// Runs every stage in order and totals the results.
pub(crate) fn assemble(
    input: &NormalizedInput,
    conditions: &DesignConditions,
    constants: &DesignConstants,
) -> HeatBreakdown {
    let u = &constants.u_factors;
    let delta_t = conditions.delta_t;

    let mut room_sensible = RoomSensible {
        glass: stages::glass(&input.windows, delta_t, u.glass),
        wall: stages::wall(&input.walls, &input.room, delta_t, u.wall),
        floor: stages::slab(conditions.floor_area, delta_t, u.floor),
        roof: stages::slab(conditions.floor_area, delta_t, u.roof(input.roof)),
        people: stages::people_sensible(input.occupants, constants),
        equipment: stages::equipment(&input.appliances, constants),
        lighting: stages::lighting(conditions.floor_area, constants),
        ..RoomSensible::default()
    };
    let subtotal = room_sensible.subtotal();
    room_sensible.duct_gain = subtotal * constants.duct_gain_fraction;
    room_sensible.fan_heat = subtotal * constants.fan_heat_fraction;
    room_sensible.total =
        subtotal * (1.0 + constants.duct_gain_fraction + constants.fan_heat_fraction);
    debug!(?room_sensible, "room sensible load");

    let people = stages::people_latent(input.occupants, constants);
    let infiltration = stages::infiltration_latent(conditions, constants);
    let room_latent = RoomLatent {
        people,
        infiltration,
        total: people + infiltration,
    };
    debug!(?room_latent, ventilation = ?conditions.ventilation, "room latent load");

    let sensible = stages::outside_air_sensible(conditions, constants);
    let latent = stages::outside_air_latent(conditions, constants);
    let outside_air = OutsideAir {
        sensible,
        latent,
        total: sensible + latent,
    };
    debug!(?outside_air, "outside air load");

    let subtotal = room_sensible.total + room_latent.total + outside_air.total;
    let grand_total = GrandTotal {
        subtotal,
        safety_margin: subtotal * constants.safety_fraction,
        final_total: subtotal * (1.0 + constants.safety_fraction),
    };
    let tonnage = grand_total.final_total / constants.ton_conversion;
    debug!(?grand_total, tonnage, "assembled cooling load");

    HeatBreakdown {
        room_sensible,
        room_latent,
        outside_air,
        grand_total,
        tonnage,
    }
}
