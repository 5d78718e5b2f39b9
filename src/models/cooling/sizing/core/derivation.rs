use serde::Serialize;

use super::{
    ClimateRecord, DesignConstants, DifficultyTier, RoofCondition,
    normalize::NormalizedInput,
    stages::{DesignConditions, Ventilation},
};

/// The intermediate quantities behind a [`HeatBreakdown`](super::HeatBreakdown).
///
/// This is what a results page shows under "how was this calculated".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Derivation {
    pub tier: DifficultyTier,
    pub climate: ClimateRecord,
    /// ft²
    pub floor_area: f64,
    /// ft³
    pub volume: f64,
    /// °F
    pub delta_t: f64,
    /// gr/lb
    pub delta_grains: f64,
    pub ventilation: Ventilation,
    pub occupants: u32,
    pub roof: RoofCondition,
    /// Total glazed area, ft².
    pub window_area: f64,
    /// Total wall area, ft².
    pub wall_area: f64,
    /// Σ window area × peak solar factor of its orientation, BTU/hr.
    ///
    /// Informational; the glass load is conduction-only.
    pub window_solar_exposure: f64,
    pub u_glass: f64,
    pub u_wall: f64,
    pub u_floor: f64,
    pub u_roof: f64,
}

impl Derivation {
    pub(crate) fn new(
        input: &NormalizedInput,
        conditions: &DesignConditions,
        constants: &DesignConstants,
    ) -> Self {
        let u = &constants.u_factors;
        Self {
            tier: input.tier,
            climate: *input.climate,
            floor_area: conditions.floor_area,
            volume: conditions.volume,
            delta_t: conditions.delta_t,
            delta_grains: conditions.delta_grains,
            ventilation: conditions.ventilation,
            occupants: input.occupants,
            roof: input.roof,
            window_area: input.windows.iter().map(|w| w.area).sum(),
            wall_area: input.walls.iter().map(|w| w.area).sum(),
            window_solar_exposure: input
                .windows
                .iter()
                .map(|w| w.area * w.direction.peak_solar_gain())
                .sum(),
            u_glass: u.glass,
            u_wall: u.wall,
            u_floor: u.floor,
            u_roof: u.roof(input.roof),
        }
    }
}
