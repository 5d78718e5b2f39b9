mod appliances;
mod envelope;

pub use appliances::{Appliance, ApplianceLoad, UnknownAppliance};
pub use envelope::{Direction, ElementKind, EnvelopeElement, RoofCondition};

use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use crate::support::units::feet;

/// How much of the room description the caller supplies.
///
/// The tier decides which fields are taken from the input and which are
/// replaced by presets during normalization:
///
/// | Field            | `Low`            | `Medium`          | `High`            |
/// |------------------|------------------|-------------------|-------------------|
/// | windows, walls   | preset           | preset            | required          |
/// | occupants        | preset (2)       | input, else 3     | input, else 3     |
/// | roof condition   | preset (exposed) | input, else exposed | input, else exposed |
/// | appliances       | preset           | input, else preset | required         |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    #[default]
    Low,
    Medium,
    High,
}

/// Interior room dimensions, in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomGeometry {
    pub length: f64,
    pub breadth: f64,
    pub height: f64,
}

impl RoomGeometry {
    #[must_use]
    pub fn new(length: f64, breadth: f64, height: f64) -> Self {
        Self {
            length,
            breadth,
            height,
        }
    }

    /// Builds a geometry from lengths in any unit.
    #[must_use]
    pub fn from_lengths(length: Length, breadth: Length, height: Length) -> Self {
        Self::new(feet(length), feet(breadth), feet(height))
    }

    #[must_use]
    pub fn floor_area(&self) -> f64 {
        self.length * self.breadth
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        self.floor_area() * self.height
    }

    /// Gross area of the four walls.
    #[must_use]
    pub fn perimeter_wall_area(&self) -> f64 {
        2.0 * (self.length + self.breadth) * self.height
    }
}

/// Everything the caller knows about the room.
///
/// Optional fields are resolved according to [`DifficultyTier`].
///
/// ```
/// use hvac_sizing::models::cooling::sizing::{CalculatorInput, RoomGeometry};
///
/// let input = CalculatorInput::new(RoomGeometry::new(15.0, 12.0, 10.0), "Mumbai")
///     .with_occupants(4);
/// assert_eq!(input.occupants, Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInput {
    #[serde(default)]
    pub tier: DifficultyTier,
    pub room: RoomGeometry,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows: Option<Vec<EnvelopeElement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walls: Option<Vec<EnvelopeElement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roof: Option<RoofCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupants: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appliances: Option<ApplianceLoad>,
    /// Outside-air rate in CFM that replaces the computed ventilation rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ventilation_cfm: Option<f64>,
}

impl CalculatorInput {
    /// A low-tier input: geometry and city, everything else preset.
    #[must_use]
    pub fn new(room: RoomGeometry, city: impl Into<String>) -> Self {
        Self {
            tier: DifficultyTier::Low,
            room,
            city: city.into(),
            windows: None,
            walls: None,
            roof: None,
            occupants: None,
            appliances: None,
            ventilation_cfm: None,
        }
    }

    #[must_use]
    pub fn with_tier(mut self, tier: DifficultyTier) -> Self {
        self.tier = tier;
        self
    }

    #[must_use]
    pub fn with_windows(mut self, windows: Vec<EnvelopeElement>) -> Self {
        self.windows = Some(windows);
        self
    }

    #[must_use]
    pub fn with_walls(mut self, walls: Vec<EnvelopeElement>) -> Self {
        self.walls = Some(walls);
        self
    }

    #[must_use]
    pub fn with_roof(mut self, roof: RoofCondition) -> Self {
        self.roof = Some(roof);
        self
    }

    #[must_use]
    pub fn with_occupants(mut self, occupants: u32) -> Self {
        self.occupants = Some(occupants);
        self
    }

    #[must_use]
    pub fn with_appliances(mut self, appliances: ApplianceLoad) -> Self {
        self.appliances = Some(appliances);
        self
    }

    #[must_use]
    pub fn with_ventilation_cfm(mut self, cfm: f64) -> Self {
        self.ventilation_cfm = Some(cfm);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::meter;

    #[test]
    fn derived_geometry() {
        let room = RoomGeometry::new(15.0, 12.0, 10.0);
        assert_eq!(room.floor_area(), 180.0);
        assert_eq!(room.volume(), 1800.0);
        assert_eq!(room.perimeter_wall_area(), 540.0);
    }

    #[test]
    fn geometry_from_metric_lengths() {
        let room = RoomGeometry::from_lengths(
            Length::new::<meter>(4.572),
            Length::new::<meter>(3.6576),
            Length::new::<meter>(3.048),
        );
        assert_relative_eq!(room.length, 15.0, epsilon = 1e-12);
        assert_relative_eq!(room.breadth, 12.0, epsilon = 1e-12);
        assert_relative_eq!(room.height, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn minimal_json_defaults_to_low_tier() {
        let input: CalculatorInput = serde_json::from_str(
            r#"{"room": {"length": 15, "breadth": 12, "height": 10}, "city": "Mumbai"}"#,
        )
        .unwrap();
        assert_eq!(
            input,
            CalculatorInput::new(RoomGeometry::new(15.0, 12.0, 10.0), "Mumbai")
        );
    }

    #[test]
    fn full_json_input() {
        let input: CalculatorInput = serde_json::from_str(
            r#"{
                "tier": "high",
                "room": {"length": 20, "breadth": 15, "height": 10},
                "city": "Delhi",
                "windows": [{"area": 20, "direction": "S"}],
                "walls": [{"area": 200, "direction": "N"}],
                "roof": "insulated",
                "occupants": 5,
                "appliances": {"PC/Laptop": 2, "TV": 1},
                "ventilationCfm": 80
            }"#,
        )
        .unwrap();
        assert_eq!(input.tier, DifficultyTier::High);
        assert_eq!(input.roof, Some(RoofCondition::Insulated));
        assert_eq!(input.ventilation_cfm, Some(80.0));
        let appliances = input.appliances.unwrap();
        assert_eq!(appliances.count(Appliance::PcLaptop), 2);
        assert_eq!(appliances.count(Appliance::Tv), 1);
    }
}
