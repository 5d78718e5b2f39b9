//! Summer design climate for the supported cities.

use serde::Serialize;
use uom::si::f64::ThermodynamicTemperature;

use crate::support::units::temperature_from_fahrenheit;

/// Outdoor design conditions for one city.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimateRecord {
    pub name: &'static str,
    /// Design dry-bulb temperature, °F.
    pub dry_bulb_f: f64,
    /// Coincident wet-bulb temperature, °F.
    pub wet_bulb_f: f64,
    /// Daily temperature swing, °F.
    pub diurnal_range: f64,
    pub relative_humidity_pct: f64,
    pub dew_point_f: f64,
    /// Outdoor humidity ratio, grains of moisture per pound of dry air.
    pub grains_per_pound: f64,
}

impl ClimateRecord {
    #[must_use]
    pub fn dry_bulb(&self) -> ThermodynamicTemperature {
        temperature_from_fahrenheit(self.dry_bulb_f)
    }

    #[must_use]
    pub fn wet_bulb(&self) -> ThermodynamicTemperature {
        temperature_from_fahrenheit(self.wet_bulb_f)
    }

    #[must_use]
    pub fn dew_point(&self) -> ThermodynamicTemperature {
        temperature_from_fahrenheit(self.dew_point_f)
    }
}

const fn record(
    name: &'static str,
    dry_bulb_f: f64,
    wet_bulb_f: f64,
    diurnal_range: f64,
    relative_humidity_pct: f64,
    dew_point_f: f64,
    grains_per_pound: f64,
) -> ClimateRecord {
    ClimateRecord {
        name,
        dry_bulb_f,
        wet_bulb_f,
        diurnal_range,
        relative_humidity_pct,
        dew_point_f,
        grains_per_pound,
    }
}

static CITIES: [ClimateRecord; 10] = [
    record("Mumbai", 92.0, 81.0, 12.0, 60.0, 78.0, 146.0),
    record("Delhi", 110.0, 75.0, 25.0, 20.0, 62.0, 83.0),
    record("Ahmedabad", 109.0, 77.0, 24.0, 24.0, 65.0, 92.0),
    record("Pune", 101.0, 72.0, 28.0, 25.0, 59.0, 75.0),
    record("Jabalpur", 108.0, 75.0, 26.0, 22.0, 61.0, 80.0),
    record("Chennai", 100.0, 83.0, 14.0, 55.0, 80.0, 156.0),
    record("Kolkata", 97.0, 83.0, 14.0, 62.0, 79.0, 151.0),
    record("Bengaluru", 93.0, 71.0, 22.0, 35.0, 62.0, 83.0),
    record("Hyderabad", 104.0, 74.0, 24.0, 28.0, 63.0, 86.0),
    record("Jaipur", 108.0, 74.0, 25.0, 20.0, 60.0, 77.0),
];

/// Looks up a city by its exact name.
#[must_use]
pub fn city(name: &str) -> Option<&'static ClimateRecord> {
    CITIES.iter().find(|record| record.name == name)
}

/// All supported cities, in table order.
pub fn cities() -> impl ExactSizeIterator<Item = &'static ClimateRecord> {
    CITIES.iter()
}
