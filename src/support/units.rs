//! Conversions between US customary figures and [`uom`] quantities.
//!
//! The load calculation works on plain `f64` values in feet, °F, CFM and
//! BTU/hr so its published figures reproduce exactly. [`uom`] quantities are
//! used at the edges: callers may describe a room with any length unit and
//! read results as a [`Power`] in any unit they like.
//!
//! ```
//! use hvac_sizing::support::units::{btu_per_hour, power_from_btu_per_hour};
//! use uom::si::power::kilowatt;
//!
//! let load = power_from_btu_per_hour(12_000.0);
//! assert!((load.get::<kilowatt>() - 3.516_852_842).abs() < 1e-9);
//! assert!((btu_per_hour(load) - 12_000.0).abs() < 1e-9);
//! ```

use uom::si::{
    f64::{Length, Power, ThermodynamicTemperature, VolumeRate},
    length::foot,
    power::watt,
    thermodynamic_temperature::degree_fahrenheit,
    volume_rate::cubic_foot_per_minute,
};

/// Watts in one international-table BTU per hour.
pub const WATTS_PER_BTU_PER_HOUR: f64 = 0.293_071_070_172_222_2;

/// Converts a heat rate in BTU/hr into a [`Power`].
#[must_use]
pub fn power_from_btu_per_hour(btu_per_hour: f64) -> Power {
    Power::new::<watt>(btu_per_hour * WATTS_PER_BTU_PER_HOUR)
}

/// Returns a [`Power`] expressed in BTU/hr.
#[must_use]
pub fn btu_per_hour(power: Power) -> f64 {
    power.get::<watt>() / WATTS_PER_BTU_PER_HOUR
}

/// Returns a [`Length`] expressed in feet.
#[must_use]
pub fn feet(length: Length) -> f64 {
    length.get::<foot>()
}

/// Converts a temperature in °F into a [`ThermodynamicTemperature`].
#[must_use]
pub fn temperature_from_fahrenheit(degrees: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_fahrenheit>(degrees)
}

/// Converts an airflow in cubic feet per minute into a [`VolumeRate`].
#[must_use]
pub fn airflow_from_cfm(cfm: f64) -> VolumeRate {
    VolumeRate::new::<cubic_foot_per_minute>(cfm)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        length::meter, power::kilowatt, thermodynamic_temperature::degree_celsius,
        volume_rate::cubic_meter_per_second,
    };

    #[test]
    fn ton_of_refrigeration_in_kilowatts() {
        let ton = power_from_btu_per_hour(12_000.0);
        assert_relative_eq!(ton.get::<kilowatt>(), 3.516_852_842, epsilon = 1e-9);
    }

    #[test]
    fn metric_lengths_become_feet() {
        assert_relative_eq!(feet(Length::new::<meter>(3.048)), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn design_temperatures() {
        let indoor = temperature_from_fahrenheit(75.0);
        assert_relative_eq!(indoor.get::<degree_celsius>(), 23.888_888_9, epsilon = 1e-6);
    }

    #[test]
    fn airflow() {
        let flow = airflow_from_cfm(20.0);
        assert_relative_eq!(
            flow.get::<cubic_meter_per_second>(),
            20.0 * 0.028_316_846_592 / 60.0,
            max_relative = 1e-6
        );
        assert_relative_eq!(flow.get::<cubic_foot_per_minute>(), 20.0, max_relative = 1e-12);
    }
}
