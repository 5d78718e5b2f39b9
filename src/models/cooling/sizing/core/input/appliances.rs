use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// The closed catalog of appliances the calculator knows a rating for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Appliance {
    Lights,
    OvenMicrowave,
    Fridge,
    PcLaptop,
    Tv,
    Fan,
}

impl Appliance {
    pub const ALL: [Appliance; 6] = [
        Appliance::Lights,
        Appliance::OvenMicrowave,
        Appliance::Fridge,
        Appliance::PcLaptop,
        Appliance::Tv,
        Appliance::Fan,
    ];

    /// Rated electrical draw of one unit, in kW.
    #[must_use]
    pub fn kilowatts(self) -> f64 {
        match self {
            Self::Lights => 0.05,
            Self::OvenMicrowave => 1.5,
            Self::Fridge => 0.20,
            Self::PcLaptop => 0.125,
            Self::Tv => 0.1,
            Self::Fan => 0.05,
        }
    }

    /// Catalog name, as shown to users and accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Lights => "Lights",
            Self::OvenMicrowave => "Oven/Microwave",
            Self::Fridge => "Fridge",
            Self::PcLaptop => "PC/Laptop",
            Self::Tv => "TV",
            Self::Fan => "Fan",
        }
    }
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name does not match any catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown appliance `{0}`")]
pub struct UnknownAppliance(pub String);

impl FromStr for Appliance {
    type Err = UnknownAppliance;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|appliance| appliance.name() == s)
            .ok_or_else(|| UnknownAppliance(s.to_owned()))
    }
}

/// Appliance counts for one room.
///
/// Counts are keyed by [`Appliance`], so only catalog entries contribute
/// heat. Loads built from free-text names (see [`ApplianceLoad::from_named`])
/// remember the names that matched nothing; those contribute zero and are
/// reported through [`ApplianceLoad::unrecognized`].
///
/// On the wire a load is a map from catalog name to count:
///
/// ```
/// use hvac_sizing::models::cooling::sizing::{Appliance, ApplianceLoad};
///
/// let load: ApplianceLoad = serde_json::from_str(r#"{"Lights": 4, "Lava lamp": 1}"#).unwrap();
/// assert_eq!(load.count(Appliance::Lights), 4);
/// assert_eq!(load.unrecognized(), ["Lava lamp"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, u32>", into = "BTreeMap<String, u32>")]
pub struct ApplianceLoad {
    counts: BTreeMap<Appliance, u32>,
    unrecognized: Vec<String>,
}

impl ApplianceLoad {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a load from `(name, count)` pairs.
    ///
    /// Names outside the catalog are kept aside and logged, never rejected.
    pub fn from_named<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let mut load = Self::new();
        for (name, count) in pairs {
            let name = name.as_ref();
            match name.parse::<Appliance>() {
                Ok(appliance) => load.add(appliance, count),
                Err(UnknownAppliance(name)) => {
                    warn!(appliance = %name, count, "ignoring appliance missing from the catalog");
                    load.unrecognized.push(name);
                }
            }
        }
        load
    }

    /// Adds `count` units of `appliance`, saturating at `u32::MAX`.
    pub fn add(&mut self, appliance: Appliance, count: u32) {
        let total = self.counts.entry(appliance).or_insert(0);
        *total = total.saturating_add(count);
    }

    /// Builder-style variant of [`ApplianceLoad::add`].
    #[must_use]
    pub fn with(mut self, appliance: Appliance, count: u32) -> Self {
        self.add(appliance, count);
        self
    }

    #[must_use]
    pub fn count(&self, appliance: Appliance) -> u32 {
        self.counts.get(&appliance).copied().unwrap_or(0)
    }

    /// Catalog entries and their counts, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Appliance, u32)> + '_ {
        self.counts.iter().map(|(appliance, count)| (*appliance, *count))
    }

    /// Names that did not match the catalog.
    #[must_use]
    pub fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }

    /// True when no appliance was listed at all, recognized or not.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty() && self.unrecognized.is_empty()
    }
}

impl From<BTreeMap<String, u32>> for ApplianceLoad {
    fn from(map: BTreeMap<String, u32>) -> Self {
        Self::from_named(map)
    }
}

impl From<ApplianceLoad> for BTreeMap<String, u32> {
    fn from(load: ApplianceLoad) -> Self {
        load.iter()
            .map(|(appliance, count)| (appliance.name().to_owned(), count))
            .collect()
    }
}

impl FromIterator<(Appliance, u32)> for ApplianceLoad {
    fn from_iter<I: IntoIterator<Item = (Appliance, u32)>>(iter: I) -> Self {
        let mut load = Self::new();
        for (appliance, count) in iter {
            load.add(appliance, count);
        }
        load
    }
}
