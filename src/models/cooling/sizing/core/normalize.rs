//! Resolves tier presets and validates a [`CalculatorInput`].

use tracing::{debug, warn};

use crate::support::constraint::StrictlyPositive;

use super::{
    Appliance, ApplianceLoad, CalculatorInput, ClimateRecord, DifficultyTier, Direction,
    ElementKind, EnvelopeElement, RoofCondition, RoomGeometry, ValidationError, reference,
};

/// Occupants assumed when the low tier hides the field.
pub(crate) const LOW_TIER_OCCUPANTS: u32 = 2;

/// Occupants assumed when a medium or high tier input leaves the field empty.
pub(crate) const DEFAULT_OCCUPANTS: u32 = 3;

/// Area of each preset window, ft².
pub(crate) const PRESET_WINDOW_AREA: f64 = 15.0;

/// How a tier resolves one input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// The preset always wins; a supplied value is discarded.
    Preset,
    /// A supplied value wins; otherwise the preset is used.
    InputOrPreset,
    /// A non-empty value must be supplied.
    Required,
}

/// Field rules for one [`DifficultyTier`].
#[derive(Debug, Clone, Copy)]
struct TierPolicy {
    envelope: Rule,
    occupants: Rule,
    roof: Rule,
    appliances: Rule,
}

impl TierPolicy {
    fn for_tier(tier: DifficultyTier) -> Self {
        match tier {
            DifficultyTier::Low => Self {
                envelope: Rule::Preset,
                occupants: Rule::Preset,
                roof: Rule::Preset,
                appliances: Rule::Preset,
            },
            DifficultyTier::Medium => Self {
                envelope: Rule::Preset,
                occupants: Rule::InputOrPreset,
                roof: Rule::InputOrPreset,
                appliances: Rule::InputOrPreset,
            },
            DifficultyTier::High => Self {
                envelope: Rule::Required,
                occupants: Rule::InputOrPreset,
                roof: Rule::InputOrPreset,
                appliances: Rule::Required,
            },
        }
    }
}

/// A fully resolved input: every value the load stages read is present and
/// within range.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NormalizedInput {
    pub(crate) tier: DifficultyTier,
    pub(crate) room: RoomGeometry,
    pub(crate) climate: &'static ClimateRecord,
    pub(crate) windows: Vec<EnvelopeElement>,
    pub(crate) walls: Vec<EnvelopeElement>,
    pub(crate) roof: RoofCondition,
    pub(crate) occupants: u32,
    pub(crate) appliances: ApplianceLoad,
    pub(crate) ventilation_override: Option<f64>,
}

/// Two 15 ft² windows, one facing west and one facing east.
pub(crate) fn preset_windows() -> Vec<EnvelopeElement> {
    vec![
        EnvelopeElement::new(PRESET_WINDOW_AREA, Direction::West),
        EnvelopeElement::new(PRESET_WINDOW_AREA, Direction::East),
    ]
}

/// The four walls of the room; the length runs east-west.
pub(crate) fn preset_walls(room: &RoomGeometry) -> Vec<EnvelopeElement> {
    let long = room.length * room.height;
    let short = room.breadth * room.height;
    vec![
        EnvelopeElement::new(long, Direction::North),
        EnvelopeElement::new(short, Direction::East),
        EnvelopeElement::new(long, Direction::South),
        EnvelopeElement::new(short, Direction::West),
    ]
}

/// Two lighting units, plus a ceiling fan above the low tier.
pub(crate) fn preset_appliances(tier: DifficultyTier) -> ApplianceLoad {
    let lights = ApplianceLoad::new().with(Appliance::Lights, 2);
    match tier {
        DifficultyTier::Low => lights,
        DifficultyTier::Medium | DifficultyTier::High => lights.with(Appliance::Fan, 1),
    }
}

/// Validates `input` and fills every field its tier does not take from the caller.
///
/// # Errors
///
/// Returns a [`ValidationError`] for bad dimensions, an unknown city, missing
/// high-tier lists, unusable element areas or a bad ventilation override.
pub(crate) fn normalize(input: &CalculatorInput) -> Result<NormalizedInput, ValidationError> {
    let room = validate_room(&input.room)?;
    let climate =
        reference::city(&input.city).ok_or_else(|| ValidationError::UnknownCity(input.city.clone()))?;

    let policy = TierPolicy::for_tier(input.tier);

    let windows = resolve(
        policy.envelope,
        "windows",
        input.windows.as_ref(),
        preset_windows,
        |windows| !windows.is_empty(),
        ValidationError::MissingWindows,
    )?;
    let walls = resolve(
        policy.envelope,
        "walls",
        input.walls.as_ref(),
        || preset_walls(&room),
        |walls| !walls.is_empty(),
        ValidationError::MissingWalls,
    )?;
    validate_elements(ElementKind::Window, &windows)?;
    validate_elements(ElementKind::Wall, &walls)?;

    let occupant_preset = match input.tier {
        DifficultyTier::Low => LOW_TIER_OCCUPANTS,
        DifficultyTier::Medium | DifficultyTier::High => DEFAULT_OCCUPANTS,
    };
    let occupants = resolve_value(policy.occupants, "occupants", input.occupants, occupant_preset);
    let roof = resolve_value(policy.roof, "roof", input.roof, RoofCondition::default());

    let appliances = resolve(
        policy.appliances,
        "appliances",
        input.appliances.as_ref(),
        || preset_appliances(input.tier),
        |appliances| !appliances.is_empty(),
        ValidationError::MissingAppliances,
    )?;

    let ventilation_override = input
        .ventilation_cfm
        .map(|cfm| {
            StrictlyPositive::new(cfm)
                .map(|cfm| cfm.into_inner())
                .map_err(ValidationError::InvalidVentilation)
        })
        .transpose()?;

    let normalized = NormalizedInput {
        tier: input.tier,
        room,
        climate,
        windows,
        walls,
        roof,
        occupants,
        appliances,
        ventilation_override,
    };
    debug!(
        tier = ?normalized.tier,
        city = normalized.climate.name,
        windows = normalized.windows.len(),
        walls = normalized.walls.len(),
        occupants = normalized.occupants,
        roof = %normalized.roof,
        "normalized calculator input"
    );
    Ok(normalized)
}

fn validate_room(room: &RoomGeometry) -> Result<RoomGeometry, ValidationError> {
    let check = |dimension: &'static str, value: f64| {
        StrictlyPositive::new(value)
            .map(|value| value.into_inner())
            .map_err(|source| ValidationError::InvalidDimension { dimension, source })
    };
    let room = RoomGeometry::new(
        check("length", room.length)?,
        check("breadth", room.breadth)?,
        check("height", room.height)?,
    );
    // Finite sides can still multiply out to an infinite volume.
    check("volume", room.volume())?;
    Ok(room)
}

fn validate_elements(kind: ElementKind, elements: &[EnvelopeElement]) -> Result<(), ValidationError> {
    for (index, element) in elements.iter().enumerate() {
        StrictlyPositive::new(element.area)
            .map_err(|source| ValidationError::InvalidElementArea { kind, index, source })?;
    }
    Ok(())
}

/// Resolves a collection-valued field.
fn resolve<T: Clone>(
    rule: Rule,
    field: &'static str,
    supplied: Option<&T>,
    preset: impl FnOnce() -> T,
    is_present: impl Fn(&T) -> bool,
    missing: ValidationError,
) -> Result<T, ValidationError> {
    match rule {
        Rule::Preset => {
            if supplied.is_some() {
                warn!(field, "tier uses a preset; supplied value ignored");
            }
            Ok(preset())
        }
        Rule::InputOrPreset => Ok(supplied.cloned().unwrap_or_else(preset)),
        Rule::Required => supplied
            .filter(|&value| is_present(value))
            .cloned()
            .ok_or(missing),
    }
}

/// Resolves a scalar field. Scalars are never required.
fn resolve_value<T>(rule: Rule, field: &'static str, supplied: Option<T>, preset: T) -> T {
    match (rule, supplied) {
        (Rule::Preset, Some(_)) => {
            warn!(field, "tier uses a preset; supplied value ignored");
            preset
        }
        (_, None) => preset,
        (Rule::InputOrPreset | Rule::Required, Some(value)) => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    fn room() -> RoomGeometry {
        RoomGeometry::new(15.0, 12.0, 10.0)
    }

    fn high_input() -> CalculatorInput {
        CalculatorInput::new(room(), "Mumbai")
            .with_tier(DifficultyTier::High)
            .with_windows(vec![EnvelopeElement::new(20.0, Direction::South)])
            .with_walls(vec![EnvelopeElement::new(150.0, Direction::North)])
            .with_appliances(ApplianceLoad::new().with(Appliance::Tv, 1))
    }

    #[test]
    fn low_tier_replaces_everything_with_presets() {
        let input = CalculatorInput::new(room(), "Mumbai")
            .with_windows(vec![EnvelopeElement::new(99.0, Direction::North)])
            .with_occupants(7)
            .with_roof(RoofCondition::Insulated)
            .with_appliances(ApplianceLoad::new().with(Appliance::OvenMicrowave, 3));

        let normalized = normalize(&input).unwrap();

        assert_eq!(normalized.windows, preset_windows());
        assert_eq!(
            normalized.walls,
            vec![
                EnvelopeElement::new(150.0, Direction::North),
                EnvelopeElement::new(120.0, Direction::East),
                EnvelopeElement::new(150.0, Direction::South),
                EnvelopeElement::new(120.0, Direction::West),
            ]
        );
        assert_eq!(normalized.occupants, LOW_TIER_OCCUPANTS);
        assert_eq!(normalized.roof, RoofCondition::Exposed);
        assert_eq!(normalized.appliances, preset_appliances(DifficultyTier::Low));
        assert_eq!(normalized.appliances.count(Appliance::Fan), 0);
    }

    #[test]
    fn medium_tier_takes_occupants_roof_and_appliances() {
        let appliances = ApplianceLoad::new()
            .with(Appliance::Lights, 4)
            .with(Appliance::Fridge, 1);
        let input = CalculatorInput::new(room(), "Pune")
            .with_tier(DifficultyTier::Medium)
            .with_walls(vec![EnvelopeElement::new(1.0, Direction::North)])
            .with_occupants(5)
            .with_roof(RoofCondition::Shaded)
            .with_appliances(appliances.clone());

        let normalized = normalize(&input).unwrap();

        assert_eq!(normalized.walls, preset_walls(&room()));
        assert_eq!(normalized.occupants, 5);
        assert_eq!(normalized.roof, RoofCondition::Shaded);
        assert_eq!(normalized.appliances, appliances);
    }

    #[test]
    fn medium_tier_defaults() {
        let input = CalculatorInput::new(room(), "Pune").with_tier(DifficultyTier::Medium);
        let normalized = normalize(&input).unwrap();
        assert_eq!(normalized.occupants, DEFAULT_OCCUPANTS);
        assert_eq!(normalized.roof, RoofCondition::Exposed);
        assert_eq!(normalized.appliances, preset_appliances(DifficultyTier::Medium));
        assert_eq!(normalized.appliances.count(Appliance::Lights), 2);
        assert_eq!(normalized.appliances.count(Appliance::Fan), 1);
        assert_eq!(normalized.windows, preset_windows());
    }

    #[test]
    fn high_tier_uses_supplied_lists() {
        let normalized = normalize(&high_input()).unwrap();
        assert_eq!(normalized.windows.len(), 1);
        assert_eq!(normalized.walls.len(), 1);
        assert_eq!(normalized.occupants, DEFAULT_OCCUPANTS);
        assert_eq!(normalized.appliances.count(Appliance::Tv), 1);
    }

    #[test]
    fn high_tier_requires_non_empty_lists() {
        let mut input = high_input();
        input.windows = Some(Vec::new());
        input.walls = Some(Vec::new());
        assert_eq!(normalize(&input), Err(ValidationError::MissingWindows));

        let mut input = high_input();
        input.walls = None;
        assert_eq!(normalize(&input), Err(ValidationError::MissingWalls));

        let mut input = high_input();
        input.appliances = Some(ApplianceLoad::new());
        assert_eq!(normalize(&input), Err(ValidationError::MissingAppliances));
    }

    #[test]
    fn rejects_bad_dimensions() {
        let input = CalculatorInput::new(RoomGeometry::new(15.0, 0.0, 10.0), "Mumbai");
        assert_eq!(
            normalize(&input),
            Err(ValidationError::InvalidDimension {
                dimension: "breadth",
                source: ConstraintError::Zero
            })
        );

        let input = CalculatorInput::new(RoomGeometry::new(f64::NAN, 12.0, 10.0), "Mumbai");
        assert!(matches!(
            normalize(&input),
            Err(ValidationError::InvalidDimension { dimension: "length", .. })
        ));
    }

    #[test]
    fn rejects_rooms_whose_volume_overflows() {
        let input = CalculatorInput::new(RoomGeometry::new(1e120, 1e120, 1e120), "Mumbai");
        assert_eq!(
            normalize(&input),
            Err(ValidationError::InvalidDimension {
                dimension: "volume",
                source: ConstraintError::NotFinite
            })
        );
    }

    #[test]
    fn rejects_unknown_city() {
        let input = CalculatorInput::new(room(), "Springfield");
        assert_eq!(
            normalize(&input),
            Err(ValidationError::UnknownCity("Springfield".into()))
        );
    }

    #[test]
    fn rejects_non_positive_element_area() {
        let mut input = high_input();
        input.walls = Some(vec![
            EnvelopeElement::new(100.0, Direction::North),
            EnvelopeElement::new(-5.0, Direction::East),
        ]);
        assert_eq!(
            normalize(&input),
            Err(ValidationError::InvalidElementArea {
                kind: ElementKind::Wall,
                index: 1,
                source: ConstraintError::Negative
            })
        );
    }

    #[test]
    fn ventilation_override_must_be_positive() {
        let input = CalculatorInput::new(room(), "Mumbai").with_ventilation_cfm(0.0);
        assert_eq!(
            normalize(&input),
            Err(ValidationError::InvalidVentilation(ConstraintError::Zero))
        );

        let input = CalculatorInput::new(room(), "Mumbai").with_ventilation_cfm(45.0);
        assert_eq!(normalize(&input).unwrap().ventilation_override, Some(45.0));
    }
}
