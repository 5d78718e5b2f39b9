use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::ElementKind;

/// Why an input could not be sized.
///
/// Every variant renders a message suitable for showing to the person who
/// filled in the form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A room dimension, or the volume they span, is non-positive or not finite.
    #[error("room {dimension} {source}")]
    InvalidDimension {
        dimension: &'static str,
        source: ConstraintError,
    },

    #[error("no climate data for city `{0}`")]
    UnknownCity(String),

    #[error("window details are required for the high tier")]
    MissingWindows,

    #[error("wall details are required for the high tier")]
    MissingWalls,

    #[error("at least one appliance is required for the high tier")]
    MissingAppliances,

    /// A window or wall has an unusable area.
    #[error("{kind} {position} area {source}", position = .index + 1)]
    InvalidElementArea {
        kind: ElementKind,
        /// Zero-based position in its list.
        index: usize,
        source: ConstraintError,
    },

    #[error("ventilation override {0}")]
    InvalidVentilation(ConstraintError),

    /// A design constant is out of range.
    #[error("design constant `{name}` {source}")]
    InvalidConstant {
        name: &'static str,
        source: ConstraintError,
    },
}
