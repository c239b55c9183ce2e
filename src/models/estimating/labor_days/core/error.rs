use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while building or running a labor-day estimate.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// A room was given a blank name.
    #[error("room name must not be empty")]
    UnnamedRoom,

    /// A room's area is zero, negative or not a number.
    #[error("invalid area for room {room}")]
    InvalidArea {
        room: String,
        #[source]
        source: ConstraintError,
    },

    /// A room uses a load factor the coefficients do not offer.
    #[error("room {room} uses load factor {factor} BTU/m², which is not configured")]
    UnknownLoadFactor { room: String, factor: u32 },

    /// The estimate does not fit in a whole number of days and hours.
    #[error("estimate of {days} days is out of range")]
    OutOfRange { days: f64 },

    /// A coefficient violates its sign constraint.
    #[error("invalid labor coefficient {name}")]
    InvalidCoefficient {
        name: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The coefficient set offers no load factor at all.
    #[error("labor coefficients list no load factors")]
    NoLoadFactors,

    /// The coefficients could not be decoded.
    #[error("labor coefficients are not valid JSON")]
    Json(#[from] serde_json::Error),
}
