use serde::{Deserialize, Serialize};

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::{EstimateError, ProjectKind};

/// Productivity divisors for one project kind.
///
/// A ducted room adds `TR / ducted_divisor` days and an exposed room adds
/// `TR / exposed_divisor`. The exposed sum is then weighted by
/// `exposed_extra`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectCoefficients {
    pub ducted_divisor: f64,
    pub exposed_divisor: f64,
    pub exposed_extra: f64,
}

/// Tunable constants of the labor-day estimate.
///
/// The [`Default`] value holds the coefficients shipped with the product
/// store. Every field is optional when deserializing, so a partial JSON
/// document overrides only what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaborCoefficients {
    /// Load factors (BTU/h per m²) a room may use.
    pub load_factors: Vec<u32>,

    /// BTU/h added per occupant.
    pub occupant_load: f64,

    /// BTU/h per refrigeration ton.
    pub btu_per_tr: f64,

    /// BTU/h per HP.
    pub btu_per_hp: f64,

    /// Load multiplier for double-height rooms.
    pub double_height: f64,

    /// Load multiplier for projects in a state capital.
    pub capital: f64,

    /// Load multiplier for projects inland or on the coast.
    pub interior: f64,

    /// Day multiplier when as-built documentation is required.
    pub as_built: f64,

    /// Working hours in one installation day.
    pub hours_per_day: u32,

    /// Divisors for residential projects.
    pub residential: ProjectCoefficients,

    /// Divisors for corporate projects.
    pub corporate: ProjectCoefficients,
}

impl Default for LaborCoefficients {
    fn default() -> Self {
        Self {
            load_factors: vec![700, 1000],
            occupant_load: 500.0,
            btu_per_tr: 12_000.0,
            btu_per_hp: 9_600.0,
            double_height: 1.30,
            capital: 1.00,
            interior: 1.15,
            as_built: 1.30,
            hours_per_day: 8,
            residential: ProjectCoefficients {
                ducted_divisor: 10.0,
                exposed_divisor: 16.0,
                exposed_extra: 1.4,
            },
            corporate: ProjectCoefficients {
                ducted_divisor: 7.0,
                exposed_divisor: 11.0,
                exposed_extra: 1.4,
            },
        }
    }
}

impl LaborCoefficients {
    /// Decodes coefficients from JSON and validates them.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::Json`] if the document cannot be decoded, or
    /// any error [`LaborCoefficients::validate`] reports.
    pub fn from_json(json: &str) -> Result<Self, EstimateError> {
        let coefficients: Self = serde_json::from_str(json)?;
        coefficients.validate()?;
        Ok(coefficients)
    }

    /// Checks that every coefficient is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidCoefficient`] naming the first offending
    /// field, or [`EstimateError::NoLoadFactors`] if no load factor is offered.
    pub fn validate(&self) -> Result<(), EstimateError> {
        if self.load_factors.is_empty() {
            return Err(EstimateError::NoLoadFactors);
        }
        for factor in &self.load_factors {
            positive("load_factors", factor)?;
        }
        positive("hours_per_day", &self.hours_per_day)?;

        let scalars = [
            ("occupant_load", self.occupant_load),
            ("btu_per_tr", self.btu_per_tr),
            ("btu_per_hp", self.btu_per_hp),
            ("double_height", self.double_height),
            ("capital", self.capital),
            ("interior", self.interior),
            ("as_built", self.as_built),
            ("residential.ducted_divisor", self.residential.ducted_divisor),
            ("residential.exposed_divisor", self.residential.exposed_divisor),
            ("residential.exposed_extra", self.residential.exposed_extra),
            ("corporate.ducted_divisor", self.corporate.ducted_divisor),
            ("corporate.exposed_divisor", self.corporate.exposed_divisor),
            ("corporate.exposed_extra", self.corporate.exposed_extra),
        ];
        for (name, value) in scalars {
            positive(name, &value)?;
        }
        Ok(())
    }

    /// Returns the divisors for a project kind.
    #[must_use]
    pub fn for_project(&self, kind: ProjectKind) -> &ProjectCoefficients {
        match kind {
            ProjectKind::Residential => &self.residential,
            ProjectKind::Corporate => &self.corporate,
        }
    }
}

fn positive<T>(name: &'static str, value: &T) -> Result<(), EstimateError>
where
    StrictlyPositive: Constraint<T>,
{
    <StrictlyPositive as Constraint<T>>::check(value)
        .map_err(|source| EstimateError::InvalidCoefficient { name, source })
}
