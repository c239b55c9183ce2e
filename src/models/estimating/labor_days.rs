//! Labor-day ("diárias") estimation.
//!
//! [`LaborDaysEstimator`] is the [`twine_core::Model`] adapter over the
//! internal `core` module.

mod core;

pub use self::core::{
    EstimateError, LaborCoefficients, LaborEstimate, Location, ParseChoiceError, Project,
    ProjectCoefficients, ProjectKind, Room, RoomLoad, TerminalKind,
};

use twine_core::Model;

/// Estimates installation days and working hours for a project.
///
/// # Example
///
/// ```
/// use hvac_sizing::models::estimating::labor_days::{
///     LaborDaysEstimator, Location, Project, ProjectKind, Room, TerminalKind,
/// };
///
/// let project = Project::new(ProjectKind::Residential, Location::Capital)
///     .with_room(Room::new("Sala", 30.0, 700, TerminalKind::HiWall).unwrap());
///
/// let estimate = LaborDaysEstimator::default().estimate(&project).unwrap();
/// assert_eq!(estimate.days, 1);
/// assert_eq!(estimate.hours, 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaborDaysEstimator {
    coefficients: LaborCoefficients,
}

impl LaborDaysEstimator {
    /// Creates an estimator with custom coefficients.
    ///
    /// # Errors
    ///
    /// Returns an [`EstimateError`] if any coefficient is invalid.
    pub fn new(coefficients: LaborCoefficients) -> Result<Self, EstimateError> {
        coefficients.validate()?;
        Ok(Self { coefficients })
    }

    /// Returns the coefficients in use.
    #[must_use]
    pub fn coefficients(&self) -> &LaborCoefficients {
        &self.coefficients
    }

    /// Estimates the days and hours needed to install a project.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::UnknownLoadFactor`] if a room's load factor is
    /// not one of the configured factors, or [`EstimateError::OutOfRange`] if
    /// the day or hour count does not fit in a `u32`.
    pub fn estimate(&self, project: &Project) -> Result<LaborEstimate, EstimateError> {
        self::core::estimate(&self.coefficients, project)
    }
}

impl Model for LaborDaysEstimator {
    type Input = Project;
    type Output = LaborEstimate;
    type Error = EstimateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.estimate(input)
    }
}
