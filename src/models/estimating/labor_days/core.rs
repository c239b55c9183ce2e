//! Labor-day ("diárias") estimate for an installation project.
//!
//! Each room's thermal load is converted to refrigeration tons, and the tons
//! are divided by a per-project-kind productivity divisor that depends on
//! whether the terminal is ducted or exposed. Exposed work is weighted by an
//! extra factor, the total is scaled for as-built documentation, and the
//! result is rounded up to whole days.

mod coefficients;
mod error;
mod estimate;
mod input;
mod report;

pub use coefficients::{LaborCoefficients, ProjectCoefficients};
pub use error::EstimateError;
pub use estimate::{LaborEstimate, RoomLoad};
pub use input::{Location, ParseChoiceError, Project, ProjectKind, Room, TerminalKind};

pub(super) use estimate::estimate;
