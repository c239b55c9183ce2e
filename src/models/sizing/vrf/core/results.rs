use std::fmt;

use crate::support::{
    catalog::{Brand, Orientation},
    simultaneity::SimultaneityPercent,
};

/// Display status of one condenser against the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    /// Load within the simultaneity-adjusted limit.
    Ok,
    /// Over the adjusted limit but within the hard maximum.
    Warn,
    /// Over the hard maximum.
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ok => "ok",
            Self::Warn => "warn",
            Self::Error => "error",
        })
    }
}

/// A catalog condenser rated against a load.
#[derive(Debug, Clone, PartialEq)]
pub struct RatedCondenser {
    /// Catalog display name.
    pub name: String,

    /// Nominal capacity, in the brand's rating unit.
    pub nominal: u32,

    /// Hard capacity ceiling, in the brand's rating unit.
    pub max: u32,

    /// `round(nominal × percent / 100)`.
    pub limit: u64,

    /// Load as a percentage of nominal, rounded to one decimal.
    pub usage_percent: f64,

    /// Display status against the adjusted limit and the hard maximum.
    pub status: Status,

    /// Whether `load / nominal` is within the simultaneity ratio, unrounded.
    pub within_ceiling: bool,
}

/// Result of a VRF condenser selection.
///
/// Condensers are in catalog order. The ideal pick and its neighbors are
/// positions in that list.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Brand the condensers were drawn from.
    pub brand: Brand,

    /// Condenser orientation searched.
    pub orientation: Orientation,

    /// Percentage the caller asked for.
    pub requested_percent: SimultaneityPercent,

    /// Percentage used, after the brand cap.
    pub applied_percent: SimultaneityPercent,

    /// Brand reference simultaneity ceiling, as a ratio. Reported only.
    pub brand_ceiling: f64,

    /// Sum of `real × quantity` over every line item.
    pub sum: u64,

    /// `round(sum / (applied_percent / 100))`.
    pub min_required: u64,

    /// Every condenser of the bucket, rated against the load.
    pub condensers: Vec<RatedCondenser>,

    pub(super) ideal: Option<usize>,
}

impl Selection {
    /// Returns `true` if the brand cap lowered the requested percentage.
    #[must_use]
    pub fn is_capped(&self) -> bool {
        self.applied_percent != self.requested_percent
    }

    /// Returns the tightest-fitting condenser within the simultaneity ceiling.
    #[must_use]
    pub fn ideal(&self) -> Option<&RatedCondenser> {
        self.ideal.and_then(|i| self.condensers.get(i))
    }

    /// Returns the catalog entry right after the ideal one.
    #[must_use]
    pub fn one_up(&self) -> Option<&RatedCondenser> {
        self.ideal.and_then(|i| self.condensers.get(i + 1))
    }

    /// Returns the catalog entry right before the ideal one.
    #[must_use]
    pub fn one_down(&self) -> Option<&RatedCondenser> {
        self.ideal
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| self.condensers.get(i))
    }
}
