use std::fmt;

use crate::support::{
    catalog::Brand, combination::CombinationKey, simultaneity::MultiSplitMode,
};

use super::BrandSelection;

/// Classification of one condenser model against a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Compatibility {
    /// The combination is not in the model's list, whatever its total.
    NotListed,
    /// Listed, but the total exceeds the effective limit.
    ExceedsLimit,
    /// Listed and within the effective limit.
    Compatible,
}

impl Compatibility {
    /// Returns the report label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NotListed => "Combinação não listada",
            Self::ExceedsLimit => "Ultrapassa limite",
            Self::Compatible => "Compatível",
        }
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of checking one condenser model.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// Brand of the evaluated model.
    pub brand: Brand,

    /// Model display name.
    pub model: String,

    /// Nominal capacity, in thousands of BTU/h.
    pub nominal: u32,

    /// Hard capacity ceiling, in thousands of BTU/h.
    pub max: u32,

    /// Effective capacity limit under the request's mode.
    pub limit: f64,

    /// Key looked up in the model's combination list, after any brand
    /// substitution.
    pub lookup_key: CombinationKey,

    /// Whether the lookup key is a listed combination.
    pub listed: bool,

    /// Whether the total is within the effective limit.
    pub fits: bool,

    /// Total as a percentage of the nominal capacity.
    pub simultaneity_percent: f64,

    /// Total as a percentage of the effective limit.
    pub occupancy_percent: f64,
}

impl Verdict {
    /// Combines membership and limit checks into a single classification.
    #[must_use]
    pub fn compatibility(&self) -> Compatibility {
        match (self.listed, self.fits) {
            (false, _) => Compatibility::NotListed,
            (true, false) => Compatibility::ExceedsLimit,
            (true, true) => Compatibility::Compatible,
        }
    }

    /// Returns `true` if the model can serve the request.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.compatibility() == Compatibility::Compatible
    }
}

/// The best model a brand offers for a request, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandResult {
    /// Evaluated brand.
    pub brand: Brand,

    /// Smallest-nominal compatible model, or `None` if the brand has none.
    pub best: Option<Verdict>,
}

/// Note attached to a report when 7k evaporators were rewritten as 9k.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SevenAsNine {
    /// Only Daikin was evaluated.
    Applied,
    /// Several brands were evaluated; only Daikin lookups were rewritten.
    AppliedForDaikin,
}

impl fmt::Display for SevenAsNine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied => f.write_str("7 tratado como 9"),
            Self::AppliedForDaikin => f.write_str("7 tratado como 9 para Daikin"),
        }
    }
}

/// Complete result of a Multi-Split request.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    /// Normalized evaporators, ascending.
    pub evaporators: CombinationKey,

    /// Sum of the evaporator nominal capacities.
    pub total: u64,

    /// Simultaneity mode the limits were computed under.
    pub mode: MultiSplitMode,

    /// Brands the request asked for.
    pub selection: BrandSelection,

    /// Present when the request had a 7k evaporator and Daikin was evaluated.
    pub seven_as_nine: Option<SevenAsNine>,

    /// One verdict per evaluated model, in brand then catalog order.
    pub verdicts: Vec<Verdict>,

    /// One entry per evaluated brand.
    pub best: Vec<BrandResult>,
}

impl MatchOutcome {
    /// Returns the best model for a brand, if the brand was evaluated and
    /// has a compatible model.
    #[must_use]
    pub fn best_for(&self, brand: Brand) -> Option<&Verdict> {
        self.best
            .iter()
            .find(|result| result.brand == brand)
            .and_then(|result| result.best.as_ref())
    }

    /// Returns the verdict for a model, by name.
    #[must_use]
    pub fn verdict(&self, model: &str) -> Option<&Verdict> {
        self.verdicts.iter().find(|v| v.model == model)
    }
}
