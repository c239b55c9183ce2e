//! Multi-Split condenser matching.
//!
//! [`MultiSplitMatcher`] is the [`twine_core::Model`] adapter; the matching
//! logic lives in the internal `core` module.

mod core;

pub use self::core::{
    BrandResult, BrandSelection, Compatibility, MatchError, MatchInput, MatchOutcome,
    SevenAsNine, Verdict, parse_evaporators,
};

use twine_core::Model;

use crate::support::catalog::Catalog;

/// Matches evaporator combinations against a catalog's Multi-Split models.
///
/// # Example
///
/// ```
/// use hvac_sizing::models::sizing::multi_split::{MatchInput, MultiSplitMatcher};
/// use hvac_sizing::support::{catalog::{Brand, Catalog}, simultaneity::MultiSplitMode};
/// use twine_core::Model;
///
/// let catalog = Catalog::builtin();
/// let matcher = MultiSplitMatcher::new(&catalog);
///
/// let input = MatchInput::parse("9, 12", MultiSplitMode::Residential, Brand::Lg);
/// let outcome = matcher.call(&input).unwrap();
/// assert_eq!(outcome.best_for(Brand::Lg).unwrap().model, "LG 18");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MultiSplitMatcher<'a> {
    catalog: &'a Catalog,
}

impl<'a> MultiSplitMatcher<'a> {
    /// Creates a matcher over the given catalog.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Evaluates a request.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if a selected brand has no Multi-Split section.
    pub fn evaluate(&self, input: &MatchInput) -> Result<MatchOutcome, MatchError> {
        self::core::evaluate(self.catalog, input)
    }
}

impl Model for MultiSplitMatcher<'_> {
    type Input = MatchInput;
    type Output = MatchOutcome;
    type Error = MatchError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.evaluate(input)
    }
}
