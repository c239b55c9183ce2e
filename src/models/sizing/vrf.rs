//! VRF condenser selection.
//!
//! [`CondenserSelector`] is the [`twine_core::Model`] adapter over the
//! internal `core` module.

mod core;

pub use self::core::{
    EvaporatorLine, RatedCondenser, SelectError, Selection, SelectionInput, Status,
};

use twine_core::Model;

use crate::support::catalog::Catalog;

/// Selects VRF condensing units from a catalog.
///
/// # Example
///
/// ```
/// use hvac_sizing::models::sizing::vrf::{CondenserSelector, EvaporatorLine, SelectionInput};
/// use hvac_sizing::support::{
///     catalog::{Brand, Catalog, Orientation},
///     simultaneity::VrfPreset,
/// };
/// use twine_core::Model;
///
/// let catalog = Catalog::builtin();
/// let line = EvaporatorLine::from_catalog(&catalog, Brand::Samsung, "Duto", 36, 2)
///     .unwrap()
///     .unwrap();
/// let input = SelectionInput::new(Brand::Samsung, Orientation::Vertical, VrfPreset::Standard, vec![line]);
///
/// let selection = CondenserSelector::new(&catalog).call(&input).unwrap();
/// assert_eq!(selection.sum, 76_432);
/// assert_eq!(selection.ideal().unwrap().name, "Samsung VRF 8HP");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CondenserSelector<'a> {
    catalog: &'a Catalog,
}

impl<'a> CondenserSelector<'a> {
    /// Creates a selector over the given catalog.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Rates the request's condenser bucket and picks the ideal condenser.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError`] if the brand has no VRF section.
    pub fn select(&self, input: &SelectionInput) -> Result<Selection, SelectError> {
        self::core::select(self.catalog, input)
    }
}

impl Model for CondenserSelector<'_> {
    type Input = SelectionInput;
    type Output = Selection;
    type Error = SelectError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.select(input)
    }
}
