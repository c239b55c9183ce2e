use crate::support::{
    catalog::{Brand, Catalog, Orientation},
    constraint::{Constrained, StrictlyPositive},
    simultaneity::SimultaneityPercent,
};

use super::SelectError;

/// One VRF evaporator line item: `quantity` identical units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaporatorLine {
    kind: String,
    nominal: u32,
    real: u32,
    quantity: u32,
}

impl EvaporatorLine {
    /// Creates a line item from explicit capacities.
    ///
    /// `real` is in the brand's rating unit and may be zero for an unrated
    /// placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::Quantity`] if `quantity` is zero.
    pub fn new(
        kind: impl Into<String>,
        nominal: u32,
        real: u32,
        quantity: u32,
    ) -> Result<Self, SelectError> {
        let quantity = Constrained::<u32, StrictlyPositive>::new(quantity)?;
        Ok(Self {
            kind: kind.into(),
            nominal,
            real,
            quantity: quantity.into_inner(),
        })
    }

    /// Creates a line item whose rated capacity comes from the catalog.
    ///
    /// Returns `Ok(None)` if the brand does not list that type and size.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::Catalog`] if the brand has no VRF section, or
    /// [`SelectError::Quantity`] if `quantity` is zero.
    pub fn from_catalog(
        catalog: &Catalog,
        brand: Brand,
        kind: &str,
        nominal: u32,
        quantity: u32,
    ) -> Result<Option<Self>, SelectError> {
        catalog
            .evaporator_real(brand, kind, nominal)?
            .map(|real| Self::new(kind.trim(), nominal, real, quantity))
            .transpose()
    }

    /// Returns the equipment type.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the nominal label.
    #[must_use]
    pub fn nominal(&self) -> u32 {
        self.nominal
    }

    /// Returns the rated capacity of one unit.
    #[must_use]
    pub fn real(&self) -> u32 {
        self.real
    }

    /// Returns the number of units.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns `real × quantity`.
    #[must_use]
    pub fn load(&self) -> u64 {
        u64::from(self.real) * u64::from(self.quantity)
    }
}

/// A VRF condenser selection request.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionInput {
    /// Brand whose catalog is searched.
    pub brand: Brand,

    /// Condenser orientation to search.
    pub orientation: Orientation,

    /// Requested simultaneity, before any brand cap.
    pub percent: SimultaneityPercent,

    /// Evaporator line items making up the load.
    pub lines: Vec<EvaporatorLine>,
}

impl SelectionInput {
    /// Creates a request.
    #[must_use]
    pub fn new(
        brand: Brand,
        orientation: Orientation,
        percent: impl Into<SimultaneityPercent>,
        lines: Vec<EvaporatorLine>,
    ) -> Self {
        Self {
            brand,
            orientation,
            percent: percent.into(),
            lines,
        }
    }

    /// Returns the summed evaporator load.
    #[must_use]
    pub fn total_load(&self) -> u64 {
        self.lines.iter().map(EvaporatorLine::load).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::{constraint::ConstraintError, simultaneity::VrfPreset};

    #[test]
    fn quantity_must_be_positive() {
        assert!(matches!(
            EvaporatorLine::new("Hi Wall", 9, 9_554, 0),
            Err(SelectError::Quantity(ConstraintError::Zero))
        ));
        assert_eq!(EvaporatorLine::new("Hi Wall", 9, 9_554, 3).unwrap().load(), 28_662);
    }

    #[test]
    fn rated_capacity_comes_from_catalog() {
        let catalog = Catalog::builtin();

        let line = EvaporatorLine::from_catalog(&catalog, Brand::Daikin, "Duto", 18, 2)
            .unwrap()
            .unwrap();
        assert_eq!(line.real(), 50);
        assert_eq!(line.load(), 100);

        assert!(
            EvaporatorLine::from_catalog(&catalog, Brand::Samsung, "Piso Teto", 12, 1)
                .unwrap()
                .is_none()
        );
        assert!(matches!(
            EvaporatorLine::from_catalog(&catalog, Brand::Lg, "Hi Wall", 9, 1),
            Err(SelectError::Catalog(_))
        ));
    }

    #[test]
    fn total_load_sums_every_line() {
        let input = SelectionInput::new(
            Brand::Samsung,
            Orientation::Vertical,
            VrfPreset::Corporate,
            vec![
                EvaporatorLine::new("4 Vias", 12, 12_000, 1).unwrap(),
                EvaporatorLine::new("Hi Wall", 9, 9_554, 2).unwrap(),
            ],
        );
        assert_eq!(input.total_load(), 31_108);
    }
}
