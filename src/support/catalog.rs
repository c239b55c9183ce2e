//! Product catalog consulted by the sizing models.
//!
//! A [`Catalog`] is an immutable value holding, per brand:
//!
//! - Multi-Split condenser models with their supported evaporator combinations
//! - VRF evaporator groups mapping nominal labels to rated capacities
//! - VRF condensers bucketed by [`Orientation`], in ascending nominal order
//! - the brand's reference simultaneity ceiling
//!
//! Catalogs are built once, from [`Catalog::builtin`] or from a
//! [`CatalogSnapshot`] of the external product store, and passed by reference
//! to every model.
//!
//! Lookups distinguish two situations. A brand with no section at all in a
//! product line is an integration error ([`CatalogError::MissingBrand`]).
//! A brand that exists but has nothing for the requested type or orientation
//! yields an empty slice or `None`.

mod brand;
mod builtin;
mod error;
mod multi_split;
mod snapshot;
mod vrf;

use std::collections::{BTreeMap, BTreeSet};

use crate::support::combination::CombinationKey;

pub use brand::{Brand, Orientation, ParseBrandError, ParseOrientationError, ProductLine};
pub use error::CatalogError;
pub use multi_split::MultiSplitModel;
pub use snapshot::{
    CatalogSnapshot, CondenserRecord, EvaporatorGroupRecord, EvaporatorRecord, MultiSplitRecord,
    VrfRecord,
};
pub use vrf::{CondenserEntry, EvaporatorEntry, EvaporatorGroup};

use vrf::VrfSection;

/// Validated, read-only product catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    multi_split: BTreeMap<Brand, Vec<MultiSplitModel>>,
    vrf: BTreeMap<Brand, VrfSection>,
}

impl Catalog {
    /// Returns the manufacturer tables shipped with the crate.
    ///
    /// Multi-Split covers all three brands. VRF covers Samsung and Daikin.
    ///
    /// # Example
    ///
    /// ```
    /// use hvac_sizing::support::catalog::{Brand, Catalog, Orientation};
    ///
    /// let catalog = Catalog::builtin();
    /// let vertical = catalog.condensers(Brand::Samsung, Orientation::Vertical).unwrap();
    /// assert_eq!(vertical[0].name(), "Samsung VRF 8HP");
    /// assert_eq!(catalog.evaporator_real(Brand::Samsung, "Hi Wall", 9).unwrap(), Some(9_554));
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// Builds a catalog from a store snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if any row violates a catalog invariant.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Result<Self, CatalogError> {
        Self::try_from(snapshot)
    }

    /// Builds a catalog from the JSON form of a [`CatalogSnapshot`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if the text cannot be decoded, or any
    /// other [`CatalogError`] if a row violates a catalog invariant.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let snapshot: CatalogSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    /// Exports the catalog as a snapshot.
    ///
    /// Reloading the snapshot yields an equal catalog.
    #[must_use]
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot::from(self)
    }

    /// Returns a brand's Multi-Split models in presentation order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingBrand`] if the brand has no Multi-Split section.
    pub fn multi_split_models(&self, brand: Brand) -> Result<&[MultiSplitModel], CatalogError> {
        self.multi_split
            .get(&brand)
            .map(Vec::as_slice)
            .ok_or(CatalogError::MissingBrand {
                line: ProductLine::MultiSplit,
                brand,
            })
    }

    /// Returns the combination set of a brand's Multi-Split model, by name.
    ///
    /// Returns `Ok(None)` if the brand has no model with that name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingBrand`] if the brand has no Multi-Split section.
    pub fn valid_combinations(
        &self,
        brand: Brand,
        model: &str,
    ) -> Result<Option<&BTreeSet<CombinationKey>>, CatalogError> {
        Ok(self
            .multi_split_models(brand)?
            .iter()
            .find(|m| m.name() == model)
            .map(MultiSplitModel::combinations))
    }

    /// Returns a brand's reference simultaneity ceiling, as a ratio.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingBrand`] if the brand has no VRF section.
    pub fn simultaneity_ceiling(&self, brand: Brand) -> Result<f64, CatalogError> {
        Ok(self.vrf_section(brand)?.simultaneity_ceiling)
    }

    /// Returns a brand's VRF evaporator groups.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingBrand`] if the brand has no VRF section.
    pub fn evaporator_groups(&self, brand: Brand) -> Result<&[EvaporatorGroup], CatalogError> {
        Ok(&self.vrf_section(brand)?.evaporators)
    }

    /// Returns the evaporators of one equipment type.
    ///
    /// The type name is matched case-insensitively. An unknown type yields
    /// an empty slice.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingBrand`] if the brand has no VRF section.
    pub fn evaporators(&self, brand: Brand, kind: &str) -> Result<&[EvaporatorEntry], CatalogError> {
        Ok(self
            .vrf_section(brand)?
            .group(kind)
            .map_or(&[][..], EvaporatorGroup::entries))
    }

    /// Returns the rated capacity of an evaporator, if the catalog lists it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingBrand`] if the brand has no VRF section.
    pub fn evaporator_real(
        &self,
        brand: Brand,
        kind: &str,
        nominal: u32,
    ) -> Result<Option<u32>, CatalogError> {
        Ok(self
            .evaporators(brand, kind)?
            .iter()
            .find(|entry| entry.nominal() == nominal)
            .map(EvaporatorEntry::real))
    }

    /// Finds an evaporator by one of its manufacturer codes.
    ///
    /// Codes are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingBrand`] if the brand has no VRF section.
    pub fn evaporator_by_code(
        &self,
        brand: Brand,
        code: &str,
    ) -> Result<Option<(&EvaporatorGroup, &EvaporatorEntry)>, CatalogError> {
        let code = code.trim();
        Ok(self
            .vrf_section(brand)?
            .evaporators
            .iter()
            .find_map(|group| {
                group
                    .entries()
                    .iter()
                    .find(|entry| entry.codes().iter().any(|c| c.eq_ignore_ascii_case(code)))
                    .map(|entry| (group, entry))
            }))
    }

    /// Returns the condensers of one orientation, in ascending nominal order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingBrand`] if the brand has no VRF section.
    pub fn condensers(
        &self,
        brand: Brand,
        orientation: Orientation,
    ) -> Result<&[CondenserEntry], CatalogError> {
        Ok(self
            .vrf_section(brand)?
            .condensers
            .get(&orientation)
            .map_or(&[][..], Vec::as_slice))
    }

    fn vrf_section(&self, brand: Brand) -> Result<&VrfSection, CatalogError> {
        self.vrf.get(&brand).ok_or(CatalogError::MissingBrand {
            line: ProductLine::Vrf,
            brand,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn looks_up_rated_capacity() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.evaporator_real(Brand::Daikin, "Duto", 24).unwrap(),
            Some(63)
        );
        assert_eq!(
            catalog.evaporator_real(Brand::Samsung, " duto ", 42).unwrap(),
            Some(43_675)
        );
        assert_eq!(catalog.evaporator_real(Brand::Samsung, "Duto", 7).unwrap(), None);
        assert_eq!(catalog.evaporator_real(Brand::Samsung, "Cassete", 9).unwrap(), None);
    }

    #[test]
    fn unpopulated_groups_are_empty_not_errors() {
        let catalog = Catalog::builtin();
        assert!(catalog.evaporators(Brand::Samsung, "Piso Teto").unwrap().is_empty());
        assert_eq!(catalog.evaporators(Brand::Daikin, "Piso Teto").unwrap().len(), 5);
    }

    #[test]
    fn resolves_manufacturer_codes() {
        let catalog = Catalog::builtin();

        let (group, entry) = catalog
            .evaporator_by_code(Brand::Daikin, "vewd12")
            .unwrap()
            .unwrap();
        assert_eq!(group.kind(), "Hi Wall");
        assert_eq!(entry.nominal(), 12);
        assert_eq!(entry.real(), 32);

        let (group, entry) = catalog
            .evaporator_by_code(Brand::Samsung, "VEDAS42")
            .unwrap()
            .unwrap();
        assert_eq!(group.kind(), "Duto");
        assert_eq!(entry.real(), 43_675);

        assert!(catalog.evaporator_by_code(Brand::Samsung, "FXAQ20").unwrap().is_none());
    }

    #[test]
    fn exposes_combination_sets_by_model_name() {
        let catalog = Catalog::builtin();

        let set = catalog
            .valid_combinations(Brand::Samsung, "Samsung 18")
            .unwrap()
            .unwrap();
        assert_eq!(set.len(), 9);
        assert!(set.contains(&CombinationKey::new([18, 12])));

        assert!(catalog.valid_combinations(Brand::Samsung, "Samsung 48").unwrap().is_none());
    }

    #[test]
    fn brand_ceilings() {
        let catalog = Catalog::builtin();
        assert_relative_eq!(catalog.simultaneity_ceiling(Brand::Samsung).unwrap(), 1.45);
        assert_relative_eq!(catalog.simultaneity_ceiling(Brand::Daikin).unwrap(), 1.30);
        assert!(matches!(
            catalog.simultaneity_ceiling(Brand::Lg),
            Err(CatalogError::MissingBrand {
                line: ProductLine::Vrf,
                brand: Brand::Lg
            })
        ));
    }

    #[test]
    fn voltage_variants_have_distinct_names() {
        let catalog = Catalog::builtin();
        let names: Vec<_> = catalog
            .condensers(Brand::Daikin, Orientation::Horizontal)
            .unwrap()
            .iter()
            .map(CondenserEntry::name)
            .collect();
        let unique: BTreeSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }
}
