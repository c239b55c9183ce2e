use std::collections::BTreeSet;

use tracing::warn;

use crate::support::{
    combination::{CombinationKey, MAX_EVAPORATORS, MULTI_SPLIT_DOMAIN, generate_combinations},
    constraint::{Constrained, StrictlyPositive},
};

use super::{Brand, CatalogError};

/// A Multi-Split condensing unit and the evaporator combinations it supports.
///
/// Every combination in the set sums to at most [`max`](Self::max) and has at
/// most [`max_evaporators`](Self::max_evaporators) members. Listed combinations
/// that break the capacity bound are dropped at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSplitModel {
    brand: Brand,
    name: String,
    nominal: u32,
    max: u32,
    max_evaporators: usize,
    generated: bool,
    combinations: BTreeSet<CombinationKey>,
}

impl MultiSplitModel {
    /// Constructs a model from a manufacturer's enumerated combination list.
    ///
    /// # Errors
    ///
    /// Returns an error if `max` is below `nominal`.
    pub fn listed(
        brand: Brand,
        name: impl Into<String>,
        nominal: Constrained<u32, StrictlyPositive>,
        max: Constrained<u32, StrictlyPositive>,
        combinations: impl IntoIterator<Item = CombinationKey>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        let (nominal, max) = check_capacities(&name, nominal, max)?;
        Ok(Self::listed_unchecked(brand, name, nominal, max, combinations))
    }

    /// Constructs a model whose combinations are every multiset of the
    /// evaporator domain within its port count and capacity ceiling.
    ///
    /// # Errors
    ///
    /// Returns an error if `max` is below `nominal`, or if `max_evaporators`
    /// exceeds [`MAX_EVAPORATORS`].
    pub fn generated(
        brand: Brand,
        name: impl Into<String>,
        nominal: Constrained<u32, StrictlyPositive>,
        max: Constrained<u32, StrictlyPositive>,
        max_evaporators: usize,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        let (nominal, max) = check_capacities(&name, nominal, max)?;
        if max_evaporators > MAX_EVAPORATORS {
            return Err(CatalogError::TooManyEvaporators {
                item: name,
                count: max_evaporators,
                limit: MAX_EVAPORATORS,
            });
        }
        Ok(Self::generated_unchecked(
            brand,
            name,
            nominal,
            max,
            max_evaporators,
        ))
    }

    /// Constructs a listed model without validating its capacities.
    ///
    /// The caller must ensure `0 < nominal <= max`.
    pub(super) fn listed_unchecked(
        brand: Brand,
        name: String,
        nominal: u32,
        max: u32,
        combinations: impl IntoIterator<Item = CombinationKey>,
    ) -> Self {
        let mut kept = BTreeSet::new();
        for key in combinations {
            if key.is_empty() {
                continue;
            }
            if key.total() > u64::from(max) {
                warn!(model = %name, combination = %key, max, "dropping listed combination above model maximum");
                continue;
            }
            kept.insert(key);
        }

        let max_evaporators = kept.iter().map(CombinationKey::len).max().unwrap_or(0);

        Self {
            brand,
            name,
            nominal,
            max,
            max_evaporators,
            generated: false,
            combinations: kept,
        }
    }

    /// Constructs a generated model without validating its capacities.
    ///
    /// The caller must ensure `0 < nominal <= max` and
    /// `max_evaporators <= MAX_EVAPORATORS`.
    pub(super) fn generated_unchecked(
        brand: Brand,
        name: String,
        nominal: u32,
        max: u32,
        max_evaporators: usize,
    ) -> Self {
        Self {
            brand,
            name,
            nominal,
            max,
            max_evaporators,
            generated: true,
            combinations: generate_combinations(&MULTI_SPLIT_DOMAIN, max, max_evaporators),
        }
    }

    /// Returns the model's brand.
    #[must_use]
    pub fn brand(&self) -> Brand {
        self.brand
    }

    /// Returns the model's display name (e.g. `"LG 18"`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the nominal capacity, in thousands of BTU/h.
    #[must_use]
    pub fn nominal(&self) -> u32 {
        self.nominal
    }

    /// Returns the hard capacity ceiling, in thousands of BTU/h.
    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Returns the largest number of evaporators any combination may have.
    #[must_use]
    pub fn max_evaporators(&self) -> usize {
        self.max_evaporators
    }

    /// Returns `true` if the combination set was generated rather than listed.
    #[must_use]
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Returns the supported combinations.
    #[must_use]
    pub fn combinations(&self) -> &BTreeSet<CombinationKey> {
        &self.combinations
    }

    /// Returns `true` if the exact multiset is a supported combination.
    #[must_use]
    pub fn supports(&self, key: &CombinationKey) -> bool {
        self.combinations.contains(key)
    }
}

fn check_capacities(
    name: &str,
    nominal: Constrained<u32, StrictlyPositive>,
    max: Constrained<u32, StrictlyPositive>,
) -> Result<(u32, u32), CatalogError> {
    let (nominal, max) = (nominal.into_inner(), max.into_inner());
    if max < nominal {
        return Err(CatalogError::MaxBelowNominal {
            item: name.to_owned(),
            nominal,
            max,
        });
    }
    Ok((nominal, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positive(value: u32) -> Constrained<u32, StrictlyPositive> {
        StrictlyPositive::new(value).unwrap()
    }

    #[test]
    fn listed_model_prunes_combinations_above_max() {
        let model = MultiSplitModel::listed(
            Brand::Daikin,
            "Daikin 28",
            positive(28),
            positive(45),
            [
                CombinationKey::new([9, 12]),
                CombinationKey::new([12, 18, 20]),
                CombinationKey::new([9, 9, 9, 9]),
                CombinationKey::default(),
            ],
        )
        .unwrap();

        assert!(model.supports(&CombinationKey::new([12, 9])));
        assert!(!model.supports(&CombinationKey::new([12, 18, 20])));
        assert_eq!(model.combinations().len(), 2);
        assert_eq!(model.max_evaporators(), 4);
        assert!(!model.is_generated());
    }

    #[test]
    fn generated_model_uses_evaporator_domain() {
        let model =
            MultiSplitModel::generated(Brand::Lg, "LG 18", positive(18), positive(24), 2).unwrap();

        assert!(model.is_generated());
        assert!(model.supports(&CombinationKey::new([9, 12])));
        assert!(model.supports(&CombinationKey::new([24])));
        assert!(!model.supports(&CombinationKey::new([7, 7, 7])));
        assert!(model.combinations().iter().all(|k| k.total() <= 24));
    }

    #[test]
    fn max_below_nominal_is_rejected() {
        let err = MultiSplitModel::generated(Brand::Lg, "LG X", positive(30), positive(24), 3)
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MaxBelowNominal {
                nominal: 30,
                max: 24,
                ..
            }
        ));
    }

    #[test]
    fn generated_port_count_is_bounded() {
        let err = MultiSplitModel::generated(
            Brand::Lg,
            "LG 99",
            positive(18),
            positive(24),
            MAX_EVAPORATORS + 1,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::TooManyEvaporators {
                count: 6,
                limit: MAX_EVAPORATORS,
                ..
            }
        ));

        let model =
            MultiSplitModel::generated(Brand::Lg, "LG 18", positive(18), positive(24), 5).unwrap();
        assert_eq!(model.max_evaporators(), MAX_EVAPORATORS);
    }

    #[test]
    fn listed_totals_do_not_overflow() {
        let model = MultiSplitModel::listed(
            Brand::Daikin,
            "Daikin 28",
            positive(28),
            positive(45),
            [
                CombinationKey::new([u32::MAX, 9]),
                CombinationKey::new([u32::MAX, u32::MAX]),
                CombinationKey::new([9, 18]),
            ],
        )
        .unwrap();

        assert_eq!(model.combinations().len(), 1);
        assert!(model.supports(&CombinationKey::new([18, 9])));
    }
}
