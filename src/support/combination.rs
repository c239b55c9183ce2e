//! Canonical evaporator combinations.
//!
//! A Multi-Split condenser is validated against *multisets* of evaporator
//! nominal capacities: `[9, 12]` and `[12, 9]` are the same installation, while
//! `[7, 7, 9]` and `[7, 9, 9]` are not. [`CombinationKey`] is the canonical form
//! of such a multiset (ascending, duplicates kept) and is what manufacturer
//! combination sets are keyed by.

use std::{collections::BTreeSet, fmt, num::ParseIntError, str::FromStr};

/// Evaporator nominal capacities (thousands of BTU/h) a Multi-Split system accepts.
pub const MULTI_SPLIT_DOMAIN: [u32; 5] = [7, 9, 12, 18, 24];

/// Largest number of evaporators a Multi-Split request may contain.
pub const MAX_EVAPORATORS: usize = 5;

/// Canonical, order-independent key for a multiset of evaporator nominals.
///
/// # Example
///
/// ```
/// use hvac_sizing::support::combination::CombinationKey;
///
/// let a = CombinationKey::new([9, 7, 12]);
/// let b = CombinationKey::new([12, 9, 7]);
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "7,9,12");
/// assert_eq!(a.total(), 28);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CombinationKey(Vec<u32>);

impl CombinationKey {
    /// Builds the canonical key for the given nominal capacities.
    pub fn new(nominals: impl IntoIterator<Item = u32>) -> Self {
        let mut values: Vec<u32> = nominals.into_iter().collect();
        values.sort_unstable();
        Self(values)
    }

    /// Returns the nominal capacities in ascending order.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.0
    }

    /// Returns the sum of the nominal capacities.
    ///
    /// Summed in `u64`, so any key built from `u32` values is representable.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().copied().map(u64::from).sum()
    }

    /// Returns the number of evaporators in the combination.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the combination has no evaporators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a new key with every `from` replaced by `to`.
    #[must_use]
    pub fn substitute(&self, from: u32, to: u32) -> Self {
        Self::new(self.0.iter().map(|&v| if v == from { to } else { v }))
    }
}

impl fmt::Display for CombinationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Parses the comma-joined form produced by [`Display`](fmt::Display).
///
/// The values need not be sorted; the result is canonical either way.
impl FromStr for CombinationKey {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        s.split(',')
            .map(|token| token.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

/// Generates every combination a port- and capacity-limited condenser accepts.
///
/// Returns all non-empty multisets drawn from `domain` with at most
/// `max_evaporators` members and a sum no greater than `cap_max`.
/// The search only extends non-decreasing sequences, so each multiset is
/// visited exactly once.
///
/// # Example
///
/// ```
/// use hvac_sizing::support::combination::{CombinationKey, generate_combinations};
///
/// let set = generate_combinations(&[7, 9, 12, 18, 24], 24, 2);
/// assert!(set.contains(&CombinationKey::new([9, 12])));
/// assert!(!set.contains(&CombinationKey::new([12, 18])));
/// assert!(!set.contains(&CombinationKey::new([7, 7, 7])));
/// ```
#[must_use]
pub fn generate_combinations(
    domain: &[u32],
    cap_max: u32,
    max_evaporators: usize,
) -> BTreeSet<CombinationKey> {
    let mut domain = domain.to_vec();
    domain.sort_unstable();
    domain.dedup();

    let mut found = BTreeSet::new();
    let mut current = Vec::with_capacity(max_evaporators.min(MAX_EVAPORATORS));
    extend(&domain, 0, 0, cap_max, max_evaporators, &mut current, &mut found);
    found
}

fn extend(
    domain: &[u32],
    start: usize,
    sum: u32,
    cap_max: u32,
    max_evaporators: usize,
    current: &mut Vec<u32>,
    found: &mut BTreeSet<CombinationKey>,
) {
    if !current.is_empty() {
        // `current` is non-decreasing by construction, so it is already canonical.
        found.insert(CombinationKey(current.clone()));
    }
    if current.len() >= max_evaporators {
        return;
    }

    for (offset, &value) in domain[start..].iter().enumerate() {
        // Domain is sorted; every later value overshoots too.
        let Some(next) = sum.checked_add(value).filter(|&next| next <= cap_max) else {
            break;
        };
        current.push(value);
        extend(
            domain,
            start + offset,
            next,
            cap_max,
            max_evaporators,
            current,
            found,
        );
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: [u32; 5] = MULTI_SPLIT_DOMAIN;

    #[test]
    fn key_is_order_independent() {
        let expected = CombinationKey::new([7, 9, 12]);
        for permutation in [
            [7, 9, 12],
            [7, 12, 9],
            [9, 7, 12],
            [9, 12, 7],
            [12, 7, 9],
            [12, 9, 7],
        ] {
            assert_eq!(CombinationKey::new(permutation), expected);
        }
    }

    #[test]
    fn duplicates_are_kept() {
        let a = CombinationKey::new([7, 7, 9]);
        let b = CombinationKey::new([7, 9, 9]);
        assert_ne!(a, b);
        assert_eq!(a.len(), 3);
        assert_eq!(a.to_string(), "7,7,9");
    }

    #[test]
    fn parses_display_form() {
        let key: CombinationKey = "12, 9,7".parse().unwrap();
        assert_eq!(key.values(), &[7, 9, 12]);
        assert_eq!(key.to_string().parse::<CombinationKey>().unwrap(), key);
        assert!("".parse::<CombinationKey>().unwrap().is_empty());
        assert!("9,x".parse::<CombinationKey>().is_err());
    }

    #[test]
    fn substitution_rewrites_every_occurrence() {
        let key = CombinationKey::new([7, 12, 7]);
        assert_eq!(key.substitute(7, 9), CombinationKey::new([9, 9, 12]));
        assert_eq!(key.substitute(18, 24), key);
    }

    #[test]
    fn generated_sets_respect_bounds() {
        for (cap_max, max_evaporators) in [(24, 2), (30, 3), (36, 3), (51, 4), (54, 5), (72, 5)] {
            let set = generate_combinations(&DOMAIN, cap_max, max_evaporators);
            assert!(!set.is_empty());
            for key in &set {
                assert!(!key.is_empty());
                assert!(key.total() <= u64::from(cap_max), "{key} exceeds {cap_max}");
                assert!(key.len() <= max_evaporators, "{key} has too many members");
                assert!(key.values().iter().all(|v| DOMAIN.contains(v)));
            }
        }
    }

    #[test]
    fn generated_set_is_exhaustive_for_small_model() {
        let set = generate_combinations(&DOMAIN, 24, 2);
        let expected: BTreeSet<_> = [
            vec![7],
            vec![9],
            vec![12],
            vec![18],
            vec![24],
            vec![7, 7],
            vec![7, 9],
            vec![7, 12],
            vec![9, 9],
            vec![9, 12],
            vec![12, 12],
        ]
        .into_iter()
        .map(CombinationKey::new)
        .collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn total_is_exact_at_integer_limit() {
        let key = CombinationKey::new([u32::MAX, 9]);
        assert_eq!(key.total(), u64::from(u32::MAX) + 9);
    }

    #[test]
    fn generation_near_integer_limit_stays_bounded() {
        let set = generate_combinations(&[u32::MAX - 1, u32::MAX], u32::MAX, usize::MAX);
        let expected: BTreeSet<_> = [vec![u32::MAX - 1], vec![u32::MAX]]
            .into_iter()
            .map(CombinationKey::new)
            .collect();
        assert_eq!(set, expected);

        let set = generate_combinations(&DOMAIN, 14, usize::MAX);
        assert!(set.contains(&CombinationKey::new([7, 7])));
        assert!(!set.contains(&CombinationKey::new([7, 9])));
    }

    #[test]
    fn zero_members_generates_nothing() {
        assert!(generate_combinations(&DOMAIN, 72, 0).is_empty());
    }

    #[test]
    fn unsorted_domain_is_normalized() {
        let a = generate_combinations(&[24, 7, 18, 9, 12, 9], 36, 3);
        let b = generate_combinations(&DOMAIN, 36, 3);
        assert_eq!(a, b);
    }
}
