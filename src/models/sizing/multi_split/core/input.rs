use std::{fmt, str::FromStr};

use tracing::trace;

use crate::support::{
    catalog::{Brand, ParseBrandError},
    combination::{CombinationKey, MAX_EVAPORATORS, MULTI_SPLIT_DOMAIN},
    simultaneity::MultiSplitMode,
};

/// Parses free-text evaporator capacities (e.g. `"9, 12"`).
///
/// Each comma-separated token contributes the integer at its start, if any,
/// so `"12k"` reads as 12 and `"x"` is skipped. Values outside
/// [`MULTI_SPLIT_DOMAIN`] are dropped, then only the first
/// [`MAX_EVAPORATORS`] survivors are kept. Nothing here is an error.
#[must_use]
pub fn parse_evaporators(text: &str) -> Vec<u32> {
    normalize(text.split(',').filter_map(leading_integer))
}

/// Restricts raw values to the evaporator domain and request size.
fn normalize(values: impl IntoIterator<Item = i64>) -> Vec<u32> {
    values
        .into_iter()
        .filter_map(|value| {
            let kept = u32::try_from(value)
                .ok()
                .filter(|v| MULTI_SPLIT_DOMAIN.contains(v));
            if kept.is_none() {
                trace!(value, "dropping evaporator outside the Multi-Split domain");
            }
            kept
        })
        .take(MAX_EVAPORATORS)
        .collect()
}

/// Reads an optionally signed decimal integer at the start of a trimmed token.
fn leading_integer(token: &str) -> Option<i64> {
    let token = token.trim();
    let (sign, digits) = match token.as_bytes().first()? {
        b'-' => (-1, &token[1..]),
        b'+' => (1, &token[1..]),
        _ => (1, token),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    // Saturate absurdly long inputs; they fall outside the domain either way.
    let magnitude = digits[..end]
        .parse::<i64>()
        .ok()
        .or_else(|| (end > 0).then_some(i64::MAX))?;
    Some(sign * magnitude)
}

/// Which brands a Multi-Split request is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrandSelection {
    /// A single brand.
    Only(Brand),
    /// Every modeled brand.
    All,
}

impl BrandSelection {
    /// Returns the selected brands in presentation order.
    #[must_use]
    pub fn brands(self) -> Vec<Brand> {
        match self {
            Self::Only(brand) => vec![brand],
            Self::All => Brand::ALL.to_vec(),
        }
    }
}

impl From<Brand> for BrandSelection {
    fn from(brand: Brand) -> Self {
        Self::Only(brand)
    }
}

impl fmt::Display for BrandSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Only(brand) => fmt::Display::fmt(brand, f),
            Self::All => f.write_str("todas"),
        }
    }
}

/// Accepts a brand name, or `"todas"`/`"all"` for every brand.
impl FromStr for BrandSelection {
    type Err = ParseBrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "todas" | "all" => Ok(Self::All),
            _ => s.parse().map(Self::Only),
        }
    }
}

/// A Multi-Split sizing request.
///
/// The evaporator list is always within the Multi-Split domain and never
/// longer than [`MAX_EVAPORATORS`]; the constructors drop anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchInput {
    evaporators: Vec<u32>,
    mode: MultiSplitMode,
    brands: BrandSelection,
}

impl MatchInput {
    /// Creates a request from evaporator nominal capacities.
    ///
    /// Out-of-domain values are dropped and the list is truncated to
    /// [`MAX_EVAPORATORS`], exactly as [`parse_evaporators`] does.
    #[must_use]
    pub fn new(
        evaporators: impl IntoIterator<Item = u32>,
        mode: MultiSplitMode,
        brands: impl Into<BrandSelection>,
    ) -> Self {
        Self {
            evaporators: normalize(evaporators.into_iter().map(i64::from)),
            mode,
            brands: brands.into(),
        }
    }

    /// Creates a request from free text; see [`parse_evaporators`].
    ///
    /// # Example
    ///
    /// ```
    /// use hvac_sizing::models::sizing::multi_split::{BrandSelection, MatchInput};
    /// use hvac_sizing::support::simultaneity::MultiSplitMode;
    ///
    /// let input = MatchInput::parse("7,9,99,x,12", MultiSplitMode::Residential, BrandSelection::All);
    /// assert_eq!(input.evaporators(), &[7, 9, 12]);
    /// ```
    #[must_use]
    pub fn parse(text: &str, mode: MultiSplitMode, brands: impl Into<BrandSelection>) -> Self {
        Self {
            evaporators: parse_evaporators(text),
            mode,
            brands: brands.into(),
        }
    }

    /// Returns the evaporators in the order entered.
    #[must_use]
    pub fn evaporators(&self) -> &[u32] {
        &self.evaporators
    }

    /// Returns the canonical combination key of the evaporators.
    #[must_use]
    pub fn key(&self) -> CombinationKey {
        CombinationKey::new(self.evaporators.iter().copied())
    }

    /// Returns the simultaneity mode.
    #[must_use]
    pub fn mode(&self) -> MultiSplitMode {
        self.mode
    }

    /// Returns the brand selection.
    #[must_use]
    pub fn brands(&self) -> BrandSelection {
        self.brands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_malformed_and_out_of_domain_tokens() {
        assert_eq!(parse_evaporators("7,9,99,x,12"), vec![7, 9, 12]);
        assert_eq!(parse_evaporators(" 9 ,, 12 "), vec![9, 12]);
        assert_eq!(parse_evaporators("-9, 0, 9"), vec![9]);
        assert!(parse_evaporators("").is_empty());
        assert!(parse_evaporators("   ").is_empty());
    }

    #[test]
    fn reads_integer_prefix_of_each_token() {
        assert_eq!(parse_evaporators("12abc, 9.5, +18"), vec![12, 9, 18]);
        assert_eq!(parse_evaporators("k12"), Vec::<u32>::new());
        assert_eq!(parse_evaporators("99999999999999999999999, 7"), vec![7]);
    }

    #[test]
    fn filters_domain_before_capping_length() {
        assert_eq!(
            parse_evaporators("7, 9, 12, 18, 24, 30"),
            vec![7, 9, 12, 18, 24]
        );
        // An out-of-domain token before the cap does not use up a slot.
        assert_eq!(
            parse_evaporators("30, 7, 9, 12, 18, 24"),
            vec![7, 9, 12, 18, 24]
        );
        assert_eq!(
            parse_evaporators("7, 7, 7, 7, 7, 9"),
            vec![7, 7, 7, 7, 7]
        );
    }

    #[test]
    fn structured_input_is_normalized_the_same_way() {
        let input = MatchInput::new([24, 30, 9], MultiSplitMode::Corporate, Brand::Lg);
        assert_eq!(input.evaporators(), &[24, 9]);
        assert_eq!(input.key(), CombinationKey::new([9, 24]));
        assert_eq!(input.brands(), BrandSelection::Only(Brand::Lg));
    }

    #[test]
    fn parses_brand_selection() {
        assert_eq!("Todas".parse(), Ok(BrandSelection::All));
        assert_eq!("daikin".parse(), Ok(BrandSelection::Only(Brand::Daikin)));
        assert!("carrier".parse::<BrandSelection>().is_err());
        assert_eq!(BrandSelection::All.brands(), Brand::ALL.to_vec());
    }
}
