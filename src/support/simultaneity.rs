//! Simultaneity policy shared by the sizing models.
//!
//! Multi-Split sizing uses a named [`MultiSplitMode`] that turns a model's
//! nominal and maximum capacities into an effective limit. VRF sizing uses a
//! raw [`SimultaneityPercent`], usually picked from a [`VrfPreset`], which some
//! brands cap before use.
//!
//! The two product lines apply different brand rules. Daikin caps the VRF
//! percentage at 130 but the Multi-Split mode factors are the same for every
//! brand. Daikin also rewrites 7k evaporators as 9k when checking its
//! Multi-Split combination lists.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::support::{
    catalog::Brand,
    combination::CombinationKey,
    constraint::{Constrained, ConstraintError, StrictlyPositive},
    format::Percent,
};

/// How a Multi-Split condenser's effective limit is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiSplitMode {
    /// `min(nominal × 1.40, max)`.
    Residential,
    /// `min(nominal × 1.10, max)`.
    Corporate,
    /// The model's hard maximum.
    MaxCapacity,
}

impl MultiSplitMode {
    /// Returns the factor applied to the nominal capacity, if the mode uses one.
    #[must_use]
    pub fn factor(self) -> Option<f64> {
        match self {
            Self::Residential => Some(1.4),
            Self::Corporate => Some(1.1),
            Self::MaxCapacity => None,
        }
    }

    /// Returns the effective capacity limit for a model.
    ///
    /// # Example
    ///
    /// ```
    /// use hvac_sizing::support::simultaneity::MultiSplitMode;
    ///
    /// assert_eq!(MultiSplitMode::Residential.effective_limit(18, 24), 24.0);
    /// assert_eq!(MultiSplitMode::MaxCapacity.effective_limit(18, 30), 30.0);
    /// ```
    #[must_use]
    pub fn effective_limit(self, nominal: u32, max: u32) -> f64 {
        let max = f64::from(max);
        match self.factor() {
            Some(factor) => (f64::from(nominal) * factor).min(max),
            None => max,
        }
    }

    /// Returns the label used in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Residential => "residencial",
            Self::Corporate => "corporativo",
            Self::MaxCapacity => "capacidade máxima",
        }
    }
}

impl fmt::Display for MultiSplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a mode or preset name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown simultaneity mode: {0:?}")]
pub struct ParseModeError(pub String);

/// Accepts English and Portuguese names, case-insensitively.
impl FromStr for MultiSplitMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "residential" | "residencial" => Ok(Self::Residential),
            "corporate" | "corporativo" => Ok(Self::Corporate),
            "max_capacity" | "maxcapacity" | "capacidade_máxima" | "capacidade_maxima" => {
                Ok(Self::MaxCapacity)
            }
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}

/// Named VRF simultaneity presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VrfPreset {
    /// 110 %.
    Corporate,
    /// 130 %.
    Standard,
    /// 145 %.
    Residential,
}

impl VrfPreset {
    /// Returns the preset's percentage.
    #[must_use]
    pub fn percent(self) -> f64 {
        match self {
            Self::Corporate => 110.0,
            Self::Standard => 130.0,
            Self::Residential => 145.0,
        }
    }
}

impl FromStr for VrfPreset {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "corporate" | "corporativo" => Ok(Self::Corporate),
            "standard" | "padrao" | "padrão" => Ok(Self::Standard),
            "residential" | "residencial" => Ok(Self::Residential),
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}

/// A strictly positive simultaneity percentage (e.g. `110.0`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SimultaneityPercent(Constrained<f64, StrictlyPositive>);

impl SimultaneityPercent {
    /// Creates a percentage.
    ///
    /// # Errors
    ///
    /// Returns an error if `percent` is not strictly positive.
    pub fn new(percent: f64) -> Result<Self, ConstraintError> {
        StrictlyPositive::new(percent).map(Self)
    }

    /// Returns the percentage.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0.into_inner()
    }

    /// Returns the percentage as a ratio (`110.0` → `1.1`).
    #[must_use]
    pub fn ratio(self) -> f64 {
        self.value() / 100.0
    }
}

impl From<VrfPreset> for SimultaneityPercent {
    fn from(preset: VrfPreset) -> Self {
        // Preset percentages are positive literals.
        Self(Constrained::new_unchecked(preset.percent()))
    }
}

impl fmt::Display for SimultaneityPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Percent(self.value()), f)
    }
}

/// Returns the highest VRF percentage a brand accepts, if it caps at all.
#[must_use]
pub fn vrf_percent_cap(brand: Brand) -> Option<SimultaneityPercent> {
    match brand {
        Brand::Daikin => Some(SimultaneityPercent::from(VrfPreset::Standard)),
        Brand::Lg | Brand::Samsung => None,
    }
}

/// Applies the brand's VRF cap to a requested percentage.
///
/// # Example
///
/// ```
/// use hvac_sizing::support::{catalog::Brand, simultaneity::{SimultaneityPercent, apply_vrf_cap}};
///
/// let requested = SimultaneityPercent::new(145.0).unwrap();
/// assert_eq!(apply_vrf_cap(Brand::Daikin, requested).value(), 130.0);
/// assert_eq!(apply_vrf_cap(Brand::Samsung, requested).value(), 145.0);
/// ```
#[must_use]
pub fn apply_vrf_cap(brand: Brand, requested: SimultaneityPercent) -> SimultaneityPercent {
    match vrf_percent_cap(brand) {
        Some(cap) if requested.value() > cap.value() => {
            debug!(
                %brand,
                requested = requested.value(),
                applied = cap.value(),
                "capping VRF simultaneity"
            );
            cap
        }
        _ => requested,
    }
}

/// Returns the `(from, to)` nominal substitution a brand applies before
/// looking up its Multi-Split combination lists.
#[must_use]
pub fn multi_split_substitution(brand: Brand) -> Option<(u32, u32)> {
    match brand {
        Brand::Daikin => Some((7, 9)),
        Brand::Lg | Brand::Samsung => None,
    }
}

/// Returns the key used to look up `key` in a brand's combination lists.
#[must_use]
pub fn lookup_key(brand: Brand, key: &CombinationKey) -> CombinationKey {
    match multi_split_substitution(brand) {
        Some((from, to)) => key.substitute(from, to),
        None => key.clone(),
    }
}

fn normalize_name(s: &str) -> String {
    s.trim().to_lowercase().replace([' ', '-'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn effective_limits() {
        assert_relative_eq!(MultiSplitMode::Residential.effective_limit(18, 24), 24.0);
        assert_relative_eq!(MultiSplitMode::Residential.effective_limit(28, 48), 39.2);
        assert_relative_eq!(MultiSplitMode::Corporate.effective_limit(18, 24), 19.8);
        assert_relative_eq!(MultiSplitMode::Corporate.effective_limit(18, 19), 19.0);
        assert_relative_eq!(MultiSplitMode::MaxCapacity.effective_limit(18, 30), 30.0);
    }

    #[test]
    fn parses_mode_names() {
        assert_eq!("Residencial".parse::<MultiSplitMode>(), Ok(MultiSplitMode::Residential));
        assert_eq!("corporate".parse::<MultiSplitMode>(), Ok(MultiSplitMode::Corporate));
        assert_eq!(
            "Capacidade Máxima".parse::<MultiSplitMode>(),
            Ok(MultiSplitMode::MaxCapacity)
        );
        assert_eq!("max-capacity".parse::<MultiSplitMode>(), Ok(MultiSplitMode::MaxCapacity));
        assert!("turbo".parse::<MultiSplitMode>().is_err());

        assert_eq!("padrão".parse::<VrfPreset>(), Ok(VrfPreset::Standard));
        assert_eq!("Corporativo".parse::<VrfPreset>(), Ok(VrfPreset::Corporate));
    }

    #[test]
    fn presets() {
        assert_relative_eq!(SimultaneityPercent::from(VrfPreset::Corporate).ratio(), 1.1);
        assert_relative_eq!(SimultaneityPercent::from(VrfPreset::Standard).value(), 130.0);
        assert_relative_eq!(SimultaneityPercent::from(VrfPreset::Residential).value(), 145.0);
    }

    #[test]
    fn percent_must_be_positive() {
        assert_eq!(SimultaneityPercent::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(SimultaneityPercent::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            SimultaneityPercent::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn percent_renders_with_one_decimal_comma() {
        assert_eq!(SimultaneityPercent::new(132.5).unwrap().to_string(), "132,5%");
        assert_eq!(SimultaneityPercent::from(VrfPreset::Corporate).to_string(), "110,0%");
    }

    #[test]
    fn only_daikin_caps_vrf_percent() {
        let high = SimultaneityPercent::new(145.0).unwrap();
        let low = SimultaneityPercent::new(110.0).unwrap();

        assert_relative_eq!(apply_vrf_cap(Brand::Daikin, high).value(), 130.0);
        assert_relative_eq!(apply_vrf_cap(Brand::Daikin, low).value(), 110.0);
        assert_relative_eq!(apply_vrf_cap(Brand::Samsung, high).value(), 145.0);
        assert_relative_eq!(apply_vrf_cap(Brand::Lg, high).value(), 145.0);
    }

    #[test]
    fn only_daikin_substitutes_sevens() {
        let key = CombinationKey::new([7, 9]);
        assert_eq!(lookup_key(Brand::Daikin, &key), CombinationKey::new([9, 9]));
        assert_eq!(lookup_key(Brand::Samsung, &key), key);
        assert_eq!(lookup_key(Brand::Lg, &key), key);
    }
}
