use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Equipment manufacturer.
///
/// Only these three brands are modeled. Not every brand has a section in
/// every product line (the shipped VRF tables cover Samsung and Daikin only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    #[serde(alias = "LG")]
    Lg,
    #[serde(alias = "Samsung")]
    Samsung,
    #[serde(alias = "Daikin")]
    Daikin,
}

impl Brand {
    /// Every modeled brand, in presentation order.
    pub const ALL: [Brand; 3] = [Brand::Lg, Brand::Samsung, Brand::Daikin];

    /// Returns the display name used in model names and reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Brand::Lg => "LG",
            Brand::Samsung => "Samsung",
            Brand::Daikin => "Daikin",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a brand name is not one of the modeled brands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown brand: {0:?}")]
pub struct ParseBrandError(pub String);

impl FromStr for Brand {
    type Err = ParseBrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lg" => Ok(Brand::Lg),
            "samsung" => Ok(Brand::Samsung),
            "daikin" => Ok(Brand::Daikin),
            _ => Err(ParseBrandError(s.to_owned())),
        }
    }
}

/// Mounting orientation of a VRF condensing unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[serde(alias = "Vertical")]
    Vertical,
    #[serde(alias = "Horizontal")]
    Horizontal,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        })
    }
}

/// Error returned when an orientation name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown orientation: {0:?}")]
pub struct ParseOrientationError(pub String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical" => Ok(Orientation::Vertical),
            "horizontal" => Ok(Orientation::Horizontal),
            _ => Err(ParseOrientationError(s.to_owned())),
        }
    }
}

/// Product line a catalog section belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductLine {
    MultiSplit,
    Vrf,
}

impl fmt::Display for ProductLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProductLine::MultiSplit => "Multi-Split",
            ProductLine::Vrf => "VRF",
        })
    }
}
