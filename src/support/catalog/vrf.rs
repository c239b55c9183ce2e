use std::collections::BTreeMap;

use super::Orientation;

/// One indoor unit size within an evaporator group.
///
/// `real` is in the brand's rating unit: BTU/h for Samsung, capacity index
/// for Daikin. Condensers of the same brand use the same unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaporatorEntry {
    pub(super) nominal: u32,
    pub(super) real: u32,
    pub(super) codes: Vec<String>,
}

impl EvaporatorEntry {
    /// Returns the nominal label (e.g. 9 for a "9k" unit).
    #[must_use]
    pub fn nominal(&self) -> u32 {
        self.nominal
    }

    /// Returns the rated capacity.
    #[must_use]
    pub fn real(&self) -> u32 {
        self.real
    }

    /// Returns the manufacturer identifier codes, possibly empty.
    #[must_use]
    pub fn codes(&self) -> &[String] {
        &self.codes
    }
}

/// Evaporators of one equipment type (e.g. "Hi Wall", "Duto").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaporatorGroup {
    pub(super) kind: String,
    pub(super) entries: Vec<EvaporatorEntry>,
}

impl EvaporatorGroup {
    /// Returns the equipment type name.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the entries in catalog order. May be empty.
    #[must_use]
    pub fn entries(&self) -> &[EvaporatorEntry] {
        &self.entries
    }

    pub(super) fn matches(&self, kind: &str) -> bool {
        self.kind.trim().eq_ignore_ascii_case(kind.trim())
    }
}

/// A VRF condensing unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CondenserEntry {
    pub(super) name: String,
    pub(super) nominal: u32,
    pub(super) max: u32,
}

impl CondenserEntry {
    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the nominal capacity.
    #[must_use]
    pub fn nominal(&self) -> u32 {
        self.nominal
    }

    /// Returns the hard capacity ceiling.
    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }
}

/// A brand's VRF tables.
///
/// Condenser lists are in non-decreasing nominal order per orientation.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct VrfSection {
    pub(super) simultaneity_ceiling: f64,
    pub(super) evaporators: Vec<EvaporatorGroup>,
    pub(super) condensers: BTreeMap<Orientation, Vec<CondenserEntry>>,
}

impl VrfSection {
    pub(super) fn group(&self, kind: &str) -> Option<&EvaporatorGroup> {
        self.evaporators.iter().find(|group| group.matches(kind))
    }
}
