use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::{Brand, Orientation, ProductLine};

/// Errors raised while building or querying a [`Catalog`](super::Catalog).
///
/// These are integration errors: the catalog itself is unusable or lacks a
/// brand the caller was entitled to ask for. An empty lookup result is never
/// reported through this type.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog has no section at all for a brand.
    #[error("{line} catalog has no section for {brand}")]
    MissingBrand { line: ProductLine, brand: Brand },

    /// A brand appears in more than one section of a snapshot.
    #[error("{line} catalog has more than one section for {brand}")]
    DuplicateBrand { line: ProductLine, brand: Brand },

    /// A numeric field violates its sign constraint.
    #[error("invalid {field} for {item}")]
    InvalidValue {
        /// Entry the value belongs to.
        item: String,

        /// Field name.
        field: &'static str,

        /// Violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// A condenser's hard maximum is below its nominal capacity.
    #[error("{item}: maximum capacity {max} is below nominal {nominal}")]
    MaxBelowNominal { item: String, nominal: u32, max: u32 },

    /// Condensers in a bucket are not sorted by ascending nominal capacity.
    #[error("{brand} {orientation} condensers are not in ascending nominal order at {item}")]
    UnorderedCondensers {
        brand: Brand,
        orientation: Orientation,
        item: String,
    },

    /// A Multi-Split model has neither listed combinations nor an evaporator
    /// count to generate them from.
    #[error("{item} lists no combinations and has no evaporator count to generate them")]
    MissingCombinations { item: String },

    /// A generated Multi-Split model has more ports than any system accepts.
    #[error("{item}: {count} evaporators exceeds the limit of {limit}")]
    TooManyEvaporators {
        item: String,
        count: usize,
        limit: usize,
    },

    /// The snapshot could not be decoded.
    #[error("catalog snapshot is not valid JSON")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// Creates an invalid value error with context.
    pub(super) fn invalid(
        item: impl Into<String>,
        field: &'static str,
        source: ConstraintError,
    ) -> Self {
        Self::InvalidValue {
            item: item.into(),
            field,
            source,
        }
    }
}
