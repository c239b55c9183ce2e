use thiserror::Error;

use crate::support::{catalog::CatalogError, constraint::ConstraintError};

/// Errors that can occur while building or evaluating a VRF selection.
///
/// Finding no suitable condenser is not an error; it is reported as an
/// absent [`Selection::ideal`](super::Selection::ideal).
#[derive(Debug, Error)]
pub enum SelectError {
    /// The catalog lacks a VRF section for the requested brand.
    #[error("catalog lookup failed")]
    Catalog(#[from] CatalogError),

    /// A line item quantity is not strictly positive.
    #[error("invalid evaporator quantity")]
    Quantity(#[from] ConstraintError),
}
