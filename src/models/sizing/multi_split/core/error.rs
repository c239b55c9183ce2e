use thiserror::Error;

use crate::support::catalog::CatalogError;

/// Errors that can occur while evaluating a Multi-Split request.
///
/// Finding no compatible model is not an error; it is reported through
/// [`BrandResult::best`](super::BrandResult::best).
#[derive(Debug, Error)]
pub enum MatchError {
    /// The catalog lacks a section for a selected brand.
    #[error("catalog lookup failed")]
    Catalog(#[from] CatalogError),
}
