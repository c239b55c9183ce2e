//! Public sizing and estimating models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are grouped by concern: [`sizing`] selects equipment, and
//! [`estimating`] budgets installation work.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail and is **not** re-exported as part of the public API;
//! only the input, output and error types it defines are.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that holds its
//! reference data (a borrowed [`Catalog`](crate::support::catalog::Catalog)
//! or an owned coefficient set) and delegates to the model-specific core API.

pub mod estimating;
pub mod sizing;
