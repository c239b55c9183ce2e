//! # HVAC Sizing
//!
//! Equipment sizing and installation estimating models for Multi-Split and
//! VRF air conditioning systems, built on
//! [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations that match Multi-Split
//!   condensers, select VRF condensers and estimate installation labor days.
//! - [`support`]: The capacity catalog and the utilities models share.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code in this crate follows a natural progression as needs emerge:
//!
//! 1. **Model-specific**: Starts in a model's internal `core` module
//! 2. **Crate-level**: If useful across models (e.g., simultaneity rules shared
//!    by the Multi-Split matcher and the VRF selector), it moves to [`support`]
//! 3. **Standalone**: If broadly useful and stable, it may become its own crate
//!    (and be removed from here in a future release)
//!
//! Note: Only utilities at the crate-level (in [`support`]) are part of the public API.
//! Model-specific utility code remains private.

pub mod models;
pub mod support;
