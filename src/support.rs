//! Crate-level utilities shared by the sizing models.
//!
//! These modules are public because they are useful on their own (building a
//! catalog from a store snapshot, canonicalizing combinations), but their APIs
//! are not stable.

pub mod catalog;
pub mod combination;
pub mod constraint;
pub mod format;
pub mod simultaneity;
