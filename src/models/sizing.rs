//! Condensing unit sizing.
//!
//! - [`multi_split`]: matches an evaporator combination against each brand's
//!   Multi-Split condensers.
//! - [`vrf`]: picks a VRF condenser for an aggregated evaporator load.

pub mod multi_split;
pub mod vrf;
