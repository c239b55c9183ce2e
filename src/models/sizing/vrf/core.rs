//! VRF condenser selection.
//!
//! The load is the sum of `real × quantity` over every evaporator line. Each
//! condenser in the `(brand, orientation)` bucket is rated against that load
//! at the brand-capped simultaneity percentage, and the tightest fit within
//! the simultaneity ceiling becomes the ideal pick.

mod error;
mod input;
mod report;
mod results;
mod selector;

pub use error::SelectError;
pub use input::{EvaporatorLine, SelectionInput};
pub use results::{RatedCondenser, Selection, Status};

pub(super) use selector::select;
