//! Multi-Split combination matching.
//!
//! A request is a multiset of evaporator nominal capacities. Each condenser
//! model of each selected brand is checked two ways: the canonical
//! combination must be one the model supports, and its total must fit under
//! the model's effective limit for the requested mode. The smallest model
//! passing both checks is the brand's best option.

mod error;
mod input;
mod matcher;
mod report;
mod results;

pub use error::MatchError;
pub use input::{BrandSelection, MatchInput, parse_evaporators};
pub use results::{BrandResult, Compatibility, MatchOutcome, SevenAsNine, Verdict};

pub(super) use matcher::evaluate;
