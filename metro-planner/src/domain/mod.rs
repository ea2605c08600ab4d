//! Domain types for the metro route planner.
//!
//! This module contains the network's building blocks: lines and the
//! stations along them. Station identity is a composite key (owning line,
//! case-folded name), so two spellings that differ only in case on the same
//! line are the same station, while equal names on different lines are not.

mod line;
mod station;

pub use line::{Line, LineNumber};
pub use station::{Station, StationId, StationKey};

pub(crate) use station::fold_name;
