//! Line types.

use std::fmt;

use super::StationId;

/// Numeric identifier of a transit line.
///
/// Lines are ordered and compared by this number alone; the display name
/// plays no part in identity.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::LineNumber;
///
/// assert!(LineNumber(1) < LineNumber(2));
/// assert_eq!(LineNumber(3).to_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineNumber(pub u32);

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A physical transit line.
///
/// Holds the line's stations in physical order: the order they were
/// registered in is the order a train passes them, which matters for
/// direction-sensitive traversal.
#[derive(Debug, Clone)]
pub struct Line {
    number: LineNumber,
    name: String,
    stations: Vec<StationId>,
}

impl Line {
    pub(crate) fn new(number: LineNumber, name: String, stations: Vec<StationId>) -> Self {
        Self {
            number,
            name,
            stations,
        }
    }

    /// Returns the line's identifier.
    pub fn number(&self) -> LineNumber {
        self.number
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stations in physical order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Returns the number of stations on the line.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if no stations were registered on the line.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Line {}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
