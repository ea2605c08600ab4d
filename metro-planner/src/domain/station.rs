//! Station types.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::LineNumber;

/// Handle to a station inside a [`NetworkIndex`](crate::network::NetworkIndex).
///
/// Ids are assigned in [`StationKey`] order when the index is built, so
/// comparing two ids from the same index compares the stations they refer
/// to. An id is only meaningful for the index that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(pub(crate) usize);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity of a station: owning line first, then the case-folded name.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::{LineNumber, StationKey};
///
/// let a = StationKey::new(LineNumber(1), "Университет");
/// let b = StationKey::new(LineNumber(1), "УНИВЕРСИТЕТ");
/// let c = StationKey::new(LineNumber(2), "Университет");
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// assert!(a < c);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationKey {
    line: LineNumber,
    folded_name: String,
}

impl StationKey {
    /// Builds the key for `name` on `line`.
    pub fn new(line: LineNumber, name: &str) -> Self {
        Self {
            line,
            folded_name: fold_name(name),
        }
    }

    /// Returns the owning line.
    pub fn line(&self) -> LineNumber {
        self.line
    }

    /// Returns the lowercase form of the name used for comparisons.
    pub fn folded_name(&self) -> &str {
        &self.folded_name
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (line {})", self.folded_name, self.line)
    }
}

/// Case-insensitive form of a station name.
pub(crate) fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// A stop on exactly one line.
///
/// The display name keeps the casing it was registered with. Equality,
/// ordering and hashing all go through the [`StationKey`].
#[derive(Debug, Clone)]
pub struct Station {
    name: String,
    key: StationKey,
}

impl Station {
    /// Creates a station called `name` on `line`.
    pub fn new(name: impl Into<String>, line: LineNumber) -> Self {
        let name = name.into();
        let key = StationKey::new(line, &name);
        Self { name, key }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owning line.
    pub fn line(&self) -> LineNumber {
        self.key.line
    }

    /// Returns the identity key.
    pub fn key(&self) -> &StationKey {
        &self.key
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Station {}

impl PartialOrd for Station {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Station {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_line() {
        let station = Station::new("Лыбидская", LineNumber(3));
        assert_eq!(station.name(), "Лыбидская");
        assert_eq!(station.line(), LineNumber(3));
        assert_eq!(station.key().folded_name(), "лыбидская");
    }

    #[test]
    fn case_differences_on_same_line_are_equal() {
        let a = Station::new("Оболонь", LineNumber(3));
        let b = Station::new("оБОЛОНЬ", LineNumber(3));
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn same_name_on_different_lines_is_distinct() {
        let a = Station::new("Central", LineNumber(1));
        let b = Station::new("Central", LineNumber(2));
        assert_ne!(a, b);
    }

    #[test]
    fn ordering_compares_line_first() {
        let a = Station::new("Zoo", LineNumber(1));
        let b = Station::new("Airport", LineNumber(2));
        assert!(a < b);

        let c = Station::new("airport", LineNumber(1));
        assert!(c < a);
    }

    #[test]
    fn key_folds_case() {
        let station = Station::new("Театральная", LineNumber(1));
        assert_eq!(station.key().folded_name(), fold_name("ТЕАТРАЛЬНАЯ"));
        assert_ne!(station.key().folded_name(), fold_name("Театр"));
    }

    #[test]
    fn display_keeps_original_casing() {
        let station = Station::new("Нивки", LineNumber(2));
        assert_eq!(format!("{}", station), "Нивки");
        assert_eq!(station.key().to_string(), "нивки (line 2)");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Station::new("Славутич", LineNumber(2)));
        assert!(set.contains(&Station::new("СЛАВУТИЧ", LineNumber(2))));
        assert!(!set.contains(&Station::new("Славутич", LineNumber(3))));
    }

    #[test]
    fn station_id_display() {
        assert_eq!(StationId(12).to_string(), "#12");
    }
}
