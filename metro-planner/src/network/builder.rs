//! Build phase for the network index.
//!
//! Lines, stations and connection groups are registered here in that
//! order. Usage errors are rejected at the call that causes them, so the
//! index produced by [`NetworkBuilder::build`] is always consistent.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

use crate::domain::{Line, LineNumber, Station, StationId, StationKey};

use super::error::NetworkError;
use super::index::NetworkIndex;

/// A line while the network is still being assembled.
#[derive(Debug)]
struct LineDraft {
    name: String,
    stations: Vec<StationKey>,
}

/// Mutable collector that freezes into an immutable [`NetworkIndex`].
///
/// # Examples
///
/// ```
/// use metro_planner::domain::LineNumber;
/// use metro_planner::network::NetworkBuilder;
///
/// let mut builder = NetworkBuilder::new();
/// builder.add_line(LineNumber(1), "Red");
/// builder.add_line(LineNumber(2), "Blue");
/// builder.add_station(LineNumber(1), "Central").unwrap();
/// builder.add_station(LineNumber(2), "Harbour").unwrap();
/// builder
///     .add_connection([(LineNumber(1), "Central"), (LineNumber(2), "Harbour")])
///     .unwrap();
///
/// let index = builder.build();
/// let central = index.get_station("central").unwrap();
/// let harbour = index.get_station("HARBOUR").unwrap();
/// assert!(index.is_connected(central, harbour));
/// assert!(index.is_connected(harbour, central));
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    lines: BTreeMap<LineNumber, LineDraft>,
    stations: BTreeMap<StationKey, Station>,
    connections: BTreeMap<StationKey, BTreeSet<StationKey>>,
}

impl NetworkBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a line.
    ///
    /// Registering a number twice replaces the earlier line. The replaced
    /// line's stations and their connections are dropped with it.
    pub fn add_line(&mut self, number: LineNumber, name: impl Into<String>) {
        let draft = LineDraft {
            name: name.into(),
            stations: Vec::new(),
        };

        if let Some(old) = self.lines.insert(number, draft) {
            debug!(
                line = %number,
                dropped_stations = old.stations.len(),
                "line re-registered, replacing previous definition"
            );
            for key in &old.stations {
                self.stations.remove(key);
                self.connections.remove(key);
            }
            for linked in self.connections.values_mut() {
                linked.retain(|key| key.line() != number);
            }
        }
    }

    /// Register a station at the end of its line's sequence.
    ///
    /// Adding a station that is already present (same line, same name
    /// ignoring case) is a no-op that returns the existing key.
    pub fn add_station(
        &mut self,
        line: LineNumber,
        name: impl Into<String>,
    ) -> Result<StationKey, NetworkError> {
        let draft = self
            .lines
            .get_mut(&line)
            .ok_or(NetworkError::UnknownLine(line))?;

        let station = Station::new(name, line);
        let key = station.key().clone();

        if self.stations.contains_key(&key) {
            debug!(station = station.name(), line = %line, "duplicate station ignored");
            return Ok(key);
        }

        draft.stations.push(key.clone());
        self.stations.insert(key.clone(), station);
        Ok(key)
    }

    /// Register a group of mutually transferable stations.
    ///
    /// Every member becomes connected to every other member. Repeated calls
    /// accumulate. All members are checked before any link is added, so a
    /// rejected group leaves the builder unchanged.
    pub fn add_connection<'a, I>(&mut self, group: I) -> Result<(), NetworkError>
    where
        I: IntoIterator<Item = (LineNumber, &'a str)>,
    {
        let mut members = Vec::new();
        for (line, name) in group {
            if !self.lines.contains_key(&line) {
                return Err(NetworkError::UnknownLine(line));
            }
            let key = StationKey::new(line, name);
            if !self.stations.contains_key(&key) {
                return Err(NetworkError::UnknownStation {
                    line,
                    name: name.to_string(),
                });
            }
            members.push(key);
        }

        if members.is_empty() {
            return Err(NetworkError::EmptyConnection);
        }

        for member in &members {
            let linked = self.connections.entry(member.clone()).or_default();
            linked.extend(members.iter().filter(|other| *other != member).cloned());
        }

        Ok(())
    }

    /// Returns true if the line number has been registered.
    pub fn has_line(&self, number: LineNumber) -> bool {
        self.lines.contains_key(&number)
    }

    /// Freeze the collected network into an index.
    pub fn build(self) -> NetworkIndex {
        // BTreeMap iteration is in key order, so arena positions follow
        // station ordering.
        let stations: Vec<Station> = self.stations.into_values().collect();
        let ids: HashMap<StationKey, StationId> = stations
            .iter()
            .enumerate()
            .map(|(i, station)| (station.key().clone(), StationId(i)))
            .collect();

        let lines: BTreeMap<LineNumber, Line> = self
            .lines
            .into_iter()
            .map(|(number, draft)| {
                let sequence = draft
                    .stations
                    .iter()
                    .filter_map(|key| ids.get(key).copied())
                    .collect();
                (number, Line::new(number, draft.name, sequence))
            })
            .collect();

        let connections: HashMap<StationId, BTreeSet<StationId>> = self
            .connections
            .iter()
            .filter_map(|(key, linked)| {
                let id = *ids.get(key)?;
                let linked: BTreeSet<StationId> = linked
                    .iter()
                    .filter_map(|other| ids.get(other).copied())
                    .collect();
                (!linked.is_empty()).then_some((id, linked))
            })
            .collect();

        debug!(
            lines = lines.len(),
            stations = stations.len(),
            connected_stations = connections.len(),
            "network index built"
        );

        NetworkIndex::from_parts(lines, stations, connections)
    }
}
