//! Immutable network index.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::domain::{Line, LineNumber, Station, StationId, StationKey, fold_name};

use super::error::NetworkError;

static NO_CONNECTIONS: BTreeSet<StationId> = BTreeSet::new();

/// Read-only snapshot of lines, stations and transfer connections.
///
/// Produced by [`NetworkBuilder::build`](super::NetworkBuilder::build).
/// Stations are stored in an arena sorted by [`StationKey`] and referenced
/// by [`StationId`]; nothing here is mutated after construction, so the
/// index can be shared freely between readers.
#[derive(Debug, Clone)]
pub struct NetworkIndex {
    lines: BTreeMap<LineNumber, Line>,
    stations: Vec<Station>,
    connections: HashMap<StationId, BTreeSet<StationId>>,
}

impl NetworkIndex {
    pub(super) fn from_parts(
        lines: BTreeMap<LineNumber, Line>,
        stations: Vec<Station>,
        connections: HashMap<StationId, BTreeSet<StationId>>,
    ) -> Self {
        Self {
            lines,
            stations,
            connections,
        }
    }

    /// Returns the line with the given number, if registered.
    pub fn get_line(&self, number: LineNumber) -> Option<&Line> {
        self.lines.get(&number)
    }

    /// Look up a station by name, ignoring case.
    ///
    /// Scans stations in order, so when several lines have a station with
    /// this name the one on the lowest-numbered line wins.
    pub fn get_station(&self, name: &str) -> Option<StationId> {
        let folded = fold_name(name);
        self.stations
            .iter()
            .position(|station| station.key().folded_name() == folded)
            .map(StationId)
    }

    /// Look up a station by name on a specific line.
    ///
    /// Returns `Ok(None)` if the line has no such station. Querying a line
    /// that was never registered is a usage error.
    pub fn get_station_on_line(
        &self,
        name: &str,
        line: LineNumber,
    ) -> Result<Option<StationId>, NetworkError> {
        if !self.lines.contains_key(&line) {
            return Err(NetworkError::UnknownLine(line));
        }

        let query = StationKey::new(line, name);
        let ceiling = self.stations.partition_point(|station| station.key() < &query);
        Ok(self
            .stations
            .get(ceiling)
            .filter(|station| station.key() == &query)
            .map(|_| StationId(ceiling)))
    }

    /// Returns the stations reachable from `station` by a single transfer.
    ///
    /// A station without transfers yields an empty set. The set never
    /// contains `station` itself.
    pub fn get_connected_stations(&self, station: StationId) -> &BTreeSet<StationId> {
        self.connections.get(&station).unwrap_or(&NO_CONNECTIONS)
    }

    /// Returns true if there is a direct transfer from `from` to `to`.
    pub fn is_connected(&self, from: StationId, to: StationId) -> bool {
        self.get_connected_stations(from).contains(&to)
    }

    /// Returns the station behind an id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was produced by a different index.
    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id.0]
    }

    /// Returns the line a station belongs to.
    pub fn line_of(&self, id: StationId) -> Option<&Line> {
        self.get_line(self.station(id).line())
    }

    /// Iterates over all stations in station order.
    pub fn stations(&self) -> impl Iterator<Item = (StationId, &Station)> {
        self.stations
            .iter()
            .enumerate()
            .map(|(i, station)| (StationId(i), station))
    }

    /// Iterates over all lines in number order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    /// Returns the number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Returns the number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the number of connected station pairs (A↔B counted once).
    pub fn connection_count(&self) -> usize {
        self.connections.values().map(BTreeSet::len).sum::<usize>() / 2
    }
}
