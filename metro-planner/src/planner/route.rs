//! Route type.

use crate::domain::StationId;
use crate::network::NetworkIndex;

/// An ordered sequence of stations from origin to destination.
///
/// Neighbouring stations are either on the same line or linked by a direct
/// transfer. Routes produced by the calculator always hold at least one
/// station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stations: Vec<StationId>,
}

impl Route {
    /// Wrap a station sequence.
    pub fn new(stations: Vec<StationId>) -> Self {
        Self { stations }
    }

    /// Returns the stations in travel order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Returns the number of stations visited, endpoints included.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Returns the first station.
    pub fn origin(&self) -> Option<StationId> {
        self.stations.first().copied()
    }

    /// Returns the last station.
    pub fn destination(&self) -> Option<StationId> {
        self.stations.last().copied()
    }

    /// Iterates over the hops that change line, as `(alight, board)` pairs.
    pub fn transfers<'a>(
        &'a self,
        index: &'a NetworkIndex,
    ) -> impl Iterator<Item = (StationId, StationId)> + 'a {
        self.stations
            .windows(2)
            .filter(|pair| index.station(pair[0]).line() != index.station(pair[1]).line())
            .map(|pair| (pair[0], pair[1]))
    }

    /// Returns the number of line changes along the route.
    pub fn transfer_count(&self, index: &NetworkIndex) -> usize {
        self.transfers(index).count()
    }
}
