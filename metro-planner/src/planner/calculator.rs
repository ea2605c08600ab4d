//! Route search by increasing number of transfers.
//!
//! The search does not weigh distances between lines. It tries, in order:
//!
//! 1. a ride along a single line,
//! 2. a ride with one transfer between the origin's and destination's lines,
//! 3. a ride with two transfers via an intermediate line.
//!
//! The first strategy that yields a route wins, so a route with fewer
//! transfers is preferred regardless of how many stations it passes.
//! Within strategies 2 and 3 every pairing of origin-line and
//! destination-line stations is tried, and the candidate with the fewest
//! stations is kept (the first one found on ties).

use tracing::{debug, trace};

use crate::domain::{Line, LineNumber, StationId};
use crate::network::NetworkIndex;

use super::config::DurationConfig;
use super::route::Route;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// No route with at most two transfers connects the stations
    #[error("no route found from station {from} to station {to}")]
    NoRoute { from: StationId, to: StationId },
}

/// Travel direction along a line while walking its station sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Undetermined,
    Forward,
    Backward,
}

/// Computes routes and duration estimates over a [`NetworkIndex`].
///
/// # Examples
///
/// ```
/// use metro_planner::domain::LineNumber;
/// use metro_planner::network::NetworkBuilder;
/// use metro_planner::planner::RouteCalculator;
///
/// let mut builder = NetworkBuilder::new();
/// builder.add_line(LineNumber(1), "Red");
/// for name in ["West", "Central", "East"] {
///     builder.add_station(LineNumber(1), name).unwrap();
/// }
/// let index = builder.build();
///
/// let calculator = RouteCalculator::new(&index);
/// let east = index.get_station("East").unwrap();
/// let west = index.get_station("West").unwrap();
///
/// let route = calculator.shortest_route(east, west).unwrap();
/// let names: Vec<&str> = route
///     .stations()
///     .iter()
///     .map(|&id| index.station(id).name())
///     .collect();
/// assert_eq!(names, ["East", "Central", "West"]);
/// assert_eq!(calculator.calculate_duration(route.stations()), 5.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteCalculator<'a> {
    index: &'a NetworkIndex,
    config: DurationConfig,
}

impl<'a> RouteCalculator<'a> {
    /// Create a calculator with the default duration costs.
    pub fn new(index: &'a NetworkIndex) -> Self {
        Self::with_config(index, DurationConfig::default())
    }

    /// Create a calculator with custom duration costs.
    pub fn with_config(index: &'a NetworkIndex, config: DurationConfig) -> Self {
        Self { index, config }
    }

    /// Returns the duration costs in use.
    pub fn config(&self) -> &DurationConfig {
        &self.config
    }

    /// Find the route between two stations with the fewest transfers.
    ///
    /// Routes needing more than two transfers are not searched for and
    /// yield [`RouteError::NoRoute`]. A route from a station to itself is
    /// that single station.
    pub fn shortest_route(&self, from: StationId, to: StationId) -> Result<Route, RouteError> {
        if let Some(route) = self.route_on_the_line(from, to) {
            debug!(%from, %to, stations = route.len(), "route found on a single line");
            return Ok(Route::new(route));
        }

        if let Some(route) = self.route_with_one_connection(from, to) {
            debug!(%from, %to, stations = route.len(), "route found with one transfer");
            return Ok(Route::new(route));
        }

        if let Some(route) = self.route_with_two_connections(from, to) {
            debug!(%from, %to, stations = route.len(), "route found with two transfers");
            return Ok(Route::new(route));
        }

        debug!(%from, %to, "no route within two transfers");
        Err(RouteError::NoRoute { from, to })
    }

    /// Estimate the travel time of a station sequence.
    ///
    /// Each hop costs [`DurationConfig::inter_station_mins`] when both
    /// stations are on the same line and [`DurationConfig::transfer_mins`]
    /// otherwise. Sequences with fewer than two stations cost nothing.
    pub fn calculate_duration(&self, stations: &[StationId]) -> f64 {
        stations
            .windows(2)
            .map(|pair| self.config.hop_cost(!self.same_line(pair[0], pair[1])))
            .sum()
    }

    fn line_number(&self, station: StationId) -> LineNumber {
        self.index.station(station).line()
    }

    fn same_line(&self, a: StationId, b: StationId) -> bool {
        self.line_number(a) == self.line_number(b)
    }

    /// Stations of `station`'s line in physical order.
    fn line_stations(&self, station: StationId) -> &'a [StationId] {
        self.index
            .line_of(station)
            .map(Line::stations)
            .unwrap_or_default()
    }

    fn route_on_the_line(&self, from: StationId, to: StationId) -> Option<Vec<StationId>> {
        if !self.same_line(from, to) {
            return None;
        }
        let route = self.segment(from, to);
        (!route.is_empty()).then_some(route)
    }

    /// Walk the shared line of `from` and `to` once, collecting the stations
    /// between them. The result starts at `from` whichever way the line
    /// runs.
    fn segment(&self, from: StationId, to: StationId) -> Vec<StationId> {
        let mut route = Vec::new();
        let mut direction = Direction::Undetermined;

        for &station in self.line_stations(from) {
            if direction == Direction::Undetermined {
                if station == from {
                    direction = Direction::Forward;
                } else if station == to {
                    direction = Direction::Backward;
                }
            }

            if direction != Direction::Undetermined {
                route.push(station);
            }

            let reached_end = match direction {
                Direction::Forward => station == to,
                Direction::Backward => station == from,
                Direction::Undetermined => false,
            };
            if reached_end {
                break;
            }
        }

        if direction == Direction::Backward {
            route.reverse();
        }
        route
    }

    fn route_with_one_connection(&self, from: StationId, to: StationId) -> Option<Vec<StationId>> {
        if self.same_line(from, to) {
            return None;
        }

        let mut best = None;
        for &src in self.line_stations(from) {
            for &dst in self.line_stations(to) {
                if !self.index.is_connected(src, dst) {
                    continue;
                }

                let mut way = self.segment(from, src);
                way.extend(self.segment(dst, to));

                trace!(%src, %dst, stations = way.len(), "one-transfer candidate");
                keep_shorter(&mut best, way);
            }
        }
        best
    }

    /// Route along a line shared by a transfer target of `src` and a
    /// transfer target of `dst`, taking the first such pair in station
    /// order.
    fn route_via_connected_line(&self, src: StationId, dst: StationId) -> Option<Vec<StationId>> {
        let dst_connected = self.index.get_connected_stations(dst);
        for &from in self.index.get_connected_stations(src) {
            for &to in dst_connected {
                if self.same_line(from, to) {
                    return Some(self.segment(from, to));
                }
            }
        }
        None
    }

    fn route_with_two_connections(
        &self,
        from: StationId,
        to: StationId,
    ) -> Option<Vec<StationId>> {
        if self.same_line(from, to) {
            return None;
        }

        let mut best = None;
        for &src in self.line_stations(from) {
            for &dst in self.line_stations(to) {
                let Some(middle) = self.route_via_connected_line(src, dst) else {
                    continue;
                };

                let mut way = self.segment(from, src);
                way.extend(middle);
                way.extend(self.segment(dst, to));

                trace!(%src, %dst, stations = way.len(), "two-transfer candidate");
                keep_shorter(&mut best, way);
            }
        }
        best
    }
}

/// Replace `best` with `candidate` if it is strictly shorter.
fn keep_shorter(best: &mut Option<Vec<StationId>>, candidate: Vec<StationId>) {
    if best.as_ref().is_none_or(|current| current.len() > candidate.len()) {
        *best = Some(candidate);
    }
}
