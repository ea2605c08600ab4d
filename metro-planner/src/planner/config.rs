//! Duration estimate configuration for the route calculator.

/// Default time between neighbouring stations on the same line (minutes).
const DEFAULT_INTER_STATION_MINS: f64 = 2.5;

/// Default time for a transfer between lines (minutes).
const DEFAULT_TRANSFER_MINS: f64 = 3.5;

/// Fixed costs used to estimate how long a route takes.
///
/// There is no timetable data, so every hop costs the same: one value for
/// riding to the next station on a line, one for walking a transfer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationConfig {
    /// Cost of a hop between consecutive stations on the same line.
    pub inter_station_mins: f64,

    /// Cost of a hop between stations on different lines.
    pub transfer_mins: f64,
}

impl DurationConfig {
    /// Create a new configuration with the given costs.
    pub fn new(inter_station_mins: f64, transfer_mins: f64) -> Self {
        Self {
            inter_station_mins,
            transfer_mins,
        }
    }

    /// Returns the cost of a hop, depending on whether it changes line.
    pub fn hop_cost(&self, is_transfer: bool) -> f64 {
        if is_transfer {
            self.transfer_mins
        } else {
            self.inter_station_mins
        }
    }
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self {
            inter_station_mins: DEFAULT_INTER_STATION_MINS,
            transfer_mins: DEFAULT_TRANSFER_MINS,
        }
    }
}
