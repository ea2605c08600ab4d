//! Interactive line-by-line front end.
//!
//! Reads station names, resolves them against the index (re-prompting
//! until a known name is entered), and prints the route with every change
//! of line called out.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::domain::StationId;
use crate::network::NetworkIndex;
use crate::planner::{Route, RouteCalculator, RouteError};

const ORIGIN_PROMPT: &str = "Enter the departure station:";
const DESTINATION_PROMPT: &str = "Enter the destination station:";

/// Prompt loop over arbitrary input and output streams.
pub struct Prompt<'a, R, W> {
    index: &'a NetworkIndex,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Prompt<'a, R, W> {
    pub fn new(index: &'a NetworkIndex, input: R, output: W) -> Self {
        Self {
            index,
            input,
            output,
        }
    }

    /// Ask for a station until a known name is entered.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn take_station(&mut self, message: &str) -> io::Result<Option<StationId>> {
        loop {
            writeln!(self.output, "{message}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let name = line.trim();
            if let Some(id) = self.index.get_station(name) {
                let station = self.index.station(id);
                info!(
                    target: "input_history",
                    station = station.name(),
                    line = %station.line(),
                    "station entered"
                );
                return Ok(Some(id));
            }

            warn!(target: "invalid_stations", input = name, "station not found");
            writeln!(self.output, "Station not found :(")?;
        }
    }

    /// Print a route followed by its estimated duration.
    pub fn render_route(&mut self, calculator: &RouteCalculator<'_>, route: &Route) -> io::Result<()> {
        writeln!(self.output, "Route:")?;
        for line in format_route(self.index, route) {
            writeln!(self.output, "{line}")?;
        }
        writeln!(
            self.output,
            "Estimated duration: {:.1} min",
            calculator.calculate_duration(route.stations())
        )
    }

    /// Answer origin/destination queries until the input ends.
    ///
    /// Returns the number of queries answered.
    pub fn run(&mut self, calculator: &RouteCalculator<'_>) -> io::Result<usize> {
        let mut answered = 0;
        loop {
            let Some(from) = self.take_station(ORIGIN_PROMPT)? else {
                return Ok(answered);
            };
            let Some(to) = self.take_station(DESTINATION_PROMPT)? else {
                return Ok(answered);
            };

            match calculator.shortest_route(from, to) {
                Ok(route) => self.render_route(calculator, &route)?,
                Err(RouteError::NoRoute { .. }) => {
                    writeln!(
                        self.output,
                        "No route found from {} to {} with at most two transfers",
                        self.index.station(from),
                        self.index.station(to)
                    )?;
                }
            }
            writeln!(self.output)?;
            answered += 1;
        }
    }

    /// Consume the prompt, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Format a route as indented lines, one per station.
///
/// A transfer line is inserted before each station reached by changing
/// line.
pub fn format_route(index: &NetworkIndex, route: &Route) -> Vec<String> {
    let mut lines = Vec::with_capacity(route.len());
    let mut previous: Option<StationId> = None;

    for &id in route.stations() {
        let station = index.station(id);
        if let Some(prev) = previous
            && index.station(prev).line() != station.line()
        {
            let line_name = index
                .get_line(station.line())
                .map_or_else(|| station.line().to_string(), |line| line.name().to_string());
            lines.push(format!(
                "\tTransfer to station {} ({} line)",
                station.name(),
                line_name
            ));
        }
        lines.push(format!("\t{}", station.name()));
        previous = Some(id);
    }

    lines
}
