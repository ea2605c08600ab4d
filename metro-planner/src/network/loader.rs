//! JSON network loader.
//!
//! Reads a network description of the form
//!
//! ```json
//! {
//!   "lines": [{ "number": 1, "name": "Red" }],
//!   "stations": { "1": ["Central", "Harbour"] },
//!   "connections": [[{ "line": 1, "station": "Central" }, { "line": 2, "station": "Park" }]]
//! }
//! ```
//!
//! and registers lines, then each line's stations in physical order, then
//! connection groups. Any reference to an undeclared line or station
//! rejects the whole document.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use crate::domain::LineNumber;

use super::builder::NetworkBuilder;
use super::error::{LoadError, NetworkError};
use super::index::NetworkIndex;

/// A line declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDto {
    pub number: u32,
    pub name: String,
}

/// One member of a connection group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionPointDto {
    pub line: u32,
    pub station: String,
}

/// The whole network document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkData {
    pub lines: Vec<LineDto>,
    /// Station names per line number, in physical order.
    #[serde(default, deserialize_with = "unique_station_lists")]
    pub stations: BTreeMap<u32, Vec<String>>,
    #[serde(default)]
    pub connections: Vec<Vec<ConnectionPointDto>>,
}

/// Deserialize the per-line station lists, rejecting a line listed twice.
fn unique_station_lists<'de, D>(deserializer: D) -> Result<BTreeMap<u32, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StationLists;

    impl<'de> Visitor<'de> for StationLists {
        type Value = BTreeMap<u32, Vec<String>>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from line number to station names")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut lists = BTreeMap::new();
            while let Some((line, names)) = map.next_entry::<u32, Vec<String>>()? {
                if lists.insert(line, names).is_some() {
                    return Err(de::Error::custom(format!(
                        "duplicate station list for line {line}"
                    )));
                }
            }
            Ok(lists)
        }
    }

    deserializer.deserialize_map(StationLists)
}

impl NetworkData {
    /// Build an index from the document.
    pub fn into_index(self) -> Result<NetworkIndex, NetworkError> {
        let mut builder = NetworkBuilder::new();

        for line in self.lines {
            builder.add_line(LineNumber(line.number), line.name);
        }

        for (number, names) in self.stations {
            let line = LineNumber(number);
            if !builder.has_line(line) {
                return Err(NetworkError::UnknownLine(line));
            }
            for name in names {
                builder.add_station(line, name)?;
            }
        }

        for group in &self.connections {
            builder.add_connection(
                group
                    .iter()
                    .map(|point| (LineNumber(point.line), point.station.as_str())),
            )?;
        }

        Ok(builder.build())
    }
}

/// Parse a network document from a JSON string.
pub fn load_from_str(json: &str) -> Result<NetworkIndex, LoadError> {
    let data: NetworkData = serde_json::from_str(json)?;
    Ok(data.into_index()?)
}

/// Read and parse a network document from a file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<NetworkIndex, LoadError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let index = load_from_str(&json)?;

    info!(
        path = %path.display(),
        lines = index.line_count(),
        stations = index.station_count(),
        connections = index.connection_count(),
        "network loaded"
    );

    Ok(index)
}
