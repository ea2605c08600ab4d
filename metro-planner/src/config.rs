//! Application configuration from command-line arguments and environment.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Default network description, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data/kyiv.json";

/// Environment variable naming the network description file.
pub const DATA_FILE_ENV: &str = "METRO_DATA_FILE";

/// Default `tracing` filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Metro route planner
#[derive(Debug, Parser)]
#[command(name = "metro-planner")]
#[command(version, about = "Interactive metro route planner", long_about = None)]
struct Cli {
    /// Network description file; takes precedence over --data
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Network description file
    #[arg(short, long, value_name = "PATH", env = "METRO_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Log filter, used when RUST_LOG is unset
    #[arg(short, long, value_name = "FILTER", default_value = DEFAULT_LOG_FILTER)]
    log: String,
}

/// Runtime configuration for the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path of the JSON network description.
    pub data_file: PathBuf,

    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl AppConfig {
    /// Read configuration from the process arguments and environment.
    ///
    /// Prints usage and exits on invalid arguments, `--help` or `--version`.
    pub fn from_env() -> Self {
        Self::from_cli(Cli::parse())
    }

    /// Build configuration from an explicit argument list, program name
    /// first.
    ///
    /// Precedence for the data file: a positional path, then `--data`, then
    /// `METRO_DATA_FILE`, then [`DEFAULT_DATA_FILE`].
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).map(Self::from_cli)
    }

    fn from_cli(cli: Cli) -> Self {
        Self {
            data_file: cli.path.unwrap_or(cli.data),
            log_filter: cli.log,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
