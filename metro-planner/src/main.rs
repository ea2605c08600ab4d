use std::io;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use metro_planner::cli::Prompt;
use metro_planner::config::AppConfig;
use metro_planner::network::load_from_path;
use metro_planner::planner::RouteCalculator;

fn main() -> ExitCode {
    let config = AppConfig::from_env();

    // RUST_LOG wins over --log
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let index = match load_from_path(&config.data_file) {
        Ok(index) => index,
        Err(e) => {
            error!(target: "load", path = %config.data_file.display(), error = %e, "failed to load network");
            eprintln!("Failed to load {}: {e}", config.data_file.display());
            return ExitCode::FAILURE;
        }
    };

    let calculator = RouteCalculator::new(&index);

    println!(
        "Metro Route Planner: {} lines, {} stations",
        index.line_count(),
        index.station_count()
    );
    println!();

    let stdin = io::stdin();
    let mut prompt = Prompt::new(&index, stdin.lock(), io::stdout());
    match prompt.run(&calculator) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}
