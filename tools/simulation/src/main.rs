//! Simulation entry point
//!
//! Runs the random-activity simulation against per-ticker order books and
//! prints the JSON report. An optional argument overrides the feed seed.

use simulation::{SimulationConfig, SimulationRunner};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let mut config = SimulationConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        match arg.parse() {
            Ok(seed) => config.seed = seed,
            Err(_) => {
                eprintln!("usage: simulation [seed]");
                std::process::exit(2);
            }
        }
    }

    tracing::info!(
        seed = config.seed,
        rounds = config.rounds,
        orders_per_round = config.orders_per_round,
        "starting simulation"
    );

    let report = SimulationRunner::new(config).run();
    println!("{}", report.to_json());
}
