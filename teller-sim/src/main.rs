//! Teller Simulation Binary
//!
//! Replays the canonical transfer scenarios with tracing output.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run -p teller-sim
//!
//! # Run with custom amounts
//! TELLER_INITIAL_DEPOSIT=2000 TELLER_TRANSFER_AMOUNT=750 cargo run -p teller-sim
//! ```
//!
//! # Environment Variables
//!
//! - `TELLER_ENV`: Environment (test, development, production)
//! - `TELLER_INITIAL_DEPOSIT`: Source funding (default: 1000)
//! - `TELLER_TRANSFER_AMOUNT`: Successful transfer amount (default: 500)
//! - `TELLER_FAILING_AMOUNT`: Failing transfer amount (default: 5000)
//! - `TELLER_OVERDRAFT_FLOOR`: Source overdraft floor (default: -100)

use teller_sim::{run, ScenarioReport, SimConfig};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("teller_sim=info".parse()?))
        .init();

    // Load configuration
    let config = SimConfig::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        initial_deposit = config.initial_deposit,
        overdraft_floor = config.overdraft_floor,
        "Teller Simulation"
    );

    let report = run(&config)?;

    print_scenario(&report.successful_transfer);
    print_scenario(&report.failing_transfer);
    print_scenario(&report.independent_hazard);

    Ok(())
}

fn print_scenario(scenario: &ScenarioReport) {
    println!(
        "{}: source = {}, destination = {}",
        scenario.name, scenario.source_balance, scenario.destination_balance
    );
}
