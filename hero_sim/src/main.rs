//! hero_sim - Runs the preset hero showcase and prints the combat log
//!
//! Combat lines go to stdout. Diagnostics go to stderr, filtered by `RUST_LOG`.

use hero_core::{CombatError, ConsoleLog, Scenario};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), CombatError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let scenario = Scenario::showcase()?;
    tracing::info!(
        heroes = scenario.arena.len(),
        bouts = scenario.bouts.len(),
        "starting showcase"
    );

    let attacks = scenario.run(&mut ConsoleLog::new())?;
    tracing::info!(attacks, "showcase finished");

    Ok(())
}
