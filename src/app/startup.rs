use crate::adapters::build_adapters;
use crate::config::toml_config::RaceConfig;
use crate::core::race::RaceCoordinator;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Exit code for a rejected command line.
pub const EXIT_USAGE: i32 = 64;
/// Exit code when the configuration or the providers cannot be set up. Kept
/// apart from every `Outcome::exit_code` so a caller can tell "never raced"
/// from "raced and lost".
pub const EXIT_CONFIG: i32 = 78;

/// Validates the configuration and wires the providers into a coordinator.
pub fn build_coordinator(config: &RaceConfig) -> Result<RaceCoordinator> {
    config.validate()?;
    let adapters = build_adapters(config)?;
    Ok(RaceCoordinator::new(adapters, config.deadline()))
}

/// Everything that has to succeed before a race can start.
pub fn prepare() -> Result<RaceCoordinator> {
    let config = RaceConfig::load()?;
    build_coordinator(&config)
}
