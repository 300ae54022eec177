pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "cep-race", version)]
#[command(about = "Looks up a Brazilian CEP on several providers and prints the fastest answer")]
pub struct CliConfig {
    /// Postal code to look up, e.g. 01001000
    pub cep: String,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("cep", &self.cep)
    }
}
