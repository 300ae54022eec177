pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::build_adapters;
pub use app::ConsolePresenter;
pub use config::toml_config::RaceConfig;
pub use core::race::RaceCoordinator;
pub use domain::model::{LookupRecord, LookupRequest, Outcome, ProviderFailure};
pub use domain::ports::{Presenter, ProviderAdapter};
pub use utils::error::{LookupError, Result};
