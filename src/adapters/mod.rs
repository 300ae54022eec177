// Adapters layer: one module per external CEP provider plus the shared HTTP helpers.

pub mod brasilapi;
pub mod http;
pub mod viacep;

use crate::config::toml_config::RaceConfig;
use crate::domain::ports::ProviderAdapter;
use crate::utils::error::Result;
use std::sync::Arc;

pub use brasilapi::BrasilApiAdapter;
pub use viacep::ViaCepAdapter;

/// Builds the fixed provider set. Each adapter gets its own HTTP client.
pub fn build_adapters(config: &RaceConfig) -> Result<Vec<Arc<dyn ProviderAdapter>>> {
    let request_timeout = config.request_timeout();

    let adapters: Vec<Arc<dyn ProviderAdapter>> = vec![
        Arc::new(ViaCepAdapter::new(
            config.providers.viacep.url_template.clone(),
            request_timeout,
        )?),
        Arc::new(BrasilApiAdapter::new(
            config.providers.brasilapi.url_template.clone(),
            request_timeout,
        )?),
    ];

    Ok(adapters)
}
