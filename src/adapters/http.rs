use crate::utils::error::{LookupError, Result};
use crate::utils::validation::CEP_PLACEHOLDER;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Everything except RFC 3986 unreserved characters is escaped, so a code can
/// never add path segments or a query to the provider URL. Dot segments are
/// rejected in `render_url`.
const CEP_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Builds the client owned by a single adapter. The request timeout bounds
/// abandoned requests even when nobody is waiting for them anymore.
pub fn build_client(provider: &str, request_timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(request_timeout)
        .build()
        .map_err(|e| LookupError::ConfigError {
            message: format!("could not build HTTP client for {}: {}", provider, e),
        })
}

pub fn render_url(provider: &str, template: &str, code: &str) -> Result<Url> {
    // URL parsing collapses "." and "..", which would query another endpoint.
    if code == "." || code == ".." {
        return Err(LookupError::InvalidUrl {
            provider: provider.to_string(),
            url: template.to_string(),
            reason: format!("'{}' is not a usable CEP", code),
        });
    }

    let encoded = utf8_percent_encode(code, CEP_ENCODE_SET).to_string();
    let raw = template.replace(CEP_PLACEHOLDER, &encoded);

    Url::parse(&raw).map_err(|e| LookupError::InvalidUrl {
        provider: provider.to_string(),
        url: raw.clone(),
        reason: e.to_string(),
    })
}

/// Issues one GET and decodes a 2xx JSON body into `T`.
pub async fn fetch_json<T: DeserializeOwned>(client: &Client, provider: &str, url: Url) -> Result<T> {
    tracing::debug!("{} request to: {}", provider, url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| LookupError::Transport {
            provider: provider.to_string(),
            source,
        })?;

    let status = response.status();
    tracing::debug!("{} response status: {}", provider, status);

    if !status.is_success() {
        return Err(LookupError::Status {
            provider: provider.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| LookupError::Transport {
            provider: provider.to_string(),
            source,
        })?;

    serde_json::from_slice(&body).map_err(|source| LookupError::Decode {
        provider: provider.to_string(),
        source,
    })
}

/// Rejects empty canonical fields so a degenerate body never becomes a record.
pub(crate) fn require_field(provider: &str, field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(LookupError::UnsupportedShape {
            provider: provider.to_string(),
            message: format!("missing field '{}'", field),
        }),
    }
}
