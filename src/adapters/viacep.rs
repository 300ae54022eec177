use crate::adapters::http::{build_client, fetch_json, render_url, require_field};
use crate::domain::model::LookupRecord;
use crate::domain::ports::ProviderAdapter;
use crate::utils::error::{LookupError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const VIACEP_NAME: &str = "ViaCep";

/// ViaCep answers unknown codes with `200 {"erro": true}`.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    cep: Option<String>,
    estado: Option<String>,
    uf: Option<String>,
    localidade: Option<String>,
    erro: Option<serde_json::Value>,
}

pub struct ViaCepAdapter {
    client: Client,
    url_template: String,
}

impl ViaCepAdapter {
    pub fn new(url_template: impl Into<String>, request_timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(VIACEP_NAME, request_timeout)?,
            url_template: url_template.into(),
        })
    }

    fn into_record(response: ViaCepResponse) -> Result<LookupRecord> {
        // "erro" has been seen both as a boolean and as the string "true".
        let not_found = match &response.erro {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(flag)) => flag == "true",
            _ => false,
        };
        if not_found {
            return Err(LookupError::UnsupportedShape {
                provider: VIACEP_NAME.to_string(),
                message: "provider reported the CEP as not found".to_string(),
            });
        }

        let state = response.estado.filter(|s| !s.trim().is_empty()).or(response.uf);

        Ok(LookupRecord::new(
            require_field(VIACEP_NAME, "cep", response.cep)?,
            require_field(VIACEP_NAME, "estado", state)?,
            require_field(VIACEP_NAME, "localidade", response.localidade)?,
            VIACEP_NAME,
        ))
    }
}

#[async_trait]
impl ProviderAdapter for ViaCepAdapter {
    fn name(&self) -> &str {
        VIACEP_NAME
    }

    async fn lookup(&self, code: &str) -> Result<LookupRecord> {
        let url = render_url(VIACEP_NAME, &self.url_template, code)?;
        let response: ViaCepResponse = fetch_json(&self.client, VIACEP_NAME, url).await?;
        Self::into_record(response)
    }
}
