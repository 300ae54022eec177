use crate::adapters::http::{build_client, fetch_json, render_url, require_field};
use crate::domain::model::LookupRecord;
use crate::domain::ports::ProviderAdapter;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const BRASILAPI_NAME: &str = "BrasilCep";

#[derive(Debug, Deserialize)]
struct BrasilApiResponse {
    cep: Option<String>,
    state: Option<String>,
    city: Option<String>,
}

pub struct BrasilApiAdapter {
    client: Client,
    url_template: String,
}

impl BrasilApiAdapter {
    pub fn new(url_template: impl Into<String>, request_timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(BRASILAPI_NAME, request_timeout)?,
            url_template: url_template.into(),
        })
    }
}

#[async_trait]
impl ProviderAdapter for BrasilApiAdapter {
    fn name(&self) -> &str {
        BRASILAPI_NAME
    }

    async fn lookup(&self, code: &str) -> Result<LookupRecord> {
        let url = render_url(BRASILAPI_NAME, &self.url_template, code)?;
        let response: BrasilApiResponse = fetch_json(&self.client, BRASILAPI_NAME, url).await?;

        Ok(LookupRecord::new(
            require_field(BRASILAPI_NAME, "cep", response.cep)?,
            require_field(BRASILAPI_NAME, "state", response.state)?,
            require_field(BRASILAPI_NAME, "city", response.city)?,
            BRASILAPI_NAME,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::LookupError;
    use httpmock::prelude::*;

    fn adapter_for(server: &MockServer) -> BrasilApiAdapter {
        let template = format!("{}/api/cep/v1/{{cep}}", server.base_url());
        BrasilApiAdapter::new(template, Duration::from_secs(1)).unwrap()
    }

    #[tokio::test]
    async fn test_brasilapi_maps_response_to_record() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/cep/v1/01001000");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({
                        "cep": "01001000",
                        "state": "SP",
                        "city": "São Paulo",
                        "neighborhood": "Sé",
                        "street": "Praça da Sé",
                        "service": "open-cep"
                    }));
            })
            .await;

        let record = adapter_for(&server).lookup("01001000").await.unwrap();

        api_mock.assert_async().await;
        assert_eq!(
            record,
            LookupRecord::new("01001000", "SP", "São Paulo", "BrasilCep")
        );
    }

    #[tokio::test]
    async fn test_brasilapi_not_found_is_status_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/cep/v1/99999999");
                then.status(404).json_body(serde_json::json!({
                    "name": "CepPromiseError",
                    "message": "Todos os serviços de CEP retornaram erro.",
                    "type": "service_error"
                }));
            })
            .await;

        let err = adapter_for(&server).lookup("99999999").await.unwrap_err();
        assert!(matches!(err, LookupError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_brasilapi_unexpected_shape() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/cep/v1/01001000");
                then.status(200).json_body(serde_json::json!({"cep": "01001000"}));
            })
            .await;

        let err = adapter_for(&server).lookup("01001000").await.unwrap_err();
        assert!(matches!(err, LookupError::UnsupportedShape { .. }));
    }

    #[tokio::test]
    async fn test_brasilapi_non_object_body_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/cep/v1/01001000");
                then.status(200).json_body(serde_json::json!("01001000"));
            })
            .await;

        let err = adapter_for(&server).lookup("01001000").await.unwrap_err();
        assert!(matches!(err, LookupError::Decode { .. }));
    }
}
