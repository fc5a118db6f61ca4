use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// Body of a feature-extraction call: `{"inputs": ..., "options": {"wait_for_model": true}}`.
#[derive(Debug, Serialize)]
pub struct FeatureExtractionRequest<'a> {
    pub inputs: &'a str,
    pub options: RequestOptions,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RequestOptions {
    pub wait_for_model: bool,
}

/// Status and raw body of a provider response. Decoding is left to the client.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// The outbound HTTP seam of the embedding client.
/// Production uses `HttpTransport`; tests script responses and count calls.
#[async_trait]
pub trait EmbeddingTransport: Send + Sync {
    async fn post(
        &self,
        url: &str,
        token: &str,
        request: &FeatureExtractionRequest<'_>,
    ) -> Result<TransportResponse, reqwest::Error>;
}

/// reqwest-backed transport with a fixed request timeout.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl EmbeddingTransport for HttpTransport {
    async fn post(
        &self,
        url: &str,
        token: &str,
        request: &FeatureExtractionRequest<'_>,
    ) -> Result<TransportResponse, reqwest::Error> {
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}
