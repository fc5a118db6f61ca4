/// Embedding client: turns a text into a sentence embedding via the remote
/// feature-extraction endpoint.
///
/// One outbound call per `embed`. No caching and no retry loop: a cold-starting
/// model surfaces as `EmbeddingError::ModelLoading` and the caller decides
/// whether to resubmit.
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

pub mod transport;

pub use transport::{EmbeddingTransport, FeatureExtractionRequest, HttpTransport, RequestOptions};

/// Status the provider returns while the model is still being loaded.
const MODEL_LOADING_STATUS: u16 = 503;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("Hugging Face API token is required. Set HUGGINGFACE_API_TOKEN (get one from https://huggingface.co/settings/tokens)")]
    MissingCredential,

    #[error("Model is loading, please wait a moment and try again")]
    ModelLoading,

    #[error("Hugging Face API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not decode embedding: {0}")]
    Parse(String),
}

/// Coarse classification callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingErrorKind {
    /// Credential absent; no network call was made.
    Config,
    /// Model still loading; retry after a delay.
    Transient,
    /// Any other provider or transport failure.
    Service,
}

impl EmbeddingError {
    pub fn kind(&self) -> EmbeddingErrorKind {
        match self {
            EmbeddingError::MissingCredential => EmbeddingErrorKind::Config,
            EmbeddingError::ModelLoading => EmbeddingErrorKind::Transient,
            EmbeddingError::Api { .. } | EmbeddingError::Http(_) | EmbeddingError::Parse(_) => {
                EmbeddingErrorKind::Service
            }
        }
    }
}

/// Endpoint and credential for the embedding provider.
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    pub api_url: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
}

impl EmbeddingConfig {
    pub fn has_credential(&self) -> bool {
        self.api_token.is_some()
    }
}

/// A fixed-length sentence embedding. The provider answers with JSON doubles,
/// which are kept at full precision.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    pub values: Vec<f64>,
}

impl Embedding {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn dimensions(&self) -> usize {
        self.values.len()
    }
}

/// Shapes the feature-extraction endpoint answers with for a single input.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EmbeddingPayload {
    Flat(Vec<f64>),
    Nested(Vec<Vec<f64>>),
}

#[derive(Clone)]
pub struct EmbeddingClient {
    config: EmbeddingConfig,
    transport: Arc<dyn EmbeddingTransport>,
}

impl EmbeddingClient {
    /// Builds a client backed by a reqwest transport.
    pub fn new(config: EmbeddingConfig) -> Result<Self, EmbeddingError> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: EmbeddingConfig, transport: Arc<dyn EmbeddingTransport>) -> Self {
        Self { config, transport }
    }

    /// Embeds `text`. Fails with `MissingCredential` before touching the network
    /// when no token is configured.
    pub async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        let token = self
            .config
            .api_token
            .as_deref()
            .ok_or(EmbeddingError::MissingCredential)?;

        let request = FeatureExtractionRequest {
            inputs: text,
            options: RequestOptions {
                wait_for_model: true,
            },
        };

        let response = self
            .transport
            .post(&self.config.api_url, token, &request)
            .await?;

        match response.status {
            200..=299 => {
                let embedding = decode_embedding(&response.body)?;
                debug!(
                    "Embedding received: {} dimensions for {} chars",
                    embedding.dimensions(),
                    text.chars().count()
                );
                Ok(embedding)
            }
            MODEL_LOADING_STATUS => {
                warn!("Embedding model is still loading: {}", response.body);
                Err(EmbeddingError::ModelLoading)
            }
            status => {
                warn!("Embedding API returned {}: {}", status, response.body);
                Err(EmbeddingError::Api {
                    status,
                    message: response.body,
                })
            }
        }
    }
}

fn decode_embedding(body: &str) -> Result<Embedding, EmbeddingError> {
    let payload: EmbeddingPayload = serde_json::from_str(body)
        .map_err(|e| EmbeddingError::Parse(format!("unexpected response body: {e}")))?;

    let values = match payload {
        EmbeddingPayload::Flat(values) => values,
        EmbeddingPayload::Nested(mut rows) if rows.len() == 1 => rows.remove(0),
        EmbeddingPayload::Nested(rows) => {
            return Err(EmbeddingError::Parse(format!(
                "expected a single embedding, got {} rows",
                rows.len()
            )))
        }
    };

    if values.is_empty() {
        return Err(EmbeddingError::Parse("embedding is empty".to_string()));
    }

    Ok(Embedding::new(values))
}
