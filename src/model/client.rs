use super::types::*;
use crate::{Error, Result, config::ModelConfig};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::{debug, info};

/// Probe used to prove the model answers before the service accepts traffic.
const PROBE_QUESTION: &str = "What is this?";
const PROBE_CONTEXT: &str = "This is a readiness probe.";

#[async_trait]
pub trait QaModel: Send + Sync {
    async fn answer(&self, input: QaInput) -> Result<QaOutput>;
}

pub struct HuggingFaceQaModel {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl HuggingFaceQaModel {
    pub fn new(config: &ModelConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        if let Some(token) = &config.api_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| Error::config(format!("Invalid API token: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let endpoint = format!(
            "{}/models/{}",
            config.base_url.trim_end_matches('/'),
            config.model
        );

        Ok(Self {
            client,
            endpoint,
            model: config.model.clone(),
        })
    }

    /// Builds the client and runs one probe inference. Any failure along the
    /// way is reported as a load failure.
    pub async fn load(config: &ModelConfig) -> Result<Self> {
        let model = Self::new(config).map_err(|e| load_error(&config.model, e))?;
        info!("Loading QA model '{}' from {}", config.model, model.endpoint());

        model
            .answer(QaInput::new(PROBE_QUESTION, PROBE_CONTEXT))
            .await
            .map_err(|e| load_error(&config.model, e))?;

        info!("QA model '{}' loaded", config.model);
        Ok(model)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn load_error(model: &str, cause: Error) -> Error {
    Error::model_load(format!("'{}': {}", model, cause))
}

#[async_trait]
impl QaModel for HuggingFaceQaModel {
    async fn answer(&self, input: QaInput) -> Result<QaOutput> {
        debug!(
            "Requesting answer from {} (question: {} chars, context: {} chars)",
            self.model,
            input.question.len(),
            input.context.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&InferenceRequest { inputs: &input })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let reason = match serde_json::from_str::<InferenceResponse>(&body) {
                Ok(InferenceResponse::Error { error }) => error,
                _ => body,
            };
            return Err(Error::inference(format!("{}: {}", status, reason)));
        }

        match serde_json::from_str::<InferenceResponse>(&body)? {
            InferenceResponse::Single(output) => Ok(output),
            InferenceResponse::Batch(outputs) => outputs
                .into_iter()
                .next()
                .ok_or_else(|| Error::inference("Provider returned an empty result list")),
            InferenceResponse::Error { error } => Err(Error::inference(error)),
        }
    }
}
