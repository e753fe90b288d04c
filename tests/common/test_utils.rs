use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
    response::Response,
};
use qa_service::{
    Error, Result,
    config::{Config, LogsConfig, ModelConfig, ServerConfig, StartupMode},
    model::{ModelAvailability, QaModel},
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            mode: StartupMode::Strict,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        model: ModelConfig {
            provider: "huggingface".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            model: "distilbert-base-uncased-distilled-squad".to_string(),
            api_token: None,
        },
    }
}

/// Build the real router around an available model
pub fn available_app(mode: StartupMode, model: Arc<dyn QaModel>) -> Router {
    server::router(AppState::new(mode, ModelAvailability::Available(model)))
}

/// Build the real router in degraded mode
pub fn unavailable_app() -> Router {
    server::router(AppState::new(
        StartupMode::Resilient,
        ModelAvailability::Unavailable {
            reason: "Failed to load QA model: test".to_string(),
        },
    ))
}

/// Run startup initialization with an acquisition that fails
pub async fn initialize_with_failure(mode: StartupMode) -> Result<ModelAvailability> {
    ModelAvailability::initialize(mode, async {
        Err::<Arc<dyn QaModel>, _>(Error::model_load("model download failed"))
    })
    .await
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9000
  mode: resilient
  logs:
    level: "debug"

model:
  provider: "huggingface"
  base_url: "http://localhost:5000"
  model: "deepset/roberta-base-squad2"
  api_token: "hf_file_token"
"#;

/// Minimal configuration relying on defaults
pub const MINIMAL_CONFIG_YAML: &str = r#"
server:
  port: 8081
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
  mode: "lenient"
"#;
