use anyhow::Result;
use qa_service::{config, server};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Builds the log filter from `RUST_LOG` when set, otherwise from the
/// configured level. Accepts full directive lists such as
/// `qa_service=debug,tower_http=debug`.
fn log_filter(rust_log: Option<String>, configured: &str) -> Result<EnvFilter> {
    let directives = rust_log.unwrap_or_else(|| configured.to_string());

    EnvFilter::try_new(&directives).map_err(|e| {
        anyhow::anyhow!(
            "Invalid log filter '{}': {}. Use a level (error, warn, info, debug, trace) or target=level directives",
            directives,
            e
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging depends on the configured level, so config errors go to stderr.
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let filter = match log_filter(std::env::var("RUST_LOG").ok(), &config.server.logs.level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!(
        "Starting QA service in {} mode with model '{}'",
        config.server.mode, config.model.model
    );

    // In strict mode a model that cannot be loaded ends up here: the cause is
    // logged and returned, so the process exits non-zero before binding.
    if let Err(e) = server::run(config).await {
        error!("QA service failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
