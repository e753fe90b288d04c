use super::client::QaModel;
use crate::{Result, config::StartupMode};
use std::{fmt, future::Future, sync::Arc};
use tracing::{error, info};

/// Outcome of the one-shot model acquisition performed at startup.
///
/// Built once before the listener is bound and never changed afterwards, so a
/// service that starts `Unavailable` stays that way for its whole lifetime.
#[derive(Clone)]
pub enum ModelAvailability {
    Available(Arc<dyn QaModel>),
    Unavailable { reason: String },
}

impl ModelAvailability {
    /// Awaits `acquire` exactly once.
    ///
    /// In [`StartupMode::Strict`] an acquisition failure is returned to the
    /// caller, which is expected to abort startup. In
    /// [`StartupMode::Resilient`] the failure is logged and the service
    /// continues in degraded mode.
    pub async fn initialize<F>(mode: StartupMode, acquire: F) -> Result<Self>
    where
        F: Future<Output = Result<Arc<dyn QaModel>>>,
    {
        match acquire.await {
            Ok(model) => {
                info!("QA model available (mode: {})", mode);
                Ok(Self::Available(model))
            }
            Err(e) => match mode {
                StartupMode::Strict => Err(e),
                StartupMode::Resilient => {
                    error!("QA model unavailable, serving echo fallback: {}", e);
                    Ok(Self::Unavailable {
                        reason: e.to_string(),
                    })
                }
            },
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

impl fmt::Debug for ModelAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(_) => f.write_str("Available"),
            Self::Unavailable { reason } => f
                .debug_struct("Unavailable")
                .field("reason", reason)
                .finish(),
        }
    }
}
