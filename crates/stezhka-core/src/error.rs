//! Error types for Stezhka

use thiserror::Error;

/// Error taxonomy for route generation.
///
/// The first three variants are user-facing: their display strings are
/// written in Ukrainian because that is the language of the request, and the
/// orchestrator lets them propagate to the caller unchanged. Everything else
/// is internal and is either recovered (provider fallbacks) or wrapped by
/// the CLI before display.
#[derive(Debug, Error)]
pub enum StezhkaError {
    // User-facing failures
    #[error("Не вдалося знайти місце призначення «{query}». Спробуйте вказати іншу назву.")]
    DestinationNotFound { query: String },

    #[error("Поблизу не знайдено жодного цікавого місця для прогулянки.")]
    NoPoisNearby,

    #[error("Не вдалося прокласти пішохідний маршрут між вибраними точками.")]
    NoWalkableRoute,

    // Transient provider failures, recovered at the call site
    #[error("Provider {provider} failed: {reason}")]
    Provider { provider: String, reason: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StezhkaError {
    /// Whether this error carries a message meant for the end user.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            StezhkaError::DestinationNotFound { .. }
                | StezhkaError::NoPoisNearby
                | StezhkaError::NoWalkableRoute
        )
    }
}

pub type Result<T> = std::result::Result<T, StezhkaError>;
