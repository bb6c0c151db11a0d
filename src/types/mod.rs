use crate::utils::config::ConfigError;

// ============= Error Types =============

/// Errors surfaced by the native client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A view rejected the operation or the backend call failed.
    #[error(transparent)]
    Core(#[from] agrovision_core::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
