#![forbid(unsafe_code)]

//! Runtime errors.

use thiserror::Error;
use twopane_layout::LayoutError;
use twopane_nav::NavigationError;

/// Errors raised while loading a [`TwoPaneConfig`](crate::config::TwoPaneConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("validation errors: {}", .errors.join("; "))]
    Invalid { errors: Vec<String> },
}

/// Errors raised by the [`TwoPaneController`](crate::controller::TwoPaneController).
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

pub type Result<T> = std::result::Result<T, ControllerError>;
