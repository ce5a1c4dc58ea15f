//! Error types for plan presentation rules

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or interpreting plan header inputs
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Unknown plan identity: {slug}")]
    UnknownPlanIdentity { slug: String },

    #[error("Unsupported props format for {path} (expected .yml, .yaml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
