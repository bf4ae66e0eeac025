// src/error.rs
use sfsym_core::TemplateError;
use thiserror::Error;

/// Errors that abort a whole catalog run.
///
/// Per-asset extraction failures are not pipeline errors; they are collected
/// in the batch report instead.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template provider error: {0}")]
    Template(#[from] TemplateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
