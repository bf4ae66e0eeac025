//! TemplateProvider trait for abstracting where template documents live.
//!
//! Extraction only ever sees document text; this trait decides how that text
//! is found (a directory tree on disk, an in-memory map in tests, ...).

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for template loading operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Failed to load template '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Template '{0}' is not valid UTF-8")]
    InvalidEncoding(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TemplateError {
    fn from(err: std::io::Error) -> Self {
        TemplateError::Io(err.to_string())
    }
}

/// Shared, immutable template text.
pub type SharedTemplate = Arc<str>;

/// Loads template documents by slash-separated relative path
/// (e.g. `2.0/heart.svg`).
///
/// # Implementations
///
/// - `FilesystemTemplateProvider`: a template root on disk (in `sfsym-resource`)
/// - `InMemoryTemplateProvider`: pre-populated memory (always available)
pub trait TemplateProvider: Send + Sync + Debug {
    /// Load the document text at `path`.
    fn load(&self, path: &str) -> Result<SharedTemplate, TemplateError>;

    /// List the file names directly inside `dir`, in no particular order.
    fn list(&self, dir: &str) -> Result<Vec<String>, TemplateError>;

    /// Check if a document exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory template provider.
///
/// Documents are keyed by their relative path and must be added before use.
#[derive(Debug, Default)]
pub struct InMemoryTemplateProvider {
    templates: RwLock<BTreeMap<String, SharedTemplate>>,
}

impl InMemoryTemplateProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document under `path`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, path: impl Into<String>, text: impl Into<SharedTemplate>) -> Result<(), TemplateError> {
        let path = path.into();
        let mut templates = self.templates.write().map_err(|_| TemplateError::LoadFailed {
            path: path.clone(),
            message: "template store lock poisoned".to_string(),
        })?;
        templates.insert(path, text.into());
        Ok(())
    }

    /// Builder-style variant of [`add`](Self::add) for test setup.
    pub fn with(self, path: impl Into<String>, text: impl Into<SharedTemplate>) -> Result<Self, TemplateError> {
        self.add(path, text)?;
        Ok(self)
    }

    /// Number of stored documents. Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.templates.read().map(|t| t.len()).unwrap_or(0)
    }

    /// Returns `true` if the lock is poisoned.
    pub fn is_empty(&self) -> bool {
        self.templates.read().map(|t| t.is_empty()).unwrap_or(true)
    }
}

impl TemplateProvider for InMemoryTemplateProvider {
    fn load(&self, path: &str) -> Result<SharedTemplate, TemplateError> {
        let templates = self.templates.read().map_err(|_| TemplateError::LoadFailed {
            path: path.to_string(),
            message: "template store lock poisoned".to_string(),
        })?;
        templates
            .get(path)
            .cloned()
            .ok_or_else(|| TemplateError::NotFound(path.to_string()))
    }

    fn list(&self, dir: &str) -> Result<Vec<String>, TemplateError> {
        let templates = self.templates.read().map_err(|_| TemplateError::LoadFailed {
            path: dir.to_string(),
            message: "template store lock poisoned".to_string(),
        })?;
        let prefix = format!("{}/", dir.trim_end_matches('/'));
        Ok(templates
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix))
            .filter(|file| !file.is_empty() && !file.contains('/'))
            .map(str::to_string)
            .collect())
    }

    fn exists(&self, path: &str) -> bool {
        self.templates
            .read()
            .map(|t| t.contains_key(path))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryTemplateProvider"
    }
}
