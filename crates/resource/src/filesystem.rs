//! Filesystem-based template provider.
//!
//! Templates are addressed relative to a root directory, e.g. `2.0/heart.svg`.
//! Resolved paths must stay inside the root.

use sfsym_traits::{SharedTemplate, TemplateError, TemplateProvider};
use std::path::{Component, Path, PathBuf};

/// Loads template documents from a directory tree on disk.
#[derive(Debug)]
pub struct FilesystemTemplateProvider {
    root: PathBuf,
    /// Canonicalized root for containment checks
    canonical_root: Option<PathBuf>,
}

impl FilesystemTemplateProvider {
    /// Creates a provider rooted at `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        // May fail if the root doesn't exist yet
        let canonical_root = root.canonicalize().ok();
        Self {
            root,
            canonical_root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `path` under the root, or `None` if it would escape it.
    fn resolve_path_safe(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        if relative.is_absolute() {
            return None;
        }
        if relative.components().any(|c| matches!(c, Component::ParentDir)) {
            return None;
        }

        let full_path = self.root.join(relative);
        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref root) = self.canonical_root
        {
            // Symlinks may still point outside the root
            return canonical.starts_with(root).then_some(canonical);
        }

        Some(full_path)
    }
}

impl TemplateProvider for FilesystemTemplateProvider {
    fn load(&self, path: &str) -> Result<SharedTemplate, TemplateError> {
        let full_path = self
            .resolve_path_safe(path)
            .ok_or_else(|| TemplateError::NotFound(format!("{} (outside template root)", path)))?;

        let bytes = std::fs::read(&full_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TemplateError::NotFound(path.to_string())
            } else {
                TemplateError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        String::from_utf8(bytes)
            .map(SharedTemplate::from)
            .map_err(|_| TemplateError::InvalidEncoding(path.to_string()))
    }

    fn list(&self, dir: &str) -> Result<Vec<String>, TemplateError> {
        let full_path = self
            .resolve_path_safe(dir)
            .ok_or_else(|| TemplateError::NotFound(format!("{} (outside template root)", dir)))?;

        let entries = std::fs::read_dir(&full_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TemplateError::NotFound(dir.to_string())
            } else {
                TemplateError::LoadFailed {
                    path: dir.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                files.push(name.to_string());
            }
        }
        Ok(files)
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve_path_safe(path)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "FilesystemTemplateProvider"
    }
}
