//! Template providers for native platforms.
//!
//! ## Available Providers
//!
//! - [`FilesystemTemplateProvider`]: Loads templates from a root directory
//!
//! ## Re-exports
//!
//! - [`InMemoryTemplateProvider`]: Pre-populated in-memory storage

mod filesystem;

pub use filesystem::FilesystemTemplateProvider;

pub use sfsym_traits::InMemoryTemplateProvider;
