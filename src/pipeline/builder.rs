// src/pipeline/builder.rs
use super::config::{CatalogConfig, CatalogOrder};
use super::run::CatalogPipeline;
use crate::error::PipelineError;
use sfsym_core::{TemplateLayout, TemplateProvider};
use sfsym_executor::{Executor, ExecutorImpl};
use std::sync::Arc;

#[cfg(feature = "native")]
use std::path::Path;

/// A builder for creating a `CatalogPipeline`.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    provider: Option<Arc<dyn TemplateProvider>>,
    executor: ExecutorImpl,
    config: CatalogConfig,
}

impl CatalogBuilder {
    /// Creates a new `CatalogBuilder` with the default layout, name ordering
    /// and the default executor.
    pub fn new() -> Self {
        Default::default()
    }

    /// Reads templates from a directory on disk laid out as `{root}/2.0`
    /// and `{root}/3.0` (or the configured layout).
    #[cfg(feature = "native")]
    pub fn with_template_root<P: AsRef<Path>>(mut self, root: P) -> Result<Self, PipelineError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(PipelineError::Config(format!(
                "Template root '{}' is not a directory",
                root.display()
            )));
        }
        self.provider = Some(Arc::new(sfsym_resource::FilesystemTemplateProvider::new(root)));
        Ok(self)
    }

    /// Reads templates through any provider, e.g. an in-memory one.
    pub fn with_provider(mut self, provider: Arc<dyn TemplateProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Selects how assets are distributed over threads.
    pub fn with_executor(mut self, executor: ExecutorImpl) -> Self {
        self.executor = executor;
        self
    }

    pub fn with_layout(mut self, layout: TemplateLayout) -> Self {
        self.config.layout = layout;
        self
    }

    /// Sorts the catalog by asset name (the default) or keeps discovery order.
    pub fn sort_by_name(mut self, sort: bool) -> Self {
        self.config.order = if sort {
            CatalogOrder::ByName
        } else {
            CatalogOrder::Discovery
        };
        self
    }

    /// Consumes the builder and creates the `CatalogPipeline`.
    pub fn build(self) -> Result<CatalogPipeline, PipelineError> {
        let provider = self.provider.ok_or_else(|| {
            PipelineError::Config(
                "No template source has been configured. Use `with_template_root` or `with_provider`."
                    .to_string(),
            )
        })?;
        log::debug!(
            "Catalog pipeline: provider={}, executor={}",
            provider.name(),
            self.executor.name()
        );
        Ok(CatalogPipeline::new(provider, self.executor, self.config))
    }
}
