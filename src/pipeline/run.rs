use super::config::{CatalogConfig, CatalogOrder};
use crate::error::PipelineError;
use sfsym_core::{ExtractError, HierarchyError, Symbol, SymbolAssembler, TemplateProvider};
use sfsym_executor::{Executor, ExecutorImpl};
use std::sync::Arc;
use std::time::Instant;

/// The outcome of a catalog run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Successfully assembled symbols, in catalog order.
    pub symbols: Vec<Symbol>,
    /// Assets that produced no symbol.
    pub failures: Vec<(String, ExtractError)>,
    /// Assets whose symbol was emitted without groups.
    pub hierarchy_warnings: Vec<(String, HierarchyError)>,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.symbols.len() + self.failures.len()
    }
}

/// Discovers assets through a [`TemplateProvider`] and assembles each one.
#[derive(Debug)]
pub struct CatalogPipeline {
    provider: Arc<dyn TemplateProvider>,
    executor: ExecutorImpl,
    config: CatalogConfig,
}

impl CatalogPipeline {
    pub(super) fn new(
        provider: Arc<dyn TemplateProvider>,
        executor: ExecutorImpl,
        config: CatalogConfig,
    ) -> Self {
        Self {
            provider,
            executor,
            config,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Names of all assets with a revision-2 document, in catalog order.
    pub fn discover(&self) -> Result<Vec<String>, PipelineError> {
        let layout = &self.config.layout;
        let mut names: Vec<String> = self
            .provider
            .list(&layout.revision2_dir)?
            .iter()
            .filter_map(|file| layout.asset_name(file))
            .map(str::to_string)
            .collect();

        if self.config.order == CatalogOrder::ByName {
            names.sort();
        }
        Ok(names)
    }

    /// Discovers and assembles every asset.
    pub fn run(&self) -> Result<BatchReport, PipelineError> {
        let names = self.discover()?;
        Ok(self.run_assets(names))
    }

    /// Assembles the given assets. Results keep the order of `names`.
    pub fn run_assets(&self, names: Vec<String>) -> BatchReport {
        let start = Instant::now();
        log::info!(
            "Extracting {} asset(s) from {} using {} (parallelism {})",
            names.len(),
            self.provider.name(),
            self.executor.name(),
            self.executor.parallelism()
        );

        let provider = Arc::clone(&self.provider);
        let layout = Arc::new(self.config.layout.clone());
        let results = self.executor.execute_all(names, move |name| {
            let result = SymbolAssembler::new(provider.as_ref(), &layout).assemble(&name);
            (name, result)
        });

        let mut report = BatchReport::default();
        for (name, result) in results {
            match result {
                Ok(assembled) => {
                    if let Some(error) = assembled.hierarchy_error {
                        report.hierarchy_warnings.push((name, error));
                    }
                    report.symbols.push(assembled.symbol);
                }
                Err(error) => {
                    log::error!("Failed to load symbol '{}': {}", name, error);
                    report.failures.push((name, error));
                }
            }
        }

        log::info!(
            "Extracted {} symbol(s), {} failure(s), {} without hierarchy in {:.2?}",
            report.symbols.len(),
            report.failures.len(),
            report.hierarchy_warnings.len(),
            start.elapsed()
        );
        report
    }
}
