#![allow(dead_code)]

pub mod fixtures;

use sfsym::{BatchReport, CatalogBuilder, ExecutorImpl, InMemoryTemplateProvider};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An in-memory template tree. Each asset has a revision 2.0 document and,
/// optionally, a revision 3.0 document.
pub fn provider(assets: &[(&str, &str, Option<&str>)]) -> Arc<InMemoryTemplateProvider> {
    let provider = InMemoryTemplateProvider::new();
    for (name, v2, v3) in assets {
        provider
            .add(format!("2.0/{}.svg", name), *v2)
            .expect("add revision 2.0 template");
        if let Some(v3) = v3 {
            provider
                .add(format!("3.0/{}.svg", name), *v3)
                .expect("add revision 3.0 template");
        }
    }
    Arc::new(provider)
}

/// Runs the whole catalog pipeline over `provider` on the calling thread.
pub fn run_sequential(provider: Arc<InMemoryTemplateProvider>) -> BatchReport {
    CatalogBuilder::new()
        .with_provider(provider)
        .with_executor(ExecutorImpl::sequential())
        .build()
        .expect("pipeline builds")
        .run()
        .expect("pipeline runs")
}

pub fn failure_names(report: &BatchReport) -> Vec<&str> {
    report.failures.iter().map(|(n, _)| n.as_str()).collect()
}

pub fn symbol_names(report: &BatchReport) -> Vec<&str> {
    report.symbols.iter().map(|s| s.name.as_str()).collect()
}
