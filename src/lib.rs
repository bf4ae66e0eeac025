//! # sfsym
//!
//! Extracts symbol models from revision 2.0/3.0 symbol templates and writes
//! them as a JSON catalog.
//!
//! - **pipeline**: asset discovery and batch assembly through an executor
//! - **catalog**: JSON catalog reader and writer
//! - **error**: pipeline-level errors
//!
//! Extraction itself lives in `sfsym-core` and is re-exported here.

// Re-export foundation crates
pub use sfsym_markup as markup;
pub use sfsym_pathdata as pathdata;
pub use sfsym_traits as traits;
pub use sfsym_types as types;

// Re-export the core library and platform crates
pub use sfsym_core as core;
pub use sfsym_executor as executor;
#[cfg(feature = "native")]
pub use sfsym_resource as resource;

pub mod catalog;
pub mod error;
pub mod pipeline;

pub use catalog::{read_catalog, read_catalog_file, write_catalog, write_catalog_file};
pub use error::PipelineError;
pub use pipeline::{BatchReport, CatalogBuilder, CatalogConfig, CatalogOrder, CatalogPipeline};

pub use sfsym_core::{
    AssembledSymbol, ExtractError, HierarchyError, SymbolAssembler, TemplateLayout,
};
pub use sfsym_executor::{Executor, ExecutorImpl, SyncExecutor};
#[cfg(feature = "rayon-executor")]
pub use sfsym_executor::RayonExecutor;
pub use sfsym_traits::{InMemoryTemplateProvider, TemplateError, TemplateProvider};
pub use sfsym_types::{
    Group, Hierarchy, Scale, Symbol, SymbolTrait, Variant, Weight, closest_variant, default_trait,
    paths_by_hierarchy,
};
