//! Catalog pipeline orchestration.
//!
//! - [`CatalogBuilder`]: Fluent builder for constructing catalog pipelines
//! - [`CatalogPipeline`]: Asset discovery and per-asset assembly
//! - [`BatchReport`]: Symbols plus the assets that failed or lost their hierarchy
//!
//! # Example
//!
//! ```ignore
//! use sfsym::CatalogBuilder;
//!
//! let report = CatalogBuilder::new()
//!     .with_template_root("templates")?
//!     .build()?
//!     .run()?;
//!
//! sfsym::write_catalog_file(&report.symbols, "main.json")?;
//! ```

mod builder;
pub mod config;
mod run;

pub use builder::CatalogBuilder;
pub use config::{CatalogConfig, CatalogOrder};
pub use run::{BatchReport, CatalogPipeline};
