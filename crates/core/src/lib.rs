//! # sfsym-core
//!
//! Platform-agnostic extraction of symbol models from template documents.
//!
//! - **template**: readers for template structure (versions, guidelines,
//!   offsets, trait identifiers) and the two revision pipelines
//! - **assemble**: combines both revisions of an asset into a [`Symbol`]
//! - **xml**: the `roxmltree` binding of the markup capability trait
//! - **layout**: where template revisions live under a root
//! - **error**: fatal and recoverable extraction errors
//!
//! ## Design Principle
//!
//! This crate has **no platform dependencies**. Documents arrive as text
//! through a [`TemplateProvider`]; the filesystem binding lives in
//! `sfsym-resource`.

// Re-export foundation crates
pub use sfsym_markup as markup;
pub use sfsym_traits as traits;
pub use sfsym_types as types;

// Re-export algorithm crates
pub use sfsym_pathdata as pathdata;

pub mod assemble;
pub mod error;
pub mod layout;
pub mod template;
pub mod xml;

pub use assemble::{AssembledSymbol, SymbolAssembler, extract_groups, extract_variants};
pub use error::{ExtractError, HierarchyError, ReadError};
pub use layout::TemplateLayout;
pub use template::TemplateVersion;
pub use xml::{XmlDocument, XmlNode};

pub use traits::{SharedTemplate, TemplateError, TemplateProvider};
pub use types::{Group, Hierarchy, Scale, Symbol, SymbolTrait, Variant, Weight};
