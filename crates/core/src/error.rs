//! Error types for template extraction.
//!
//! Failures are split by consequence: an [`ExtractError`] drops the asset,
//! a [`HierarchyError`] only drops its layer grouping. Both wrap the
//! structural [`ReadError`]s shared by the two template revisions.

use crate::template::TemplateVersion;
use sfsym_pathdata::{PathDataError, TransformParseError};
use sfsym_traits::TemplateError;
use sfsym_types::{SymbolTrait, Weight};
use thiserror::Error;

/// A template document lacks, or misstates, something extraction reads.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReadError {
    #[error("Markup parsing error: {0}")]
    Markup(String),

    #[error("Cannot determine the template's version")]
    MissingVersion,

    #[error("Unknown template version: '{0}'")]
    UnknownVersion(String),

    #[error("Cannot find element '{0}'")]
    MissingElement(&'static str),

    #[error("Cannot get template symbol height: no scale has both guidelines")]
    MissingGuidelines,

    #[error("Unsupported transform '{0}': not an identity matrix")]
    UnsupportedTransform(String),

    #[error(transparent)]
    Transform(#[from] TransformParseError),

    #[error(transparent)]
    PathData(#[from] PathDataError),
}

impl From<roxmltree::Error> for ReadError {
    fn from(e: roxmltree::Error) -> Self {
        ReadError::Markup(e.to_string())
    }
}

/// Fatal for the asset: no symbol is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("Expects a {expected} template, found {found}")]
    WrongRevision {
        expected: TemplateVersion,
        found: TemplateVersion,
    },

    #[error("Cannot find vertical guideline for weight {0}")]
    MissingWeightLabel(Weight),

    #[error("No symbol variant found")]
    NoVariants,

    #[error("Variant {0} has no outlines")]
    EmptyVariant(SymbolTrait),

    #[error("Variant {0} is declared more than once")]
    DuplicateTrait(SymbolTrait),
}

/// Recoverable: the symbol is kept without groups.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HierarchyError {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("Expects a {expected} template, found {found}")]
    WrongRevision {
        expected: TemplateVersion,
        found: TemplateVersion,
    },

    #[error("Inconsistent path between 2.0 and 3.0 templates for {symbol_trait}: '{subpath}'")]
    InconsistentPath {
        symbol_trait: SymbolTrait,
        subpath: String,
    },
}
