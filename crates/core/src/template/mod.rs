//! Readers for the structure of symbol template documents.
//!
//! Both template revisions share the same skeleton: a `Symbols` container
//! whose children are named after their trait (`Regular-M`), guideline
//! elements (`Capline-S`, `Baseline-S`, ...), a `Notes` container with weight
//! labels, and a `template-version` text element.

pub mod classify;
pub mod hierarchy;
pub mod metadata;
pub mod transform;
pub mod variants;

use crate::error::ReadError;
use sfsym_markup::MarkupNode;
use std::fmt;

pub const VERSION_ID: &str = "template-version";
pub const SYMBOLS_ID: &str = "Symbols";
pub const NOTES_ID: &str = "Notes";

/// Format revision declared by a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateVersion {
    V2,
    V3,
}

impl TemplateVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateVersion::V2 => "2.0",
            TemplateVersion::V3 => "3.0",
        }
    }
}

impl fmt::Display for TemplateVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Child `path` elements that carry path data, with that data.
pub(crate) fn drawn_paths<'a, N: MarkupNode<'a> + 'a>(
    element: N,
) -> impl Iterator<Item = (N, &'a str)> + 'a {
    element
        .children()
        .filter(|child| child.tag_name() == "path")
        .filter_map(|child| child.attribute("d").map(|d| (child, d)))
}

/// Tokenized subpaths of every drawn path under `element`, in document order.
pub(crate) fn element_subpaths<'a, N: MarkupNode<'a> + 'a>(
    element: N,
) -> Result<Vec<String>, ReadError> {
    let mut subpaths = Vec::new();
    for (_, data) in drawn_paths(element) {
        subpaths.extend(sfsym_pathdata::parse_subpaths(data)?);
    }
    Ok(subpaths)
}
