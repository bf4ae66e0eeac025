//! The extracted symbol model.
//!
//! A [`Symbol`] is assembled once per asset and never mutated afterwards.
//! Groups reference outlines by position instead of holding them, see
//! [`Group`] for the invalidation rule.

use crate::appearance::SymbolTrait;
use serde::{Deserialize, Serialize};

/// Visual-emphasis layer an outline group belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hierarchy {
    #[default]
    Primary,
    Secondary,
    Tertiary,
}

impl Hierarchy {
    pub const ALL: [Hierarchy; 3] = [Hierarchy::Primary, Hierarchy::Secondary, Hierarchy::Tertiary];

    pub fn name(self) -> &'static str {
        match self {
            Hierarchy::Primary => "primary",
            Hierarchy::Secondary => "secondary",
            Hierarchy::Tertiary => "tertiary",
        }
    }
}

/// One drawable variant of a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    #[serde(rename = "type")]
    pub symbol_trait: SymbolTrait,
    /// Closed subpaths in source document order. Never empty.
    pub paths: Vec<String>,
    pub width: f64,
    pub height: f64,
}

/// A layer of outlines, expressed as indices into a variant's `paths`.
///
/// The indices are only valid against the exact `paths` sequence they were
/// derived from; any change to that sequence invalidates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "pathIndices")]
    pub path_indices: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy: Option<Hierarchy>,
}

impl Group {
    /// The tier of this group; an untagged group is primary.
    pub fn tier(&self) -> Hierarchy {
        self.hierarchy.unwrap_or_default()
    }
}

/// An icon with all of its variants and optional layer grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    #[serde(rename = "symbols")]
    pub variants: Vec<Variant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Group>>,
}

impl Symbol {
    /// Finds the variant with exactly the given trait.
    pub fn variant(&self, symbol_trait: SymbolTrait) -> Option<&Variant> {
        self.variants.iter().find(|v| v.symbol_trait == symbol_trait)
    }

    /// Returns the traits of all variants in declaration order.
    pub fn traits(&self) -> impl Iterator<Item = SymbolTrait> + '_ {
        self.variants.iter().map(|v| v.symbol_trait)
    }
}
