//! Layer grouping from revision 3.0 templates.
//!
//! A 3.0 template draws the same outlines as its 2.0 counterpart, but splits
//! them into `path` layers tagged with a hierarchy tier. Linking maps every
//! layer's subpaths back to positions in an already-built variant.

use super::classify::classify_element;
use super::metadata::template_version;
use super::{SYMBOLS_ID, TemplateVersion, drawn_paths};
use crate::error::{HierarchyError, ReadError};
use sfsym_markup::{MarkupNode, find_by_id};
use sfsym_types::{Group, Hierarchy, Variant};

const TIER_CLASS_PREFIX: &str = "hierarchical";

/// Derives the layer groups of a symbol from its revision-3 document.
///
/// Only the first `Symbols` child whose trait matches one of `variants` is
/// consulted. Returns `Ok(None)` when no child matches or the matching child
/// has no drawn layers.
pub fn link_hierarchy<'a, N: MarkupNode<'a> + 'a>(
    root: N,
    variants: &[Variant],
) -> Result<Option<Vec<Group>>, HierarchyError> {
    let version = template_version(root)?;
    if version != TemplateVersion::V3 {
        return Err(HierarchyError::WrongRevision {
            expected: TemplateVersion::V3,
            found: version,
        });
    }

    let symbols = find_by_id(root, SYMBOLS_ID).ok_or(ReadError::MissingElement(SYMBOLS_ID))?;

    for element in symbols.children() {
        let Some(symbol_trait) = classify_element(element) else {
            continue;
        };
        let Some(variant) = variants.iter().find(|v| v.symbol_trait == symbol_trait) else {
            continue;
        };

        let layers = layers(element)?;
        if layers.is_empty() {
            log::debug!("Element {} has no hierarchy layers", symbol_trait);
            return Ok(None);
        }

        let mut groups = Vec::with_capacity(layers.len());
        for (subpaths, hierarchy) in layers {
            let path_indices = subpaths
                .into_iter()
                .map(|subpath| {
                    variant
                        .paths
                        .iter()
                        .position(|p| *p == subpath)
                        .ok_or(HierarchyError::InconsistentPath {
                            symbol_trait,
                            subpath,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            groups.push(Group {
                path_indices,
                hierarchy,
            });
        }

        log::trace!("Linked {} group(s) against {}", groups.len(), symbol_trait);
        return Ok(Some(groups));
    }

    Ok(None)
}

/// Ordered `(subpaths, tier)` pairs, one per drawn `path` child.
fn layers<'a, N: MarkupNode<'a> + 'a>(
    element: N,
) -> Result<Vec<(Vec<String>, Option<Hierarchy>)>, ReadError> {
    drawn_paths(element)
        .map(|(path, data)| -> Result<_, ReadError> {
            let subpaths = sfsym_pathdata::parse_subpaths(data)?;
            Ok((subpaths, layer_tier(path)))
        })
        .collect()
}

fn layer_tier<'a, N: MarkupNode<'a> + 'a>(path: N) -> Option<Hierarchy> {
    path.class_names()
        .filter(|class| class.starts_with(TIER_CLASS_PREFIX))
        .find_map(|class| {
            Hierarchy::ALL
                .into_iter()
                .find(|tier| class.ends_with(tier.name()))
        })
}
