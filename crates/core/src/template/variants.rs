//! Variant extraction from revision 2.0 templates.

use super::classify::classify_element;
use super::metadata::{template_height, template_version};
use super::transform::transform_offset;
use super::{NOTES_ID, SYMBOLS_ID, TemplateVersion, element_subpaths};
use crate::error::{ExtractError, ReadError};
use sfsym_markup::{MarkupNode, find_by_id};
use sfsym_types::{Variant, Weight};

/// Builds one [`Variant`] per trait-named child of the `Symbols` container.
///
/// Unclassifiable children are skipped. Every variant shares the template
/// height; widths come from the weight labels under `Notes`.
pub fn build_variants<'a, N: MarkupNode<'a> + 'a>(root: N) -> Result<Vec<Variant>, ExtractError> {
    let version = template_version(root)?;
    if version != TemplateVersion::V2 {
        return Err(ExtractError::WrongRevision {
            expected: TemplateVersion::V2,
            found: version,
        });
    }

    let height = template_height(root)?;
    let symbols = find_by_id(root, SYMBOLS_ID).ok_or(ReadError::MissingElement(SYMBOLS_ID))?;
    let notes = find_by_id(root, NOTES_ID);

    let mut variants: Vec<Variant> = Vec::new();
    for element in symbols.children() {
        let Some(symbol_trait) = classify_element(element) else {
            continue;
        };
        if variants.iter().any(|v| v.symbol_trait == symbol_trait) {
            return Err(ExtractError::DuplicateTrait(symbol_trait));
        }

        let paths = element_subpaths(element)?;
        if paths.is_empty() {
            return Err(ExtractError::EmptyVariant(symbol_trait));
        }

        let notes = notes.ok_or(ReadError::MissingElement(NOTES_ID))?;
        let width = variant_width(element, notes, symbol_trait.weight)?;

        log::trace!(
            "Variant {}: {} subpath(s), {}x{}",
            symbol_trait,
            paths.len(),
            width,
            height
        );
        variants.push(Variant {
            symbol_trait,
            paths,
            width,
            height,
        });
    }

    if variants.is_empty() {
        return Err(ExtractError::NoVariants);
    }
    Ok(variants)
}

/// The weight label marks the symbol's vertical midline, so the width is
/// twice the distance from the symbol's own offset to the label.
fn variant_width<'a, N: MarkupNode<'a> + 'a>(
    symbol: N,
    notes: N,
    weight: Weight,
) -> Result<f64, ExtractError> {
    let label = notes
        .children()
        .filter(|child| child.tag_name() == "text")
        .find(|child| child.text() == weight.name())
        .ok_or(ExtractError::MissingWeightLabel(weight))?;

    let (mid_x, _) = transform_offset(label)?;
    let (left_x, _) = transform_offset(symbol)?;
    Ok((mid_x - left_x) * 2.0)
}
