//! Maps template element identifiers to symbol traits.

use sfsym_markup::MarkupNode;
use sfsym_types::SymbolTrait;

/// Classifies an identifier of the exact form `{weight}-{scale}`.
///
/// Anything else (`Bold-XL`, `Regular-M-copy`, `regular-m`) is not a variant
/// and yields `None`; callers skip such elements silently.
pub fn classify(id: &str) -> Option<SymbolTrait> {
    id.parse().ok()
}

/// Classifies an element by its `id` attribute.
pub fn classify_element<'a, N: MarkupNode<'a>>(element: N) -> Option<SymbolTrait> {
    element.id().and_then(classify)
}
