//! Per-asset assembly of a [`Symbol`] from its two template revisions.

use crate::error::{ExtractError, HierarchyError};
use crate::layout::TemplateLayout;
use crate::template::hierarchy::link_hierarchy;
use crate::template::variants::build_variants;
use crate::xml::XmlDocument;
use sfsym_traits::TemplateProvider;
use sfsym_types::{Group, Symbol, Variant};

/// Parses a revision-2 document and builds its variants.
pub fn extract_variants(text: &str) -> Result<Vec<Variant>, ExtractError> {
    let document = XmlDocument::parse(text)?;
    build_variants(document.root_element())
}

/// Parses a revision-3 document and links its layers against `variants`.
pub fn extract_groups(text: &str, variants: &[Variant]) -> Result<Option<Vec<Group>>, HierarchyError> {
    let document = XmlDocument::parse(text)?;
    link_hierarchy(document.root_element(), variants)
}

/// A successfully assembled symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledSymbol {
    pub symbol: Symbol,
    /// Why `symbol.groups` is absent, when hierarchy linking failed.
    pub hierarchy_error: Option<HierarchyError>,
}

/// Loads both revisions of an asset through a [`TemplateProvider`] and
/// combines them.
///
/// The revision-2 document is authoritative: any failure there drops the
/// asset. The revision-3 document only contributes groups, so its failures
/// leave the symbol without them.
#[derive(Debug, Clone, Copy)]
pub struct SymbolAssembler<'p> {
    provider: &'p dyn TemplateProvider,
    layout: &'p TemplateLayout,
}

impl<'p> SymbolAssembler<'p> {
    pub fn new(provider: &'p dyn TemplateProvider, layout: &'p TemplateLayout) -> Self {
        Self { provider, layout }
    }

    pub fn assemble(&self, name: &str) -> Result<AssembledSymbol, ExtractError> {
        let text = self.provider.load(&self.layout.revision2_path(name))?;
        let variants = extract_variants(&text)?;
        log::debug!("Asset '{}': {} variant(s)", name, variants.len());

        let (groups, hierarchy_error) = match self.link(name, &variants) {
            Ok(groups) => (groups, None),
            Err(e) => {
                log::warn!("Asset '{}': hierarchy dropped: {}", name, e);
                (None, Some(e))
            }
        };

        Ok(AssembledSymbol {
            symbol: Symbol {
                name: name.to_string(),
                variants,
                groups,
            },
            hierarchy_error,
        })
    }

    fn link(&self, name: &str, variants: &[Variant]) -> Result<Option<Vec<Group>>, HierarchyError> {
        let text = self.provider.load(&self.layout.revision3_path(name))?;
        extract_groups(&text, variants)
    }
}
