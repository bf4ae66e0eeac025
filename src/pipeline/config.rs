use sfsym_core::TemplateLayout;

/// The order symbols appear in the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogOrder {
    /// Sorted by asset name. (Default)
    #[default]
    ByName,
    /// The order the template provider listed the revision-2 documents in.
    Discovery,
}

/// Settings of a catalog run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    pub layout: TemplateLayout,
    pub order: CatalogOrder,
}
