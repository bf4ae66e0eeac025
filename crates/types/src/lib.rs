pub mod appearance;
pub mod select;
pub mod symbol;

pub use appearance::{ParseTraitError, Scale, SymbolTrait, Weight};
pub use select::{closest_variant, default_trait, paths_by_hierarchy, trait_distance};
pub use symbol::{Group, Hierarchy, Symbol, Variant};
