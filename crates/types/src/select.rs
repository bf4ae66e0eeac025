//! Variant selection helpers used by consumers of the catalog.

use crate::appearance::{Scale, SymbolTrait, Weight};
use crate::symbol::{Group, Hierarchy, Symbol, Variant};

/// Manhattan distance between two traits over the weight and scale orders.
pub fn trait_distance(a: SymbolTrait, b: SymbolTrait) -> usize {
    a.weight.index().abs_diff(b.weight.index()) + a.scale.index().abs_diff(b.scale.index())
}

/// Returns the variant closest to the requested weight and scale.
///
/// Ties resolve to the earliest variant; an exact match ends the scan.
/// Returns `None` only for a symbol without variants.
pub fn closest_variant(symbol: &Symbol, weight: Weight, scale: Scale) -> Option<&Variant> {
    let wanted = SymbolTrait::new(weight, scale);
    let mut best: Option<(&Variant, usize)> = None;

    for candidate in &symbol.variants {
        let cost = trait_distance(wanted, candidate.symbol_trait);
        if best.is_none_or(|(_, best_cost)| cost < best_cost) {
            best = Some((candidate, cost));
        }
        if cost == 0 {
            break;
        }
    }

    best.map(|(variant, _)| variant)
}

/// Buckets the groups' outlines by tier.
///
/// Buckets appear in first-seen order. Each bucket holds the space-joined
/// paths of all its groups, in group order. Indices that fall outside
/// `variant.paths` are skipped.
pub fn paths_by_hierarchy(groups: &[Group], variant: &Variant) -> Vec<(Hierarchy, String)> {
    let mut buckets: Vec<(Hierarchy, String)> = Vec::new();

    for group in groups {
        let path = group
            .path_indices
            .iter()
            .filter_map(|&i| variant.paths.get(i).map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        let tier = group.tier();

        match buckets.iter_mut().find(|(h, _)| *h == tier) {
            Some((_, existing)) => {
                existing.push(' ');
                existing.push_str(&path);
            }
            None => buckets.push((tier, path)),
        }
    }

    buckets
}

/// The trait a consumer should present first for a symbol.
///
/// Prefers `Regular` at the smallest scale that exists exactly, falling back
/// to the first declared variant.
pub fn default_trait(symbol: &Symbol) -> Option<SymbolTrait> {
    let first = symbol.variants.first()?.symbol_trait;

    let regular = Scale::ALL.into_iter().find_map(|scale| {
        let wanted = SymbolTrait::new(Weight::Regular, scale);
        closest_variant(symbol, Weight::Regular, scale)
            .filter(|v| v.symbol_trait == wanted)
            .map(|_| wanted)
    });

    Some(regular.unwrap_or(first))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(weight: Weight, scale: Scale, paths: &[&str]) -> Variant {
        Variant {
            symbol_trait: SymbolTrait::new(weight, scale),
            paths: paths.iter().map(|p| p.to_string()).collect(),
            width: 10.0,
            height: 10.0,
        }
    }

    fn symbol(variants: Vec<Variant>) -> Symbol {
        Symbol {
            name: "test".to_string(),
            variants,
            groups: None,
        }
    }

    #[test]
    fn test_closest_variant_prefers_smaller_distance() {
        let s = symbol(vec![
            variant(Weight::Regular, Scale::M, &["A Z"]),
            variant(Weight::Bold, Scale::L, &["B Z"]),
        ]);
        let v = closest_variant(&s, Weight::Semibold, Scale::L).unwrap();
        assert_eq!(v.symbol_trait, SymbolTrait::new(Weight::Bold, Scale::L));
    }

    #[test]
    fn test_closest_variant_exact_match_wins_regardless_of_order() {
        let s = symbol(vec![
            variant(Weight::Light, Scale::S, &["A Z"]),
            variant(Weight::Regular, Scale::M, &["B Z"]),
            variant(Weight::Bold, Scale::L, &["C Z"]),
        ]);
        for t in s.traits().collect::<Vec<_>>() {
            let v = closest_variant(&s, t.weight, t.scale).unwrap();
            assert_eq!(v.symbol_trait, t);
        }
    }

    #[test]
    fn test_closest_variant_ties_go_to_first() {
        let s = symbol(vec![
            variant(Weight::Light, Scale::M, &["A Z"]),
            variant(Weight::Medium, Scale::M, &["B Z"]),
        ]);
        let v = closest_variant(&s, Weight::Regular, Scale::M).unwrap();
        assert_eq!(v.symbol_trait.weight, Weight::Light);
    }

    #[test]
    fn test_closest_variant_empty_symbol() {
        let s = symbol(vec![]);
        assert!(closest_variant(&s, Weight::Regular, Scale::M).is_none());
    }

    #[test]
    fn test_paths_by_hierarchy_buckets_in_first_seen_order() {
        let v = variant(Weight::Regular, Scale::M, &["A Z", "B Z", "C Z", "D Z"]);
        let groups = vec![
            Group { path_indices: vec![2], hierarchy: Some(Hierarchy::Secondary) },
            Group { path_indices: vec![0, 1], hierarchy: None },
            Group { path_indices: vec![3], hierarchy: Some(Hierarchy::Secondary) },
        ];
        let buckets = paths_by_hierarchy(&groups, &v);
        assert_eq!(
            buckets,
            vec![
                (Hierarchy::Secondary, "C Z D Z".to_string()),
                (Hierarchy::Primary, "A Z B Z".to_string()),
            ]
        );
    }

    #[test]
    fn test_paths_by_hierarchy_preserves_total_count() {
        let v = variant(Weight::Regular, Scale::M, &["M 0 0 Z", "M 1 1 Z", "M 2 2 Z"]);
        let groups = vec![
            Group { path_indices: vec![0], hierarchy: Some(Hierarchy::Primary) },
            Group { path_indices: vec![1], hierarchy: Some(Hierarchy::Tertiary) },
            Group { path_indices: vec![2], hierarchy: None },
        ];
        let total: usize = paths_by_hierarchy(&groups, &v)
            .iter()
            .map(|(_, p)| p.matches('Z').count())
            .sum();
        assert_eq!(total, v.paths.len());
    }

    #[test]
    fn test_paths_by_hierarchy_skips_stale_indices() {
        let v = variant(Weight::Regular, Scale::M, &["A Z"]);
        let groups = vec![Group { path_indices: vec![0, 7], hierarchy: None }];
        assert_eq!(
            paths_by_hierarchy(&groups, &v),
            vec![(Hierarchy::Primary, "A Z".to_string())]
        );
    }

    #[test]
    fn test_default_trait_prefers_regular() {
        let s = symbol(vec![
            variant(Weight::Bold, Scale::S, &["A Z"]),
            variant(Weight::Regular, Scale::M, &["B Z"]),
        ]);
        assert_eq!(default_trait(&s), Some(SymbolTrait::new(Weight::Regular, Scale::M)));

        let s = symbol(vec![
            variant(Weight::Bold, Scale::S, &["A Z"]),
            variant(Weight::Black, Scale::L, &["B Z"]),
        ]);
        assert_eq!(default_trait(&s), Some(SymbolTrait::new(Weight::Bold, Scale::S)));
    }
}
