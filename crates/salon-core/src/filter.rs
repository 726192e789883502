//! Catalog filtering shared by the services and products views

use serde::Serialize;

use crate::catalog::{CatalogEntity, ALL_CATEGORIES};

/// Predicate narrowing a catalog list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Criterion {
    /// Exact category match; [`ALL_CATEGORIES`] disables the filter
    Category(String),
    /// Case-insensitive substring of the name; empty disables the filter
    NameContains(String),
}

impl Criterion {
    pub fn category(category: impl Into<String>) -> Self {
        Self::Category(category.into())
    }

    pub fn name_contains(term: impl Into<String>) -> Self {
        Self::NameContains(term.into())
    }

    /// True if this criterion keeps every entity
    pub fn is_pass_through(&self) -> bool {
        match self {
            Criterion::Category(c) => c == ALL_CATEGORIES,
            Criterion::NameContains(term) => term.is_empty(),
        }
    }

    pub fn matches<E: CatalogEntity + ?Sized>(&self, entity: &E) -> bool {
        match self {
            Criterion::Category(c) => c == ALL_CATEGORIES || entity.category() == c,
            Criterion::NameContains(term) => {
                term.is_empty() || entity.name().to_lowercase().contains(&term.to_lowercase())
            }
        }
    }
}

impl Default for Criterion {
    fn default() -> Self {
        Self::Category(ALL_CATEGORIES.to_string())
    }
}

/// Lazily filter `entities` by `criterion`, preserving relative order.
///
/// An empty result is a valid outcome; callers distinguish it from the
/// unfiltered case by length alone.
pub fn filter<'a, E: CatalogEntity + 'a>(
    entities: &'a [E],
    criterion: &Criterion,
) -> impl Iterator<Item = &'a E> + 'a {
    let criterion = criterion.clone();
    let pass_through = criterion.is_pass_through();
    entities
        .iter()
        .filter(move |e| pass_through || criterion.matches(*e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::{products, services};
    use crate::catalog::ProductId;

    fn names<'a, E: CatalogEntity + 'a>(it: impl Iterator<Item = &'a E>) -> Vec<String> {
        it.map(|e| e.name().to_string()).collect()
    }

    #[test]
    fn test_todos_returns_input_unchanged() {
        let all = Criterion::category(ALL_CATEGORIES);
        let out: Vec<_> = filter(services(), &all).collect();
        assert_eq!(out.len(), services().len());
        assert!(out.iter().zip(services()).all(|(a, b)| a.id == b.id));

        let out: Vec<_> = filter(products(), &all).collect();
        assert_eq!(out.len(), products().len());
    }

    #[test]
    fn test_empty_search_returns_input_unchanged() {
        let empty = Criterion::name_contains("");
        let out: Vec<_> = filter(products(), &empty).map(|p| p.id).collect();
        let expected: Vec<_> = products().iter().map(|p| p.id).collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_category_shampoo_matches_exactly_one_product() {
        let out: Vec<_> = filter(products(), &Criterion::category("Shampoo")).collect();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, ProductId(1));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let out = names(filter(products(), &Criterion::name_contains("kit")));
        assert_eq!(out, vec!["Kit Home Care Organic"]);

        let out = names(filter(products(), &Criterion::name_contains("MILANO")));
        assert_eq!(out, vec!["Óleo Reparador Milano"]);
    }

    #[test]
    fn test_category_filter_preserves_order() {
        let out = names(filter(services(), &Criterion::category("Tratamento")));
        assert_eq!(out, vec!["Terapia de Argila", "Hidratação de Argan"]);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let out: Vec<_> = filter(products(), &Criterion::name_contains("xampu seco")).collect();
        assert!(out.is_empty());
        let out: Vec<_> = filter(services(), &Criterion::category("Barba")).collect();
        assert!(out.is_empty());
    }

    #[test]
    fn test_result_is_subset_satisfying_predicate() {
        let criteria = [
            Criterion::category("Corte"),
            Criterion::category("Cor"),
            Criterion::name_contains("ter"),
            Criterion::name_contains("a"),
            Criterion::name_contains("zzz"),
        ];
        for criterion in &criteria {
            for kept in filter(services(), criterion) {
                assert!(services().iter().any(|s| s.id == kept.id));
                assert!(criterion.matches(kept));
            }
        }
    }

    #[test]
    fn test_category_is_exact_not_substring() {
        // "Cor" must not match "Corte"
        let out = names(filter(services(), &Criterion::category("Cor")));
        assert_eq!(out, vec!["Coloração Vegetal"]);
    }
}
