//! Filter stage: category + free-text narrowing.

use obelisk_core::product::Product;
use obelisk_core::types::EntityId;

/// Active category selection on the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Show every category ("all" tab).
    All,
    /// Show only products whose legacy `category` field equals this id.
    Id(EntityId),
}

impl CategoryFilter {
    fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Id(id) => product.category.as_ref() == Some(id),
        }
    }
}

/// Narrow the full product list to those matching the active category
/// and the search term.
///
/// The search term matches case-insensitively against name or
/// description (Unicode lowercase, so Cyrillic input works); an empty
/// term matches everything. The input list is never mutated.
pub fn filter_products(
    products: &[Product],
    category: &CategoryFilter,
    search: &str,
) -> Vec<Product> {
    let needle = search.trim().to_lowercase();
    products
        .iter()
        .filter(|p| category.matches(p))
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, description: &str, category: &str) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price: 10_000.0,
            category: Some(category.into()),
            categories: None,
            material: None,
            kind: None,
            color: None,
            images: vec![],
            is_on_sale: false,
            sale_price: None,
            sale_percentage: None,
            sale_end_date: None,
        }
    }

    fn fixtures() -> Vec<Product> {
        vec![
            product("p1", "Памятник вертикальный", "Гранит габбро-диабаз", "vertical"),
            product("p2", "Памятник горизонтальный", "Мрамор", "horizontal"),
            product("p3", "Крест", "Гранит серый", "cross"),
        ]
    }

    #[test]
    fn all_with_empty_search_returns_everything() {
        let out = filter_products(&fixtures(), &CategoryFilter::All, "");
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn category_filter_matches_legacy_field_only() {
        let out = filter_products(&fixtures(), &CategoryFilter::Id("vertical".into()), "");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "p1");
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let out = filter_products(&fixtures(), &CategoryFilter::Id("fence".into()), "");
        assert!(out.is_empty());
    }

    #[test]
    fn search_is_case_insensitive_for_cyrillic() {
        // "гранит" must match descriptions containing "Гранит".
        let out = filter_products(&fixtures(), &CategoryFilter::All, "гранит");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, "p1");
        assert_eq!(out[1].id, "p3");
    }

    #[test]
    fn search_matches_name_or_description() {
        let out = filter_products(&fixtures(), &CategoryFilter::All, "крест");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "p3");
    }

    #[test]
    fn search_and_category_compose() {
        let out = filter_products(
            &fixtures(),
            &CategoryFilter::Id("horizontal".into()),
            "гранит",
        );
        assert!(out.is_empty());
    }

    #[test]
    fn whitespace_only_search_matches_everything() {
        let out = filter_products(&fixtures(), &CategoryFilter::All, "   ");
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn input_list_is_untouched() {
        let input = fixtures();
        let _ = filter_products(&input, &CategoryFilter::Id("cross".into()), "гранит");
        assert_eq!(input.len(), 3);
    }
}
