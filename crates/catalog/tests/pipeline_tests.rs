//! Integration tests for the catalog pipeline.
//!
//! Drives filter → sort → paginate through [`CatalogView`] the way the
//! listing page does, and checks the windowing and ordering properties
//! hold for the composed pipeline, not just the individual stages.

use obelisk_catalog::{CatalogView, CategoryFilter, SortKey};
use obelisk_core::product::Product;

fn product(id: &str, name: &str, description: &str, price: f64, category: &str) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        price,
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

fn catalog() -> Vec<Product> {
    vec![
        product("p1", "Памятник вертикальный", "Гранит габбро-диабаз", 28_000.0, "vertical"),
        product("p2", "Памятник горизонтальный", "Гранит серый", 34_000.0, "horizontal"),
        product("p3", "Крест резной", "Мрамор", 41_000.0, "cross"),
        product("p4", "Стела эксклюзивная", "Гранит чёрный", 0.0, "vertical"),
        product("p5", "Ограда кованая", "Металл", 12_000.0, "fence"),
        product("p6", "Памятник детский", "Мрамор белый", 19_000.0, "vertical"),
        product("p7", "Цветник", "Гранит", 8_000.0, "vertical"),
    ]
}

// ---------------------------------------------------------------------------
// Composed pipeline
// ---------------------------------------------------------------------------

/// Category narrowing, price sort with the zero sentinel, and the
/// page window all apply in order.
#[test]
fn category_sort_and_window_compose() {
    let mut view = CatalogView::new(catalog());
    view.set_category(CategoryFilter::Id("vertical".into()));
    view.set_sort(SortKey::PriceAsc);
    view.set_per_page(3);

    let first: Vec<_> = view.visible().iter().map(|p| p.id.clone()).collect();
    assert_eq!(first, vec!["p7", "p6", "p1"]);

    view.set_page(2);
    let second: Vec<_> = view.visible().iter().map(|p| p.id.clone()).collect();
    // The zero-priced stela lands on the last page despite ascending sort.
    assert_eq!(second, vec!["p4"]);
}

/// Concatenating every page reconstructs the sorted result set exactly,
/// with no duplicates or omissions.
#[test]
fn pages_reconstruct_the_result_set() {
    let mut view = CatalogView::new(catalog());
    view.set_sort(SortKey::Name);
    view.set_per_page(2);

    let expected = view.results();
    let mut rebuilt = Vec::new();
    for page in 1..=view.total_pages() {
        view.set_page(page);
        let window = view.visible();
        assert!(window.len() <= 2);
        rebuilt.extend(window);
    }

    let rebuilt_ids: Vec<_> = rebuilt.iter().map(|p| p.id.clone()).collect();
    let expected_ids: Vec<_> = expected.iter().map(|p| p.id.clone()).collect();
    assert_eq!(rebuilt_ids, expected_ids);
}

/// Search applies before sorting and pagination, and resets the page.
#[test]
fn search_narrows_then_sorts() {
    let mut view = CatalogView::new(catalog());
    view.set_per_page(2);
    view.set_page(2);

    view.set_search("гранит");
    assert_eq!(view.page(), 1, "search change must reset pagination");
    assert_eq!(view.result_count(), 4);

    view.set_sort(SortKey::PriceDesc);
    let first: Vec<_> = view.visible().iter().map(|p| p.id.clone()).collect();
    assert_eq!(first, vec!["p2", "p1"]);
}

/// Shrinking the result set below the current page cannot strand the
/// user on an empty window.
#[test]
fn narrowing_never_leaves_an_empty_page() {
    let mut view = CatalogView::new(catalog());
    view.set_per_page(2);
    view.set_page(4);
    assert!(!view.visible().is_empty());

    view.set_category(CategoryFilter::Id("cross".into()));
    assert_eq!(view.page(), 1);
    assert_eq!(view.visible().len(), 1);
}
