//! The catalog listing view-model.
//!
//! Owns the full product list plus the user-controlled parameters and
//! recomputes filter → sort → paginate on demand. Any parameter change
//! other than the page number itself resets the page to 1, so a
//! shrinking result set can never strand the user on an empty page.

use obelisk_core::product::Product;

use crate::filter::{filter_products, CategoryFilter};
use crate::paginate::{paginate, total_pages};
use crate::sort::{sort_products, SortKey};

/// Default number of product cards per page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

#[derive(Debug)]
pub struct CatalogView {
    products: Vec<Product>,
    search: String,
    category: CategoryFilter,
    sort: SortKey,
    page: usize,
    per_page: usize,
}

impl CatalogView {
    /// Wrap a freshly fetched product list with default parameters.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            search: String::new(),
            category: CategoryFilter::All,
            sort: SortKey::Default,
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }

    /// Replace the backing list after a refetch. Parameters survive,
    /// but the page resets since the result set may have changed shape.
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.page = 1;
    }

    // ---- parameter setters ----

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page;
        self.page = 1;
    }

    /// Jump to a page. The only parameter change that does not reset
    /// pagination.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    // ---- derived state ----

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Filtered and sorted result set, before windowing.
    pub fn results(&self) -> Vec<Product> {
        let filtered = filter_products(&self.products, &self.category, &self.search);
        sort_products(&filtered, self.sort)
    }

    /// The window of products visible on the current page.
    pub fn visible(&self) -> Vec<Product> {
        let results = self.results();
        paginate(&results, self.page, self.per_page).to_vec()
    }

    /// Total page count for the current result set.
    pub fn total_pages(&self) -> usize {
        total_pages(self.results().len(), self.per_page)
    }

    /// Number of products matching the current filter and search.
    pub fn result_count(&self) -> usize {
        self.results().len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, price: f64, category: &str) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            description: String::new(),
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

    fn seven_products() -> Vec<Product> {
        (1..=7)
            .map(|i| product(&format!("p{i}"), &format!("Памятник {i}"), i as f64 * 100.0, "vertical"))
            .collect()
    }

    #[test]
    fn first_page_shows_six_of_seven() {
        let view = CatalogView::new(seven_products());
        assert_eq!(view.visible().len(), 6);
        assert_eq!(view.total_pages(), 2);
    }

    #[test]
    fn second_page_shows_the_remainder() {
        let mut view = CatalogView::new(seven_products());
        view.set_page(2);
        let visible = view.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "p7");
    }

    #[test]
    fn search_change_resets_page() {
        let mut view = CatalogView::new(seven_products());
        view.set_page(2);
        view.set_search("Памятник");
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn category_change_resets_page() {
        let mut view = CatalogView::new(seven_products());
        view.set_page(2);
        view.set_category(CategoryFilter::Id("vertical".into()));
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn sort_change_resets_page() {
        let mut view = CatalogView::new(seven_products());
        view.set_page(2);
        view.set_sort(SortKey::PriceDesc);
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut view = CatalogView::new(seven_products());
        view.set_page(2);
        view.set_per_page(3);
        assert_eq!(view.page(), 1);
        assert_eq!(view.total_pages(), 3);
    }

    #[test]
    fn set_page_alone_does_not_reset() {
        let mut view = CatalogView::new(seven_products());
        view.set_page(2);
        assert_eq!(view.page(), 2);
    }

    #[test]
    fn pipeline_composes_filter_sort_paginate() {
        let mut products = seven_products();
        products.push(product("free", "Памятник по запросу", 0.0, "vertical"));
        let mut view = CatalogView::new(products);
        view.set_sort(SortKey::PriceAsc);
        view.set_per_page(4);

        // Cheapest four on page one; the zero-priced product is on the
        // last page even under ascending sort.
        let first: Vec<_> = view.visible().iter().map(|p| p.id.clone()).collect();
        assert_eq!(first, vec!["p1", "p2", "p3", "p4"]);
        view.set_page(2);
        let second: Vec<_> = view.visible().iter().map(|p| p.id.clone()).collect();
        assert_eq!(second, vec!["p5", "p6", "p7", "free"]);
    }

    #[test]
    fn refetch_resets_page() {
        let mut view = CatalogView::new(seven_products());
        view.set_page(2);
        view.replace_products(seven_products());
        assert_eq!(view.page(), 1);
    }
}
