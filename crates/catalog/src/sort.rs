//! Sort stage.
//!
//! Price sorts carry one policy quirk: a price of exactly zero means
//! "price on request" and is never the cheapest — those products are
//! ordered after every priced product in both directions.

use std::cmp::Ordering;

use obelisk_core::product::Product;

/// Sort key selected on the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Preserve backend order.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    Name,
}

/// Return a sorted copy of the filtered list. The input is never
/// mutated; `SortKey::Default` is a plain copy.
pub fn sort_products(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut out = products.to_vec();
    match key {
        SortKey::Default => {}
        SortKey::PriceAsc => out.sort_by(|a, b| price_order(a, b, false)),
        SortKey::PriceDesc => out.sort_by(|a, b| price_order(a, b, true)),
        SortKey::Name => {
            out.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
    }
    out
}

/// Compare by price with the zero-price sentinel pushed last. Only the
/// priced-vs-priced comparison flips with `descending`.
fn price_order(a: &Product, b: &Product, descending: bool) -> Ordering {
    match (a.has_price(), b.has_price()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
        (true, true) => {
            let cmp = a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal);
            if descending {
                cmp.reverse()
            } else {
                cmp
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
