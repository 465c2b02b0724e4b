//! Two-tier category labeling for product cards.
//!
//! Category data arrives asynchronously after the product list and must
//! never block card rendering. Labels are therefore resolved through an
//! ordered chain: the fetched category table first, then a fixed table
//! of known legacy tokens, then a generic default. Precedence is
//! explicit; the first resolver that answers wins.

use std::collections::HashMap;

use obelisk_core::category::Category;
use obelisk_core::product::Product;
use obelisk_core::types::EntityId;

/// Display label and badge color class for a product's primary category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLabel {
    pub name: String,
    pub color_class: String,
}

/// Known legacy category tokens with their hardcoded display names and
/// color classes. Kept for products created before the dynamic category
/// table existed.
const LEGACY_CATEGORIES: &[(&str, &str, &str)] = &[
    ("vertical", "Вертикальные", "badge-slate"),
    ("horizontal", "Горизонтальные", "badge-stone"),
    ("complex", "Мемориальные комплексы", "badge-granite"),
    ("cross", "Кресты", "badge-marble"),
    ("fence", "Ограды", "badge-iron"),
];

/// Label used when no resolver recognizes the token.
const GENERIC_LABEL: (&str, &str) = ("Памятники", "badge-neutral");

/// Badge palette for dynamically fetched categories.
const DYNAMIC_PALETTE: &[&str] = &[
    "badge-slate",
    "badge-stone",
    "badge-granite",
    "badge-marble",
    "badge-iron",
];

/// Resolve the label for a product's primary category.
///
/// `categories` is the freshly fetched table keyed by id; it may be
/// empty while the fetch is still outstanding, in which case the legacy
/// table answers for known tokens and the generic label for the rest.
pub fn resolve_category_label(
    product: &Product,
    categories: &HashMap<EntityId, Category>,
) -> CategoryLabel {
    product
        .primary_category()
        .and_then(|id| resolve_dynamic(id, categories))
        .or_else(|| {
            // Legacy tokens live in the old single-category field; fall
            // back to the primary entry for products that never had one.
            product
                .category
                .as_ref()
                .or(product.primary_category())
                .and_then(resolve_legacy)
        })
        .unwrap_or_else(generic_label)
}

/// Tier 1: the fetched category table.
fn resolve_dynamic(
    id: &EntityId,
    categories: &HashMap<EntityId, Category>,
) -> Option<CategoryLabel> {
    let category = categories.get(id)?;
    Some(CategoryLabel {
        name: category.name.clone(),
        color_class: color_class_for(&category.name).to_string(),
    })
}

/// Tier 2: the fixed legacy token table.
fn resolve_legacy(id: &EntityId) -> Option<CategoryLabel> {
    LEGACY_CATEGORIES
        .iter()
        .find(|(token, _, _)| token == id)
        .map(|(_, name, color)| CategoryLabel {
            name: (*name).to_string(),
            color_class: (*color).to_string(),
        })
}

/// Tier 3: the generic default.
fn generic_label() -> CategoryLabel {
    CategoryLabel {
        name: GENERIC_LABEL.0.to_string(),
        color_class: GENERIC_LABEL.1.to_string(),
    }
}

/// Pick a stable palette entry for a fetched category name. The same
/// name always maps to the same class.
fn color_class_for(name: &str) -> &'static str {
    let sum: usize = name.bytes().map(usize::from).sum();
    DYNAMIC_PALETTE[sum % DYNAMIC_PALETTE.len()]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
