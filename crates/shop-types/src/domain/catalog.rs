//! Catalog filter: brand listing and product filtering over a product slice.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(Decimal::ZERO, Decimal::from(500))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCriteria {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub selected_brands: Vec<String>,
    #[serde(default)]
    pub price_range: PriceRange,
}

/// Distinct brands in ascending order.
pub fn unique_brands(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|p| p.brand.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Applies the search term, then the brand selection, then the price range.
/// An empty term or an empty selection matches everything; the price range
/// always applies. Surviving products keep their relative order.
pub fn filter_products<'a>(
    products: &'a [Product],
    search_term: &str,
    selected_brands: &[String],
    price_range: PriceRange,
) -> Vec<&'a Product> {
    let needle = search_term.to_lowercase();
    products
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .filter(|p| selected_brands.is_empty() || selected_brands.contains(&p.brand))
        .filter(|p| price_range.contains(p.price))
        .collect()
}
