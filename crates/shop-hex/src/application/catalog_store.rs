use rust_decimal::Decimal;
use shop_types::domain::catalog::{self, FilterCriteria, PriceRange};
use shop_types::domain::product::{Product, Sku};

/// Product list plus the shopper's current filter criteria.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    criteria: FilterCriteria,
}

impl CatalogStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            criteria: FilterCriteria::default(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn find_by_sku(&self, sku: Sku) -> Option<&Product> {
        self.products.iter().find(|p| p.sku == sku)
    }

    pub fn available_brands(&self) -> Vec<String> {
        catalog::unique_brands(&self.products)
    }

    pub fn filtered_products(&self) -> Vec<&Product> {
        catalog::filter_products(
            &self.products,
            &self.criteria.search_term,
            &self.criteria.selected_brands,
            self.criteria.price_range,
        )
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
    }

    /// Selects `brand` if absent, deselects it otherwise.
    pub fn toggle_brand(&mut self, brand: &str) {
        let selected = &mut self.criteria.selected_brands;
        match selected.iter().position(|b| b == brand) {
            Some(idx) => {
                selected.remove(idx);
            }
            None => selected.push(brand.to_owned()),
        }
    }

    /// Duplicates are dropped, first occurrence wins.
    pub fn set_selected_brands(&mut self, brands: Vec<String>) {
        let mut unique: Vec<String> = Vec::with_capacity(brands.len());
        for brand in brands {
            if !unique.contains(&brand) {
                unique.push(brand);
            }
        }
        self.criteria.selected_brands = unique;
    }

    pub fn set_price_range(&mut self, min: Decimal, max: Decimal) {
        self.criteria.price_range = PriceRange::new(min, max);
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria.search_term = criteria.search_term;
        self.criteria.price_range = criteria.price_range;
        self.set_selected_brands(criteria.selected_brands);
    }

    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }
}
