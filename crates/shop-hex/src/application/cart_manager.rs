use rust_decimal::Decimal;
use serde::Serialize;
use shop_types::domain::cart::{Cart, CartLine};
use shop_types::domain::config::ShopConfig;
use shop_types::domain::pricing::{self, CartTotals};
use shop_types::domain::product::{Product, Sku};
use std::sync::Arc;

/// Owns the session cart and derives every total on read.
#[derive(Debug, Clone)]
pub struct CartManager {
    cart: Cart,
    config: Arc<ShopConfig>,
}

/// Read-only view of the cart with its derived figures.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartView {
    pub items: Vec<CartLine>,
    pub promotion_code: String,
    pub total_sku_count: usize,
    pub total_quantity: u64,
    #[serde(flatten)]
    pub totals: CartTotals,
}

impl CartManager {
    pub fn new(config: Arc<ShopConfig>) -> Self {
        Self {
            cart: Cart::new(),
            config,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    pub fn add_to_cart(&mut self, product: &Product) {
        self.cart.add_product(product);
        tracing::debug!(sku = product.sku, "product added to cart");
    }

    pub fn update_quantity(&mut self, sku: Sku, requested_quantity: i64) {
        if !self.cart.update_quantity(sku, requested_quantity) {
            tracing::debug!(sku, "quantity update ignored, sku not in cart");
        }
    }

    pub fn remove_from_cart(&mut self, sku: Sku) {
        if self.cart.remove(sku) {
            tracing::debug!(sku, "product removed from cart");
        }
    }

    pub fn set_promotion_code(&mut self, code: impl Into<String>) {
        self.cart.set_promotion_code(code);
    }

    pub fn apply_promotion(&mut self) -> bool {
        let applied = self.cart.apply_promotion(&self.config.promotion);
        tracing::debug!(applied, discount = %self.cart.applied_discount(), "promotion evaluated");
        applied
    }

    pub fn total_sku_count(&self) -> usize {
        self.cart.total_sku_count()
    }

    pub fn total_quantity(&self) -> u64 {
        self.cart.total_quantity()
    }

    pub fn subtotal(&self) -> Decimal {
        pricing::subtotal(self.cart.lines())
    }

    pub fn delivery_fee(&self) -> Decimal {
        pricing::delivery_fee(self.subtotal(), &self.config.delivery_fee)
    }

    pub fn final_discount(&self) -> Decimal {
        self.cart.applied_discount()
    }

    pub fn final_total(&self) -> Decimal {
        pricing::final_total(self.subtotal(), self.final_discount(), self.delivery_fee())
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(
            self.cart.lines(),
            self.final_discount(),
            &self.config.delivery_fee,
        )
    }

    pub fn view(&self) -> CartView {
        CartView {
            items: self.cart.snapshot(),
            promotion_code: self.cart.promotion_code().to_owned(),
            total_sku_count: self.total_sku_count(),
            total_quantity: self.total_quantity(),
            totals: self.totals(),
        }
    }

    /// Clears lines, promotion code and discount.
    pub fn reset(&mut self) {
        self.cart.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_types::domain::config::{DeliveryConfig, PromotionConfig};

    fn config() -> Arc<ShopConfig> {
        Arc::new(ShopConfig {
            delivery_fee: DeliveryConfig {
                delivery_fee_amount: Decimal::from(50),
                minimum_cart_amount: Decimal::from(500),
            },
            promotion: PromotionConfig {
                discount_code: "SAVE10".into(),
                discount_amount: Decimal::from(10),
            },
        })
    }

    fn product(sku: Sku, price: i64) -> Product {
        Product {
            sku,
            brand: "Acme".into(),
            name: format!("Item {sku}"),
            pack_size: "1 pc".into(),
            image_url: vec![],
            price: Decimal::from(price),
        }
    }

    #[test]
    fn empty_cart_totals() {
        let manager = CartManager::new(config());
        assert_eq!(manager.total_sku_count(), 0);
        assert_eq!(manager.total_quantity(), 0);
        assert_eq!(manager.subtotal(), Decimal::ZERO);
        assert_eq!(manager.delivery_fee(), Decimal::from(50));
        assert_eq!(manager.final_total(), Decimal::from(50));
    }

    #[test]
    fn add_twice_gives_quantity_two() {
        let mut manager = CartManager::new(config());
        let p = product(1, 40);
        manager.add_to_cart(&p);
        manager.add_to_cart(&p);
        let line = manager.cart().line(1).unwrap();
        assert_eq!(line.quantity(), 2);
        assert_eq!(line.total_item_price(), Decimal::from(80));
        assert_eq!(manager.total_sku_count(), 1);
        assert_eq!(manager.total_quantity(), 2);
    }

    #[test]
    fn quantity_is_clamped_through_manager() {
        let mut manager = CartManager::new(config());
        manager.add_to_cart(&product(1, 1));
        manager.update_quantity(1, 0);
        assert_eq!(manager.cart().line(1).unwrap().quantity(), 1);
        manager.update_quantity(1, 5000);
        assert_eq!(manager.cart().line(1).unwrap().quantity(), 999);
        manager.update_quantity(42, 3);
        assert_eq!(manager.total_sku_count(), 1);
    }

    #[test]
    fn delivery_fee_waived_at_minimum() {
        let mut manager = CartManager::new(config());
        manager.add_to_cart(&product(1, 499));
        assert_eq!(manager.delivery_fee(), Decimal::from(50));
        manager.remove_from_cart(1);
        manager.add_to_cart(&product(2, 500));
        assert_eq!(manager.delivery_fee(), Decimal::ZERO);
        assert_eq!(manager.final_total(), Decimal::from(500));
    }

    #[test]
    fn promotion_success_then_failure() {
        let mut manager = CartManager::new(config());
        manager.add_to_cart(&product(1, 100));

        manager.set_promotion_code("SAVE10");
        assert!(manager.apply_promotion());
        assert_eq!(manager.final_discount(), Decimal::from(10));
        assert_eq!(manager.final_total(), Decimal::from(140));

        manager.set_promotion_code("WRONG");
        assert!(!manager.apply_promotion());
        assert_eq!(manager.final_discount(), Decimal::ZERO);
        assert_eq!(manager.final_total(), Decimal::from(150));
    }

    #[test]
    fn discount_larger_than_total_goes_negative() {
        let mut generous = (*config()).clone();
        generous.promotion.discount_amount = Decimal::from(100);
        let mut manager = CartManager::new(Arc::new(generous));
        manager.add_to_cart(&product(1, 20));
        manager.set_promotion_code("save10");
        assert!(manager.apply_promotion());
        // 20 - 100 + 50
        assert_eq!(manager.final_total(), Decimal::from(-30));
        assert_eq!(manager.totals().final_total_amount, Decimal::from(-30));
    }

    #[test]
    fn view_matches_individual_getters() {
        let mut manager = CartManager::new(config());
        manager.add_to_cart(&product(1, 120));
        manager.add_to_cart(&product(2, 30));
        manager.update_quantity(2, 3);
        let view = manager.view();
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.total_sku_count, 2);
        assert_eq!(view.total_quantity, 4);
        assert_eq!(view.totals.sub_total, manager.subtotal());
        assert_eq!(view.totals.delivery_fee, manager.delivery_fee());
        assert_eq!(view.totals.final_total_amount, manager.final_total());
    }

    #[test]
    fn reset_clears_state() {
        let mut manager = CartManager::new(config());
        manager.add_to_cart(&product(1, 10));
        manager.set_promotion_code("SAVE10");
        manager.apply_promotion();
        manager.reset();
        assert_eq!(manager.total_sku_count(), 0);
        assert_eq!(manager.cart().promotion_code(), "");
        assert_eq!(manager.final_discount(), Decimal::ZERO);
    }
}
