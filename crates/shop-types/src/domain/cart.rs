use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::config::PromotionConfig;
use crate::domain::product::{Product, Sku};

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 999;

/// A product in the cart with its quantity.
///
/// `total_item_price` is always `price * quantity`; both fields are private so
/// the only way to change the quantity is [`CartLine::set_quantity`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    #[serde(flatten)]
    product: Product,
    quantity: u32,
    total_item_price: Decimal,
}

impl CartLine {
    pub fn new(product: Product) -> Self {
        let total_item_price = product.price;
        Self {
            product,
            quantity: MIN_QUANTITY,
            total_item_price,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn sku(&self) -> Sku {
        self.product.sku
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_item_price(&self) -> Decimal {
        self.total_item_price
    }

    /// Clamps `requested` into `[MIN_QUANTITY, MAX_QUANTITY]`.
    pub fn set_quantity(&mut self, requested: i64) {
        let clamped = requested.clamp(i64::from(MIN_QUANTITY), i64::from(MAX_QUANTITY));
        // in range after the clamp above
        self.quantity = u32::try_from(clamped).unwrap_or(MIN_QUANTITY);
        self.total_item_price = self.product.price * Decimal::from(self.quantity);
    }
}

/// Session cart: one line per sku, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    promotion_code: String,
    applied_discount: Decimal,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, sku: Sku) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.sku() == sku)
    }

    pub fn promotion_code(&self) -> &str {
        &self.promotion_code
    }

    pub fn applied_discount(&self) -> Decimal {
        self.applied_discount
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn add_product(&mut self, product: &Product) {
        match self.line(product.sku).map(CartLine::quantity) {
            Some(current) => {
                self.update_quantity(product.sku, i64::from(current) + 1);
            }
            None => self.lines.push(CartLine::new(product.clone())),
        }
    }

    /// Returns `false` when no line holds `sku`.
    pub fn update_quantity(&mut self, sku: Sku, requested: i64) -> bool {
        match self.lines.iter_mut().find(|line| line.sku() == sku) {
            Some(line) => {
                line.set_quantity(requested);
                true
            }
            None => false,
        }
    }

    /// Returns `false` when no line holds `sku`.
    pub fn remove(&mut self, sku: Sku) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.sku() != sku);
        self.lines.len() != before
    }

    pub fn set_promotion_code(&mut self, code: impl Into<String>) {
        self.promotion_code = code.into();
    }

    /// Re-evaluates the stored code against `promotion`. A miss always resets
    /// the discount to zero.
    pub fn apply_promotion(&mut self, promotion: &PromotionConfig) -> bool {
        if promotion.matches(&self.promotion_code) {
            self.applied_discount = promotion.discount_amount;
            true
        } else {
            self.applied_discount = Decimal::ZERO;
            false
        }
    }

    pub fn total_sku_count(&self) -> usize {
        self.lines.len()
    }

    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }

    /// Deep copy of the lines, independent of later cart mutation.
    pub fn snapshot(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
