use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryConfig {
    pub delivery_fee_amount: Decimal,
    /// Subtotals at or above this amount ship for free.
    pub minimum_cart_amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromotionConfig {
    pub discount_code: String,
    pub discount_amount: Decimal,
}

impl PromotionConfig {
    /// Case-insensitive comparison against the configured code.
    pub fn matches(&self, code: &str) -> bool {
        code.to_uppercase() == self.discount_code.to_uppercase()
    }
}

/// Read-only shop configuration. Values are trusted as supplied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShopConfig {
    pub delivery_fee: DeliveryConfig,
    pub promotion: PromotionConfig,
}
