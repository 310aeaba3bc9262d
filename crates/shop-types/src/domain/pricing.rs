//! Pricing calculator.
//!
//! Pure functions over cart lines and configuration. None of them fail and
//! none of them clamp: a discount larger than the subtotal plus delivery fee
//! yields a negative total.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::cart::CartLine;
use crate::domain::config::DeliveryConfig;

/// Sum of `price * quantity` over all lines. Empty input gives zero.
pub fn subtotal(lines: &[CartLine]) -> Decimal {
    lines
        .iter()
        .map(|line| line.product().price * Decimal::from(line.quantity()))
        .sum()
}

/// Free delivery once the subtotal reaches the configured minimum.
pub fn delivery_fee(subtotal: Decimal, config: &DeliveryConfig) -> Decimal {
    if subtotal >= config.minimum_cart_amount {
        Decimal::ZERO
    } else {
        config.delivery_fee_amount
    }
}

pub fn final_total(subtotal: Decimal, discount: Decimal, delivery_fee: Decimal) -> Decimal {
    subtotal - discount + delivery_fee
}

/// Two decimal places for display, midpoint rounded away from zero.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// Every derived money figure of a cart, computed in one pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    pub sub_total: Decimal,
    pub final_discount: Decimal,
    pub delivery_fee: Decimal,
    pub final_total_amount: Decimal,
}

impl CartTotals {
    pub fn compute(lines: &[CartLine], discount: Decimal, config: &DeliveryConfig) -> Self {
        let sub_total = subtotal(lines);
        let fee = delivery_fee(sub_total, config);
        Self {
            sub_total,
            final_discount: discount,
            delivery_fee: fee,
            final_total_amount: final_total(sub_total, discount, fee),
        }
    }
}
