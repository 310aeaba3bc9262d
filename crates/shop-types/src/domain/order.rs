use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::cart::CartLine;
use crate::domain::pricing::CartTotals;

const ORDER_KEY_PREFIX: &str = "order-";

/// Storage key under which an order is persisted.
pub fn order_key(order_id: &str) -> String {
    format!("{ORDER_KEY_PREFIX}{order_id}")
}

/// Write-once snapshot of a cart at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDetail {
    pub order_id: String,
    pub items: Vec<CartLine>,
    pub sub_total: Decimal,
    pub final_discount: Decimal,
    pub delivery_fee: Decimal,
    pub final_total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl OrderDetail {
    pub fn new(order_id: impl Into<String>, items: Vec<CartLine>, totals: CartTotals) -> Self {
        Self {
            order_id: order_id.into(),
            items,
            sub_total: totals.sub_total,
            final_discount: totals.final_discount,
            delivery_fee: totals.delivery_fee,
            final_total_amount: totals.final_total_amount,
            created_at: Utc::now(),
        }
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals {
            sub_total: self.sub_total,
            final_discount: self.final_discount,
            delivery_fee: self.delivery_fee,
            final_total_amount: self.final_total_amount,
        }
    }
}
