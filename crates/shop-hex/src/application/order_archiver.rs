use crate::application::cart_manager::CartManager;
use crate::errors::AppError;
use shop_types::domain::order::{order_key, OrderDetail};
use shop_types::domain::pricing::format_currency;
use shop_types::ports::key_value_store::KeyValueStore;

/// Turns the current cart into a persisted, write-once order record.
pub struct OrderArchiver<S: KeyValueStore> {
    store: S,
    last_completed: Option<OrderDetail>,
}

impl<S: KeyValueStore> OrderArchiver<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            last_completed: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The order created most recently in this session, if any.
    pub fn last_completed(&self) -> Option<&OrderDetail> {
        self.last_completed.as_ref()
    }

    /// Snapshots the cart, persists it under `order-<order_id>` and resets the
    /// cart. On any error the cart is left as it was.
    pub async fn create_order(
        &mut self,
        cart: &mut CartManager,
        order_id: &str,
    ) -> Result<OrderDetail, AppError> {
        let key = order_key(order_id);
        if self.store.get(&key).await?.is_some() {
            return Err(AppError::Conflict(format!("order {}", order_id)));
        }

        let order = OrderDetail::new(order_id, cart.cart().snapshot(), cart.totals());
        let payload = serde_json::to_string(&order).map_err(anyhow::Error::from)?;
        self.store.set(&key, payload).await?;

        tracing::info!(
            order_id,
            items = order.items.len(),
            total = %format_currency(order.final_total_amount),
            "order created"
        );
        self.last_completed = Some(order.clone());
        cart.reset();
        Ok(order)
    }

    /// Never fails: unreadable or corrupt records are logged and reported as
    /// absent, after which the just-completed order is consulted.
    pub async fn get_order_by_id(&self, order_id: &str) -> Option<OrderDetail> {
        match self.store.get(&order_key(order_id)).await {
            Ok(Some(raw)) => match serde_json::from_str::<OrderDetail>(&raw) {
                Ok(order) => return Some(order),
                Err(err) => {
                    tracing::error!(order_id, error = %err, "corrupt order record in storage");
                }
            },
            Ok(None) => {}
            Err(err) => {
                tracing::error!(order_id, error = %err, "failed to read order record");
            }
        }
        self.last_completed
            .as_ref()
            .filter(|order| order.order_id == order_id)
            .cloned()
    }

    pub async fn clear_order_from_storage(&mut self, order_id: &str) -> Result<(), AppError> {
        let removed = self.store.remove(&order_key(order_id)).await?;
        if self
            .last_completed
            .as_ref()
            .is_some_and(|order| order.order_id == order_id)
        {
            self.last_completed = None;
        }
        if removed {
            tracing::info!(order_id, "order cleared from storage");
        }
        Ok(())
    }
}
