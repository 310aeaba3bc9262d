use crate::application::cart_manager::CartManager;
use crate::application::catalog_store::CatalogStore;
use crate::application::order_archiver::OrderArchiver;
use crate::application::order_ids::{OrderIdSource, TimestampOrderIds};
use crate::errors::AppError;
use shop_types::domain::config::ShopConfig;
use shop_types::domain::order::OrderDetail;
use shop_types::domain::product::{Product, Sku};
use shop_types::ports::key_value_store::KeyValueStore;
use std::sync::Arc;

/// State owned by a single shopper for the lifetime of a session.
pub struct ShopSession<S: KeyValueStore> {
    pub catalog: CatalogStore,
    pub cart: CartManager,
    pub archiver: OrderArchiver<S>,
    order_ids: Box<dyn OrderIdSource>,
}

impl<S: KeyValueStore> ShopSession<S> {
    pub fn new(products: Vec<Product>, config: Arc<ShopConfig>, store: S) -> Self {
        Self::with_order_ids(products, config, store, Box::new(TimestampOrderIds::new()))
    }

    pub fn with_order_ids(
        products: Vec<Product>,
        config: Arc<ShopConfig>,
        store: S,
        order_ids: Box<dyn OrderIdSource>,
    ) -> Self {
        Self {
            catalog: CatalogStore::new(products),
            cart: CartManager::new(config),
            archiver: OrderArchiver::new(store),
            order_ids,
        }
    }

    /// Adds a catalog product by sku.
    pub fn add_sku(&mut self, sku: Sku) -> Result<(), AppError> {
        let product = self
            .catalog
            .find_by_sku(sku)
            .ok_or_else(|| AppError::NotFound(format!("product {}", sku)))?;
        self.cart.add_to_cart(product);
        Ok(())
    }

    /// Creates an order from the current cart under a freshly issued id.
    pub async fn checkout(&mut self) -> Result<OrderDetail, AppError> {
        let order_id = self.order_ids.next_id();
        self.archiver.create_order(&mut self.cart, &order_id).await
    }
}
