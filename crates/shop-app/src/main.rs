use shop_hex::application::session::ShopSession;
use shop_hex::config::{self, Config};
use shop_hex::inbound::http::{HttpServer, HttpServerConfig};
use shop_storage::{build_store, Store};
use std::sync::Arc;

const BUNDLED_SHOP_CONFIG: &str = include_str!("../data/config.json");
const BUNDLED_CATALOG: &str = include_str!("../data/products.json");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for DATABASE_URL / SERVER_PORT / SHOP_CONFIG_PATH / CATALOG_PATH when present.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();

    let config = Config::from_env()?;
    let shop_config = match &config.shop_config_path {
        Some(path) => config::load_shop_config(path)?,
        None => config::parse_shop_config(BUNDLED_SHOP_CONFIG)?,
    };
    let products = match &config.catalog_path {
        Some(path) => config::load_catalog(path)?,
        None => config::parse_catalog(BUNDLED_CATALOG)?,
    };

    let store: Store = build_store(config.database_url.as_deref()).await?;
    tracing::info!(
        backend = store.backend_name(),
        products = products.len(),
        "shop initialised"
    );
    let session = ShopSession::new(products, Arc::new(shop_config), store);

    let server_cfg = HttpServerConfig {
        port: config.server_port.clone(),
    };

    let http = HttpServer::new(session, server_cfg).await?;
    http.run().await
}
