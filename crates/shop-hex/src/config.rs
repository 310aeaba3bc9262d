use anyhow::Context;
use serde::Deserialize;
use shop_types::domain::config::ShopConfig;
use shop_types::domain::product::Product;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server_port: String,
    pub database_url: Option<String>,
    pub shop_config_path: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let server_port = env::var("SERVER_PORT").unwrap_or_else(|_| "3000".into());
        let database_url = env::var("DATABASE_URL").ok();
        let shop_config_path = env::var("SHOP_CONFIG_PATH").ok().map(PathBuf::from);
        let catalog_path = env::var("CATALOG_PATH").ok().map(PathBuf::from);
        Ok(Self {
            server_port,
            database_url,
            shop_config_path,
            catalog_path,
        })
    }
}

/// Parses the delivery/promotion document. Values are not validated.
pub fn parse_shop_config(json: &str) -> anyhow::Result<ShopConfig> {
    serde_json::from_str(json).context("invalid shop config")
}

pub fn parse_catalog(json: &str) -> anyhow::Result<Vec<Product>> {
    serde_json::from_str(json).context("invalid product catalog")
}

pub fn load_shop_config(path: &Path) -> anyhow::Result<ShopConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading shop config {}", path.display()))?;
    parse_shop_config(&raw)
}

pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<Product>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    parse_catalog(&raw)
}
