use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type Sku = u64;

/// Catalog reference data. Never mutated once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub sku: Sku,
    pub brand: String,
    pub name: String,
    pub pack_size: String,
    pub image_url: Vec<String>,
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_record_with_numeric_price() {
        let json = r#"{
            "sku": 1001,
            "brand": "Acme",
            "name": "Green Tea",
            "pack_size": "20 bags",
            "image_url": ["https://img.example/tea-1.png", "https://img.example/tea-2.png"],
            "price": 12.5
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.sku, 1001);
        assert_eq!(product.price, Decimal::new(125, 1));
        assert_eq!(product.image_url.len(), 2);
    }
}
