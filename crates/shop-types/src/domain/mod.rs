pub mod cart;
pub mod catalog;
pub mod config;
pub mod order;
pub mod pricing;
pub mod product;
