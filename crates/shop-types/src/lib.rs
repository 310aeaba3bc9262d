//! shop-types: domain model, pure pricing/catalog calculators and the storage port.

pub mod domain;
pub mod ports;
