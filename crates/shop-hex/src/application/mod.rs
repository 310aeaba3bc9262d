pub mod cart_manager;
pub mod catalog_store;
pub mod order_archiver;
pub mod order_ids;
pub mod session;
