pub mod key_value_store;
