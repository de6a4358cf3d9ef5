mod json_store;

pub use json_store::{JsonStore, DEFAULT_STORE_PATH};
