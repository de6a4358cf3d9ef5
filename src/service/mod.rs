mod geo_client;
pub mod table;
pub mod tracker;

pub use geo_client::GeoClient;
