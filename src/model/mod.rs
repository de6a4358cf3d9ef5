mod geo;
mod record;

pub use geo::GeoResponse;
pub use record::{IpCollection, IpRecord};
