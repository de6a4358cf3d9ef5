//! Core of each `koppel` verb, free of any printing
//!
//! Callers hand in the store and the geolocation client, and decide how to
//! present the outcome.

use tracing::info;

use crate::dao::JsonStore;
use crate::error::{Result, StoreError};
use crate::model::{IpCollection, IpRecord};
use crate::service::GeoClient;

/// Look up `ip` and append the result. Nothing is written if the lookup fails.
pub async fn track(store: &JsonStore, geo: &GeoClient, ip: &str) -> Result<IpRecord> {
    let record = geo.fetch(ip).await?;
    let count = store.append(record.clone())?;
    info!("Tracked {} ({} records stored)", record.ip, count);
    Ok(record)
}

pub fn list(store: &JsonStore) -> Result<IpCollection, StoreError> {
    store.load()
}

pub fn clear(store: &JsonStore) -> Result<(), StoreError> {
    store.clear()?;
    info!("Cleared {}", store.path().display());
    Ok(())
}
