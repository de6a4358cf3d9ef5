use reqwest::Client;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::model::{GeoResponse, IpRecord};

/// Public ip-api.com endpoint; lookups go to `{IP_API_BASE}/json/{ip}`.
pub const IP_API_BASE: &str = "http://ip-api.com";

#[derive(Clone)]
pub struct GeoClient {
    http: Client,
    base_url: String,
}

impl GeoClient {
    pub fn new() -> Self {
        Self::with_base_url(IP_API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Look up `ip` and turn the answer into a record.
    ///
    /// The address is not validated and goes into the request path as given.
    /// Fields the service leaves out become empty strings.
    pub async fn fetch(&self, ip: &str) -> Result<IpRecord, FetchError> {
        let url = format!("{}/json/{}", self.base_url, ip);
        debug!("Requesting {}", url);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Request)?;
        debug!("Upstream answered {}", resp.status());

        let body = resp.bytes().await.map_err(FetchError::Body)?;
        // A bare `null` body carries no fields, same as `{}`
        let geo: GeoResponse = serde_json::from_slice::<Option<GeoResponse>>(&body)?
            .unwrap_or_default();

        // ip-api signals lookup failures in-band; the record is kept anyway
        if geo.is_failure() {
            warn!("Lookup for {} failed upstream: {}", ip, geo.message);
        }

        Ok(IpRecord::from_response(ip, geo))
    }
}

impl Default for GeoClient {
    fn default() -> Self {
        Self::new()
    }
}
