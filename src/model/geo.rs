use serde::{Deserialize, Deserializer};

/// Treat a JSON `null` the same as an absent field.
pub(crate) fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.unwrap_or_default())
}

/// Body returned by `GET /json/{ip}` on ip-api.com.
///
/// Only the fields that end up in an [`IpRecord`](super::IpRecord) are kept;
/// the upstream `query` echo is ignored on purpose.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeoResponse {
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub status: String,
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub message: String,
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub city: String,
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub region: String,
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub country: String,
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub isp: String,
}

impl GeoResponse {
    pub fn is_failure(&self) -> bool {
        self.status == "fail"
    }
}
