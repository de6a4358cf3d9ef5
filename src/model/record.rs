use serde::{Deserialize, Deserializer, Serialize};

use super::geo::{deserialize_null_as_empty, GeoResponse};

/// One tracked IP's geolocation snapshot, as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpRecord {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub ip: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub region: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub country: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub isp: String,
}

impl IpRecord {
    /// Build a record for `ip` from an upstream answer.
    ///
    /// `ip` always comes from the caller, never from the response body.
    pub fn from_response(ip: &str, resp: GeoResponse) -> Self {
        let location = format_location(&resp.city, &resp.region, &resp.country);
        Self {
            ip: ip.to_string(),
            city: resp.city,
            region: resp.region,
            country: resp.country,
            location,
            isp: resp.isp,
        }
    }
}

/// `"<city>, <region>, <country>"`, empty segments included.
fn format_location(city: &str, region: &str, country: &str) -> String {
    format!("{}, {}, {}", city, region, country)
}

fn deserialize_null_as_vec<'de, D>(deserializer: D) -> Result<Vec<IpRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let v: Option<Vec<IpRecord>> = Option::deserialize(deserializer)?;
    Ok(v.unwrap_or_default())
}

/// Every tracked record, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpCollection {
    #[serde(default, deserialize_with = "deserialize_null_as_vec")]
    pub ips: Vec<IpRecord>,
}

impl IpCollection {
    pub fn len(&self) -> usize {
        self.ips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ips.is_empty()
    }

    pub fn push(&mut self, record: IpRecord) {
        self.ips.push(record);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IpRecord> {
        self.ips.iter()
    }
}
