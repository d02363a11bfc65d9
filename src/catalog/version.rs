//! Web API method versions

use super::CatalogError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Version tag of a remote method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WebApiVersion {
    #[serde(rename = "v0001")]
    V1,
    #[serde(rename = "v0002")]
    V2,
    #[serde(rename = "v0003")]
    V3,
}

/// Wire and short names ("v0002", "v2") both map to their version.
static BY_NAME: Lazy<HashMap<&'static str, WebApiVersion>> = Lazy::new(|| {
    WebApiVersion::ALL
        .iter()
        .flat_map(|v| [(v.as_str(), *v), (v.short_name(), *v)])
        .collect()
});

impl WebApiVersion {
    pub const ALL: [WebApiVersion; 3] = [WebApiVersion::V1, WebApiVersion::V2, WebApiVersion::V3];

    pub fn as_str(&self) -> &'static str {
        match self {
            WebApiVersion::V1 => "v0001",
            WebApiVersion::V2 => "v0002",
            WebApiVersion::V3 => "v0003",
        }
    }

    fn short_name(&self) -> &'static str {
        match self {
            WebApiVersion::V1 => "v1",
            WebApiVersion::V2 => "v2",
            WebApiVersion::V3 => "v3",
        }
    }
}

impl fmt::Display for WebApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WebApiVersion {
    type Err = CatalogError;

    /// Accepts the wire form ("v0002") and the short form ("v2").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BY_NAME.get(s).copied().ok_or_else(|| {
            CatalogError::UnknownVersion {
                name: s.to_string(),
                hint: None,
            }
            .with_hint("expected one of v0001, v0002, v0003")
        })
    }
}
