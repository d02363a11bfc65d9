//! Web API interface identifiers

use super::CatalogError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A grouped set of remote operations, named exactly as the Web API names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WebApiInterface {
    ISteamNews,
    ISteamUserStats,
    ISteamUser,
    IPlayerService,
    ISteamApps,
    ISteamWebAPIUtil,
}

static BY_NAME: Lazy<HashMap<&'static str, WebApiInterface>> = Lazy::new(|| {
    WebApiInterface::ALL
        .iter()
        .map(|i| (i.as_str(), *i))
        .collect()
});

impl WebApiInterface {
    pub const ALL: [WebApiInterface; 6] = [
        WebApiInterface::ISteamNews,
        WebApiInterface::ISteamUserStats,
        WebApiInterface::ISteamUser,
        WebApiInterface::IPlayerService,
        WebApiInterface::ISteamApps,
        WebApiInterface::ISteamWebAPIUtil,
    ];

    /// Path segment used in the request URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            WebApiInterface::ISteamNews => "ISteamNews",
            WebApiInterface::ISteamUserStats => "ISteamUserStats",
            WebApiInterface::ISteamUser => "ISteamUser",
            WebApiInterface::IPlayerService => "IPlayerService",
            WebApiInterface::ISteamApps => "ISteamApps",
            WebApiInterface::ISteamWebAPIUtil => "ISteamWebAPIUtil",
        }
    }
}

impl fmt::Display for WebApiInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WebApiInterface {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BY_NAME.get(s).copied().ok_or_else(|| {
            CatalogError::UnknownInterface {
                name: s.to_string(),
                hint: None,
            }
            .with_hint("interface names are case-sensitive, e.g. \"ISteamUser\"")
        })
    }
}
