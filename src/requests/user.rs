use super::{ParameterWriter, WebApiCall};
use crate::catalog::{InterfaceMethod, WebApiInterface, WebApiVersion};
use crate::Result;
use std::fmt;

/// Profile summaries for up to 100 players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetPlayerSummaries {
    steam_ids: Vec<u64>,
}

impl GetPlayerSummaries {
    pub fn new(steam_ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            steam_ids: steam_ids.into_iter().collect(),
        }
    }
}

impl WebApiCall for GetPlayerSummaries {
    const INTERFACE: WebApiInterface = WebApiInterface::ISteamUser;
    const METHOD: InterfaceMethod = InterfaceMethod::GetPlayerSummaries;
    const VERSION: WebApiVersion = WebApiVersion::V2;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        params.check_steam_ids("steamids", &self.steam_ids)?;
        params.put_joined("steamids", &self.steam_ids);
        Ok(())
    }
}

/// Relationship filter of [`GetFriendList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    All,
    Friend,
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Relationship::All => "all",
            Relationship::Friend => "friend",
        })
    }
}

/// Friend list of a player with a public profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetFriendList {
    steam_id: u64,
    relationship: Option<Relationship>,
}

impl GetFriendList {
    pub fn new(steam_id: u64) -> Self {
        Self {
            steam_id,
            relationship: None,
        }
    }

    pub fn relationship(mut self, relationship: Relationship) -> Self {
        self.relationship = Some(relationship);
        self
    }
}

impl WebApiCall for GetFriendList {
    const INTERFACE: WebApiInterface = WebApiInterface::ISteamUser;
    const METHOD: InterfaceMethod = InterfaceMethod::GetFriendList;
    const VERSION: WebApiVersion = WebApiVersion::V1;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        params
            .put("steamid", self.steam_id)
            .put_opt("relationship", self.relationship);
        Ok(())
    }
}

/// Community, VAC and economy ban status for up to 100 players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetPlayerBans {
    steam_ids: Vec<u64>,
}

impl GetPlayerBans {
    pub fn new(steam_ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            steam_ids: steam_ids.into_iter().collect(),
        }
    }
}

impl WebApiCall for GetPlayerBans {
    const INTERFACE: WebApiInterface = WebApiInterface::ISteamUser;
    const METHOD: InterfaceMethod = InterfaceMethod::GetPlayerBans;
    const VERSION: WebApiVersion = WebApiVersion::V1;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        params.check_steam_ids("steamids", &self.steam_ids)?;
        params.put_joined("steamids", &self.steam_ids);
        Ok(())
    }
}

/// Groups a player belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetUserGroupList {
    steam_id: u64,
}

impl GetUserGroupList {
    pub fn new(steam_id: u64) -> Self {
        Self { steam_id }
    }
}

impl WebApiCall for GetUserGroupList {
    const INTERFACE: WebApiInterface = WebApiInterface::ISteamUser;
    const METHOD: InterfaceMethod = InterfaceMethod::GetUserGroupList;
    const VERSION: WebApiVersion = WebApiVersion::V1;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        params.put("steamid", self.steam_id);
        Ok(())
    }
}

/// Kind of vanity URL to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VanityUrlType {
    Individual = 1,
    Group = 2,
    OfficialGameGroup = 3,
}

/// Steam id behind a community vanity URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveVanityUrl {
    vanity_url: String,
    url_type: Option<VanityUrlType>,
}

impl ResolveVanityUrl {
    /// `vanity_url` is the last path segment of the profile URL, not the full URL.
    pub fn new(vanity_url: impl Into<String>) -> Self {
        Self {
            vanity_url: vanity_url.into(),
            url_type: None,
        }
    }

    pub fn url_type(mut self, url_type: VanityUrlType) -> Self {
        self.url_type = Some(url_type);
        self
    }
}

impl WebApiCall for ResolveVanityUrl {
    const INTERFACE: WebApiInterface = WebApiInterface::ISteamUser;
    const METHOD: InterfaceMethod = InterfaceMethod::ResolveVanityUrl;
    const VERSION: WebApiVersion = WebApiVersion::V1;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        if self.vanity_url.trim().is_empty() {
            return Err(params.invalid("vanityurl", "vanity url must not be empty"));
        }
        params
            .put("vanityurl", &self.vanity_url)
            .put_opt("url_type", self.url_type.map(|t| t as u8));
        Ok(())
    }
}
