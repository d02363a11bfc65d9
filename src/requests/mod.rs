//! One strongly typed constructor per remote operation.
//!
//! Each operation struct fixes interface, method and version through the
//! [`WebApiCall`] trait and exposes only the parameters that call accepts. These
//! structs are where argument validation happens; the generic
//! [`SteamWebApiRequestBuilder`] trusts whatever it is given.
//!
//! ```rust
//! use steam_web_api::requests::{GetPlayerSummaries, WebApiCall};
//! use steam_web_api::ResponseType;
//!
//! let request = GetPlayerSummaries::new([76561197960435530])
//!     .build()
//!     .unwrap();
//! assert_eq!(request.parameters().get("steamids"), Some("76561197960435530"));
//! assert_eq!(request.response_type(), ResponseType::PlayerSummaries);
//! ```

mod apps;
mod news;
mod player_service;
mod user;
mod user_stats;
mod web_api_util;

pub use apps::{GetAppList, GetServersAtAddress, UpToDateCheck};
pub use news::GetNewsForApp;
pub use player_service::{
    GetBadges, GetCommunityBadgeProgress, GetOwnedGames, GetRecentlyPlayedGames, GetSteamLevel,
    IsPlayingSharedGame,
};
pub use user::{
    GetFriendList, GetPlayerBans, GetPlayerSummaries, GetUserGroupList, Relationship,
    ResolveVanityUrl, VanityUrlType,
};
pub use user_stats::{
    GetGlobalAchievementPercentagesForApp, GetGlobalStatsForGame, GetNumberOfCurrentPlayers,
    GetPlayerAchievements, GetSchemaForGame, GetUserStatsForGame,
};
pub use web_api_util::{GetServerInfo, GetSupportedApiList};

use crate::catalog::{InterfaceMethod, WebApiInterface, WebApiVersion};
use crate::request::{SteamWebApiRequest, SteamWebApiRequestBuilder};
use crate::{Error, ErrorContext, Result};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Upper bound the Web API enforces on comma-separated steam id lists.
pub const MAX_STEAM_IDS: usize = 100;

/// A specific remote operation with its interface, method and version fixed.
pub trait WebApiCall {
    const INTERFACE: WebApiInterface;
    const METHOD: InterfaceMethod;
    const VERSION: WebApiVersion;

    /// Validate arguments and write them as named string parameters.
    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()>;

    /// Generic builder pre-filled for this operation.
    fn to_builder(&self) -> Result<SteamWebApiRequestBuilder> {
        let mut writer = ParameterWriter::new(Self::METHOD);
        self.write_parameters(&mut writer)?;
        Ok(SteamWebApiRequestBuilder::with_fields(
            Self::INTERFACE,
            Self::METHOD,
            Self::VERSION,
            writer.entries,
        ))
    }

    fn build(&self) -> Result<SteamWebApiRequest> {
        self.to_builder()?.build()
    }
}

/// Encodes typed arguments into the Web API's string parameter conventions.
#[derive(Debug)]
pub struct ParameterWriter {
    method: InterfaceMethod,
    entries: BTreeMap<String, String>,
}

impl ParameterWriter {
    fn new(method: InterfaceMethod) -> Self {
        Self {
            method,
            entries: BTreeMap::new(),
        }
    }

    pub fn put(&mut self, name: &str, value: impl Display) -> &mut Self {
        self.entries.insert(name.to_string(), value.to_string());
        self
    }

    pub fn put_opt<T: Display>(&mut self, name: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.put(name, value);
        }
        self
    }

    /// Booleans travel as `1`/`0`.
    pub fn put_flag(&mut self, name: &str, value: Option<bool>) -> &mut Self {
        self.put_opt(name, value.map(|b| if b { 1 } else { 0 }))
    }

    /// `values` joined with commas; nothing is written for an empty slice.
    pub fn put_joined<T: Display>(&mut self, name: &str, values: &[T]) -> &mut Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            self.put(name, joined);
        }
        self
    }

    /// Array arguments as `name[0]`, `name[1]`, ...
    pub fn put_indexed<T: Display>(&mut self, name: &str, values: &[T]) -> &mut Self {
        for (i, value) in values.iter().enumerate() {
            self.put(&format!("{}[{}]", name, i), value);
        }
        self
    }

    /// Validation error attributed to the operation being encoded.
    pub fn invalid(&self, field: &str, message: impl Into<String>) -> Error {
        Error::validation_with_context(
            message,
            ErrorContext::new()
                .with_field_path(field)
                .with_source(self.method.as_str()),
        )
    }

    /// Require between one and [`MAX_STEAM_IDS`] ids.
    pub fn check_steam_ids(&self, field: &str, ids: &[u64]) -> Result<()> {
        if ids.is_empty() {
            return Err(self.invalid(field, "at least one steam id is required"));
        }
        if ids.len() > MAX_STEAM_IDS {
            return Err(self.invalid(
                field,
                format!(
                    "{} steam ids given, at most {} are accepted",
                    ids.len(),
                    MAX_STEAM_IDS
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_encodings() {
        let mut w = ParameterWriter::new(InterfaceMethod::GetOwnedGames);
        w.put("steamid", 7u64)
            .put_opt::<u32>("count", None)
            .put_flag("include_appinfo", Some(true))
            .put_flag("include_played_free_games", Some(false))
            .put_joined("feeds", &["a", "b"])
            .put_joined::<u32>("empty", &[])
            .put_indexed("appids_filter", &[10u32, 20]);

        assert_eq!(w.entries.get("steamid").map(String::as_str), Some("7"));
        assert!(!w.entries.contains_key("count"));
        assert!(!w.entries.contains_key("empty"));
        assert_eq!(w.entries["include_appinfo"], "1");
        assert_eq!(w.entries["include_played_free_games"], "0");
        assert_eq!(w.entries["feeds"], "a,b");
        assert_eq!(w.entries["appids_filter[0]"], "10");
        assert_eq!(w.entries["appids_filter[1]"], "20");
    }

    #[test]
    fn test_check_steam_ids_bounds() {
        let w = ParameterWriter::new(InterfaceMethod::GetPlayerBans);
        assert!(w.check_steam_ids("steamids", &[]).is_err());
        assert!(w.check_steam_ids("steamids", &[1; MAX_STEAM_IDS]).is_ok());

        let err = w
            .check_steam_ids("steamids", &[1; MAX_STEAM_IDS + 1])
            .unwrap_err();
        let ctx = err.context().unwrap();
        assert_eq!(ctx.source.as_deref(), Some("GetPlayerBans"));
        assert_eq!(ctx.field_path.as_deref(), Some("steamids"));
    }
}
