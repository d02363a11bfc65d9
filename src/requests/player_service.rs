use super::{ParameterWriter, WebApiCall};
use crate::catalog::{InterfaceMethod, WebApiInterface, WebApiVersion};
use crate::Result;

/// Games owned by a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetOwnedGames {
    steam_id: u64,
    include_app_info: Option<bool>,
    include_played_free_games: Option<bool>,
    appids_filter: Vec<u32>,
}

impl GetOwnedGames {
    pub fn new(steam_id: u64) -> Self {
        Self {
            steam_id,
            include_app_info: None,
            include_played_free_games: None,
            appids_filter: Vec::new(),
        }
    }

    /// Include game names and logo hashes.
    pub fn include_app_info(mut self, include: bool) -> Self {
        self.include_app_info = Some(include);
        self
    }

    /// Include free-to-play games the player has launched.
    pub fn include_played_free_games(mut self, include: bool) -> Self {
        self.include_played_free_games = Some(include);
        self
    }

    pub fn appids_filter(mut self, appids: impl IntoIterator<Item = u32>) -> Self {
        self.appids_filter = appids.into_iter().collect();
        self
    }
}

impl WebApiCall for GetOwnedGames {
    const INTERFACE: WebApiInterface = WebApiInterface::IPlayerService;
    const METHOD: InterfaceMethod = InterfaceMethod::GetOwnedGames;
    const VERSION: WebApiVersion = WebApiVersion::V1;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        params
            .put("steamid", self.steam_id)
            .put_flag("include_appinfo", self.include_app_info)
            .put_flag("include_played_free_games", self.include_played_free_games)
            .put_indexed("appids_filter", &self.appids_filter);
        Ok(())
    }
}

/// Games played in the last two weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetRecentlyPlayedGames {
    steam_id: u64,
    count: Option<u32>,
}

impl GetRecentlyPlayedGames {
    pub fn new(steam_id: u64) -> Self {
        Self {
            steam_id,
            count: None,
        }
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

impl WebApiCall for GetRecentlyPlayedGames {
    const INTERFACE: WebApiInterface = WebApiInterface::IPlayerService;
    const METHOD: InterfaceMethod = InterfaceMethod::GetRecentlyPlayedGames;
    const VERSION: WebApiVersion = WebApiVersion::V1;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        params
            .put("steamid", self.steam_id)
            .put_opt("count", self.count);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetSteamLevel {
    steam_id: u64,
}

impl GetSteamLevel {
    pub fn new(steam_id: u64) -> Self {
        Self { steam_id }
    }
}

impl WebApiCall for GetSteamLevel {
    const INTERFACE: WebApiInterface = WebApiInterface::IPlayerService;
    const METHOD: InterfaceMethod = InterfaceMethod::GetSteamLevel;
    const VERSION: WebApiVersion = WebApiVersion::V1;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        params.put("steamid", self.steam_id);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetBadges {
    steam_id: u64,
}

impl GetBadges {
    pub fn new(steam_id: u64) -> Self {
        Self { steam_id }
    }
}

impl WebApiCall for GetBadges {
    const INTERFACE: WebApiInterface = WebApiInterface::IPlayerService;
    const METHOD: InterfaceMethod = InterfaceMethod::GetBadges;
    const VERSION: WebApiVersion = WebApiVersion::V1;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        params.put("steamid", self.steam_id);
        Ok(())
    }
}

/// Quest progress towards community badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetCommunityBadgeProgress {
    steam_id: u64,
    badge_id: Option<u32>,
}

impl GetCommunityBadgeProgress {
    pub fn new(steam_id: u64) -> Self {
        Self {
            steam_id,
            badge_id: None,
        }
    }

    pub fn badge_id(mut self, badge_id: u32) -> Self {
        self.badge_id = Some(badge_id);
        self
    }
}

impl WebApiCall for GetCommunityBadgeProgress {
    const INTERFACE: WebApiInterface = WebApiInterface::IPlayerService;
    const METHOD: InterfaceMethod = InterfaceMethod::GetCommunityBadgeProgress;
    const VERSION: WebApiVersion = WebApiVersion::V1;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        params
            .put("steamid", self.steam_id)
            .put_opt("badgeid", self.badge_id);
        Ok(())
    }
}

/// Owner of a game borrowed through family sharing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsPlayingSharedGame {
    steam_id: u64,
    appid_playing: u32,
}

impl IsPlayingSharedGame {
    pub fn new(steam_id: u64, appid_playing: u32) -> Self {
        Self {
            steam_id,
            appid_playing,
        }
    }
}

impl WebApiCall for IsPlayingSharedGame {
    const INTERFACE: WebApiInterface = WebApiInterface::IPlayerService;
    const METHOD: InterfaceMethod = InterfaceMethod::IsPlayingSharedGame;
    const VERSION: WebApiVersion = WebApiVersion::V1;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        params
            .put("steamid", self.steam_id)
            .put("appid_playing", self.appid_playing);
        Ok(())
    }
}
