use super::{ParameterWriter, WebApiCall};
use crate::catalog::{InterfaceMethod, WebApiInterface, WebApiVersion};
use crate::Result;

/// Global unlock percentage of every achievement in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetGlobalAchievementPercentagesForApp {
    game_id: u32,
}

impl GetGlobalAchievementPercentagesForApp {
    pub fn new(game_id: u32) -> Self {
        Self { game_id }
    }
}

impl WebApiCall for GetGlobalAchievementPercentagesForApp {
    const INTERFACE: WebApiInterface = WebApiInterface::ISteamUserStats;
    const METHOD: InterfaceMethod = InterfaceMethod::GetGlobalAchievementPercentagesForApp;
    const VERSION: WebApiVersion = WebApiVersion::V2;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        params.put("gameid", self.game_id);
        Ok(())
    }
}

/// Aggregated values of named global stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetGlobalStatsForGame {
    appid: u32,
    names: Vec<String>,
}

impl GetGlobalStatsForGame {
    pub fn new<I, S>(appid: u32, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            appid,
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl WebApiCall for GetGlobalStatsForGame {
    const INTERFACE: WebApiInterface = WebApiInterface::ISteamUserStats;
    const METHOD: InterfaceMethod = InterfaceMethod::GetGlobalStatsForGame;
    const VERSION: WebApiVersion = WebApiVersion::V1;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        if self.names.is_empty() {
            return Err(params.invalid("name", "at least one stat name is required"));
        }
        params
            .put("appid", self.appid)
            .put("count", self.names.len())
            .put_indexed("name", &self.names);
        Ok(())
    }
}

/// Players currently in game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetNumberOfCurrentPlayers {
    appid: u32,
}

impl GetNumberOfCurrentPlayers {
    pub fn new(appid: u32) -> Self {
        Self { appid }
    }
}

impl WebApiCall for GetNumberOfCurrentPlayers {
    const INTERFACE: WebApiInterface = WebApiInterface::ISteamUserStats;
    const METHOD: InterfaceMethod = InterfaceMethod::GetNumberOfCurrentPlayers;
    const VERSION: WebApiVersion = WebApiVersion::V1;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        params.put("appid", self.appid);
        Ok(())
    }
}

/// A player's achievements in one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetPlayerAchievements {
    steam_id: u64,
    appid: u32,
    language: Option<String>,
}

impl GetPlayerAchievements {
    pub fn new(steam_id: u64, appid: u32) -> Self {
        Self {
            steam_id,
            appid,
            language: None,
        }
    }

    /// Language for achievement names and descriptions.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

impl WebApiCall for GetPlayerAchievements {
    const INTERFACE: WebApiInterface = WebApiInterface::ISteamUserStats;
    const METHOD: InterfaceMethod = InterfaceMethod::GetPlayerAchievements;
    const VERSION: WebApiVersion = WebApiVersion::V1;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        params
            .put("steamid", self.steam_id)
            .put("appid", self.appid)
            .put_opt("l", self.language.as_deref());
        Ok(())
    }
}

/// Stat and achievement schema of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSchemaForGame {
    appid: u32,
    language: Option<String>,
}

impl GetSchemaForGame {
    pub fn new(appid: u32) -> Self {
        Self {
            appid,
            language: None,
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

impl WebApiCall for GetSchemaForGame {
    const INTERFACE: WebApiInterface = WebApiInterface::ISteamUserStats;
    const METHOD: InterfaceMethod = InterfaceMethod::GetSchemaForGame;
    const VERSION: WebApiVersion = WebApiVersion::V2;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        params
            .put("appid", self.appid)
            .put_opt("l", self.language.as_deref());
        Ok(())
    }
}

/// A player's stats in one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetUserStatsForGame {
    steam_id: u64,
    appid: u32,
}

impl GetUserStatsForGame {
    pub fn new(steam_id: u64, appid: u32) -> Self {
        Self { steam_id, appid }
    }
}

impl WebApiCall for GetUserStatsForGame {
    const INTERFACE: WebApiInterface = WebApiInterface::ISteamUserStats;
    const METHOD: InterfaceMethod = InterfaceMethod::GetUserStatsForGame;
    const VERSION: WebApiVersion = WebApiVersion::V2;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        params.put("steamid", self.steam_id).put("appid", self.appid);
        Ok(())
    }
}
