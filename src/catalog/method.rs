//! Interface method identifiers

use super::{CatalogError, ResponseType, WebApiInterface};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// One remote operation. Each method is bound to the [`ResponseType`] its reply
/// deserializes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InterfaceMethod {
    // ISteamNews
    GetNewsForApp,
    // ISteamUserStats
    GetGlobalAchievementPercentagesForApp,
    GetGlobalStatsForGame,
    GetNumberOfCurrentPlayers,
    GetPlayerAchievements,
    GetSchemaForGame,
    GetUserStatsForGame,
    // ISteamUser
    GetPlayerSummaries,
    GetFriendList,
    GetPlayerBans,
    GetUserGroupList,
    #[serde(rename = "ResolveVanityURL")]
    ResolveVanityUrl,
    // IPlayerService
    GetOwnedGames,
    GetRecentlyPlayedGames,
    GetSteamLevel,
    GetBadges,
    GetCommunityBadgeProgress,
    IsPlayingSharedGame,
    // ISteamApps
    GetAppList,
    GetServersAtAddress,
    UpToDateCheck,
    // ISteamWebAPIUtil
    GetServerInfo,
    #[serde(rename = "GetSupportedAPIList")]
    GetSupportedApiList,
}

static BY_NAME: Lazy<HashMap<&'static str, InterfaceMethod>> = Lazy::new(|| {
    InterfaceMethod::ALL
        .iter()
        .map(|m| (m.as_str(), *m))
        .collect()
});

impl InterfaceMethod {
    pub const ALL: [InterfaceMethod; 23] = [
        InterfaceMethod::GetNewsForApp,
        InterfaceMethod::GetGlobalAchievementPercentagesForApp,
        InterfaceMethod::GetGlobalStatsForGame,
        InterfaceMethod::GetNumberOfCurrentPlayers,
        InterfaceMethod::GetPlayerAchievements,
        InterfaceMethod::GetSchemaForGame,
        InterfaceMethod::GetUserStatsForGame,
        InterfaceMethod::GetPlayerSummaries,
        InterfaceMethod::GetFriendList,
        InterfaceMethod::GetPlayerBans,
        InterfaceMethod::GetUserGroupList,
        InterfaceMethod::ResolveVanityUrl,
        InterfaceMethod::GetOwnedGames,
        InterfaceMethod::GetRecentlyPlayedGames,
        InterfaceMethod::GetSteamLevel,
        InterfaceMethod::GetBadges,
        InterfaceMethod::GetCommunityBadgeProgress,
        InterfaceMethod::IsPlayingSharedGame,
        InterfaceMethod::GetAppList,
        InterfaceMethod::GetServersAtAddress,
        InterfaceMethod::UpToDateCheck,
        InterfaceMethod::GetServerInfo,
        InterfaceMethod::GetSupportedApiList,
    ];

    /// Path segment used in the request URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            InterfaceMethod::GetNewsForApp => "GetNewsForApp",
            InterfaceMethod::GetGlobalAchievementPercentagesForApp => {
                "GetGlobalAchievementPercentagesForApp"
            }
            InterfaceMethod::GetGlobalStatsForGame => "GetGlobalStatsForGame",
            InterfaceMethod::GetNumberOfCurrentPlayers => "GetNumberOfCurrentPlayers",
            InterfaceMethod::GetPlayerAchievements => "GetPlayerAchievements",
            InterfaceMethod::GetSchemaForGame => "GetSchemaForGame",
            InterfaceMethod::GetUserStatsForGame => "GetUserStatsForGame",
            InterfaceMethod::GetPlayerSummaries => "GetPlayerSummaries",
            InterfaceMethod::GetFriendList => "GetFriendList",
            InterfaceMethod::GetPlayerBans => "GetPlayerBans",
            InterfaceMethod::GetUserGroupList => "GetUserGroupList",
            InterfaceMethod::ResolveVanityUrl => "ResolveVanityURL",
            InterfaceMethod::GetOwnedGames => "GetOwnedGames",
            InterfaceMethod::GetRecentlyPlayedGames => "GetRecentlyPlayedGames",
            InterfaceMethod::GetSteamLevel => "GetSteamLevel",
            InterfaceMethod::GetBadges => "GetBadges",
            InterfaceMethod::GetCommunityBadgeProgress => "GetCommunityBadgeProgress",
            InterfaceMethod::IsPlayingSharedGame => "IsPlayingSharedGame",
            InterfaceMethod::GetAppList => "GetAppList",
            InterfaceMethod::GetServersAtAddress => "GetServersAtAddress",
            InterfaceMethod::UpToDateCheck => "UpToDateCheck",
            InterfaceMethod::GetServerInfo => "GetServerInfo",
            InterfaceMethod::GetSupportedApiList => "GetSupportedAPIList",
        }
    }

    /// Response-shape descriptor bound to this method.
    pub fn response_type(&self) -> ResponseType {
        match self {
            InterfaceMethod::GetNewsForApp => ResponseType::NewsForApp,
            InterfaceMethod::GetGlobalAchievementPercentagesForApp => {
                ResponseType::GlobalAchievementPercentagesForApp
            }
            InterfaceMethod::GetGlobalStatsForGame => ResponseType::GlobalStatsForGame,
            InterfaceMethod::GetNumberOfCurrentPlayers => ResponseType::NumberOfCurrentPlayers,
            InterfaceMethod::GetPlayerAchievements => ResponseType::PlayerAchievements,
            InterfaceMethod::GetSchemaForGame => ResponseType::SchemaForGame,
            InterfaceMethod::GetUserStatsForGame => ResponseType::UserStatsForGame,
            InterfaceMethod::GetPlayerSummaries => ResponseType::PlayerSummaries,
            InterfaceMethod::GetFriendList => ResponseType::FriendList,
            InterfaceMethod::GetPlayerBans => ResponseType::PlayerBans,
            InterfaceMethod::GetUserGroupList => ResponseType::UserGroupList,
            InterfaceMethod::ResolveVanityUrl => ResponseType::ResolveVanityUrl,
            InterfaceMethod::GetOwnedGames => ResponseType::OwnedGames,
            InterfaceMethod::GetRecentlyPlayedGames => ResponseType::RecentlyPlayedGames,
            InterfaceMethod::GetSteamLevel => ResponseType::SteamLevel,
            InterfaceMethod::GetBadges => ResponseType::Badges,
            InterfaceMethod::GetCommunityBadgeProgress => ResponseType::CommunityBadgeProgress,
            InterfaceMethod::IsPlayingSharedGame => ResponseType::IsPlayingSharedGame,
            InterfaceMethod::GetAppList => ResponseType::AppList,
            InterfaceMethod::GetServersAtAddress => ResponseType::ServersAtAddress,
            InterfaceMethod::UpToDateCheck => ResponseType::UpToDateCheck,
            InterfaceMethod::GetServerInfo => ResponseType::ServerInfo,
            InterfaceMethod::GetSupportedApiList => ResponseType::SupportedApiList,
        }
    }

    /// Interface this method is published under.
    ///
    /// Informational only: the generic builder accepts any pairing.
    pub fn interface(&self) -> WebApiInterface {
        match self {
            InterfaceMethod::GetNewsForApp => WebApiInterface::ISteamNews,
            InterfaceMethod::GetGlobalAchievementPercentagesForApp
            | InterfaceMethod::GetGlobalStatsForGame
            | InterfaceMethod::GetNumberOfCurrentPlayers
            | InterfaceMethod::GetPlayerAchievements
            | InterfaceMethod::GetSchemaForGame
            | InterfaceMethod::GetUserStatsForGame => WebApiInterface::ISteamUserStats,
            InterfaceMethod::GetPlayerSummaries
            | InterfaceMethod::GetFriendList
            | InterfaceMethod::GetPlayerBans
            | InterfaceMethod::GetUserGroupList
            | InterfaceMethod::ResolveVanityUrl => WebApiInterface::ISteamUser,
            InterfaceMethod::GetOwnedGames
            | InterfaceMethod::GetRecentlyPlayedGames
            | InterfaceMethod::GetSteamLevel
            | InterfaceMethod::GetBadges
            | InterfaceMethod::GetCommunityBadgeProgress
            | InterfaceMethod::IsPlayingSharedGame => WebApiInterface::IPlayerService,
            InterfaceMethod::GetAppList
            | InterfaceMethod::GetServersAtAddress
            | InterfaceMethod::UpToDateCheck => WebApiInterface::ISteamApps,
            InterfaceMethod::GetServerInfo | InterfaceMethod::GetSupportedApiList => {
                WebApiInterface::ISteamWebAPIUtil
            }
        }
    }
}

impl fmt::Display for InterfaceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterfaceMethod {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BY_NAME.get(s).copied().ok_or_else(|| {
            CatalogError::UnknownMethod {
                name: s.to_string(),
                hint: None,
            }
            .with_hint("method names are case-sensitive, e.g. \"GetPlayerSummaries\"")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_index_covers_every_method() {
        assert_eq!(BY_NAME.len(), InterfaceMethod::ALL.len());
    }

    #[test]
    fn test_wire_name_differs_from_variant_name() {
        assert_eq!(
            "ResolveVanityURL".parse::<InterfaceMethod>().unwrap(),
            InterfaceMethod::ResolveVanityUrl
        );
        assert!("ResolveVanityUrl".parse::<InterfaceMethod>().is_err());
    }
}
