//! Response-shape descriptors
//!
//! Every interface method is bound to exactly one [`ResponseType`]. The tag tells a
//! deserialization layer which reply shape to expect; nothing in this crate parses
//! replies itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reply shape of a remote method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    NewsForApp,
    GlobalAchievementPercentagesForApp,
    GlobalStatsForGame,
    NumberOfCurrentPlayers,
    PlayerAchievements,
    SchemaForGame,
    UserStatsForGame,
    PlayerSummaries,
    FriendList,
    PlayerBans,
    UserGroupList,
    ResolveVanityUrl,
    OwnedGames,
    RecentlyPlayedGames,
    SteamLevel,
    Badges,
    CommunityBadgeProgress,
    IsPlayingSharedGame,
    AppList,
    ServersAtAddress,
    UpToDateCheck,
    ServerInfo,
    SupportedApiList,
}

impl ResponseType {
    /// Name of the reply model, as used by deserializers keyed on type names.
    pub fn type_name(&self) -> &'static str {
        match self {
            ResponseType::NewsForApp => "GetNewsForApp",
            ResponseType::GlobalAchievementPercentagesForApp => {
                "GetGlobalAchievementPercentagesForApp"
            }
            ResponseType::GlobalStatsForGame => "GetGlobalStatsForGame",
            ResponseType::NumberOfCurrentPlayers => "GetNumberOfCurrentPlayers",
            ResponseType::PlayerAchievements => "GetPlayerAchievements",
            ResponseType::SchemaForGame => "GetSchemaForGame",
            ResponseType::UserStatsForGame => "GetUserStatsForGame",
            ResponseType::PlayerSummaries => "GetPlayerSummaries",
            ResponseType::FriendList => "GetFriendList",
            ResponseType::PlayerBans => "GetPlayerBans",
            ResponseType::UserGroupList => "GetUserGroupList",
            ResponseType::ResolveVanityUrl => "ResolveVanityURL",
            ResponseType::OwnedGames => "GetOwnedGames",
            ResponseType::RecentlyPlayedGames => "GetRecentlyPlayedGames",
            ResponseType::SteamLevel => "GetSteamLevel",
            ResponseType::Badges => "GetBadges",
            ResponseType::CommunityBadgeProgress => "GetCommunityBadgeProgress",
            ResponseType::IsPlayingSharedGame => "IsPlayingSharedGame",
            ResponseType::AppList => "GetAppList",
            ResponseType::ServersAtAddress => "GetServersAtAddress",
            ResponseType::UpToDateCheck => "UpToDateCheck",
            ResponseType::ServerInfo => "GetServerInfo",
            ResponseType::SupportedApiList => "GetSupportedAPIList",
        }
    }

    /// Top-level JSON key wrapping the reply body, `None` when the reply is flat.
    pub fn envelope_key(&self) -> Option<&'static str> {
        match self {
            ResponseType::NewsForApp => Some("appnews"),
            ResponseType::GlobalAchievementPercentagesForApp => Some("achievementpercentages"),
            ResponseType::PlayerAchievements | ResponseType::UserStatsForGame => {
                Some("playerstats")
            }
            ResponseType::SchemaForGame => Some("game"),
            ResponseType::FriendList => Some("friendslist"),
            ResponseType::PlayerBans => Some("players"),
            ResponseType::AppList => Some("applist"),
            ResponseType::SupportedApiList => Some("apilist"),
            ResponseType::ServerInfo => None,
            ResponseType::GlobalStatsForGame
            | ResponseType::NumberOfCurrentPlayers
            | ResponseType::PlayerSummaries
            | ResponseType::UserGroupList
            | ResponseType::ResolveVanityUrl
            | ResponseType::OwnedGames
            | ResponseType::RecentlyPlayedGames
            | ResponseType::SteamLevel
            | ResponseType::Badges
            | ResponseType::CommunityBadgeProgress
            | ResponseType::IsPlayingSharedGame
            | ResponseType::ServersAtAddress
            | ResponseType::UpToDateCheck => Some("response"),
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
