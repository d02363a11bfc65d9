//! Tests for the interface / method / version catalog and response descriptors

use std::collections::HashSet;
use steam_web_api::{
    CatalogError, InterfaceMethod, ResponseType, SteamWebApiRequest, WebApiInterface,
    WebApiVersion,
};

/// Every method with the descriptor, type name and envelope key it must map to.
const RESPONSE_TABLE: &[(InterfaceMethod, ResponseType, &str, Option<&str>)] = &[
    (InterfaceMethod::GetNewsForApp, ResponseType::NewsForApp, "GetNewsForApp", Some("appnews")),
    (
        InterfaceMethod::GetGlobalAchievementPercentagesForApp,
        ResponseType::GlobalAchievementPercentagesForApp,
        "GetGlobalAchievementPercentagesForApp",
        Some("achievementpercentages"),
    ),
    (InterfaceMethod::GetGlobalStatsForGame, ResponseType::GlobalStatsForGame, "GetGlobalStatsForGame", Some("response")),
    (InterfaceMethod::GetNumberOfCurrentPlayers, ResponseType::NumberOfCurrentPlayers, "GetNumberOfCurrentPlayers", Some("response")),
    (InterfaceMethod::GetPlayerAchievements, ResponseType::PlayerAchievements, "GetPlayerAchievements", Some("playerstats")),
    (InterfaceMethod::GetSchemaForGame, ResponseType::SchemaForGame, "GetSchemaForGame", Some("game")),
    (InterfaceMethod::GetUserStatsForGame, ResponseType::UserStatsForGame, "GetUserStatsForGame", Some("playerstats")),
    (InterfaceMethod::GetPlayerSummaries, ResponseType::PlayerSummaries, "GetPlayerSummaries", Some("response")),
    (InterfaceMethod::GetFriendList, ResponseType::FriendList, "GetFriendList", Some("friendslist")),
    (InterfaceMethod::GetPlayerBans, ResponseType::PlayerBans, "GetPlayerBans", Some("players")),
    (InterfaceMethod::GetUserGroupList, ResponseType::UserGroupList, "GetUserGroupList", Some("response")),
    (InterfaceMethod::ResolveVanityUrl, ResponseType::ResolveVanityUrl, "ResolveVanityURL", Some("response")),
    (InterfaceMethod::GetOwnedGames, ResponseType::OwnedGames, "GetOwnedGames", Some("response")),
    (InterfaceMethod::GetRecentlyPlayedGames, ResponseType::RecentlyPlayedGames, "GetRecentlyPlayedGames", Some("response")),
    (InterfaceMethod::GetSteamLevel, ResponseType::SteamLevel, "GetSteamLevel", Some("response")),
    (InterfaceMethod::GetBadges, ResponseType::Badges, "GetBadges", Some("response")),
    (InterfaceMethod::GetCommunityBadgeProgress, ResponseType::CommunityBadgeProgress, "GetCommunityBadgeProgress", Some("response")),
    (InterfaceMethod::IsPlayingSharedGame, ResponseType::IsPlayingSharedGame, "IsPlayingSharedGame", Some("response")),
    (InterfaceMethod::GetAppList, ResponseType::AppList, "GetAppList", Some("applist")),
    (InterfaceMethod::GetServersAtAddress, ResponseType::ServersAtAddress, "GetServersAtAddress", Some("response")),
    (InterfaceMethod::UpToDateCheck, ResponseType::UpToDateCheck, "UpToDateCheck", Some("response")),
    (InterfaceMethod::GetServerInfo, ResponseType::ServerInfo, "GetServerInfo", None),
    (InterfaceMethod::GetSupportedApiList, ResponseType::SupportedApiList, "GetSupportedAPIList", Some("apilist")),
];

#[test]
fn test_response_table_covers_the_whole_catalog() {
    let listed: HashSet<InterfaceMethod> = RESPONSE_TABLE.iter().map(|row| row.0).collect();
    let all: HashSet<InterfaceMethod> = InterfaceMethod::ALL.iter().copied().collect();
    assert_eq!(listed, all);
    assert_eq!(RESPONSE_TABLE.len(), InterfaceMethod::ALL.len());
}

#[test]
fn test_response_type_for_every_method() {
    for &(method, expected, type_name, envelope) in RESPONSE_TABLE {
        assert_eq!(method.response_type(), expected, "descriptor of {}", method);
        assert_eq!(expected.type_name(), type_name);
        assert_eq!(expected.envelope_key(), envelope, "envelope of {}", method);

        let request =
            SteamWebApiRequest::new(method.interface(), method, WebApiVersion::V1, [("a", "b")]);
        assert_eq!(request.response_type(), expected);
    }
}

#[test]
fn test_descriptors_are_distinct() {
    let distinct: HashSet<ResponseType> = InterfaceMethod::ALL
        .iter()
        .map(|m| m.response_type())
        .collect();
    assert_eq!(distinct.len(), InterfaceMethod::ALL.len());
}

#[test]
fn test_method_interfaces() {
    let expected = [
        (WebApiInterface::ISteamNews, 1),
        (WebApiInterface::ISteamUserStats, 6),
        (WebApiInterface::ISteamUser, 5),
        (WebApiInterface::IPlayerService, 6),
        (WebApiInterface::ISteamApps, 3),
        (WebApiInterface::ISteamWebAPIUtil, 2),
    ];
    for (interface, count) in expected {
        let found = InterfaceMethod::ALL
            .iter()
            .filter(|m| m.interface() == interface)
            .count();
        assert_eq!(found, count, "methods published under {}", interface);
    }
}

#[test]
fn test_names_parse_back() {
    for interface in WebApiInterface::ALL {
        assert_eq!(interface.as_str().parse::<WebApiInterface>().unwrap(), interface);
        assert_eq!(interface.to_string(), interface.as_str());
    }
    for method in InterfaceMethod::ALL {
        assert_eq!(method.as_str().parse::<InterfaceMethod>().unwrap(), method);
    }
    for version in WebApiVersion::ALL {
        assert_eq!(version.as_str().parse::<WebApiVersion>().unwrap(), version);
    }
    assert_eq!("v2".parse::<WebApiVersion>().unwrap(), WebApiVersion::V2);
}

#[test]
fn test_unknown_names_are_rejected() {
    let err = "isteamuser".parse::<WebApiInterface>().unwrap_err();
    assert!(matches!(err, CatalogError::UnknownInterface { ref hint, .. } if hint.is_some()));
    assert!(err.to_string().contains("Hint:"));

    let err = "GetEverything".parse::<InterfaceMethod>().unwrap_err();
    assert!(
        matches!(err, CatalogError::UnknownMethod { ref name, ref hint } if name == "GetEverything" && hint.is_some())
    );
    assert!(err.to_string().contains("Hint:"));

    let err = "v0009".parse::<WebApiVersion>().unwrap_err();
    assert!(matches!(err, CatalogError::UnknownVersion { ref hint, .. } if hint.is_some()));
}

#[test]
fn test_catalog_serde_uses_wire_names() {
    assert_eq!(
        serde_json::to_string(&InterfaceMethod::GetSupportedApiList).unwrap(),
        "\"GetSupportedAPIList\""
    );
    assert_eq!(serde_json::to_string(&WebApiVersion::V3).unwrap(), "\"v0003\"");
    assert_eq!(
        serde_json::from_str::<WebApiInterface>("\"IPlayerService\"").unwrap(),
        WebApiInterface::IPlayerService
    );
    assert_eq!(
        serde_json::to_string(&ResponseType::OwnedGames).unwrap(),
        "\"owned_games\""
    );
}
