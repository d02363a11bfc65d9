//! Tests for URL rendering and configuration loading

use std::io::Write;
use steam_web_api::requests::{GetNewsForApp, GetOwnedGames, GetPlayerSummaries, WebApiCall};
use steam_web_api::{
    EndpointRenderer, Error, InterfaceMethod, ResponseFormat, Scheme, SteamWebApiRequest,
    WebApiConfig, WebApiInterface, WebApiVersion,
};

#[test]
fn test_default_rendering() {
    let request = GetPlayerSummaries::new([76561197960435530]).build().unwrap();
    let url = EndpointRenderer::default().render(&request).unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.steampowered.com/ISteamUser/GetPlayerSummaries/v0002/?steamids=76561197960435530&format=json"
    );
}

#[test]
fn test_parameters_are_key_ordered_and_encoded() {
    let request = GetOwnedGames::new(7)
        .include_app_info(true)
        .appids_filter([440])
        .build()
        .unwrap();
    let url = EndpointRenderer::default().render(&request).unwrap();
    assert_eq!(
        url.query(),
        Some("appids_filter%5B0%5D=440&include_appinfo=1&steamid=7&format=json")
    );
    assert_eq!(url.path(), "/IPlayerService/GetOwnedGames/v0001/");
}

#[test]
fn test_config_overrides_host_scheme_and_format() {
    let renderer = EndpointRenderer::new(
        WebApiConfig::new()
            .with_scheme(Scheme::Http)
            .with_host("127.0.0.1:8080")
            .with_format(ResponseFormat::Vdf),
    );
    let request = GetNewsForApp::new(440).count(1).build().unwrap();
    let url = renderer.render(&request).unwrap();

    assert_eq!(url.scheme(), "http");
    assert_eq!(url.host_str(), Some("127.0.0.1"));
    assert_eq!(url.port(), Some(8080));
    assert_eq!(url.query(), Some("appid=440&count=1&format=vdf"));
    assert_eq!(request.base_url(), "api.steampowered.com");
}

#[test]
fn test_request_format_parameter_wins() {
    let request = SteamWebApiRequest::new(
        WebApiInterface::ISteamApps,
        InterfaceMethod::GetAppList,
        WebApiVersion::V2,
        [("format", "xml")],
    );
    let url = EndpointRenderer::default().render(&request).unwrap();
    assert_eq!(url.query(), Some("format=xml"));
}

#[test]
fn test_rendering_leaves_request_untouched() {
    let request = GetNewsForApp::new(440).build().unwrap();
    let before = request.clone();
    EndpointRenderer::default().render(&request).unwrap();
    assert_eq!(request, before);
    assert!(!request.parameters().contains_key("format"));
}

#[test]
fn test_invalid_host_is_reported() {
    let renderer = EndpointRenderer::new(WebApiConfig::new().with_host("bad host"));
    let request = GetNewsForApp::new(440).build().unwrap();
    assert!(matches!(renderer.render(&request), Err(Error::Url(_))));
}

#[test]
fn test_config_from_yaml_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "scheme: http\nhost: mock.local:9000\nformat: xml").unwrap();

    let config = WebApiConfig::from_file(file.path()).unwrap();
    assert_eq!(config.scheme, Scheme::Http);
    assert_eq!(config.host.as_deref(), Some("mock.local:9000"));
    assert_eq!(config.format, ResponseFormat::Xml);
}

#[test]
fn test_config_from_json_file_keeps_defaults() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"format": "vdf"}}"#).unwrap();

    let config = WebApiConfig::from_file(file.path()).unwrap();
    assert_eq!(config.scheme, Scheme::Https);
    assert!(config.host.is_none());
    assert_eq!(config.format, ResponseFormat::Vdf);
}

#[test]
fn test_config_rejects_bad_input() {
    assert!(matches!(
        WebApiConfig::from_yaml_str("format: msgpack"),
        Err(Error::Configuration { .. })
    ));
    assert!(matches!(
        WebApiConfig::from_json_str(r#"{"host": " "}"#),
        Err(Error::Configuration { .. })
    ));
    assert!(matches!(
        WebApiConfig::from_json_str(r#"{"retries": 3}"#),
        Err(Error::Configuration { .. })
    ));

    let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    assert!(matches!(
        WebApiConfig::from_file(file.path()),
        Err(Error::Configuration { .. })
    ));
    assert!(matches!(
        WebApiConfig::from_file("/nonexistent/steam-web-api.yaml"),
        Err(Error::Io(_))
    ));
}

#[test]
fn test_config_round_trips_through_yaml() {
    let config = WebApiConfig::new().with_host("mock.local");
    let yaml = serde_yaml::to_string(&config).unwrap();
    assert_eq!(WebApiConfig::from_yaml_str(&yaml).unwrap(), config);
}

#[test]
fn test_invalid_values_fail_the_same_way_in_json_and_yaml() {
    let from_yaml = WebApiConfig::from_yaml_str("format: msgpack");
    let from_json = WebApiConfig::from_json_str(r#"{"format": "msgpack"}"#);

    for (label, result) in [("yaml", from_yaml), ("json", from_json)] {
        match result {
            Err(Error::Configuration { context, .. }) => {
                assert_eq!(context.source.as_deref(), Some("web_api_config"), "{}", label);
                assert!(
                    context.details.as_deref().unwrap_or_default().contains("msgpack"),
                    "{} details should name the rejected value",
                    label
                );
            }
            other => panic!("{} should fail with a configuration error, got {:?}", label, other),
        }
    }

    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"scheme": "gopher"}}"#).unwrap();
    assert!(matches!(
        WebApiConfig::from_file(file.path()),
        Err(Error::Configuration { .. })
    ));
}
