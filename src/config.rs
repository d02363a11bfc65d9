//! Endpoint configuration for transports.
//!
//! The request core never reads configuration; these settings only affect how an
//! [`crate::endpoint::EndpointRenderer`] turns a request into a URL.
//!
//! Environment knobs:
//! - `STEAM_WEB_API_SCHEME` (`https` | `http`, default `https`)
//! - `STEAM_WEB_API_HOST` (default: the request's base host)
//! - `STEAM_WEB_API_FORMAT` (`json` | `xml` | `vdf`, default `json`)

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const ENV_SCHEME: &str = "STEAM_WEB_API_SCHEME";
pub const ENV_HOST: &str = "STEAM_WEB_API_HOST";
pub const ENV_FORMAT: &str = "STEAM_WEB_API_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Https,
    Http,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Https => "https",
            Scheme::Http => "http",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "https" => Ok(Scheme::Https),
            "http" => Ok(Scheme::Http),
            other => Err(invalid_value("scheme", other, "https, http")),
        }
    }
}

/// Serialization the Web API is asked to reply in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
    Vdf,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Xml => "xml",
            ResponseFormat::Vdf => "vdf",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ResponseFormat::Json),
            "xml" => Ok(ResponseFormat::Xml),
            "vdf" => Ok(ResponseFormat::Vdf),
            other => Err(invalid_value("format", other, "json, xml, vdf")),
        }
    }
}

fn invalid_value(field: &str, value: &str, expected: &str) -> Error {
    Error::configuration_with_context(
        format!("unsupported {} '{}'", field, value),
        ErrorContext::new()
            .with_field_path(field)
            .with_details(format!("expected one of: {}", expected))
            .with_source("web_api_config"),
    )
}

/// How requests are rendered into URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WebApiConfig {
    pub scheme: Scheme,
    /// Replaces the request's base host, e.g. `127.0.0.1:8080` for a mock server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    pub format: ResponseFormat,
}

impl WebApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with the `STEAM_WEB_API_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new().with_env_overrides()
    }

    /// Overlay the `STEAM_WEB_API_*` environment variables onto this config.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            let value = lookup(key)?;
            if value.trim().is_empty() {
                tracing::warn!(variable = key, "ignoring empty configuration variable");
                None
            } else {
                Some(value)
            }
        };

        if let Some(scheme) = read(ENV_SCHEME) {
            self.scheme = scheme.parse()?;
        }
        if let Some(host) = read(ENV_HOST) {
            self.host = Some(host.trim().to_string());
        }
        if let Some(format) = read(ENV_FORMAT) {
            self.format = format.parse()?;
        }
        Ok(self)
    }

    /// Load from a `.json`, `.yaml` or `.yml` file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let extension = path.extension().and_then(|s| s.to_str());

        let config = match extension.map(|s| s.to_ascii_lowercase()).as_deref() {
            Some("json") => Self::from_json_str(&content)?,
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content)?,
            _ => {
                return Err(Error::configuration_with_context(
                    "unsupported configuration file type",
                    ErrorContext::new()
                        .with_field_path(path.display().to_string())
                        .with_details("expected a .json, .yaml or .yml file")
                        .with_source("web_api_config"),
                ))
            }
        };
        tracing::debug!(path = %path.display(), "loaded Web API configuration");
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content).map_err(|e| {
            Error::configuration_with_context(
                "invalid JSON configuration",
                ErrorContext::new()
                    .with_details(e.to_string())
                    .with_source("web_api_config"),
            )
        })?;
        config.validated()
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| {
            Error::configuration_with_context(
                "invalid YAML configuration",
                ErrorContext::new()
                    .with_details(e.to_string())
                    .with_source("web_api_config"),
            )
        })?;
        config.validated()
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    fn validated(self) -> Result<Self> {
        if let Some(host) = &self.host {
            if host.trim().is_empty() {
                return Err(Error::configuration_with_context(
                    "host must not be empty",
                    ErrorContext::new()
                        .with_field_path("host")
                        .with_source("web_api_config"),
                ));
            }
        }
        Ok(self)
    }
}
