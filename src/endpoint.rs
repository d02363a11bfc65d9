//! URL rendering for transports.
//!
//! Produces `{scheme}://{host}/{interface}/{method}/{version}/?{parameters}&format={format}`.
//! Rendering reads the request and never changes it.

use crate::config::WebApiConfig;
use crate::request::SteamWebApiRequest;
use crate::{Error, ErrorContext, Result};
use url::Url;

/// Query parameter carrying the reply serialization.
pub const FORMAT_PARAMETER: &str = "format";

#[derive(Debug, Clone, Default)]
pub struct EndpointRenderer {
    config: WebApiConfig,
}

impl EndpointRenderer {
    pub fn new(config: WebApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WebApiConfig {
        &self.config
    }

    /// Render `request` into an absolute URL.
    ///
    /// Parameters are appended in key order. A `format` parameter already present on
    /// the request wins over the configured format.
    pub fn render(&self, request: &SteamWebApiRequest) -> Result<Url> {
        let host = self.config.host.as_deref().unwrap_or(request.base_url());
        let mut url = Url::parse(&format!("{}://{}/", self.config.scheme, host))?;

        url.path_segments_mut()
            .map_err(|_| {
                Error::configuration_with_context(
                    "base URL cannot carry a path",
                    ErrorContext::new()
                        .with_field_path("host")
                        .with_details(host.to_string())
                        .with_source("endpoint_renderer"),
                )
            })?
            .pop_if_empty()
            .extend([
                request.api_interface().as_str(),
                request.interface_method().as_str(),
                request.version().as_str(),
                "",
            ]);

        {
            let mut query = url.query_pairs_mut();
            for (name, value) in request.parameters() {
                query.append_pair(name, value);
            }
            if !request.parameters().contains_key(FORMAT_PARAMETER) {
                query.append_pair(FORMAT_PARAMETER, self.config.format.as_str());
            }
        }

        tracing::debug!(
            method = %request.interface_method(),
            url = %url,
            "rendered Web API endpoint"
        );
        Ok(url)
    }
}
