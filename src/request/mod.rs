//! Immutable Web API request value type.
//!
//! A [`SteamWebApiRequest`] is a complete, ready-to-send description of one remote
//! call: base host, interface, method, version and parameters. It has no setters;
//! every field is fixed at construction, which makes a built request safe to share
//! across threads for reading.

mod builder;
mod parameters;

pub use builder::SteamWebApiRequestBuilder;
pub use parameters::{Iter, Parameters};

use crate::catalog::{InterfaceMethod, ResponseType, WebApiInterface, WebApiVersion};
use serde::Serialize;

/// Host serving every interface in the catalog.
pub const WEB_API_BASE_URL: &str = "api.steampowered.com";

/// A fully specified request to the Steam Web API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SteamWebApiRequest {
    base_url: &'static str,
    api_interface: WebApiInterface,
    interface_method: InterfaceMethod,
    version: WebApiVersion,
    parameters: Parameters,
}

impl SteamWebApiRequest {
    /// Construct directly from the four request fields.
    ///
    /// Equivalent, field for field, to building from a
    /// [`SteamWebApiRequestBuilder::with_fields`] given the same arguments.
    pub fn new<I, K, V>(
        api_interface: WebApiInterface,
        interface_method: InterfaceMethod,
        version: WebApiVersion,
        parameters: I,
    ) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::from_parts(
            api_interface,
            interface_method,
            version,
            parameters.into_iter().collect(),
        )
    }

    pub(crate) fn from_parts(
        api_interface: WebApiInterface,
        interface_method: InterfaceMethod,
        version: WebApiVersion,
        parameters: Parameters,
    ) -> Self {
        tracing::debug!(
            interface = %api_interface,
            method = %interface_method,
            version = %version,
            parameters = parameters.len(),
            "built Web API request"
        );
        Self {
            base_url: WEB_API_BASE_URL,
            api_interface,
            interface_method,
            version,
            parameters,
        }
    }

    pub fn base_url(&self) -> &'static str {
        self.base_url
    }

    pub fn api_interface(&self) -> WebApiInterface {
        self.api_interface
    }

    pub fn interface_method(&self) -> InterfaceMethod {
        self.interface_method
    }

    pub fn version(&self) -> WebApiVersion {
        self.version
    }

    /// Read-only parameter mapping captured at construction.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Reply shape expected for this request, derived from its method.
    pub fn response_type(&self) -> ResponseType {
        self.interface_method.response_type()
    }
}
