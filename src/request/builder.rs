//! Generic request builder

use super::{Parameters, SteamWebApiRequest};
use crate::catalog::{InterfaceMethod, WebApiInterface, WebApiVersion};
use crate::{Error, ErrorContext, Result};
use std::collections::BTreeMap;

/// Accumulates the fields of a [`SteamWebApiRequest`].
///
/// The generic builder performs no semantic validation; pairing a method with the
/// wrong interface is accepted as-is. Prefer the operations in [`crate::requests`],
/// which fix interface, method and version for each remote call.
///
/// Not synchronized: share a builder across threads only behind external locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SteamWebApiRequestBuilder {
    api_interface: Option<WebApiInterface>,
    interface_method: Option<InterfaceMethod>,
    version: Option<WebApiVersion>,
    parameters: Option<BTreeMap<String, String>>,
}

impl SteamWebApiRequestBuilder {
    /// Empty builder. Every field must be set before [`build`](Self::build) succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-populated with all four fields.
    pub fn with_fields<I, K, V>(
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
        Self {
            api_interface: Some(api_interface),
            interface_method: Some(interface_method),
            version: Some(version),
            parameters: Some(
                parameters
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Builder pre-populated from catalog names, e.g. values read from a config
    /// file or a command line. Unknown names fail with [`Error::Catalog`].
    pub fn from_names<I, K, V>(
        api_interface: &str,
        interface_method: &str,
        version: &str,
        parameters: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Ok(Self::with_fields(
            api_interface.parse()?,
            interface_method.parse()?,
            version.parse()?,
            parameters,
        ))
    }

    pub fn api_interface(mut self, api_interface: WebApiInterface) -> Self {
        self.api_interface = Some(api_interface);
        self
    }

    pub fn interface_method(mut self, interface_method: InterfaceMethod) -> Self {
        self.interface_method = Some(interface_method);
        self
    }

    pub fn version(mut self, version: WebApiVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// Replace the whole parameter mapping.
    pub fn parameters<I, K, V>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters = Some(
            parameters
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Add one parameter, replacing any previous value under the same name.
    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub(crate) fn get_api_interface(&self) -> Result<WebApiInterface> {
        self.api_interface.ok_or_else(|| missing("api_interface"))
    }

    pub(crate) fn get_interface_method(&self) -> Result<InterfaceMethod> {
        self.interface_method
            .ok_or_else(|| missing("interface_method"))
    }

    pub(crate) fn get_version(&self) -> Result<WebApiVersion> {
        self.version.ok_or_else(|| missing("version"))
    }

    /// Read-only view of the supplied mapping. Fails instead of inventing an empty
    /// mapping when none was supplied.
    pub(crate) fn get_parameters(&self) -> Result<&BTreeMap<String, String>> {
        self.parameters.as_ref().ok_or_else(|| missing("parameters"))
    }

    /// Produce a new request from the current state.
    ///
    /// The builder is left untouched, so repeated calls yield equal, independent
    /// requests. Fails with [`Error::Builder`] naming the first unset field.
    pub fn build(&self) -> Result<SteamWebApiRequest> {
        SteamWebApiRequest::try_from(self)
    }
}

fn missing(field: &str) -> Error {
    Error::builder_with_context(
        format!("{} was never set", field),
        ErrorContext::new()
            .with_field_path(format!("builder.{}", field))
            .with_source("request_builder"),
    )
}

impl TryFrom<&SteamWebApiRequestBuilder> for SteamWebApiRequest {
    type Error = Error;

    fn try_from(builder: &SteamWebApiRequestBuilder) -> Result<Self> {
        Ok(SteamWebApiRequest::from_parts(
            builder.get_api_interface()?,
            builder.get_interface_method()?,
            builder.get_version()?,
            Parameters::from_map(builder.get_parameters()?.clone()),
        ))
    }
}
