use super::{ParameterWriter, WebApiCall};
use crate::catalog::{InterfaceMethod, WebApiInterface, WebApiVersion};
use crate::Result;

/// Web API server time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetServerInfo;

impl WebApiCall for GetServerInfo {
    const INTERFACE: WebApiInterface = WebApiInterface::ISteamWebAPIUtil;
    const METHOD: InterfaceMethod = InterfaceMethod::GetServerInfo;
    const VERSION: WebApiVersion = WebApiVersion::V1;

    fn write_parameters(&self, _params: &mut ParameterWriter) -> Result<()> {
        Ok(())
    }
}

/// Interfaces and methods visible to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetSupportedApiList;

impl WebApiCall for GetSupportedApiList {
    const INTERFACE: WebApiInterface = WebApiInterface::ISteamWebAPIUtil;
    const METHOD: InterfaceMethod = InterfaceMethod::GetSupportedApiList;
    const VERSION: WebApiVersion = WebApiVersion::V1;

    fn write_parameters(&self, _params: &mut ParameterWriter) -> Result<()> {
        Ok(())
    }
}
