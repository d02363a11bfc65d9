use super::{ParameterWriter, WebApiCall};
use crate::catalog::{InterfaceMethod, WebApiInterface, WebApiVersion};
use crate::Result;

/// Every public app id with its name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAppList;

impl WebApiCall for GetAppList {
    const INTERFACE: WebApiInterface = WebApiInterface::ISteamApps;
    const METHOD: InterfaceMethod = InterfaceMethod::GetAppList;
    const VERSION: WebApiVersion = WebApiVersion::V2;

    fn write_parameters(&self, _params: &mut ParameterWriter) -> Result<()> {
        Ok(())
    }
}

/// Game servers running at an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetServersAtAddress {
    addr: String,
}

impl GetServersAtAddress {
    /// `addr` is an IP, optionally with `:port`.
    pub fn new(addr: impl Into<String>) -> Self {
        Self { addr: addr.into() }
    }
}

impl WebApiCall for GetServersAtAddress {
    const INTERFACE: WebApiInterface = WebApiInterface::ISteamApps;
    const METHOD: InterfaceMethod = InterfaceMethod::GetServersAtAddress;
    const VERSION: WebApiVersion = WebApiVersion::V1;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        if self.addr.trim().is_empty() {
            return Err(params.invalid("addr", "address must not be empty"));
        }
        params.put("addr", &self.addr);
        Ok(())
    }
}

/// Whether a given app build is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpToDateCheck {
    appid: u32,
    version: u32,
}

impl UpToDateCheck {
    pub fn new(appid: u32, version: u32) -> Self {
        Self { appid, version }
    }
}

impl WebApiCall for UpToDateCheck {
    const INTERFACE: WebApiInterface = WebApiInterface::ISteamApps;
    const METHOD: InterfaceMethod = InterfaceMethod::UpToDateCheck;
    const VERSION: WebApiVersion = WebApiVersion::V1;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        params.put("appid", self.appid).put("version", self.version);
        Ok(())
    }
}
