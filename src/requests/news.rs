use super::{ParameterWriter, WebApiCall};
use crate::catalog::{InterfaceMethod, WebApiInterface, WebApiVersion};
use crate::Result;

/// Latest news entries for an app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetNewsForApp {
    appid: u32,
    count: Option<u32>,
    max_length: Option<u32>,
    end_date: Option<u64>,
    feeds: Vec<String>,
}

impl GetNewsForApp {
    pub fn new(appid: u32) -> Self {
        Self {
            appid,
            count: None,
            max_length: None,
            end_date: None,
            feeds: Vec::new(),
        }
    }

    /// Number of entries to return.
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Truncate item contents to this many characters (0 for full contents).
    pub fn max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Only entries posted before this unix timestamp.
    pub fn end_date(mut self, end_date: u64) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Restrict to these feed names.
    pub fn feeds<I, S>(mut self, feeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feeds = feeds.into_iter().map(Into::into).collect();
        self
    }
}

impl WebApiCall for GetNewsForApp {
    const INTERFACE: WebApiInterface = WebApiInterface::ISteamNews;
    const METHOD: InterfaceMethod = InterfaceMethod::GetNewsForApp;
    const VERSION: WebApiVersion = WebApiVersion::V2;

    fn write_parameters(&self, params: &mut ParameterWriter) -> Result<()> {
        params
            .put("appid", self.appid)
            .put_opt("count", self.count)
            .put_opt("maxlength", self.max_length)
            .put_opt("enddate", self.end_date)
            .put_joined("feeds", &self.feeds);
        Ok(())
    }
}
