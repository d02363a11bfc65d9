//! Handoff point between request construction and execution.
//!
//! Executing requests (HTTP, retries, authentication, reply parsing) is left to
//! implementations of [`WebApiTransport`]. Their errors reach the caller as-is.

use crate::request::SteamWebApiRequest;
use std::future::Future;

/// Executes built requests.
pub trait WebApiTransport {
    type Response;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Execute one request. The returned future is `Send` and safe to use across threads.
    fn execute(
        &self,
        request: SteamWebApiRequest,
    ) -> impl Future<Output = std::result::Result<Self::Response, Self::Error>> + Send;
}
