//! # steam-web-api
//!
//! 类型化的 Steam Web API 请求构建库：不可变请求对象 + 构建器。
//!
//! Typed request construction for the Steam Web API. A request is an immutable
//! value object naming the interface, method and version to call together with a
//! read-only parameter mapping. Executing it is left to a transport.
//!
//! ## Core Ideas
//!
//! - **Immutable requests**: [`SteamWebApiRequest`] has no setters; once built it can be
//!   shared freely across threads
//! - **Fail fast**: building from an incomplete builder returns an error, never a
//!   half-filled request
//! - **One constructor per operation**: the structs in [`requests`] fix interface,
//!   method and version and validate their own arguments
//! - **Descriptor, not parser**: each method carries a [`ResponseType`] tag for the
//!   deserialization layer
//!
//! ## Quick Start
//!
//! ```rust
//! use steam_web_api::{
//!     InterfaceMethod, SteamWebApiRequestBuilder, WebApiInterface, WebApiVersion,
//! };
//!
//! let request = SteamWebApiRequestBuilder::with_fields(
//!     WebApiInterface::ISteamUser,
//!     InterfaceMethod::GetPlayerSummaries,
//!     WebApiVersion::V2,
//!     [("steamids", "76561197960435530")],
//! )
//! .build()?;
//!
//! assert_eq!(request.base_url(), "api.steampowered.com");
//! assert_eq!(request.version().as_str(), "v0002");
//! # Ok::<(), steam_web_api::Error>(())
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Interfaces, methods, versions and response descriptors |
//! | [`request`] | Immutable request value type and generic builder |
//! | [`requests`] | Strongly typed constructors, one per remote operation |
//! | [`config`] | Scheme, host and reply format used when rendering URLs |
//! | [`endpoint`] | Rendering a request into a URL |
//! | [`transport`] | Trait implemented by request executors |

pub mod catalog;
pub mod config;
pub mod endpoint;
pub mod request;
pub mod requests;
pub mod transport;

pub use catalog::{CatalogError, InterfaceMethod, ResponseType, WebApiInterface, WebApiVersion};
pub use config::{ResponseFormat, Scheme, WebApiConfig};
pub use endpoint::EndpointRenderer;
pub use request::{Parameters, SteamWebApiRequest, SteamWebApiRequestBuilder, WEB_API_BASE_URL};
pub use requests::WebApiCall;
pub use transport::WebApiTransport;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
