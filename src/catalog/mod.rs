//! Catalog of Web API interfaces, methods, versions and response shapes.
//!
//! These are flat enumerations. A [`crate::SteamWebApiRequest`] stores them as
//! opaque identifiers; consistency between an interface and a method is
//! guaranteed by the specialized operations in [`crate::requests`], not here.

mod error;
mod interface;
mod method;
mod response;
mod version;

pub use error::CatalogError;
pub use interface::WebApiInterface;
pub use method::InterfaceMethod;
pub use response::ResponseType;
pub use version::WebApiVersion;
