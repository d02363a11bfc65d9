use crate::catalog::CatalogError;
use thiserror::Error;

/// Where a request could not be assembled, and why.
///
/// Builder errors name the unset builder field, operation errors name the Web API
/// parameter and the method rejecting it, configuration errors name the setting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// `builder.parameters`, `steamids`, `format`, ...
    pub field_path: Option<String>,
    /// Rejected value or accepted range.
    pub details: Option<String>,
    /// `request_builder`, `web_api_config`, or the method name such as `GetPlayerBans`.
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Errors raised while assembling a request or its endpoint settings.
///
/// Nothing in this crate talks to the Web API, so transport failures never show up
/// here; they stay with the [`crate::transport::WebApiTransport`] implementation
/// that produced them.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or building with an unset builder field.
    #[error("Builder error: {message}{}", format_context(.context))]
    Builder {
        message: String,
        context: ErrorContext,
    },

    /// Arguments rejected by one of the [`crate::requests`] operations.
    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    /// Bad scheme, host or format, whether from a file or the environment.
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    /// Unknown interface, method or version name, e.g. from
    /// [`crate::SteamWebApiRequestBuilder::from_names`].
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Host that cannot form a URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders the populated context fields as ` (field: .., details: .., source: ..)`.
fn format_context(ctx: &ErrorContext) -> String {
    let parts: Vec<String> = [
        ("field", &ctx.field_path),
        ("details", &ctx.details),
        ("source", &ctx.source),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.as_ref().map(|v| format!("{}: {}", label, v)))
    .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Builder misuse, attributed to `context.field_path`
    pub fn builder_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Builder {
            message: msg.into(),
            context,
        }
    }

    /// Operation argument rejected by the method in `context.source`
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    /// Unusable endpoint setting
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Context of builder, validation and configuration errors
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Builder { context, .. }
            | Error::Validation { context, .. }
            | Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}
