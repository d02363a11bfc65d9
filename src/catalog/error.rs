//! Catalog lookup errors

/// Errors raised when parsing catalog names from strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown Web API interface '{name}'{}", .hint.as_ref().map(|h| format!("\n Hint: {}", h)).unwrap_or_default())]
    UnknownInterface { name: String, hint: Option<String> },

    #[error("Unknown interface method '{name}'{}", .hint.as_ref().map(|h| format!("\n Hint: {}", h)).unwrap_or_default())]
    UnknownMethod { name: String, hint: Option<String> },

    #[error("Unknown Web API version '{name}'{}", .hint.as_ref().map(|h| format!("\n Hint: {}", h)).unwrap_or_default())]
    UnknownVersion { name: String, hint: Option<String> },
}

impl CatalogError {
    /// Attach an actionable hint to the error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        let hint_val = Some(hint.into());
        match self {
            CatalogError::UnknownInterface { ref mut hint, .. }
            | CatalogError::UnknownMethod { ref mut hint, .. }
            | CatalogError::UnknownVersion { ref mut hint, .. } => *hint = hint_val,
        }
        self
    }
}
