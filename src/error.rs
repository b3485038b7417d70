//! Error Types
//!
//! Typed failures for the query layer, page loaders and configuration.

use thiserror::Error;

use crate::models::CartUserError;

/// Query-layer failure. Clone so it can sit inside signals.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorefrontError {
    #[error("network error: {0}")]
    Network(String),
    #[error("storefront API returned HTTP {0}")]
    Http(u16),
    #[error("graphql error: {}", .0.join("; "))]
    GraphQl(Vec<String>),
    #[error("cart rejected the request: {}", user_error_messages(.0))]
    UserErrors(Vec<CartUserError>),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("response is missing {0}")]
    MissingData(&'static str),
}

fn user_error_messages(errors: &[CartUserError]) -> String {
    errors.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("; ")
}

impl From<reqwest::Error> for StorefrontError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StorefrontError::Decode(err.to_string())
        } else {
            StorefrontError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for StorefrontError {
    fn from(err: serde_json::Error) -> Self {
        StorefrontError::Decode(err.to_string())
    }
}

/// Why a page could not render
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageError {
    #[error("page not found")]
    NotFound,
    #[error("failed to load page: {0}")]
    Critical(#[from] StorefrontError),
}

impl PageError {
    pub fn status(&self) -> u16 {
        match self {
            PageError::NotFound => 404,
            PageError::Critical(StorefrontError::Http(code)) if *code >= 500 => *code,
            PageError::Critical(_) => 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("missing config field `{0}`")]
    Missing(&'static str),
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("could not decode config: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StorefrontError::GraphQl(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "graphql error: a; b");

        let err = StorefrontError::UserErrors(vec![CartUserError {
            code: Some("INVALID".into()),
            field: None,
            message: "Quantity is too high".into(),
        }]);
        assert_eq!(err.to_string(), "cart rejected the request: Quantity is too high");
    }

    #[test]
    fn test_page_status() {
        assert_eq!(PageError::NotFound.status(), 404);
        assert_eq!(PageError::from(StorefrontError::Http(503)).status(), 503);
        assert_eq!(PageError::from(StorefrontError::Http(401)).status(), 500);
        assert_eq!(PageError::from(StorefrontError::MissingData("shop")).status(), 500);
    }
}
