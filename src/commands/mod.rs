//! Storefront API Client
//!
//! Query-layer bindings to the hosted commerce backend, organized by domain.

mod cart;
mod catalog;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{Locale, StorefrontConfig};
use crate::error::StorefrontError;

// Re-export all public items
pub use cart::*;
pub use catalog::*;

const TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

// ========================
// Envelope
// ========================

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

/// Decode a GraphQL response body. Top-level `errors` win over partial data.
pub fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T, StorefrontError> {
    let response: GraphQlResponse<T> = serde_json::from_str(body)?;
    if !response.errors.is_empty() {
        return Err(StorefrontError::GraphQl(response.errors.into_iter().map(|e| e.message).collect()));
    }
    response.data.ok_or(StorefrontError::MissingData("data"))
}

/// Inject `country`/`language` for `@inContext`, keeping explicit overrides
pub fn with_context(variables: Value, locale: &Locale) -> Value {
    let mut variables = match variables {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    variables.entry("country").or_insert_with(|| Value::String(locale.country.clone()));
    variables.entry("language").or_insert_with(|| Value::String(locale.language.clone()));
    Value::Object(variables)
}

// ========================
// Client
// ========================

#[derive(Clone, Debug)]
pub struct StorefrontClient {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
    locale: Locale,
}

impl StorefrontClient {
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint(),
            token: config.public_access_token.clone(),
            locale: config.default_locale.clone(),
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Run a query or mutation document
    pub async fn query<T: DeserializeOwned>(&self, document: &str, variables: Value) -> Result<T, StorefrontError> {
        let body = GraphQlRequest {
            query: document,
            variables: with_context(variables, &self.locale),
        };

        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(token) = &self.token {
            request = request.header(TOKEN_HEADER, token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StorefrontError::Http(status.as_u16()));
        }
        let text = response.text().await?;
        decode_response(&text)
    }
}
