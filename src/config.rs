//! Storefront Configuration
//!
//! Loaded once at start-up from `window.__STOREFRONT_CONFIG__`, falling back
//! to the public demo shop.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::error::ConfigError;

/// Global object injected by `index.html`
const CONFIG_GLOBAL: &str = "__STOREFRONT_CONFIG__";

const DEMO_DOMAIN: &str = "mock.shop";

/// Language + country pair (`EN-US`), the Storefront API `@inContext`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    pub language: String,
    pub country: String,
}

impl Locale {
    /// Parse `en-us`, `EN-US` or `en_US`
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::Invalid {
            field: "locale",
            reason: format!("expected LANGUAGE-COUNTRY, got `{}`", raw),
        };
        let (language, country) = raw.trim().split_once(['-', '_']).ok_or_else(invalid)?;
        let valid = |part: &str| part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic());
        if !valid(language) || !valid(country) {
            return Err(invalid());
        }
        Ok(Self {
            language: language.to_ascii_uppercase(),
            country: country.to_ascii_uppercase(),
        })
    }

    /// Lowercase URL prefix, e.g. `en-us`
    pub fn path_prefix(&self) -> String {
        format!("{}-{}", self.language, self.country).to_ascii_lowercase()
    }

    /// Whether a `($locale)` route param names this locale
    pub fn matches_param(&self, param: &str) -> bool {
        param.eq_ignore_ascii_case(&self.path_prefix())
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self { language: "EN".to_string(), country: "US".to_string() }
    }
}

impl TryFrom<String> for Locale {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Locale::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        format!("{}-{}", locale.language, locale.country)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigLogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl ConfigLogLevel {
    pub fn filter(self) -> log::LevelFilter {
        match self {
            ConfigLogLevel::Error => log::LevelFilter::Error,
            ConfigLogLevel::Warn => log::LevelFilter::Warn,
            ConfigLogLevel::Info => log::LevelFilter::Info,
            ConfigLogLevel::Debug => log::LevelFilter::Debug,
        }
    }
}

/// Storefront runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorefrontConfig {
    /// Shop domain without scheme, e.g. `my-shop.myshopify.com`
    pub store_domain: String,
    /// Storefront API version, `YYYY-MM`
    pub api_version: String,
    /// Public (browser-safe) Storefront API token
    pub public_access_token: Option<String>,
    pub default_locale: Locale,
    pub shop_title: String,
    /// Drop an unconfirmed optimistic override after this long. `None` keeps it.
    pub mutation_timeout_ms: Option<u32>,
    pub log_level: ConfigLogLevel,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_domain: DEMO_DOMAIN.to_string(),
            api_version: "2024-10".to_string(),
            public_access_token: None,
            default_locale: Locale::default(),
            shop_title: "UNCMFRT.COM".to_string(),
            mutation_timeout_ms: None,
            log_level: ConfigLogLevel::default(),
        }
    }
}

impl StorefrontConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Decode(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Decode the config object injected into the page
    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        let config: Self = serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Decode(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read `window.__STOREFRONT_CONFIG__`; `Ok(None)` if it is not set
    pub fn from_window() -> Result<Option<Self>, ConfigError> {
        let Some(win) = web_sys::window() else {
            return Ok(None);
        };
        let value = js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| ConfigError::Decode(format!("{:?}", e)))?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        Self::from_js(value).map(Some)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let domain = self.store_domain.trim();
        if domain.is_empty() {
            return Err(ConfigError::Missing("storeDomain"));
        }
        if domain.contains("://") || domain.contains('/') {
            return Err(ConfigError::Invalid {
                field: "storeDomain",
                reason: "use the bare host name, without scheme or path".to_string(),
            });
        }
        if !is_api_version(&self.api_version) {
            return Err(ConfigError::Invalid {
                field: "apiVersion",
                reason: format!("expected YYYY-MM, got `{}`", self.api_version),
            });
        }
        if self.mutation_timeout_ms == Some(0) {
            return Err(ConfigError::Invalid {
                field: "mutationTimeoutMs",
                reason: "must be positive; omit it to disable".to_string(),
            });
        }
        Ok(())
    }

    /// GraphQL endpoint URL
    pub fn endpoint(&self) -> String {
        if self.store_domain == DEMO_DOMAIN {
            return format!("https://{}/api", DEMO_DOMAIN);
        }
        format!("https://{}/api/{}/graphql.json", self.store_domain.trim(), self.api_version)
    }
}

fn is_api_version(raw: &str) -> bool {
    let Some((year, month)) = raw.split_once('-') else {
        return false;
    };
    let digits = |s: &str, n: usize| s.len() == n && s.chars().all(|c| c.is_ascii_digit());
    digits(year, 4) && digits(month, 2) && matches!(month.parse::<u8>(), Ok(1..=12))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        let locale = Locale::parse("en-us").unwrap();
        assert_eq!(locale.language, "EN");
        assert_eq!(locale.country, "US");
        assert_eq!(locale.path_prefix(), "en-us");

        assert_eq!(Locale::parse("FR_ca").unwrap().path_prefix(), "fr-ca");
        assert!(Locale::parse("english").is_err());
        assert!(Locale::parse("e1-us").is_err());
        assert!(Locale::parse("eng-us").is_err());
    }

    #[test]
    fn test_locale_matches_param() {
        let locale = Locale::default();
        assert!(locale.matches_param("EN-us"));
        assert!(!locale.matches_param("fr-ca"));
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = StorefrontConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoint(), "https://mock.shop/api");
    }

    #[test]
    fn test_from_json() {
        let config = StorefrontConfig::from_json(
            r#"{
                "storeDomain": "uncmfrt.myshopify.com",
                "apiVersion": "2024-07",
                "publicAccessToken": "abc",
                "defaultLocale": "es-co",
                "mutationTimeoutMs": 8000,
                "logLevel": "debug"
            }"#,
        )
        .unwrap();
        assert_eq!(config.endpoint(), "https://uncmfrt.myshopify.com/api/2024-07/graphql.json");
        assert_eq!(config.default_locale.path_prefix(), "es-co");
        assert_eq!(config.mutation_timeout_ms, Some(8000));
        assert_eq!(config.log_level, ConfigLogLevel::Debug);
        // unspecified fields keep their defaults
        assert_eq!(config.shop_title, "UNCMFRT.COM");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            StorefrontConfig::from_json(r#"{"storeDomain": ""}"#),
            Err(ConfigError::Missing("storeDomain"))
        );
        assert!(matches!(
            StorefrontConfig::from_json(r#"{"storeDomain": "https://shop.example"}"#),
            Err(ConfigError::Invalid { field: "storeDomain", .. })
        ));
        assert!(matches!(
            StorefrontConfig::from_json(r#"{"apiVersion": "2024-13"}"#),
            Err(ConfigError::Invalid { field: "apiVersion", .. })
        ));
        assert!(matches!(
            StorefrontConfig::from_json(r#"{"defaultLocale": "nope"}"#),
            Err(ConfigError::Decode(_))
        ));
        assert!(matches!(
            StorefrontConfig::from_json(r#"{"mutationTimeoutMs": 0}"#),
            Err(ConfigError::Invalid { .. })
        ));
    }
}
