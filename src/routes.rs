//! Route Parsing
//!
//! Maps `location.pathname` to a page, with an optional `($locale)` prefix.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::Locale;

/// Characters escaped inside a single path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    FeaturedProducts,
    Cart,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Locale segment as written in the URL, if any
    pub locale: Option<String>,
    pub page: Page,
}

impl Route {
    /// Resolve a pathname against the configured locale.
    /// A locale-shaped first segment that is not the configured one is not found.
    pub fn parse(path: &str, configured: &Locale) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
            .collect();

        let (locale, rest) = match segments.split_first() {
            Some((first, rest)) if Locale::parse(first).is_ok() => {
                if !configured.matches_param(first) {
                    return Self { locale: Some(first.clone()), page: Page::NotFound };
                }
                (Some(first.clone()), rest)
            }
            _ => (None, segments.as_slice()),
        };

        let page = match rest {
            [] => Page::Home,
            [one] if one == "featured-products" => Page::FeaturedProducts,
            [one] if one == "cart" => Page::Cart,
            _ => Page::NotFound,
        };
        Self { locale, page }
    }

    pub fn is_not_found(&self) -> bool {
        self.page == Page::NotFound
    }

    /// Prefix for links rendered on this route (`""` or `/en-us`)
    pub fn link_prefix(&self) -> String {
        self.locale.as_ref().map(|l| format!("/{}", l.to_ascii_lowercase())).unwrap_or_default()
    }

    /// Canonical path for a page, keeping this route's locale
    pub fn href(&self, page: Page) -> String {
        let prefix = self.link_prefix();
        match page {
            Page::Home if prefix.is_empty() => "/".to_string(),
            Page::Home => prefix,
            Page::FeaturedProducts => format!("{}/featured-products", prefix),
            Page::Cart => format!("{}/cart", prefix),
            Page::NotFound => format!("{}/404", prefix),
        }
    }
}

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT_ENCODE_SET).to_string()
}

pub fn product_path(handle: &str) -> String {
    format!("/products/{}", encode_segment(handle))
}

pub fn collection_path(handle: &str) -> String {
    format!("/collections/{}", encode_segment(handle))
}
