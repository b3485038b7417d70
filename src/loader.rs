//! Page Data Loading
//!
//! Critical data must resolve before the page renders; deferred data
//! degrades to an empty section.

use crate::error::{PageError, StorefrontError};

/// Lifecycle of a page's critical data
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Ready(T),
    Failed(PageError),
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        PageState::Loading
    }
}

impl<T> PageState<T> {
    pub fn from_result(result: Result<T, PageError>) -> Self {
        match result {
            Ok(data) => PageState::Ready(data),
            Err(err) => PageState::Failed(err),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&PageError> {
        match self {
            PageState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Critical fetch: any failure fails the page
pub fn critical<T>(result: Result<T, StorefrontError>) -> Result<T, PageError> {
    result.map_err(|err| {
        log::error!("[PAGE] Critical data failed: {}", err);
        PageError::Critical(err)
    })
}

/// Deferred fetch: failure is logged and the section is omitted
pub fn deferred<T>(label: &str, result: Result<T, StorefrontError>) -> Option<T> {
    match result {
        Ok(data) => Some(data),
        Err(err) => {
            log::warn!("[PAGE] Deferred {} failed: {}", label, err);
            None
        }
    }
}
