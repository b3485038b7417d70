//! Application Context
//!
//! Shared handles provided via Leptos Context API: configuration, the
//! current route and the cart submission pipeline.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, CartAction, StorefrontClient};
use crate::config::StorefrontConfig;
use crate::routes::Route;
use crate::store::{Dispatch, Settlement, StorefrontStateStoreFields, StorefrontStore, Submission};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<StorefrontConfig>,
    /// Current route - read
    pub route: ReadSignal<Route>,
    /// Current route - write
    set_route: WriteSignal<Route>,
    pub store: StorefrontStore,
}

impl AppContext {
    pub fn new(config: StorefrontConfig, store: StorefrontStore) -> Self {
        let initial = Route::parse(&current_path(), &config.default_locale);
        let (route, set_route) = signal(initial);
        Self { config: StoredValue::new(config), route, set_route, store }
    }

    pub fn config(&self) -> StorefrontConfig {
        self.config.get_value()
    }

    pub fn shop_title(&self) -> String {
        self.config.with_value(|c| c.shop_title.clone())
    }

    /// Fresh query-layer client for one request
    pub fn client(&self) -> StorefrontClient {
        self.config.with_value(StorefrontClient::new)
    }

    // ========================
    // Navigation
    // ========================

    /// Push a new history entry and re-route. Pending cart overrides are dropped.
    pub fn navigate(&self, path: &str) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path)) {
                log::warn!("[ROUTE] pushState failed: {:?}", e);
            }
        }
        self.store.write().close_cart();
        self.store.menu_open().set(false);
        self.sync_route();
    }

    /// Re-read `location.pathname` (popstate)
    pub fn sync_route(&self) {
        let route = self.config.with_value(|c| Route::parse(&current_path(), &c.default_locale));
        log::debug!("[ROUTE] {:?}", route);
        self.set_route.set(route);
    }

    // ========================
    // Cart
    // ========================

    pub fn open_cart(&self) {
        self.store.menu_open().set(false);
        self.store.cart_open().set(true);
    }

    pub fn close_cart(&self) {
        self.store.write().close_cart();
    }

    pub fn toggle_menu(&self) {
        self.store.menu_open().update(|open| *open = !*open);
    }

    /// Submit a cart form: show the optimistic patch now, reconcile when
    /// the backend answers.
    pub fn submit(&self, action: CartAction) {
        let store = self.store;
        let timeout_ms = self.config.with_value(|c| c.mutation_timeout_ms);

        let submission = store.write().begin(action);
        log::info!("[CART] {} submitted (seq {})", submission.action.name(), submission.seq);

        if let (Some(ms), Some(_)) = (timeout_ms, submission.pending.as_ref()) {
            let watched = submission.clone();
            spawn_local(async move {
                TimeoutFuture::new(ms).await;
                if store.write().expire(&watched) {
                    log::warn!("[CART] {} unconfirmed after {}ms, reverting", watched.action.name(), ms);
                }
            });
        }

        let dispatch = store.write().dispatch(submission);
        match dispatch {
            Dispatch::Send(submission, cart_id) => self.send(submission, cart_id),
            Dispatch::Queued => log::debug!("[CART] Waiting for cart create"),
        }
    }

    fn send(&self, submission: Submission, cart_id: Option<String>) {
        let ctx = *self;
        let client = self.client();
        spawn_local(async move {
            let result = submission.action.perform(&client, cart_id.as_deref()).await;
            if let Err(err) = &result {
                log::error!("[CART] {} failed: {}", submission.action.name(), err);
            }
            let settlement = ctx.store.write().settle(&submission, result);
            log::debug!("[CART] seq {} settled: {:?}", submission.seq, settlement);
            if settlement == Settlement::Stale {
                ctx.refresh_cart();
            }
            let ready = ctx.store.write().release_queued();
            for (queued, cart_id) in ready {
                ctx.send(queued, cart_id);
            }
        });
    }

    /// Refetch the session cart and reconcile overrides against it
    pub fn refresh_cart(&self) {
        let store = self.store;
        let client = self.client();
        let Some(cart_id) = store.cart().with_untracked(|cart| cart.as_ref().map(|c| c.id.clone())) else {
            return;
        };
        spawn_local(async move {
            match commands::cart_fetch(&client, &cart_id).await {
                Ok(cart) => {
                    let cleared = store.write().refresh(cart);
                    log::debug!("[CART] Refreshed, {} overrides cleared", cleared);
                }
                Err(err) => log::warn!("[CART] Refresh failed: {}", err),
            }
        });
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Set `document.title`
pub fn set_document_title(title: &str) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(title);
    }
}
