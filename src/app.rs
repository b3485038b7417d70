//! Storefront App
//!
//! Root component: provides the store and context, then renders the page
//! for the current route inside the layout.

use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::PageLayout;
use crate::config::StorefrontConfig;
use crate::context::AppContext;
use crate::pages::{CartPage, FeaturedProductsPage, HomePage, NotFoundPage};
use crate::routes::Page;
use crate::store::{StorefrontState, StorefrontStore};

#[component]
pub fn App(config: StorefrontConfig) -> impl IntoView {
    let store: StorefrontStore = Store::new(StorefrontState::new());
    provide_context(store);

    let ctx = AppContext::new(config, store);
    provide_context(ctx);

    bind_popstate(ctx);

    view! {
        <PageLayout>
            {move || match ctx.route.get().page {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::FeaturedProducts => view! { <FeaturedProductsPage /> }.into_any(),
                Page::Cart => view! { <CartPage /> }.into_any(),
                Page::NotFound => view! { <NotFoundPage /> }.into_any(),
            }}
        </PageLayout>
    }
}

/// Re-route on back/forward navigation
fn bind_popstate(ctx: AppContext) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let on_pop = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(move |_ev: web_sys::PopStateEvent| {
        ctx.close_cart();
        ctx.sync_route();
    });
    if let Err(e) = win.add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref()) {
        log::warn!("[ROUTE] Could not listen for popstate: {:?}", e);
    }
    on_pop.forget();
}
