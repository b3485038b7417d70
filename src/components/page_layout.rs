//! Page Layout Components
//!
//! Floating header with menu and cart drawers, and the site footer.

use leptos::prelude::*;

use crate::components::cart::{use_cart_count, Cart, CartLayout};
use crate::content::{CONTACT_PHONE, FOOTER_COLUMNS, MENU, SOCIAL_LINKS};
use crate::context::AppContext;
use crate::routes::Page;
use crate::store::StorefrontStateStoreFields;

/// Anchor that routes in-app instead of reloading the page
#[component]
pub fn AppLink(page: Page, #[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let href = move || ctx.route.get().href(page);
    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() {
            return;
        }
        ev.prevent_default();
        ctx.navigate(&ctx.route.get_untracked().href(page));
    };

    view! {
        <a class=class href=href on:click=on_click>{children()}</a>
    }
}

#[component]
pub fn PageLayout(children: Children) -> impl IntoView {
    view! {
        <div class="page">
            <a href="#mainContent" class="sr-only">"Skip to content"</a>
            <Header />
            <main role="main" id="mainContent" class="page-main">
                {children()}
            </main>
        </div>
        <Footer />
    }
}

#[component]
fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let title = ctx.shop_title();
    let count = use_cart_count();

    view! {
        <CartDrawer />
        <MenuDrawer />
        <header role="banner" class="site-header">
            <div class="site-header-left">
                <button class="menu-toggle" aria-label="Open menu" on:click=move |_| ctx.toggle_menu()>"☰"</button>
                <AppLink page=Page::Home class="site-title">{title}</AppLink>
            </div>
            <nav class="site-nav">
                <ul>
                    {MENU.iter().map(|item| view! {
                        <li><a href=item.to target="_self">{item.title}</a></li>
                    }).collect_view()}
                </ul>
            </nav>
            <div class="site-header-actions">
                <button class="btn-dark quiz-button">"Take The Quiz"</button>
                <a href="/account" class="account-link">
                    <img src="/assets/Usericon.svg" alt="User account" />
                </a>
                <button class="cart-toggle" aria-label="Open cart" on:click=move |_| ctx.open_cart()>
                    <img src="/assets/Carshopping.svg" alt="Shopping cart" />
                    <span class="cart-badge">{move || count.get()}</span>
                </button>
            </div>
        </header>
    }
}

#[component]
fn CartDrawer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    view! {
        <Show when=move || store.cart_open().get()>
            <div class="drawer-backdrop" on:click=move |_| ctx.close_cart()></div>
            <aside class="drawer drawer-right" aria-label="Cart">
                <Cart layout=CartLayout::Drawer />
            </aside>
        </Show>
    }
}

#[component]
fn MenuDrawer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;
    let close = move |_| store.menu_open().set(false);

    view! {
        <Show when=move || store.menu_open().get()>
            <div class="drawer-backdrop" on:click=close></div>
            <aside class="drawer drawer-right menu-drawer" aria-label="Menu">
                <h2>"Menu"</h2>
                <nav>
                    {MENU.iter().map(|item| view! {
                        <a href=item.to target="_self" on:click=close>{item.title}</a>
                    }).collect_view()}
                    <button class="btn-light" on:click=close>"Take The Quiz"</button>
                </nav>
            </aside>
        </Show>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <NewsletterForm />
            <div class="footer-grid">
                {FOOTER_COLUMNS.iter().map(|column| view! {
                    <div class="footer-column">
                        <h4>{column.heading}</h4>
                        <ul>
                            {column.links.iter().map(|(label, href)| view! {
                                <li><a href=*href>{*label}</a></li>
                            }).collect_view()}
                        </ul>
                    </div>
                }).collect_view()}
                <div class="footer-column">
                    <h4>"Contact Us"</h4>
                    <p>"Let Us Help You"</p>
                    <p class="footer-phone">{CONTACT_PHONE}</p>
                    <h4>"Connect With Us"</h4>
                    <div class="footer-social">
                        {SOCIAL_LINKS.iter().map(|(icon, alt)| view! {
                            <a href="#"><img src=*icon alt=*alt /></a>
                        }).collect_view()}
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>"© uncmfrt.com. All right reserved."</p>
                <p>"Made with ❤️ and ☕ by Arctic Grey"</p>
            </div>
        </footer>
    }
}

/// Newsletter sign-up. No list provider is wired up; the address is only validated.
#[component]
fn NewsletterForm() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (joined, set_joined) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let address = email.get_untracked();
        if is_plausible_email(&address) {
            log::info!("[LAYOUT] Newsletter sign-up");
            set_joined.set(true);
            set_email.set(String::new());
        }
    };

    view! {
        <div class="newsletter">
            <h3>"Be a Part of Our Journey"</h3>
            <p>"Welcome to UNCMFRT. Sign up for exclusive content and we'll send you 10% off."</p>
            <Show
                when=move || !joined.get()
                fallback=|| view! { <p class="newsletter-thanks">"Thanks for subscribing!"</p> }
            >
                <form class="newsletter-form" on:submit=on_submit>
                    <input
                        type="email"
                        placeholder="Email Address"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn-primary">"Subscribe"</button>
                </form>
            </Show>
        </div>
    }
}

fn is_plausible_email(raw: &str) -> bool {
    let raw = raw.trim();
    match raw.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'),
        None => false,
    }
}
