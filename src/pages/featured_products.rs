//! Featured Products Page
//!
//! Product grid from the featured items query. Errors are not fatal here:
//! the grid stays empty and a notice is shown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::ProductCard;
use crate::context::{set_document_title, AppContext};
use crate::models::Product;

const PAGE_BY: u32 = 12;

#[derive(Clone, Debug, PartialEq)]
enum Listing {
    Loading,
    Loaded(Vec<Product>),
    Unavailable,
}

#[component]
pub fn FeaturedProductsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (listing, set_listing) = signal(Listing::Loading);
    set_document_title("Featured Products");

    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            match commands::featured_items(&client, PAGE_BY).await {
                Ok(products) => {
                    log::info!("[PAGE] Loaded {} featured products", products.len());
                    set_listing.set(Listing::Loaded(products));
                }
                Err(err) => {
                    log::error!("[PAGE] Featured products error: {}", err);
                    set_listing.set(Listing::Unavailable);
                }
            }
        });
    });

    view! {
        <section class="featured-products-page">
            <h1>"Featured Products"</h1>
            {move || match listing.get() {
                Listing::Loading => view! { <div class="page-loading" aria-busy="true"></div> }.into_any(),
                Listing::Unavailable => view! {
                    <p class="notice">"Error fetching products"</p>
                }.into_any(),
                Listing::Loaded(products) if products.is_empty() => view! {
                    <p class="notice">"No products found."</p>
                }.into_any(),
                Listing::Loaded(products) => view! {
                    <div class="product-grid">
                        {products.into_iter().map(|product| view! { <ProductCard product=product /> }).collect_view()}
                    </div>
                }.into_any(),
            }}
        </section>
    }
}
