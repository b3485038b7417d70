//! Product Card Component
//!
//! Catalog tile: first variant image, dietary tags, rating and an add button.

use leptos::prelude::*;

use crate::commands::{CartAction, CartLineInput};
use crate::content::PRODUCT_CARD_TAGS;
use crate::context::AppContext;
use crate::models::Product;
use crate::routes::product_path;

/// Five filled stars
#[component]
pub fn Stars(#[prop(optional, into)] class: String) -> impl IntoView {
    let class = if class.is_empty() { "stars".to_string() } else { class };
    view! {
        <div class=class>
            {(0..5).map(|_| view! { <span class="star">"★"</span> }).collect_view()}
        </div>
    }
}

/// Product card. Renders nothing for a product without variants.
#[component]
pub fn ProductCard(product: Product, #[prop(optional)] lazy: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let Some(variant) = product.first_variant().cloned() else {
        return ().into_any();
    };

    let href = product_path(&product.handle);
    let price = variant.price.format(true);
    let available = variant.available_for_sale;
    let variant_id = variant.id.clone();
    let image = variant.image.map(|img| {
        let alt = img.alt_text.clone().unwrap_or_else(|| format!("Picture of {}", product.title));
        view! {
            <img
                class="product-card-image"
                src=img.url
                alt=alt
                width="314"
                height="314"
                loading=if lazy { "lazy" } else { "eager" }
            />
        }
    });

    let on_add = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        ctx.open_cart();
        ctx.submit(CartAction::AddLines(vec![CartLineInput {
            merchandise_id: variant_id.clone(),
            quantity: 1,
        }]));
    };

    view! {
        <a class="product-card" href=href>
            <div class="product-card-media">{image}</div>
            <div class="product-card-body">
                <div class="product-card-tags">
                    {PRODUCT_CARD_TAGS.iter().map(|tag| view! { <span class="tag-pill">{*tag}</span> }).collect_view()}
                </div>
                <h3 class="product-card-title">{product.title.clone()}</h3>
                <p class="product-card-subtitle">"Supports cognitive function"</p>
                <Stars />
                <button class="product-card-add" disabled=!available on:click=on_add>
                    <span>{if available { "Add" } else { "Sold out" }}</span>
                    <span>"·"</span>
                    <span>{price}</span>
                </button>
            </div>
        </a>
    }
    .into_any()
}
