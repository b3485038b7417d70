//! Bundles Section Component
//!
//! Goal-specific bundles in a horizontally paged product strip.

use leptos::prelude::*;
use leptos_carousel::{create_carousel_signals, make_on_advance, sync, Direction};

use crate::components::ProductCard;
use crate::content::bundle_categories;
use crate::models::Product;

#[component]
pub fn BundlesSection(products: Vec<Product>) -> impl IntoView {
    let carousel = create_carousel_signals();
    let (category, set_category) = signal::<Option<&'static str>>(None);

    // Measure once the cards are in the DOM so the edge buttons start correct
    Effect::new(move |_| {
        if carousel.node_ref.get().is_some() {
            sync(&carousel);
        }
    });

    if products.is_empty() {
        return ().into_any();
    }

    view! {
        <section class="bundles">
            <div class="section-heading">
                <span class="eyebrow">"🎁 Goals Specific"</span>
                <h2>"Bundles"</h2>
            </div>
            <div class="category-pills">
                {bundle_categories().map(|name| view! {
                    <button
                        class=move || if category.get() == Some(name) { "pill active" } else { "pill" }
                        on:click=move |_| set_category.set(Some(name))
                    >
                        {name}
                    </button>
                }).collect_view()}
            </div>
            <div class="carousel">
                <button
                    class="carousel-btn carousel-btn-left"
                    aria-label="Previous bundles"
                    disabled=move || carousel.state_read.get().at_start()
                    on:click=make_on_advance(carousel, Direction::Left)
                >
                    "‹"
                </button>
                <div class="carousel-track bundles-track" node_ref=carousel.node_ref>
                    {products.into_iter().map(|product| view! {
                        <div class="bundle-slide">
                            <ProductCard product=product lazy=true />
                        </div>
                    }).collect_view()}
                </div>
                <button
                    class="carousel-btn carousel-btn-right"
                    aria-label="Next bundles"
                    disabled=move || {
                        let pager = carousel.state_read.get();
                        pager.is_measured() && pager.at_end()
                    }
                    on:click=make_on_advance(carousel, Direction::Right)
                >
                    "›"
                </button>
            </div>
        </section>
    }
    .into_any()
}
