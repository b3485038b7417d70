//! Product Showcase Component
//!
//! Static feature block for the customizable protein blend.

use leptos::prelude::*;

use crate::content::{SHOWCASE_BLEND, SHOWCASE_INGREDIENT};

const LEAF_ICON: &str = "/assets/Hojas_logo.png";

#[component]
pub fn ProductShowcase() -> impl IntoView {
    let (ingredient, blurb) = SHOWCASE_INGREDIENT;

    view! {
        <section class="showcase">
            <div class="section-heading centered">
                <span class="eyebrow">"Simple & Effective Ingredients"</span>
                <h2>"Customized Protein Powder"</h2>
            </div>
            <div class="showcase-grid">
                <img class="showcase-image" src="/assets/3Product.png" alt="Protein Powder Product" />
                <div class="showcase-details">
                    <div class="showcase-blend">
                        <h3>"The Blend"</h3>
                        <div class="showcase-blend-items">
                            {SHOWCASE_BLEND.iter().map(|label| view! {
                                <div class="icon-label">
                                    <img src=LEAF_ICON alt="Leaf icon" />
                                    <span>{*label}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                    <div class="showcase-ingredients">
                        <h3>"Active Ingredients"</h3>
                        <div class="showcase-ingredient-grid">
                            {(0..3).map(|_| view! {
                                <div class="ingredient">
                                    <div class="icon-label">
                                        <img src=LEAF_ICON alt="Leaf icon" />
                                        <h4>{ingredient}</h4>
                                    </div>
                                    <p>{blurb}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                    <button class="btn-primary btn-block">"Customize This Blend"</button>
                </div>
            </div>
        </section>
    }
}
