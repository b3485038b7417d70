//! Home Page
//!
//! Critical: shop name and hero collection. Deferred: featured products,
//! featured collections and the secondary hero; a failed deferred query
//! only omits its section.

use leptos::html::Video;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, HomepageSeo};
use crate::components::{
    play_quietly, AppLink, BlogArticles, BundlesSection, GoalsCarousel, InstagramFeed, ProductCard, ProductShowcase,
    TestimonialsCarousel,
};
use crate::content::{MARQUEE_PHRASES, MARQUEE_REPEAT, PRESS_LOGOS, VALUE_PROPS};
use crate::context::{set_document_title, AppContext};
use crate::loader::{critical, deferred, PageState};
use crate::models::{Collection, CollectionHero, Product};
use crate::pages::PageFailure;
use crate::routes::{collection_path, Page};

const HERO_HANDLE: &str = "freestyle";
const SECONDARY_HERO_HANDLE: &str = "backcountry";

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (seo, set_seo) = signal(PageState::<HomepageSeo>::Loading);
    let (products, set_products) = signal::<Option<Vec<Product>>>(None);
    let (collections, set_collections) = signal::<Option<Vec<Collection>>>(None);
    let (secondary_hero, set_secondary_hero) = signal::<Option<CollectionHero>>(None);

    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            let result = critical(commands::homepage_seo(&client, HERO_HANDLE).await);
            if let Ok(data) = &result {
                log::info!("[PAGE] Home loaded for {}", data.shop.name);
                set_document_title(&data.shop.name);
            }
            set_seo.set(PageState::from_result(result));
        });

        let client = ctx.client();
        spawn_local(async move {
            let loaded = deferred("featured products", commands::featured_products(&client).await);
            set_products.set(loaded);
        });

        let client = ctx.client();
        spawn_local(async move {
            let loaded = deferred("featured collections", commands::featured_collections(&client).await);
            set_collections.set(loaded);
        });

        let client = ctx.client();
        spawn_local(async move {
            let loaded = deferred("secondary hero", commands::collection_hero(&client, SECONDARY_HERO_HANDLE).await);
            set_secondary_hero.set(loaded.flatten());
        });
    });

    move || match seo.get() {
        PageState::Loading => view! { <div class="page-loading" aria-busy="true"></div> }.into_any(),
        PageState::Failed(error) => view! { <PageFailure error=error /> }.into_any(),
        PageState::Ready(data) => view! {
            <div class="home">
                <Hero hero=data.hero />
                <Marquee />
                <PressStrip />
                <GoalsCarousel />
                {move || products.get().filter(|p| !p.is_empty()).map(|list| view! {
                    <FeaturedProducts products=list />
                })}
                <ValueProps />
                {move || products.get().map(|list| view! { <BundlesSection products=list /> })}
                <ProductShowcase />
                {move || secondary_hero.get().map(|hero| view! { <SecondaryHero hero=hero /> })}
                <TestimonialsCarousel />
                {move || collections.get().filter(|c| !c.is_empty()).map(|list| view! {
                    <FeaturedCollections collections=list />
                })}
                <BlogArticles />
                <InstagramFeed />
            </div>
        }
        .into_any(),
    }
}

#[component]
fn Hero(hero: Option<CollectionHero>) -> impl IntoView {
    let cta = hero
        .as_ref()
        .and_then(|h| h.cta.as_ref())
        .map(|m| m.value.clone())
        .unwrap_or_else(|| "Shop Now".to_string());
    let byline = hero.and_then(|h| h.byline).map(|m| m.value);
    let video_ref = NodeRef::<Video>::new();

    // Background video: muted so browsers allow autoplay
    Effect::new(move |_| {
        if let Some(video) = video_ref.get() {
            video.set_muted(true);
            video.set_loop(true);
            play_quietly(&video);
        }
    });

    view! {
        <section class="hero">
            <video node_ref=video_ref class="hero-video" poster="/assets/hero-poster.jpg" src="/assets/hero-video.mp4"></video>
            <div class="hero-content">
                <h1>"Great things never came\nfrom comfort zones."</h1>
                {byline.map(|text| view! { <p class="hero-byline">{text}</p> })}
                <AppLink page=Page::FeaturedProducts class="btn-light hero-cta">{cta}</AppLink>
            </div>
        </section>
    }
}

#[component]
fn SecondaryHero(hero: CollectionHero) -> impl IntoView {
    view! {
        <section class="secondary-hero">
            <h2>{hero.heading_text().to_string()}</h2>
            {hero.byline.map(|m| view! { <p>{m.value}</p> })}
            <a class="btn-primary" href=collection_path(&hero.handle)>
                {hero.cta.map(|m| m.value).unwrap_or_else(|| "Shop Now".to_string())}
            </a>
        </section>
    }
}

#[component]
fn Marquee() -> impl IntoView {
    view! {
        <div class="marquee">
            <div class="marquee-track">
                {(0..MARQUEE_REPEAT).map(|_| view! {
                    <div class="marquee-group">
                        {MARQUEE_PHRASES.iter().map(|phrase| view! {
                            <span>{*phrase}</span>
                            <img src="/assets/Star.png" alt="star" />
                        }).collect_view()}
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn PressStrip() -> impl IntoView {
    view! {
        <div class="press">
            <div class="press-rating">
                <span class="star">"★"</span>
                <span class="press-score">"5+"</span>
                <span class="press-count">"(12,000+ Reviews)"</span>
            </div>
            <div class="press-divider"></div>
            <div class="press-logos">
                {PRESS_LOGOS.iter().map(|(src, alt)| view! { <img src=*src alt=*alt /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn FeaturedProducts(products: Vec<Product>) -> impl IntoView {
    view! {
        <section class="featured-products">
            <div class="section-heading centered">
                <span class="eyebrow">"Trending ⭐"</span>
                <h2>"Supplements"</h2>
                <AppLink page=Page::FeaturedProducts class="view-all">"View all"</AppLink>
            </div>
            <div class="product-grid">
                {products.into_iter().map(|product| view! { <ProductCard product=product lazy=true /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ValueProps() -> impl IntoView {
    view! {
        <section class="value-props">
            <div class="section-heading">
                <span class="eyebrow">"🧐 Why Health & Fitness"</span>
                <h2>"Clean Supplements - Made For You"</h2>
            </div>
            <div class="value-grid">
                {VALUE_PROPS.iter().map(|(title, body)| view! {
                    <div class="value-prop">
                        <h3>{*title}</h3>
                        <p>{*body}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FeaturedCollections(collections: Vec<Collection>) -> impl IntoView {
    view! {
        <section class="featured-collections">
            <div class="section-heading">
                <h2>"Shop by Collection"</h2>
            </div>
            <div class="collection-grid">
                {collections.into_iter().map(|collection| {
                    let image = collection.image.map(|img| {
                        let alt = img.alt_text.unwrap_or_else(|| collection.title.clone());
                        view! { <img src=img.url alt=alt loading="lazy" /> }
                    });
                    view! {
                        <a class="collection-card" href=collection_path(&collection.handle)>
                            {image}
                            <h3>{collection.title}</h3>
                        </a>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}
