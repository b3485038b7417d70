//! UI Components
//!
//! Reusable Leptos components.

mod blog_articles;
mod bundles_section;
pub mod cart;
mod goals_carousel;
mod instagram_feed;
mod page_layout;
pub mod product_card;
mod product_showcase;
mod testimonials_carousel;

pub use blog_articles::BlogArticles;
pub use bundles_section::BundlesSection;
pub use cart::{Cart, CartLayout};
pub use goals_carousel::GoalsCarousel;
pub use instagram_feed::InstagramFeed;
pub use page_layout::{AppLink, PageLayout};
pub use product_card::ProductCard;
pub use product_showcase::ProductShowcase;
pub use testimonials_carousel::{play_quietly, TestimonialsCarousel};
