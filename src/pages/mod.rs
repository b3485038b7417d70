//! Pages
//!
//! One component per route, rendered inside the page layout.

mod cart;
mod featured_products;
mod home;
mod not_found;

pub use cart::CartPage;
pub use featured_products::FeaturedProductsPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;

use leptos::prelude::*;

use crate::error::PageError;

/// Full-page error for a failed critical load
#[component]
pub fn PageFailure(error: PageError) -> impl IntoView {
    if error == PageError::NotFound {
        return view! { <NotFoundPage /> }.into_any();
    }
    view! {
        <section class="page-error" role="alert">
            <h1>{error.status().to_string()}</h1>
            <p>"We couldn't load this page. Please try again in a moment."</p>
            <p class="page-error-detail">{error.to_string()}</p>
        </section>
    }
    .into_any()
}
