//! Cart Page
//!
//! Page-layout rendition of the cart; refetches the session cart on entry.

use leptos::prelude::*;

use crate::components::{Cart, CartLayout};
use crate::context::{set_document_title, AppContext};

#[component]
pub fn CartPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    set_document_title("Cart");
    ctx.refresh_cart();

    view! {
        <section class="cart-page-section">
            <h1>"Cart"</h1>
            <Cart layout=CartLayout::Page />
        </section>
    }
}
