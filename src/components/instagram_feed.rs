//! Instagram Feed Component

use leptos::prelude::*;

use crate::content::{instagram_image, INSTAGRAM_HANDLE, INSTAGRAM_POSTS, INSTAGRAM_URL};

#[component]
pub fn InstagramFeed() -> impl IntoView {
    view! {
        <section class="instagram">
            <div class="instagram-header">
                <div class="instagram-profile">
                    <div class="instagram-logo">"Logo"</div>
                    <div>
                        <h3>{INSTAGRAM_HANDLE}</h3>
                        <p>"Follow Us on Instagram"</p>
                    </div>
                </div>
                <a class="btn-primary" href=INSTAGRAM_URL target="_blank" rel="noopener noreferrer">
                    "Follow Us on Instagram"
                </a>
            </div>
            <div class="instagram-grid">
                {(1..=INSTAGRAM_POSTS).map(|n| view! {
                    <a class="instagram-post" href=INSTAGRAM_URL target="_blank" rel="noopener noreferrer">
                        <img src=instagram_image(n) alt=format!("Instagram post {}", n) loading="lazy" />
                    </a>
                }).collect_view()}
            </div>
        </section>
    }
}
