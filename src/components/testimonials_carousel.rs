//! Testimonials Carousel Component
//!
//! Video reel of customer results. Only the active slide plays; the
//! others are paused and rewound. Navigation wraps at both ends.

use leptos::html::Video;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_carousel::{Boundary, Direction, IndexCarousel};
use wasm_bindgen_futures::JsFuture;

use crate::content::{TESTIMONIALS, TESTIMONIAL_GAP, TESTIMONIAL_SLIDE_WIDTH, TESTIMONIAL_START};
use crate::models::Money;
use crate::routes::product_path;

#[component]
pub fn TestimonialsCarousel() -> impl IntoView {
    let (reel, set_reel) =
        signal(IndexCarousel::new(TESTIMONIALS.len(), Boundary::Wrap).starting_at(TESTIMONIAL_START));
    let (muted, set_muted) = signal(true);
    let videos: Vec<NodeRef<Video>> = TESTIMONIALS.iter().map(|_| NodeRef::new()).collect();
    let video_refs = videos.clone();

    Effect::new(move |_| {
        let active = reel.get().index();
        let muted = muted.get();
        for (i, node) in video_refs.iter().enumerate() {
            let Some(video) = node.get() else { continue };
            video.set_loop(true);
            let _ = video.set_attribute("playsinline", "");
            video.set_muted(muted);
            if i == active {
                play_quietly(&video);
            } else {
                let _ = video.pause();
                video.set_current_time(0.0);
            }
        }
    });

    let track_style = move || {
        let offset = reel.get().track_offset(TESTIMONIAL_SLIDE_WIDTH, TESTIMONIAL_GAP);
        format!("transform: translateX(calc(32% - {}px)); width: fit-content;", offset)
    };

    let slides = TESTIMONIALS
        .iter()
        .zip(videos)
        .enumerate()
        .map(|(i, (testimonial, video_ref))| {
            let active = move || reel.get().is_active(i);
            let price = Money::new(testimonial.price, testimonial.currency_code).format(false);
            view! {
                <div class=move || if active() { "testimonial active" } else { "testimonial" }>
                    <div class="testimonial-video">
                        <video node_ref=video_ref src=testimonial.video></video>
                        <Show when=active>
                            <button
                                class="mute-toggle"
                                aria-label=move || if muted.get() { "Unmute" } else { "Mute" }
                                on:click=move |_| set_muted.update(|m| *m = !*m)
                            >
                                {move || if muted.get() { "🔇" } else { "🔊" }}
                            </button>
                        </Show>
                    </div>
                    <div class=move || if active() { "testimonial-product row" } else { "testimonial-product column" }>
                        <div class="testimonial-product-text">
                            <h3>{testimonial.title}</h3>
                            <span class="price">{price}</span>
                        </div>
                        <Show when=active>
                            <a class="btn-primary" href=product_path(testimonial.handle)>"Shop Now"</a>
                        </Show>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="testimonials">
            <div class="section-heading centered">
                <span class="eyebrow">"Real Results"</span>
                <h2>"Transform Your Life"</h2>
                <p>"Join thousands of satisfied customers who have achieved their goals"</p>
            </div>
            <div class="testimonials-viewport">
                <button
                    class="carousel-btn carousel-btn-left"
                    aria-label="Previous testimonial"
                    on:click=move |_| set_reel.update(|r| { r.step(Direction::Left); })
                >
                    "‹"
                </button>
                <div class="testimonials-track" style=track_style>
                    {slides}
                </div>
                <button
                    class="carousel-btn carousel-btn-right"
                    aria-label="Next testimonial"
                    on:click=move |_| set_reel.update(|r| { r.step(Direction::Right); })
                >
                    "›"
                </button>
            </div>
        </section>
    }
}

/// Start playback. Browsers refuse autoplay until the user interacts with
/// the page; the rejection is logged and otherwise ignored.
pub fn play_quietly(video: &web_sys::HtmlMediaElement) {
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[CAROUSEL] play refused: {:?}", e);
            }
        }),
        Err(e) => log::debug!("[CAROUSEL] play failed: {:?}", e),
    }
}
