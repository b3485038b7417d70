//! Goals Carousel Component
//!
//! "Start with your Goals" strip. Pages by container width and
//! auto-advances every five seconds, wrapping back to the first page.

use leptos::prelude::*;
use leptos_carousel::{bind_pager_autoplay, create_carousel_signals, make_on_advance, Direction};

use crate::content::GOALS;

const AUTOPLAY_MS: u32 = 5000;

#[component]
pub fn GoalsCarousel() -> impl IntoView {
    let carousel = create_carousel_signals();
    bind_pager_autoplay(carousel, AUTOPLAY_MS);

    view! {
        <section class="goals">
            <div class="section-heading centered">
                <span class="eyebrow">"COMFORTABLY UNCOMFORTABLE"</span>
                <h2>"Start with your Goals"</h2>
                <p>"We cannot become what we want to be by remaining what we are."</p>
            </div>
            <div class="carousel">
                <button
                    class="carousel-btn carousel-btn-left"
                    aria-label="Previous goals"
                    disabled=move || carousel.state_read.get().at_start()
                    on:click=make_on_advance(carousel, Direction::Left)
                >
                    "‹"
                </button>
                <div class="carousel-track goals-track" node_ref=carousel.node_ref>
                    {GOALS.iter().map(|goal| view! {
                        <div class="goal-card">
                            <div class="goal-card-image" style:background-image=format!("url({})", goal.image)></div>
                            <div class="goal-card-body">
                                <h3>{goal.title}<span class="arrow">"›"</span></h3>
                                <p>{goal.description}</p>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
                <button
                    class="carousel-btn carousel-btn-right"
                    aria-label="Next goals"
                    on:click=make_on_advance(carousel, Direction::Right)
                >
                    "›"
                </button>
            </div>
        </section>
    }
}
