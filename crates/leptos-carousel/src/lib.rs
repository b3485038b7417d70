//! Leptos Carousel Utilities
//!
//! Horizontal carousels for Leptos: a scroll pager that measures its
//! container on every click, index-driven slide reels, and an auto-play
//! timer bound to the component's lifetime.

mod state;

pub use state::{Boundary, Direction, IndexCarousel, ScrollPager};

use gloo_timers::callback::Interval;
use leptos::html::Div;
use leptos::prelude::*;

/// Scroll pager signals plus the element they drive
#[derive(Clone, Copy)]
pub struct CarouselSignals {
    pub state_read: ReadSignal<ScrollPager>,
    pub state_write: WriteSignal<ScrollPager>,
    /// Scrolling container (`overflow-x` element holding the cards)
    pub node_ref: NodeRef<Div>,
}

pub fn create_carousel_signals() -> CarouselSignals {
    let (state_read, state_write) = signal(ScrollPager::default());
    CarouselSignals {
        state_read,
        state_write,
        node_ref: NodeRef::new(),
    }
}

/// (client width, scroll width, scroll left) of the container
fn measure_element(el: &web_sys::Element) -> (f64, f64, f64) {
    (el.client_width() as f64, el.scroll_width() as f64, el.scroll_left() as f64)
}

fn smooth_scroll(el: &web_sys::Element, left: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_to_with_scroll_to_options(&options);
}

/// Run one pager transition against the live element.
/// Returns false when the container is not mounted or nothing moved.
fn drive(carousel: &CarouselSignals, step: impl FnOnce(&mut ScrollPager) -> Option<f64>) -> bool {
    let Some(el) = carousel.node_ref.get_untracked() else {
        return false;
    };
    let (client_width, scroll_width, scroll_left) = measure_element(&el);

    let mut moved = None;
    carousel.state_write.update(|pager| {
        pager.measure(client_width, scroll_width, scroll_left);
        moved = step(pager);
    });

    match moved {
        Some(left) => {
            smooth_scroll(&el, left);
            true
        }
        None => false,
    }
}

/// Advance the pager one page in `direction`
pub fn advance(carousel: &CarouselSignals, direction: Direction) -> bool {
    drive(carousel, |pager| pager.advance(direction))
}

/// Auto-play step: next page, wrapping to the first
pub fn tick(carousel: &CarouselSignals) -> bool {
    drive(carousel, ScrollPager::tick)
}

/// Create click handler for the previous/next buttons
pub fn make_on_advance(carousel: CarouselSignals, direction: Direction) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        advance(&carousel, direction);
    }
}

/// Re-measure without moving (e.g. after the cards have rendered)
pub fn sync(carousel: &CarouselSignals) {
    drive(carousel, |_| None);
}

/// Call `on_tick` every `interval_ms` until the owning component unmounts
pub fn bind_autoplay<F>(interval_ms: u32, mut on_tick: F)
where
    F: FnMut() + 'static,
{
    let interval = StoredValue::new_local(Some(Interval::new(interval_ms, move || on_tick())));
    on_cleanup(move || {
        if let Some(timer) = interval.try_update_value(Option::take).flatten() {
            timer.cancel();
        }
    });
}

/// Auto-advance a scroll pager every `interval_ms`
pub fn bind_pager_autoplay(carousel: CarouselSignals, interval_ms: u32) {
    bind_autoplay(interval_ms, move || {
        tick(&carousel);
    });
}
